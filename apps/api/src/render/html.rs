//! HTML renderer — turns paginated pages into a standalone, print-ready
//! RTL document.
//!
//! This output serves two consumers: the on-screen preview and the external
//! PDF rasterizer (which receives the exact same string and prints it with
//! A4 `@page` rules). The Word exporter wraps the same body in an MSO
//! envelope, so all three formats draw from one rendering.

use crate::layout::Page;
use crate::models::{Document, DocumentType, Settings};
use crate::render::locale;

/// Placeholder shown for documents that have not been saved yet.
const UNSAVED_DOC_ID: &str = "[سيتم إنشاؤه عند الحفظ]";

/// Print styles shared by the HTML and Word outputs. Only what print
/// correctness needs: A4 page geometry, repeating table headers, and
/// break-avoidance on rows and the summary block.
pub const EXPORT_STYLES: &str = r#"
body {
  font-family: 'PT Sans', 'Arial', sans-serif;
  direction: rtl;
  line-height: 1.4;
  color: #000;
  margin: 0;
  background-color: #fff;
  -webkit-print-color-adjust: exact !important;
  print-color-adjust: exact !important;
}
@page {
  size: A4 portrait;
  margin: 15mm 15mm 20mm 15mm;
}
.a4-page {
  page-break-after: always;
  font-size: 10pt;
}
.a4-page:last-child {
  page-break-after: auto;
}
.doc-title {
  text-align: center;
  font-weight: bold;
  font-size: 14pt;
  text-decoration: underline;
  margin: 8px 0;
}
.meta-row {
  display: flex;
  justify-content: space-between;
  margin-bottom: 8px;
}
table.items {
  width: 100%;
  border-collapse: collapse;
  page-break-inside: auto;
}
table.items thead {
  display: table-header-group;
}
table.items tr {
  page-break-inside: avoid;
}
table.items td, table.items th {
  border: 1px solid #ccc;
  padding: 5px;
  vertical-align: top;
}
table.items th {
  background-color: #f2f2f2 !important;
  font-weight: bold;
}
.summary-section {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  gap: 16px;
  margin-top: 12px;
  page-break-inside: avoid;
}
table.totals {
  border-collapse: collapse;
  min-width: 35%;
}
table.totals td {
  border: 1px solid #ccc;
  padding: 5px;
}
table.totals .grand {
  font-weight: bold;
  background-color: #f2f2f2 !important;
}
.pre-wrap {
  white-space: pre-wrap;
}
footer.page-footer {
  margin-top: 12px;
  padding-top: 5px;
  border-top: 2px solid black;
  text-align: center;
  font-size: 9pt;
}
"#;

/// Escapes text for safe embedding in HTML.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Renders a complete standalone HTML document for the given pages.
pub fn render_html(doc: &Document, settings: &Settings, pages: &[Page]) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"ar\" dir=\"rtl\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <style>{EXPORT_STYLES}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        render_body(doc, settings, pages)
    )
}

/// Renders the page sequence without the surrounding `<html>` scaffolding.
/// The Word exporter embeds this body in its own envelope.
pub fn render_body(doc: &Document, settings: &Settings, pages: &[Page]) -> String {
    let mut body = String::new();
    for page in pages {
        body.push_str(&render_page(doc, settings, page));
    }
    body
}

fn render_page(doc: &Document, settings: &Settings, page: &Page) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"a4-page\">\n");

    if page.is_first {
        html.push_str(&render_header_block(doc, settings));
    }

    html.push_str(&render_items_table(doc, settings, page));

    if page.is_last {
        html.push_str(&render_summary_block(doc, settings));
    }

    html.push_str(&render_footer(settings, page));
    html.push_str("</div>\n");
    html
}

/// Document header: letterhead image, title, date/id row, client and subject.
/// Emitted on the first page only.
fn render_header_block(doc: &Document, settings: &Settings) -> String {
    let title = doc.doc_type.title();
    let date = locale::to_eastern_digits(&doc.created_at.format("%d/%m/%Y").to_string());
    let doc_id = if doc.doc_id.is_empty() {
        UNSAVED_DOC_ID.to_string()
    } else {
        escape(&doc.doc_id)
    };

    let mut html = String::new();
    if !settings.header_image_url.is_empty() {
        html.push_str(&format!(
            "<header><img src=\"{}\" alt=\"\" style=\"width:100%;height:auto\"></header>\n",
            escape(&settings.header_image_url)
        ));
    }
    html.push_str(&format!("<div class=\"doc-title\">{title}</div>\n"));
    html.push_str(&format!(
        "<div class=\"meta-row\"><span>التاريخ: {date}</span><span>{title} رقم: {doc_id}</span></div>\n"
    ));
    html.push_str(&format!(
        "<div><p><b>السادة/</b> {}</p><p><b>الموضوع:</b> {}</p></div>\n",
        escape(&doc.client_name),
        escape(&doc.subject)
    ));
    html
}

/// Item table for one page, with absolute 1-based row numbers and the
/// column header row repeated on every page.
fn render_items_table(doc: &Document, settings: &Settings, page: &Page) -> String {
    let mut html = String::new();
    html.push_str("<table class=\"items\">\n<thead><tr>");
    if settings.show_index_column {
        html.push_str("<th>م</th>");
    }
    html.push_str(&format!("<th>{}</th>", doc.doc_type.description_header()));
    if settings.show_unit_column {
        html.push_str("<th>الوحدة</th>");
    }
    if settings.show_quantity_column {
        html.push_str(&format!("<th>{}</th>", doc.doc_type.quantity_header()));
    }
    if settings.show_price_column {
        html.push_str("<th>السعر</th>");
    }
    if settings.show_total_column {
        html.push_str("<th>الإجمالي</th>");
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for (number, item) in page.numbered_items() {
        html.push_str("<tr>");
        if settings.show_index_column {
            html.push_str(&format!("<td>{}</td>", locale::format_number(number as f64)));
        }
        html.push_str(&format!(
            "<td class=\"pre-wrap\">{}</td>",
            escape(&locale::localize_text(&item.description))
        ));
        if settings.show_unit_column {
            html.push_str(&format!("<td>{}</td>", escape(&item.unit)));
        }
        if settings.show_quantity_column {
            html.push_str(&format!("<td>{}</td>", locale::format_number(item.quantity)));
        }
        if settings.show_price_column {
            html.push_str(&format!("<td>{}</td>", locale::format_currency(item.unit_price)));
        }
        if settings.show_total_column {
            html.push_str(&format!("<td>{}</td>", locale::format_currency(item.line_total())));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n");
    html
}

/// Summary block on the last page: terms/payment (quotes only) beside the
/// subtotal / tax / grand-total table.
fn render_summary_block(doc: &Document, settings: &Settings) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"summary-section\">\n<div style=\"flex:1\">\n");

    if doc.doc_type == DocumentType::Quote {
        let terms = doc
            .terms
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(settings.default_terms.as_deref())
            .unwrap_or("");
        let payment = doc
            .payment_method
            .as_deref()
            .filter(|p| !p.is_empty())
            .or(settings.default_payment_method.as_deref())
            .unwrap_or("");

        // Localize before escaping so the digits inside escape entities
        // (e.g. &#39;) are never rewritten.
        html.push_str(&format!(
            "<h3>الشروط:</h3><div class=\"pre-wrap\">{}</div>\n",
            escape(&locale::localize_text(terms))
        ));
        html.push_str(&format!(
            "<h3>طريقة الدفع:</h3><div class=\"pre-wrap\">{}</div>\n",
            escape(&locale::localize_text(payment))
        ));
    }

    html.push_str("</div>\n<table class=\"totals\">\n");
    html.push_str(&format!(
        "<tr><td><b>المجموع</b></td><td>{}</td></tr>\n",
        locale::format_currency(doc.sub_total)
    ));
    html.push_str(&format!(
        "<tr><td><b>الضريبة ({})</b></td><td>{}</td></tr>\n",
        locale::localize_text("14%"),
        locale::format_currency(doc.tax_amount)
    ));
    html.push_str(&format!(
        "<tr class=\"grand\"><td>الإجمالي الكلي</td><td>{}</td></tr>\n",
        locale::format_currency(doc.total)
    ));
    html.push_str("</table>\n</div>\n");
    html
}

/// "Page N of M" plus the configured footer text; emitted on every page.
fn render_footer(settings: &Settings, page: &Page) -> String {
    format!(
        "<footer class=\"page-footer\"><div>صفحة {} من {}</div>\
         <div class=\"pre-wrap\">{}</div></footer>\n",
        locale::format_number(page.number as f64),
        locale::format_number(page.total_pages as f64),
        escape(&settings.footer_text)
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

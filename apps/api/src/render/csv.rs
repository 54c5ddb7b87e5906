//! CSV exporter — line items as an Excel-friendly UTF-8 CSV.
//!
//! Excel needs the UTF-8 BOM to detect the encoding of Arabic headers.
//! Numbers stay in Western digits here; CSV is a data export, not a print
//! rendering, so the numeral localization does not apply.

use crate::models::LineItem;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

const HEADERS: [&str; 5] = ["البيان", "الوحدة", "الكمية", "السعر", "الإجمالي"];

/// Quotes a CSV field per RFC 4180 when it needs quoting.
fn quote_field(field: &str) -> String {
    if field.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Formats a numeric cell without a trailing `.0` for whole values.
fn number_cell(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Converts line items to CSV text (header row + one row per item).
pub fn items_to_csv(items: &[LineItem]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(HEADERS.join(","));
    for item in items {
        lines.push(
            [
                quote_field(&item.description),
                quote_field(&item.unit),
                number_cell(item.quantity),
                number_cell(item.unit_price),
                number_cell(item.line_total()),
            ]
            .join(","),
        );
    }
    lines.join("\n")
}

/// CSV export bytes: UTF-8 BOM followed by the CSV text.
pub fn render_csv(items: &[LineItem]) -> Vec<u8> {
    let csv = items_to_csv(items);
    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + csv.len());
    bytes.extend_from_slice(&UTF8_BOM);
    bytes.extend_from_slice(csv.as_bytes());
    bytes
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

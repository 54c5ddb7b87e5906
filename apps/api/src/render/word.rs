//! Word exporter — wraps the rendered pages in an MSO-HTML envelope.
//!
//! Word opens HTML saved as `.doc` when it carries the Office XML namespaces
//! and a `WordSection1` wrapper. The body and styles are the same ones the
//! HTML renderer produces, so the Word output paginates identically.

use crate::layout::Page;
use crate::models::{Document, Settings};
use crate::render::html;

/// UTF-8 byte-order mark. Word mis-detects the encoding without it.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Renders the document as Word-compatible `.doc` bytes (BOM + MSO HTML).
pub fn render_word(doc: &Document, settings: &Settings, pages: &[Page]) -> Vec<u8> {
    let body = html::render_body(doc, settings, pages);
    let title = html::escape(&doc.doc_id);

    let envelope = format!(
        "<html xmlns:o='urn:schemas-microsoft-com:office:office' \
         xmlns:w='urn:schemas-microsoft-com:office:word' \
         xmlns='http://www.w3.org/TR/REC-html40'>\n\
         <head>\n<meta charset='utf-8'>\n<title>{title}</title>\n\
         <!--[if gte mso 9]>\n<xml>\n<w:WordDocument>\n\
         <w:View>Print</w:View>\n<w:Zoom>100</w:Zoom>\n\
         <w:DoNotOptimizeForBrowser/>\n<w:RtlGutter/>\n\
         </w:WordDocument>\n</xml>\n<![endif]-->\n\
         <style>\n.word-body {{ width: 210mm; }}\n\
         div.WordSection1 {{ page: WordSection1; }}\n{}\n</style>\n\
         </head>\n<body lang=AR-SA>\n\
         <div class=\"WordSection1 word-body\">\n{body}</div>\n\
         </body>\n</html>\n",
        html::EXPORT_STYLES
    );

    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + envelope.len());
    bytes.extend_from_slice(&UTF8_BOM);
    bytes.extend_from_slice(envelope.as_bytes());
    bytes
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

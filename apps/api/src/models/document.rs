//! Core document model — quotes and estimations with their line items and totals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed VAT rate applied to every document (14%).
pub const TAX_RATE: f64 = 0.14;

/// The two document kinds the service produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Quote,
    Estimation,
}

impl DocumentType {
    /// Arabic display title used as the document heading.
    pub fn title(&self) -> &'static str {
        match self {
            DocumentType::Quote => "عرض سعر",
            DocumentType::Estimation => "مقايسة",
        }
    }

    /// Column header for the description column. Quotes use "البيان",
    /// estimations use "البند".
    pub fn description_header(&self) -> &'static str {
        match self {
            DocumentType::Quote => "البيان",
            DocumentType::Estimation => "البند",
        }
    }

    /// Column header for the quantity column. Quotes count units ("العدد"),
    /// estimations measure quantities ("الكمية").
    pub fn quantity_header(&self) -> &'static str {
        match self {
            DocumentType::Quote => "العدد",
            DocumentType::Estimation => "الكمية",
        }
    }
}

/// One billable row of a document.
///
/// Immutable once constructed; `line_total` is always derived, never stored.
/// The wire name for `unit_price` is `price` (the shape the UI sends).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub unit: String,
    pub quantity: f64,
    #[serde(rename = "price")]
    pub unit_price: f64,
}

impl LineItem {
    /// Builds a line item, normalizing negative quantity/price to zero.
    pub fn new(
        description: impl Into<String>,
        unit: impl Into<String>,
        quantity: f64,
        unit_price: f64,
    ) -> Self {
        Self {
            description: description.into(),
            unit: unit.into(),
            quantity: quantity.max(0.0),
            unit_price: unit_price.max(0.0),
        }
    }

    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Derived financial totals for a document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub sub_total: f64,
    pub tax_amount: f64,
    pub total: f64,
}

impl Totals {
    /// Computes subtotal, 14% tax, and grand total over a set of line items.
    pub fn compute(items: &[LineItem]) -> Self {
        let sub_total: f64 = items.iter().map(LineItem::line_total).sum();
        let tax_amount = sub_total * TAX_RATE;
        Totals {
            sub_total,
            tax_amount,
            total: sub_total + tax_amount,
        }
    }
}

/// A full quote or estimation document as submitted by the caller.
///
/// The item order is significant: it is both the print order and the
/// numbering order. `terms` and `payment_method` are meaningful for quotes
/// only; the renderers ignore them on estimations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// User-facing id, e.g. "Q-2024-001". May be empty for unsaved previews.
    #[serde(default)]
    pub doc_id: String,
    pub doc_type: DocumentType,
    pub client_name: String,
    pub subject: String,
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub terms: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    pub sub_total: f64,
    pub tax_amount: f64,
    pub total: f64,
}

impl Document {
    /// Assembles a document, computing totals from the items.
    #[allow(clippy::too_many_arguments)]
    pub fn assemble(
        doc_id: impl Into<String>,
        doc_type: DocumentType,
        client_name: impl Into<String>,
        subject: impl Into<String>,
        items: Vec<LineItem>,
        terms: Option<String>,
        payment_method: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let totals = Totals::compute(&items);
        Document {
            doc_id: doc_id.into(),
            doc_type,
            client_name: client_name.into(),
            subject: subject.into(),
            items,
            terms,
            payment_method,
            created_at,
            sub_total: totals.sub_total,
            tax_amount: totals.tax_amount,
            total: totals.total,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total_is_quantity_times_price() {
        let item = LineItem::new("سلك 2مم", "لفة", 3.0, 450.0);
        assert!((item.line_total() - 1350.0).abs() < 1e-9);
    }

    #[test]
    fn test_new_clamps_negative_values() {
        let item = LineItem::new("بند", "عدد", -2.0, -10.0);
        assert_eq!(item.quantity, 0.0);
        assert_eq!(item.unit_price, 0.0);
        assert_eq!(item.line_total(), 0.0);
    }

    #[test]
    fn test_totals_apply_fourteen_percent_tax() {
        let items = vec![
            LineItem::new("a", "عدد", 2.0, 100.0),
            LineItem::new("b", "متر", 1.0, 300.0),
        ];
        let totals = Totals::compute(&items);
        assert!((totals.sub_total - 500.0).abs() < 1e-9);
        assert!((totals.tax_amount - 70.0).abs() < 1e-9);
        assert!((totals.total - 570.0).abs() < 1e-9);
    }

    #[test]
    fn test_totals_of_empty_items_are_zero() {
        let totals = Totals::compute(&[]);
        assert_eq!(totals.sub_total, 0.0);
        assert_eq!(totals.tax_amount, 0.0);
        assert_eq!(totals.total, 0.0);
    }

    #[test]
    fn test_doc_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&DocumentType::Quote).unwrap(),
            "\"quote\""
        );
        assert_eq!(
            serde_json::to_string(&DocumentType::Estimation).unwrap(),
            "\"estimation\""
        );
    }

    #[test]
    fn test_line_item_wire_shape_uses_price() {
        let json = r#"{"description":"تكييف","unit":"جهاز","quantity":1,"price":25000}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.unit_price, 25000.0);

        let out = serde_json::to_string(&item).unwrap();
        assert!(out.contains("\"price\""), "serialized form keeps `price`");
    }

    #[test]
    fn test_assemble_computes_totals() {
        let doc = Document::assemble(
            "Q-2024-001",
            DocumentType::Quote,
            "شركة النور",
            "تأسيس كهرباء شقة",
            vec![LineItem::new("بند", "عدد", 10.0, 50.0)],
            None,
            None,
            Utc::now(),
        );
        assert!((doc.sub_total - 500.0).abs() < 1e-9);
        assert!((doc.total - 570.0).abs() < 1e-9);
    }
}

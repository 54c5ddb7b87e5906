//! Settings model — branding and page-capacity configuration.
//!
//! Settings travel with each request (explicit injection; the paginator and
//! renderers never read ambient state). Missing fields fall back to the
//! company defaults below, so a bare `{}` settings object is always valid.

use serde::{Deserialize, Serialize};

use crate::layout::PagingPolicy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Header/letterhead image shown on the first page of every document.
    pub header_image_url: String,
    /// Footer text repeated on every page.
    pub footer_text: String,
    /// Default terms block for quotes that carry none of their own.
    pub default_terms: Option<String>,
    /// Default payment-method block for quotes that carry none of their own.
    pub default_payment_method: Option<String>,
    /// Nominal item capacity per page. Clamped by `paging_policy`.
    pub items_per_page: Option<u32>,
    pub show_index_column: bool,
    pub show_unit_column: bool,
    pub show_quantity_column: bool,
    pub show_price_column: bool,
    pub show_total_column: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            header_image_url: "https://placehold.co/794x120.png".to_string(),
            footer_text: "Company Name\nAddress\nPhone & Email".to_string(),
            default_terms: Some(
                "الأسعار شاملة الضريبة\nصالحة لمدة 30 يوم\nالتسليم خلال 15 يوم عمل".to_string(),
            ),
            default_payment_method: None,
            items_per_page: None,
            show_index_column: true,
            show_unit_column: true,
            show_quantity_column: true,
            show_price_column: true,
            show_total_column: true,
        }
    }
}

impl Settings {
    /// Derives the capacity policy for one pagination run.
    ///
    /// An absent or out-of-range `items_per_page` never fails; the policy
    /// constructor clamps it into the supported range.
    pub fn paging_policy(&self) -> PagingPolicy {
        match self.items_per_page {
            Some(n) => PagingPolicy::from_items_per_page(n as usize),
            None => PagingPolicy::default(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::policy::DEFAULT_ITEMS_PER_PAGE;

    #[test]
    fn test_default_settings_show_all_columns() {
        let s = Settings::default();
        assert!(s.show_index_column);
        assert!(s.show_unit_column);
        assert!(s.show_quantity_column);
        assert!(s.show_price_column);
        assert!(s.show_total_column);
    }

    #[test]
    fn test_empty_json_yields_defaults() {
        let s: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_paging_policy_uses_configured_capacity() {
        let s = Settings {
            items_per_page: Some(17),
            ..Settings::default()
        };
        assert_eq!(s.paging_policy().base_items_per_page, 17);
    }

    #[test]
    fn test_paging_policy_falls_back_to_default_capacity() {
        let s = Settings::default();
        assert_eq!(s.paging_policy().base_items_per_page, DEFAULT_ITEMS_PER_PAGE);
    }

    #[test]
    fn test_paging_policy_clamps_out_of_range_capacity() {
        let s = Settings {
            items_per_page: Some(500),
            ..Settings::default()
        };
        assert_eq!(s.paging_policy().base_items_per_page, 17);
    }
}

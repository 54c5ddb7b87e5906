//! Paging policy — the capacity configuration for one pagination run.
//!
//! The historical renderers each carried their own capacity constants and
//! drifted apart; every constant now lives here, on one struct, and all
//! renderers consume the same paginated output.

use serde::{Deserialize, Serialize};

/// Lower bound for the settings-supplied nominal capacity.
pub const MIN_ITEMS_PER_PAGE: usize = 1;
/// Upper bound for the settings-supplied nominal capacity (matches the
/// settings form validation).
pub const MAX_ITEMS_PER_PAGE: usize = 17;
/// Capacity used when the settings carry no value.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 13;

/// Extra rows a continuation page can hold, since it has no header block.
const CONTINUATION_BONUS: usize = 4;

/// A description longer than this is assumed to wrap to multiple print lines.
pub const LONG_DESCRIPTION_CHARS: usize = 200;
/// First-page capacity when the long-description penalty applies.
pub const DENSE_FIRST_PAGE_CAPACITY: usize = 6;
/// Continuation-page capacity when the long-description penalty applies.
pub const DENSE_CONTINUATION_CAPACITY: usize = 8;

/// Capacity configuration consumed by `paginate`.
///
/// Read once per run; supplied explicitly by the caller (usually derived
/// from `Settings::paging_policy`), never from ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingPolicy {
    /// Nominal number of items on the first page under normal content length.
    pub base_items_per_page: usize,
    /// Nominal capacity for pages after the first.
    pub continuation_items_per_page: usize,
    /// Description length (in chars) beyond which an item counts as "long".
    pub long_description_chars: usize,
    /// First-page capacity under the long-description penalty.
    pub dense_first_page_capacity: usize,
    /// Continuation-page capacity under the long-description penalty.
    pub dense_continuation_capacity: usize,
}

impl Default for PagingPolicy {
    fn default() -> Self {
        PagingPolicy::from_items_per_page(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl PagingPolicy {
    /// Builds the canonical policy for a given nominal capacity.
    ///
    /// The capacity is clamped into `[MIN_ITEMS_PER_PAGE, MAX_ITEMS_PER_PAGE]`;
    /// continuation pages get `CONTINUATION_BONUS` extra rows.
    pub fn from_items_per_page(items_per_page: usize) -> Self {
        let base = items_per_page.clamp(MIN_ITEMS_PER_PAGE, MAX_ITEMS_PER_PAGE);
        PagingPolicy {
            base_items_per_page: base,
            continuation_items_per_page: base + CONTINUATION_BONUS,
            long_description_chars: LONG_DESCRIPTION_CHARS,
            dense_first_page_capacity: DENSE_FIRST_PAGE_CAPACITY,
            dense_continuation_capacity: DENSE_CONTINUATION_CAPACITY,
        }
    }

    /// Returns a copy with every capacity forced to at least 1 and the
    /// continuation capacity forced to at least the base capacity.
    ///
    /// Pagination must be total: a caller-constructed policy with a zero
    /// capacity would otherwise stall the cursor walk.
    pub(crate) fn normalized(&self) -> Self {
        let base = self.base_items_per_page.max(1);
        PagingPolicy {
            base_items_per_page: base,
            continuation_items_per_page: self.continuation_items_per_page.max(base),
            long_description_chars: self.long_description_chars,
            dense_first_page_capacity: self.dense_first_page_capacity.max(1),
            dense_continuation_capacity: self.dense_continuation_capacity.max(1),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

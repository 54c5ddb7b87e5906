//! Paginator — partitions a document's line items into print-ready A4 pages.
//!
//! This is the single pagination routine consumed by every renderer (screen
//! preview, PDF path, Word path), so all output formats agree on which item
//! lands on which page.
//!
//! # Capacity rules
//! - First page: `base_items_per_page` items.
//! - Continuation pages: `continuation_items_per_page` items (no header
//!   block, so more rows fit).
//! - Long-description penalty: when a majority of the next candidate window
//!   has descriptions that will wrap (longer than `long_description_chars`),
//!   the page shrinks to a small fixed capacity instead.
//!
//! The penalty is a deliberate heuristic, not a text-measurement pass: exact
//! wrapping depends on font metrics and column widths that only the
//! downstream renderer knows. A conservative, deterministic estimate is
//! enough to avoid visible overflow.

use serde::{Deserialize, Serialize};

use crate::layout::policy::PagingPolicy;
use crate::models::LineItem;

/// One print-ready page.
///
/// `start_index` is the 0-based offset of `items[0]` in the original item
/// sequence; renderers derive absolute row numbers from it instead of
/// restarting numbering per page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub items: Vec<LineItem>,
    pub start_index: usize,
    /// 1-based ordinal of this page.
    pub number: usize,
    pub total_pages: usize,
    /// Whether the document header block (logo, date, id, client, subject)
    /// is emitted on this page.
    pub is_first: bool,
    /// Whether the summary block (totals and, for quotes, terms/payment)
    /// is emitted on this page.
    pub is_last: bool,
}

impl Page {
    /// Iterates the page's items with their absolute 1-based row numbers.
    pub fn numbered_items(&self) -> impl Iterator<Item = (usize, &LineItem)> {
        self.items
            .iter()
            .enumerate()
            .map(move |(i, item)| (self.start_index + i + 1, item))
    }
}

/// Partitions `items` into an ordered list of pages.
///
/// Pure and total: every input (including an empty item list or a degenerate
/// policy) produces at least one valid page, and concatenating the page
/// slices in order reproduces `items` exactly.
pub fn paginate(items: &[LineItem], policy: &PagingPolicy) -> Vec<Page> {
    let policy = policy.normalized();

    if items.is_empty() {
        // An empty document still prints one page carrying the header,
        // summary, and footer.
        return vec![Page {
            items: Vec::new(),
            start_index: 0,
            number: 1,
            total_pages: 1,
            is_first: true,
            is_last: true,
        }];
    }

    let mut pages: Vec<Page> = Vec::new();
    let mut cursor = 0;

    while cursor < items.len() {
        let first = pages.is_empty();
        let remaining = &items[cursor..];
        let capacity = page_capacity(remaining, first, &policy);
        let take = remaining.len().min(capacity);

        pages.push(Page {
            items: remaining[..take].to_vec(),
            start_index: cursor,
            number: pages.len() + 1,
            total_pages: 0, // fixed up below
            is_first: first,
            is_last: false,
        });
        cursor += take;
    }

    let total = pages.len();
    for page in &mut pages {
        page.total_pages = total;
    }
    if let Some(last) = pages.last_mut() {
        last.is_last = true;
    }
    pages
}

/// Candidate capacity for the page about to be cut.
///
/// Inspects the next `base_items_per_page` items (or the remaining tail)
/// and applies the long-description penalty when a majority of that window
/// will wrap.
fn page_capacity(remaining: &[LineItem], first: bool, policy: &PagingPolicy) -> usize {
    let window = remaining.len().min(policy.base_items_per_page);
    let long_count = remaining[..window]
        .iter()
        .filter(|item| item.description.chars().count() > policy.long_description_chars)
        .count();

    if 2 * long_count >= window {
        if first {
            policy.dense_first_page_capacity
        } else {
            policy.dense_continuation_capacity
        }
    } else if first {
        policy.base_items_per_page
    } else {
        policy.continuation_items_per_page
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::policy::{DENSE_FIRST_PAGE_CAPACITY, LONG_DESCRIPTION_CHARS};

    fn short_item(n: usize) -> LineItem {
        LineItem::new(format!("بند رقم {n}"), "عدد", 1.0, 100.0)
    }

    fn long_item(n: usize) -> LineItem {
        let description = format!("توريد وتركيب {n} ").repeat(20);
        assert!(description.chars().count() > LONG_DESCRIPTION_CHARS);
        LineItem::new(description, "عدد", 1.0, 100.0)
    }

    fn short_items(count: usize) -> Vec<LineItem> {
        (0..count).map(short_item).collect()
    }

    fn reassemble(pages: &[Page]) -> Vec<LineItem> {
        pages.iter().flat_map(|p| p.items.clone()).collect()
    }

    // ── invariants ──────────────────────────────────────────────────────────

    #[test]
    fn test_concatenation_reproduces_input() {
        let policy = PagingPolicy::from_items_per_page(5);
        for count in [0, 1, 4, 5, 6, 23, 50] {
            let items = short_items(count);
            let pages = paginate(&items, &policy);
            assert_eq!(reassemble(&pages), items, "count = {count}");
        }
    }

    #[test]
    fn test_mixed_lengths_concatenation() {
        let policy = PagingPolicy::from_items_per_page(7);
        let items: Vec<LineItem> = (0..30)
            .map(|n| if n % 3 == 0 { long_item(n) } else { short_item(n) })
            .collect();
        let pages = paginate(&items, &policy);
        assert_eq!(reassemble(&pages), items);
    }

    #[test]
    fn test_exactly_one_first_and_last_page() {
        let policy = PagingPolicy::from_items_per_page(5);
        for count in [0, 3, 5, 12, 40] {
            let pages = paginate(&short_items(count), &policy);
            assert_eq!(pages.iter().filter(|p| p.is_first).count(), 1);
            assert_eq!(pages.iter().filter(|p| p.is_last).count(), 1);
            assert!(pages[0].is_first);
            assert!(pages[pages.len() - 1].is_last);
        }
    }

    #[test]
    fn test_start_index_continuity() {
        let policy = PagingPolicy::from_items_per_page(6);
        let pages = paginate(&short_items(25), &policy);
        assert_eq!(pages[0].start_index, 0);
        for pair in pages.windows(2) {
            assert_eq!(
                pair[1].start_index,
                pair[0].start_index + pair[0].items.len()
            );
        }
    }

    #[test]
    fn test_page_numbers_and_total() {
        let policy = PagingPolicy::from_items_per_page(10);
        let pages = paginate(&short_items(25), &policy);
        let total = pages.len();
        for (i, page) in pages.iter().enumerate() {
            assert_eq!(page.number, i + 1);
            assert_eq!(page.total_pages, total);
        }
    }

    #[test]
    fn test_capacity_bound_without_penalty() {
        let policy = PagingPolicy::from_items_per_page(9);
        let pages = paginate(&short_items(60), &policy);
        for page in &pages {
            let bound = if page.is_first {
                policy.base_items_per_page
            } else {
                policy.continuation_items_per_page
            };
            assert!(page.items.len() <= bound);
        }
    }

    // ── scenarios ───────────────────────────────────────────────────────────

    #[test]
    fn test_empty_document_yields_single_empty_page() {
        let pages = paginate(&[], &PagingPolicy::from_items_per_page(17));
        assert_eq!(pages.len(), 1);
        assert!(pages[0].items.is_empty());
        assert!(pages[0].is_first);
        assert!(pages[0].is_last);
        assert_eq!(pages[0].number, 1);
        assert_eq!(pages[0].total_pages, 1);
    }

    #[test]
    fn test_exact_fit_single_page() {
        let pages = paginate(&short_items(17), &PagingPolicy::from_items_per_page(17));
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].items.len(), 17);
        assert!(pages[0].is_first && pages[0].is_last);
    }

    #[test]
    fn test_simple_overflow_two_pages() {
        let pages = paginate(&short_items(20), &PagingPolicy::from_items_per_page(17));
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].items.len(), 17);
        assert_eq!(pages[1].items.len(), 3);
        assert_eq!(pages[1].start_index, 17);
        let numbers: Vec<usize> = pages[1].numbered_items().map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![18, 19, 20]);
    }

    #[test]
    fn test_long_description_shrink_on_first_page() {
        let items: Vec<LineItem> = (0..10).map(long_item).collect();
        let pages = paginate(&items, &PagingPolicy::from_items_per_page(17));
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].items.len(), DENSE_FIRST_PAGE_CAPACITY);
        assert_eq!(pages[1].items.len(), 4);
    }

    #[test]
    fn test_single_long_item_still_paginated() {
        let items = vec![long_item(0)];
        let pages = paginate(&items, &PagingPolicy::from_items_per_page(17));
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].items.len(), 1);
        assert!(pages[0].is_first && pages[0].is_last);
    }

    #[test]
    fn test_minority_of_long_items_keeps_nominal_capacity() {
        // 3 of 13 items are long — below the majority threshold, so the
        // first page keeps its nominal capacity.
        let items: Vec<LineItem> = (0..13)
            .map(|n| if n < 3 { long_item(n) } else { short_item(n) })
            .collect();
        let pages = paginate(&items, &PagingPolicy::from_items_per_page(13));
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].items.len(), 13);
    }

    #[test]
    fn test_continuation_page_uses_dense_continuation_capacity() {
        // 6 short items fill page one normally; the 20 long items after them
        // saturate every later window, so continuation pages hold 8 each.
        let policy = PagingPolicy::from_items_per_page(6);
        let mut items = short_items(6);
        items.extend((0..20).map(long_item));
        let pages = paginate(&items, &policy);
        assert_eq!(pages[0].items.len(), 6);
        assert_eq!(pages[1].items.len(), policy.dense_continuation_capacity);
        assert_eq!(reassemble(&pages).len(), 26);
    }

    #[test]
    fn test_degenerate_capacity_of_one() {
        let policy = PagingPolicy {
            continuation_items_per_page: 1,
            ..PagingPolicy::from_items_per_page(1)
        };
        let pages = paginate(&short_items(3), &policy);
        assert_eq!(pages.len(), 3);
        for page in &pages {
            assert_eq!(page.items.len(), 1);
        }
    }

    #[test]
    fn test_continuation_bonus_applies_after_first_page() {
        // base 1 → continuation 5: the tail after page one is cut in
        // 5-item slices.
        let pages = paginate(&short_items(11), &PagingPolicy::from_items_per_page(1));
        let lengths: Vec<usize> = pages.iter().map(|p| p.items.len()).collect();
        assert_eq!(lengths, vec![1, 5, 5]);
    }

    #[test]
    fn test_zero_capacity_policy_is_repaired() {
        let broken = PagingPolicy {
            base_items_per_page: 0,
            continuation_items_per_page: 0,
            dense_first_page_capacity: 0,
            dense_continuation_capacity: 0,
            ..PagingPolicy::default()
        };
        let pages = paginate(&short_items(2), &broken);
        assert_eq!(pages.len(), 2);
        assert_eq!(reassemble(&pages).len(), 2);
    }

    #[test]
    fn test_long_description_measured_in_chars_not_bytes() {
        // 150 Arabic letters: 300 bytes but only 150 chars — must not count
        // as long.
        let description = "م".repeat(150);
        assert!(description.len() > LONG_DESCRIPTION_CHARS);
        let items: Vec<LineItem> = (0..10)
            .map(|_| LineItem::new(description.clone(), "عدد", 1.0, 1.0))
            .collect();
        let pages = paginate(&items, &PagingPolicy::from_items_per_page(17));
        assert_eq!(pages.len(), 1, "byte length must not trigger the penalty");
    }
}

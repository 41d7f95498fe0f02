//! Search, category filtering and page windowing over a working set.
//!
//! Everything here is pure: a [`FilterState`] value goes in together with the
//! working set, a [`VisibleRows`] window comes out. The view layer never
//! stores the result, it recomputes it whenever one of the inputs changes.

use serde::{Deserialize, Serialize};
use shared::{TransactionRecord, ALL_CATEGORIES};

pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// Category predicate of the filter bar
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"all"` selects every category, anything else is an exact match
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        CategoryFilter::parse(value)
    }
}

/// Filter bar and pagination state of one transaction list.
///
/// Immutable: every `with_*` call returns the next state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_term: String,
    pub category: CategoryFilter,
    /// Zero-based page index
    pub page: usize,
    /// Must be positive; zero is a caller error and yields empty pages
    pub rows_per_page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: CategoryFilter::All,
            page: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl FilterState {
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            rows_per_page,
            ..Self::default()
        }
    }

    pub fn with_search_term(self, search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            ..self
        }
    }

    pub fn with_category(self, category: impl Into<CategoryFilter>) -> Self {
        Self {
            category: category.into(),
            ..self
        }
    }

    pub fn with_page(self, page: usize) -> Self {
        Self { page, ..self }
    }

    /// Changing the page size always jumps back to the first page
    pub fn with_rows_per_page(self, rows_per_page: usize) -> Self {
        Self {
            rows_per_page,
            page: 0,
            ..self
        }
    }

    pub fn matches(&self, record: &TransactionRecord) -> bool {
        matches_search(&record.description, &self.search_term)
            && matches_category(&record.category, &self.category)
    }
}

/// Case-insensitive substring match; an empty term matches everything
pub fn matches_search(description: &str, search_term: &str) -> bool {
    search_term.is_empty() || description.to_lowercase().contains(&search_term.to_lowercase())
}

pub fn matches_category(category: &str, filter: &CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Only(wanted) => category == wanted,
    }
}

/// Records passing the filter, in working-set order
pub fn filter_transactions<'a>(
    working_set: &'a [TransactionRecord],
    filter: &FilterState,
) -> Vec<&'a TransactionRecord> {
    working_set.iter().filter(|r| filter.matches(r)).collect()
}

/// The slice `[page * rows_per_page, page * rows_per_page + rows_per_page)`,
/// clamped to the input. Pages past the end are empty.
pub fn paginate<T>(items: &[T], page: usize, rows_per_page: usize) -> &[T] {
    let start = page.saturating_mul(rows_per_page).min(items.len());
    let end = start.saturating_add(rows_per_page).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `total` rows, at least one
pub fn page_count(total: usize, rows_per_page: usize) -> usize {
    if rows_per_page == 0 {
        return 1;
    }
    total.div_ceil(rows_per_page).max(1)
}

/// One page of the filtered working set plus what the pagination control needs
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleRows {
    pub rows: Vec<TransactionRecord>,
    /// Size of the whole filtered set, not just this page
    pub total_count: usize,
    pub page: usize,
    pub rows_per_page: usize,
    pub page_count: usize,
}

impl VisibleRows {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The current page lies past the last page of the filtered set
    pub fn is_past_end(&self) -> bool {
        self.page >= self.page_count && self.page > 0
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.page + 1 < self.page_count
    }

    /// Last page holding any rows, where a stale page should navigate back to
    pub fn last_page(&self) -> usize {
        self.page_count.saturating_sub(1)
    }
}

/// Filter, then window, the working set
pub fn compute_visible_rows(working_set: &[TransactionRecord], filter: &FilterState) -> VisibleRows {
    let filtered = filter_transactions(working_set, filter);
    let rows = paginate(&filtered, filter.page, filter.rows_per_page)
        .iter()
        .map(|r| (*r).clone())
        .collect();

    VisibleRows {
        rows,
        total_count: filtered.len(),
        page: filter.page,
        rows_per_page: filter.rows_per_page,
        page_count: page_count(filtered.len(), filter.rows_per_page),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sample_transactions;
    use crate::test_utils::{ids, numbered_records};

    #[test]
    fn test_category_filter_parse() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("income"),
            CategoryFilter::Only("income".to_string())
        );
        // Only the exact lowercase keyword means "everything"
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::Only("All".to_string()));
        assert_eq!(CategoryFilter::parse("utilities").as_str(), "utilities");
        assert_eq!(CategoryFilter::All.as_str(), "all");
    }

    #[test]
    fn test_matches_search_is_case_insensitive() {
        assert!(matches_search("Electric Bill", "bill"));
        assert!(matches_search("Electric Bill", "BILL"));
        assert!(matches_search("Electric Bill", "ric b"));
        assert!(matches_search("Electric Bill", ""));
        assert!(!matches_search("Electric Bill", "gas"));
    }

    #[test]
    fn test_income_filter_selects_salary_only() {
        let working_set = sample_transactions();
        let filter = FilterState::default().with_category("income");

        let visible = compute_visible_rows(&working_set, &filter);
        assert_eq!(ids(&visible.rows), vec![2]);
        assert_eq!(visible.total_count, 1);
    }

    #[test]
    fn test_search_bill_keeps_original_order() {
        let working_set = sample_transactions();
        let filter = FilterState::default()
            .with_search_term("bill")
            .with_category("all");

        let visible = compute_visible_rows(&working_set, &filter);
        assert_eq!(ids(&visible.rows), vec![3, 7]);
    }

    #[test]
    fn test_search_and_category_combine() {
        let working_set = sample_transactions();
        let filter = FilterState::default()
            .with_search_term("bill")
            .with_category("utilities");
        assert_eq!(ids(&compute_visible_rows(&working_set, &filter).rows), vec![3, 7]);

        let filter = filter.with_category("entertainment");
        let visible = compute_visible_rows(&working_set, &filter);
        assert!(visible.is_empty());
        assert_eq!(visible.total_count, 0);
    }

    #[test]
    fn test_all_category_equals_search_only() {
        let working_set = sample_transactions();
        for term in ["", "bill", "o", "SALARY", "nothing matches"] {
            let with_all = FilterState::default().with_search_term(term).with_category("all");
            let search_only: Vec<_> = working_set
                .iter()
                .filter(|r| matches_search(&r.description, term))
                .cloned()
                .collect();
            assert_eq!(compute_visible_rows(&working_set, &with_all).rows, search_only, "term {:?}", term);
        }
    }

    #[test]
    fn test_seven_records_ten_per_page() {
        let working_set = sample_transactions();
        let filter = FilterState::new(10);

        let first = compute_visible_rows(&working_set, &filter);
        assert_eq!(first.rows.len(), 7);
        assert_eq!(first.page_count, 1);
        assert!(!first.has_next_page());

        let second = compute_visible_rows(&working_set, &filter.with_page(1));
        assert!(second.rows.is_empty());
        assert_eq!(second.total_count, 7);
        assert!(second.is_past_end());
        assert_eq!(second.last_page(), 0);
    }

    #[test]
    fn test_pages_partition_filtered_set() {
        let working_set = numbered_records(23);
        for rows_per_page in [1, 3, 5, 10, 23, 50] {
            let filter = FilterState::new(rows_per_page);
            let total_pages = compute_visible_rows(&working_set, &filter).page_count;

            let mut seen = Vec::new();
            for page in 0..total_pages {
                let visible = compute_visible_rows(&working_set, &filter.clone().with_page(page));
                assert!(visible.rows.len() <= rows_per_page);
                seen.extend(ids(&visible.rows));
            }
            assert_eq!(seen, (1..=23).collect::<Vec<_>>(), "rows_per_page {}", rows_per_page);
        }
    }

    #[test]
    fn test_rows_per_page_change_resets_page() {
        let filter = FilterState::default().with_search_term("x").with_page(4);
        let resized = filter.with_rows_per_page(25);
        assert_eq!(resized.page, 0);
        assert_eq!(resized.rows_per_page, 25);
        assert_eq!(resized.search_term, "x");
    }

    #[test]
    fn test_search_does_not_reset_page() {
        let filter = FilterState::default().with_page(2).with_search_term("bill");
        assert_eq!(filter.page, 2);
        let filter = filter.with_category("utilities");
        assert_eq!(filter.page, 2);
    }

    #[test]
    fn test_empty_working_set() {
        let visible = compute_visible_rows(&[], &FilterState::default().with_search_term("bill"));
        assert!(visible.is_empty());
        assert_eq!(visible.total_count, 0);
        assert_eq!(visible.page_count, 1);
    }

    #[test]
    fn test_zero_rows_per_page_does_not_panic() {
        let working_set = numbered_records(5);
        let visible = compute_visible_rows(&working_set, &FilterState::new(0).with_page(3));
        assert!(visible.is_empty());
        assert_eq!(visible.total_count, 5);
    }

    #[test]
    fn test_huge_page_index_does_not_overflow() {
        let working_set = numbered_records(5);
        let visible = compute_visible_rows(&working_set, &FilterState::new(10).with_page(usize::MAX));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let items = [1, 2, 3, 4, 5, 6, 7];
        assert_eq!(paginate(&items, 0, 3), &[1, 2, 3]);
        assert_eq!(paginate(&items, 2, 3), &[7]);
        assert!(paginate(&items, 3, 3).is_empty());
        assert_eq!(page_count(7, 3), 3);
        assert_eq!(page_count(0, 3), 1);
    }
}

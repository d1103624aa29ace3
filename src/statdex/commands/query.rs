//! The table pipeline: filter, paginate, summarize.
//!
//! Each call recomputes everything from the full record set. Nothing is
//! cached between calls.

use super::filter::{filter, FilterCriteria};
use super::paginate::{page_count, paginate, PageSize, PageState};
use super::summarize::{summarize, PowerRange};
use crate::model::Record;
use serde::Serialize;
use tracing::debug;

/// Everything the presentation layer needs to draw one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub rows: Vec<Record>,
    pub empty_row_count: usize,
    /// `None` when no rows are visible.
    pub power_range: Option<PowerRange>,
    pub total_records: usize,
    pub total_filtered: usize,
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: PageSize,
    /// 1-based position of the first visible row in the filtered set, 0 if none.
    pub first_row: usize,
    /// 1-based position of the last visible row in the filtered set, 0 if none.
    pub last_row: usize,
}

impl TableView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_prev(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }
}

/// Runs the pipeline for one page. The caller is expected to have clamped
/// `page.page_index` already; an out-of-range index yields an empty window.
pub fn run(records: &[Record], criteria: &FilterCriteria, page: PageState) -> TableView {
    let filtered = filter(records, criteria);
    let window = paginate(&filtered, page.page_index, page.page_size);
    let power_range = summarize(window.rows.iter().copied());

    let offset = match page.page_size.limit() {
        Some(size) => page.page_index.saturating_mul(size),
        None => 0,
    };
    let (first_row, last_row) = if window.rows.is_empty() {
        (0, 0)
    } else {
        (offset + 1, offset + window.rows.len())
    };

    debug!(
        query = %criteria.name_query,
        min_power = criteria.min_power,
        page = page.page_index,
        page_size = %page.page_size,
        filtered = filtered.len(),
        visible = window.rows.len(),
        "table recomputed"
    );

    TableView {
        rows: window.rows.iter().map(|r| (*r).clone()).collect(),
        empty_row_count: window.empty_row_count,
        power_range,
        total_records: records.len(),
        total_filtered: filtered.len(),
        page_index: page.page_index,
        page_count: page_count(filtered.len(), page.page_size),
        page_size: page.page_size,
        first_row,
        last_row,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{numbered_records, record_with_power, sample_records};

    fn page(index: usize, size: usize) -> PageState {
        PageState {
            page_index: index,
            page_size: PageSize::rows(size).unwrap(),
        }
    }

    #[test]
    fn filters_then_counts() {
        let records = vec![
            record_with_power(1, "A", 50),
            record_with_power(2, "B", 80),
            record_with_power(3, "C", 30),
        ];
        let view = run(&records, &FilterCriteria::new("", 40), page(0, 5));
        assert_eq!(view.total_filtered, 2);
        assert_eq!(view.total_records, 3);
        assert_eq!(view.rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(view.power_range, Some(PowerRange { min: 50, max: 80 }));
    }

    #[test]
    fn last_page_window_and_padding() {
        let records = numbered_records(12);
        let view = run(&records, &FilterCriteria::default(), page(2, 5));
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].id, 11);
        assert_eq!(view.empty_row_count, 3);
        assert_eq!(view.page_count, 3);
        assert_eq!((view.first_row, view.last_row), (11, 12));
        assert!(view.has_prev());
        assert!(!view.has_next());
    }

    #[test]
    fn stats_cover_only_visible_rows() {
        let records = vec![
            record_with_power(1, "A", 100),
            record_with_power(2, "B", 200),
            record_with_power(3, "C", 900),
        ];
        let view = run(&records, &FilterCriteria::default(), page(0, 2));
        assert_eq!(view.power_range, Some(PowerRange { min: 100, max: 200 }));
    }

    #[test]
    fn everything_filtered_out() {
        let records = sample_records();
        let view = run(&records, &FilterCriteria::new("zzz", 0), page(0, 5));
        assert!(view.is_empty());
        assert_eq!(view.power_range, None);
        assert_eq!(view.page_count, 0);
        assert_eq!((view.first_row, view.last_row), (0, 0));
    }

    #[test]
    fn all_rows_single_page() {
        let records = numbered_records(12);
        let state = PageState::new(PageSize::All);
        let view = run(&records, &FilterCriteria::default(), state);
        assert_eq!(view.rows.len(), 12);
        assert_eq!(view.empty_row_count, 0);
        assert_eq!(view.page_count, 1);
        assert_eq!((view.first_row, view.last_row), (1, 12));
    }

    #[test]
    fn serializes_absent_stats_as_null() {
        let view = run(&[], &FilterCriteria::default(), page(0, 5));
        let json = serde_json::to_value(&view).unwrap();
        assert!(json["power_range"].is_null());
        assert_eq!(json["page_size"], serde_json::json!(5));
    }
}

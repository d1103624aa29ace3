//! # Table Session
//!
//! A [`TableSession`] holds the presentation-side state of one table (the
//! filter criteria and the page position) and re-runs the whole pipeline
//! after every [`TableEvent`]. It never caches results: each dispatch is a
//! fresh, O(n) pass over the loaded records.
//!
//! Boundary rules applied before the pipeline runs:
//! - a page-size change returns to the first page,
//! - previous/next/absolute navigation is clamped to the existing pages,
//! - a filter change that shrinks the result pulls the page index back into range,
//! - a non-numeric power threshold is treated as "no minimum" and reported.

use crate::commands::filter::{filter, parse_min_power, FilterCriteria};
use crate::commands::paginate::{PageSize, PageState};
use crate::commands::query::{self, TableView};
use crate::commands::CmdResult;
use crate::model::Record;

/// Input events coming from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// New name query text. Empty clears the name filter.
    Search(String),
    /// New power threshold text, exactly as the user typed it.
    MinPower(String),
    PageSize(PageSize),
    NextPage,
    PrevPage,
    /// Jump to a 0-based page index.
    GoToPage(usize),
    /// Drop both filters and return to the first page.
    Reset,
}

pub struct TableSession<'a> {
    records: &'a [Record],
    criteria: FilterCriteria,
    page: PageState,
}

impl<'a> TableSession<'a> {
    pub fn new(records: &'a [Record], page_size: PageSize) -> Self {
        Self {
            records,
            criteria: FilterCriteria::default(),
            page: PageState::new(page_size),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    /// The table for the current state.
    pub fn view(&self) -> TableView {
        query::run(self.records, &self.criteria, self.page)
    }

    /// Applies one event and recomputes the table.
    pub fn dispatch(&mut self, event: TableEvent) -> CmdResult {
        let mut result = CmdResult::default();

        match event {
            TableEvent::Search(text) => {
                self.criteria.name_query = text;
                let total = self.filtered_total();
                self.page.clamp(total);
            }
            TableEvent::MinPower(text) => {
                let (threshold, warning) = parse_min_power(&text);
                self.criteria.min_power = threshold;
                result.messages.extend(warning);
                let total = self.filtered_total();
                self.page.clamp(total);
            }
            TableEvent::PageSize(size) => self.page.set_page_size(size),
            TableEvent::NextPage => {
                let total = self.filtered_total();
                self.page.next(total);
            }
            TableEvent::PrevPage => self.page.prev(),
            TableEvent::GoToPage(index) => {
                let total = self.filtered_total();
                self.page.go_to(index, total);
            }
            TableEvent::Reset => {
                self.criteria = FilterCriteria::default();
                self.page.page_index = 0;
            }
        }

        result.with_table(self.view())
    }

    fn filtered_total(&self) -> usize {
        filter(self.records, &self.criteria).len()
    }
}

//! # API Facade
//!
//! [`StatdexApi`] is the single entry point for UI clients. It owns the
//! dataset snapshot loaded at startup and the location of the config
//! directory, and dispatches to the command layer.
//!
//! The facade normalizes inputs before they reach the pipeline:
//! - raw power-threshold text is coerced (non-numeric means no minimum),
//! - the requested page index is clamped into the existing pages.
//!
//! It returns structured [`CmdResult`]s and never prints.

use crate::commands::filter::{filter, parse_min_power, FilterCriteria};
use crate::commands::paginate::{PageSize, PageState};
use crate::commands::{self, query};
use crate::error::Result;
use crate::session::TableSession;
use crate::store::{Dataset, RecordSource};
use std::path::{Path, PathBuf};

pub struct StatdexApi {
    dataset: Dataset,
    config_dir: PathBuf,
}

impl StatdexApi {
    /// Loads the record collection once. A source that cannot be read
    /// leaves the API working over an empty table.
    pub fn open<S: RecordSource + ?Sized>(source: &S, config_dir: PathBuf) -> Self {
        Self::from_dataset(Dataset::load(source), config_dir)
    }

    pub fn from_dataset(dataset: Dataset, config_dir: PathBuf) -> Self {
        Self {
            dataset,
            config_dir,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Warnings about the initial load: an unreadable source, or records
    /// that were skipped.
    pub fn load_messages(&self) -> Vec<CmdMessage> {
        let mut messages = Vec::new();
        if let Some(err) = self.dataset.load_error() {
            messages.push(CmdMessage::warning(err));
        }
        let rejected = self.dataset.rejected();
        if !rejected.is_empty() {
            messages.push(CmdMessage::warning(format!(
                "Skipped {} malformed record(s)",
                rejected.len()
            )));
            for r in rejected {
                messages.push(CmdMessage::info(format!("  entry {}: {}", r.position, r.reason)));
            }
        }
        messages
    }

    /// Computes one page of the table. `page.page_index` is clamped first.
    pub fn query(&self, criteria: &FilterCriteria, page: PageState) -> CmdResult {
        let records = self.dataset.records();
        let mut page = page;
        page.clamp(filter(records, criteria).len());
        CmdResult::default().with_table(query::run(records, criteria, page))
    }

    /// Like [`query`](Self::query), but takes the threshold as entered by the user.
    pub fn query_input(&self, name_query: &str, min_power: &str, page: PageState) -> CmdResult {
        let (threshold, warning) = parse_min_power(min_power);

        let criteria = FilterCriteria::new(name_query, threshold);
        let mut result = self.query(&criteria, page);
        result.messages.extend(warning);
        result
    }

    /// Starts an interactive session over the loaded records.
    pub fn session(&self, page_size: PageSize) -> TableSession<'_> {
        TableSession::new(self.dataset.records(), page_size)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::query::TableView;
pub use crate::commands::summarize::PowerRange;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

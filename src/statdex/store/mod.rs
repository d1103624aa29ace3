//! # Record Sources
//!
//! The record collection is read exactly once per session. A [`RecordSource`]
//! hands back the raw JSON elements; [`Dataset::load`] validates them into an
//! immutable snapshot that the rest of the crate only ever borrows.
//!
//! ## Implementations
//!
//! - [`fs::FileSource`]: reads a JSON array from disk.
//! - [`memory::InMemorySource`]: serves prepared values, for tests.
//!
//! ## Fault isolation
//!
//! Loading never fails outright. A source that cannot be read leaves the
//! dataset empty with [`Dataset::load_error`] set. Individual elements that
//! are malformed (missing stat, bad id, duplicate id) are dropped into
//! [`Dataset::rejected`] while the rest load normally.

use crate::error::{Result, StatdexError};
use crate::model::Record;
use serde_json::Value;
use std::collections::HashSet;
use tracing::{info, warn};

pub mod fs;
pub mod memory;

/// Where the raw record collection comes from.
pub trait RecordSource {
    /// Reads the whole collection. Called once per session.
    fn fetch(&self) -> Result<Vec<Value>>;

    /// Human-readable origin, used in logs and messages.
    fn describe(&self) -> String;
}

/// An element of the raw collection that could not become a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// Index of the element in the raw array.
    pub position: usize,
    pub reason: String,
}

/// Validated, read-only snapshot of the record collection.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    rejected: Vec<RejectedRecord>,
    load_error: Option<String>,
}

impl Dataset {
    pub fn load<S: RecordSource + ?Sized>(source: &S) -> Self {
        let origin = source.describe();
        match source.fetch() {
            Ok(values) => {
                let dataset = Self::from_values(values);
                info!(
                    source = %origin,
                    records = dataset.records.len(),
                    rejected = dataset.rejected.len(),
                    "record collection loaded"
                );
                dataset
            }
            Err(e) => {
                warn!(
                    source = %origin,
                    error = %e,
                    "record collection unavailable, continuing empty"
                );
                Self {
                    load_error: Some(format!("Could not load records from {}: {}", origin, e)),
                    ..Self::default()
                }
            }
        }
    }

    /// Validates raw elements, keeping the first occurrence of each id.
    pub fn from_values(values: Vec<Value>) -> Self {
        let mut records = Vec::with_capacity(values.len());
        let mut rejected = Vec::new();
        let mut seen = HashSet::new();

        for (position, value) in values.iter().enumerate() {
            let outcome = Record::from_value(position, value).and_then(|record| {
                if seen.insert(record.id) {
                    Ok(record)
                } else {
                    Err(StatdexError::DuplicateId(record.id))
                }
            });

            match outcome {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(position, error = %e, "skipping malformed record");
                    rejected.push(RejectedRecord {
                        position,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Self {
            records,
            rejected,
            load_error: None,
        }
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn rejected(&self) -> &[RejectedRecord] {
        &self.rejected
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

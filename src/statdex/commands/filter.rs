//! Record filtering.
//!
//! A record stays in the filtered set when its name contains the query
//! (case-insensitive, Unicode-naive lowercase comparison) AND its power is at
//! least the threshold. Output preserves input order.

use super::power::power;
use super::CmdMessage;
use crate::model::Record;
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Substring to look for in record names. Empty matches everything.
    pub name_query: String,
    /// Minimum power, inclusive.
    pub min_power: u64,
}

impl FilterCriteria {
    pub fn new(name_query: impl Into<String>, min_power: u64) -> Self {
        Self {
            name_query: name_query.into(),
            min_power,
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.matches_name(record) && power(record) >= self.min_power
    }

    fn matches_name(&self, record: &Record) -> bool {
        self.name_query.is_empty()
            || record
                .name
                .to_lowercase()
                .contains(&self.name_query.to_lowercase())
    }
}

pub fn filter<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter(|record| criteria.matches(record))
        .collect()
}

/// Reads user-entered threshold text. `None` means the text is not a number.
///
/// Blank input is "no minimum" (0). Negative numbers clamp to 0 since no
/// record can have negative power; numbers past `u64::MAX` saturate.
pub fn try_parse_min_power(input: &str) -> Option<u64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(0);
    }

    if trimmed.starts_with('-') {
        return match trimmed.parse::<i64>() {
            Ok(_) => Some(0),
            Err(e) if *e.kind() == IntErrorKind::NegOverflow => Some(0),
            Err(_) => None,
        };
    }

    match trimmed.parse::<u64>() {
        Ok(n) => Some(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u64::MAX),
        Err(_) => None,
    }
}

/// Coerces user-entered threshold text into a power minimum.
///
/// Non-numeric input means "no minimum" and comes back with a warning for
/// the user.
pub fn parse_min_power(input: &str) -> (u64, Option<CmdMessage>) {
    match try_parse_min_power(input) {
        Some(n) => (n, None),
        None => {
            let input = input.trim();
            warn!(input, "ignoring non-numeric power threshold");
            let message = CmdMessage::warning(format!(
                "'{}' is not a number; showing all powers",
                input
            ));
            (0, Some(message))
        }
    }
}

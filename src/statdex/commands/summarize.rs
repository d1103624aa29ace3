use super::power::power;
use crate::model::Record;
use serde::{Deserialize, Serialize};

/// Lowest and highest power among the visible rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerRange {
    pub min: u64,
    pub max: u64,
}

/// Min/max power over exactly the rows being shown.
///
/// Returns `None` for an empty window: there is no meaningful minimum or
/// maximum of nothing.
pub fn summarize<'a, I>(visible_rows: I) -> Option<PowerRange>
where
    I: IntoIterator<Item = &'a Record>,
{
    visible_rows.into_iter().map(power).fold(None, |acc, p| {
        Some(match acc {
            None => PowerRange { min: p, max: p },
            Some(range) => PowerRange {
                min: range.min.min(p),
                max: range.max.max(p),
            },
        })
    })
}

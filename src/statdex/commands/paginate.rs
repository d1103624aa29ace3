//! Pagination windowing.
//!
//! [`paginate`] only slices. Keeping the page index inside
//! `[0, page_count - 1]` is the caller's job, which [`PageState`] does for
//! the navigation events it supports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Rows per page, or every row on a single page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PageSizeRepr", into = "PageSizeRepr")]
pub enum PageSize {
    Rows(NonZeroUsize),
    All,
}

impl PageSize {
    pub const DEFAULT: PageSize = PageSize::Rows(match NonZeroUsize::new(5) {
        Some(n) => n,
        None => unreachable!(),
    });

    /// Builds a bounded size; `0` is rejected.
    pub fn rows(n: usize) -> Option<Self> {
        NonZeroUsize::new(n).map(PageSize::Rows)
    }

    pub fn limit(&self) -> Option<usize> {
        match self {
            PageSize::Rows(n) => Some(n.get()),
            PageSize::All => None,
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::DEFAULT
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::Rows(n) => write!(f, "{}", n),
            PageSize::All => write!(f, "all"),
        }
    }
}

impl FromStr for PageSize {
    type Err = String;

    /// Accepts a positive integer, `all`, or the legacy `-1` sentinel.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") || s == "-1" {
            return Ok(PageSize::All);
        }
        s.parse::<usize>()
            .ok()
            .and_then(PageSize::rows)
            .ok_or_else(|| {
                format!(
                    "Invalid page size: {} (expected a positive number or 'all')",
                    s
                )
            })
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PageSizeRepr {
    Number(i64),
    Text(String),
}

impl TryFrom<PageSizeRepr> for PageSize {
    type Error = String;

    fn try_from(repr: PageSizeRepr) -> Result<Self, Self::Error> {
        match repr {
            PageSizeRepr::Number(n) => n.to_string().parse(),
            PageSizeRepr::Text(s) => s.parse(),
        }
    }
}

impl From<PageSize> for PageSizeRepr {
    fn from(size: PageSize) -> Self {
        match size {
            PageSize::Rows(n) => PageSizeRepr::Number(n.get() as i64),
            PageSize::All => PageSizeRepr::Text("all".to_string()),
        }
    }
}

/// The visible window over a filtered set.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub rows: &'a [T],
    /// Placeholder rows needed to keep a short final page as tall as a full one.
    pub empty_row_count: usize,
}

pub fn paginate<T>(records: &[T], page_index: usize, page_size: PageSize) -> Page<'_, T> {
    let Some(size) = page_size.limit() else {
        return Page {
            rows: records,
            empty_row_count: 0,
        };
    };

    let total = records.len();
    let start = page_index.saturating_mul(size).min(total);
    let end = start.saturating_add(size).min(total);

    let empty_row_count = if page_index > 0 {
        page_index
            .saturating_add(1)
            .saturating_mul(size)
            .saturating_sub(total)
    } else {
        0
    };

    Page {
        rows: &records[start..end],
        empty_row_count,
    }
}

/// Number of pages a pager shows for `total` rows. `All` is always one page.
pub fn page_count(total: usize, page_size: PageSize) -> usize {
    match page_size.limit() {
        Some(size) => total.div_ceil(size),
        None => 1,
    }
}

/// Clamps `page_index` into `[0, page_count - 1]` (0 when there are no pages).
pub fn clamp_page_index(page_index: usize, total: usize, page_size: PageSize) -> usize {
    page_index.min(page_count(total, page_size).saturating_sub(1))
}

/// Page position owned by the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub page_index: usize,
    pub page_size: PageSize,
}

impl PageState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_index: 0,
            page_size,
        }
    }

    /// Changing the page size always returns to the first page.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page_index = 0;
    }

    /// Moves forward one page; a no-op on the last page.
    pub fn next(&mut self, total: usize) {
        if self.page_index + 1 < page_count(total, self.page_size) {
            self.page_index += 1;
        }
    }

    /// Moves back one page; a no-op on the first page.
    pub fn prev(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn go_to(&mut self, page_index: usize, total: usize) {
        self.page_index = clamp_page_index(page_index, total, self.page_size);
    }

    /// Pulls the index back into range after the filtered set changed size.
    pub fn clamp(&mut self, total: usize) {
        self.go_to(self.page_index, total);
    }

    pub fn is_last(&self, total: usize) -> bool {
        self.page_index + 1 >= page_count(total, self.page_size)
    }
}

//! Page windows over an ordered sequence.
//!
//! A [`Page`] is a 1-based window (`number`, `size`). The raw bounds follow directly from the two
//! fields:
//!
//! ```text
//! start_index  = (number - 1) * size
//! end_position = number * size
//! ```
//!
//! [`Page::window`] clamps those bounds to a concrete sequence length. A window never has a
//! negative start, never runs past the end, and is empty when `size` or `number` is not positive
//! or when the page lies beyond the last record.

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    pub number: i64,
    pub size: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            number: DEFAULT_PAGE_NUMBER,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Page {
    pub fn new(number: i64, size: i64) -> Self {
        Self { number, size }
    }

    /// Builds a page from raw query-string values.
    ///
    /// Each parameter falls back to its own default when missing or not an integer:
    /// `number` to [`DEFAULT_PAGE_NUMBER`], `size` to `default_size`. Values are parsed as
    /// given, so surrounding whitespace makes a value unparseable.
    pub fn from_params(number: Option<&str>, size: Option<&str>, default_size: i64) -> Self {
        Self {
            number: parse_param(number).unwrap_or(DEFAULT_PAGE_NUMBER),
            size: parse_param(size).unwrap_or(default_size),
        }
    }

    /// Index of the first record on this page. Saturates instead of overflowing.
    pub fn start_index(&self) -> i64 {
        self.number.saturating_sub(1).saturating_mul(self.size)
    }

    /// One past the index of the last record on this page. Saturates instead of overflowing.
    pub fn end_position(&self) -> i64 {
        self.number.saturating_mul(self.size)
    }

    /// The slice range this page selects from a sequence of `len` records.
    pub fn window(&self, len: usize) -> Range<usize> {
        if self.size <= 0 {
            return 0..0;
        }

        let start = clamp_to_len(self.start_index(), len);
        let end = clamp_to_len(self.end_position(), len);
        start..end.max(start)
    }
}

fn parse_param(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.parse::<i64>().ok())
}

fn clamp_to_len(value: i64, len: usize) -> usize {
    if value <= 0 {
        return 0;
    }
    usize::try_from(value).map_or(len, |v| v.min(len))
}

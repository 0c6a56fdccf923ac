//! Upward threshold crossings over the most recent part of a recording.
//!
//! A crossing is counted for every consecutive sample pair `(a, b)` with
//! `a <= threshold` and `b > threshold`. Downward transitions are never
//! counted. Only rows whose time lies strictly after `last_time - window`
//! take part.

use std::fmt;

use crate::config::{DEFAULT_RATE_DIVISOR, DEFAULT_WINDOW};
use crate::data::table::{write_row, Table, TIME_COLUMN};

/// Channel whose crossings are counted.
pub const COUNT_CHANNEL: usize = 1;

/// Rows of `table` with time strictly greater than `last_time - window`.
///
/// Returns an empty selection for an empty table. Time is not required to be
/// monotonic; every row is tested on its own.
pub fn recent_window(table: &Table, window: f64) -> Vec<&[f64]> {
    let Some(start) = window_start(table, window) else {
        return Vec::new();
    };
    table
        .rows()
        .iter()
        .filter(|r| r[TIME_COLUMN] > start)
        .map(Vec::as_slice)
        .collect()
}

/// `last_time - window`, or `None` for an empty table.
pub fn window_start(table: &Table, window: f64) -> Option<f64> {
    table.last_time().map(|t| t - window)
}

/// Number of upward crossings of `threshold` in `values`.
pub fn count_upward_crossings<I>(values: I, threshold: f64) -> usize
where
    I: IntoIterator<Item = f64>,
{
    let mut iter = values.into_iter();
    let Some(mut prev) = iter.next() else {
        return 0;
    };
    let mut count = 0;
    for v in iter {
        if prev <= threshold && v > threshold {
            count += 1;
        }
        prev = v;
    }
    count
}

/// Window length and rate divisor used for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossingCounter {
    pub window: f64,
    pub rate_divisor: usize,
}

impl Default for CrossingCounter {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            rate_divisor: DEFAULT_RATE_DIVISOR,
        }
    }
}

impl CrossingCounter {
    pub fn new(window: f64, rate_divisor: usize) -> Self {
        Self {
            window,
            rate_divisor,
        }
    }

    /// Count upward crossings of `threshold` on the counted channel inside the recent window.
    pub fn evaluate(&self, table: &Table, threshold: f64) -> CrossingReport {
        let rows = recent_window(table, self.window);
        self.evaluate_rows(&rows, window_start(table, self.window), threshold)
    }

    /// Same as [`evaluate`](Self::evaluate) for rows already selected with [`recent_window`].
    pub fn evaluate_rows(
        &self,
        rows: &[&[f64]],
        window_start: Option<f64>,
        threshold: f64,
    ) -> CrossingReport {
        let count = count_upward_crossings(rows.iter().map(|r| r[COUNT_CHANNEL]), threshold);
        CrossingReport {
            window_start,
            window_len: rows.len(),
            threshold,
            count,
            rate: count / self.rate_divisor.max(1),
        }
    }
}

/// Outcome of one evaluation. Lives until the next button release.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossingReport {
    pub window_start: Option<f64>,
    pub window_len: usize,
    pub threshold: f64,
    pub count: usize,
    pub rate: usize,
}

/// `"{rate} {count}"`, the line printed after every release.
impl fmt::Display for CrossingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rate, self.count)
    }
}

/// Tab-separated dump of the recent window rows.
pub(crate) struct WindowDump<'a>(pub(crate) &'a [&'a [f64]]);

impl fmt::Display for WindowDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0 {
            write_row(f, row)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

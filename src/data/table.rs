//! Tab-separated recording loaded into memory.
//!
//! The first line names the columns; every following line holds one sample
//! row. Column 0 is time and is expected to be non-decreasing; columns
//! 1..=3 are the signal channels.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::error::TableError;

/// Index of the time column.
pub const TIME_COLUMN: usize = 0;
/// Channel columns drawn in the plot.
pub const CHANNELS: [usize; 3] = [1, 2, 3];

/// Immutable table of samples with named columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    names: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl Table {
    /// Build a table from already parsed parts.
    pub fn new(names: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, TableError> {
        if names.len() < CHANNELS.len() + 1 {
            return Err(TableError::MissingColumns {
                found: names.len(),
                channels: CHANNELS.len(),
            });
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != names.len() {
                return Err(TableError::RaggedRow {
                    // header is line 1
                    line: i + 2,
                    expected: names.len(),
                    found: row.len(),
                });
            }
        }
        Ok(Self { names, rows })
    }

    /// Load a recording from disk. The file is closed before returning.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let file = File::open(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            TableError::Io { source, .. } => TableError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse a recording from any buffered reader.
    ///
    /// The first line is the header. Cells are trimmed before parsing; a cell
    /// that is not a float, a blank data line included, fails the whole load.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, TableError> {
        let mut lines = reader.lines().enumerate();

        let header = match lines.next() {
            None => return Err(TableError::MissingHeader),
            Some((_, line)) => line.map_err(io_error)?,
        };
        if header.trim().is_empty() {
            return Err(TableError::MissingHeader);
        }
        let names: Vec<String> = header.split('\t').map(|s| s.trim().to_string()).collect();

        let mut rows = Vec::new();
        for (idx, line) in lines {
            let line = line.map_err(io_error)?;
            let line_no = idx + 1;
            let row = line
                .split('\t')
                .enumerate()
                .map(|(column, cell)| {
                    let text = cell.trim();
                    text.parse::<f64>().map_err(|source| TableError::Parse {
                        line: line_no,
                        column,
                        text: text.to_string(),
                        source,
                    })
                })
                .collect::<Result<Vec<f64>, _>>()?;
            if row.len() != names.len() {
                return Err(TableError::RaggedRow {
                    line: line_no,
                    expected: names.len(),
                    found: row.len(),
                });
            }
            rows.push(row);
        }

        Self::new(names, rows)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Column name, or an empty string for an unknown index.
    pub fn name(&self, column: usize) -> &str {
        self.names.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Time of the final row.
    pub fn last_time(&self) -> Option<f64> {
        self.rows.last().map(|r| r[TIME_COLUMN])
    }

    /// Iterate over one column's values in row order.
    pub fn column(&self, column: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().filter_map(move |r| r.get(column).copied())
    }

    /// `[time, value]` pairs for one channel, ready for plotting.
    pub fn channel_points(&self, column: usize) -> Vec<[f64; 2]> {
        self.rows
            .iter()
            .filter_map(|r| r.get(column).map(|v| [r[TIME_COLUMN], *v]))
            .collect()
    }

    /// Smallest finite value over all plotted channels.
    pub fn channel_min(&self) -> Option<f64> {
        CHANNELS
            .iter()
            .flat_map(|&c| self.column(c))
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.min(v))))
    }

    /// First row index where time decreases, if any.
    pub fn first_time_regression(&self) -> Option<usize> {
        self.rows
            .windows(2)
            .position(|w| w[1][TIME_COLUMN] < w[0][TIME_COLUMN])
            .map(|i| i + 1)
    }

    /// Indices of rows strictly older than `cutoff`.
    pub fn indices_before(&self, cutoff: f64) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r[TIME_COLUMN] < cutoff)
            .map(|(i, _)| i)
            .collect()
    }
}

fn io_error(source: std::io::Error) -> TableError {
    TableError::Io {
        path: Default::default(),
        source,
    }
}

impl FromStr for Table {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}

/// Tab-separated dump: header line followed by one line per row.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.names.join("\t"))?;
        for row in &self.rows {
            write_row(f, row)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

pub(crate) fn write_row(f: &mut fmt::Formatter<'_>, row: &[f64]) -> fmt::Result {
    for (i, v) in row.iter().enumerate() {
        if i > 0 {
            write!(f, "\t")?;
        }
        write!(f, "{}", v)?;
    }
    Ok(())
}

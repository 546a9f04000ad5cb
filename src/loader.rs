//! Tabular-data loader: parses a delimited reward file into a [`DenseTable`].
//!
//! This is peripheral I/O, deliberately outside the selector: the selector
//! only ever sees the resulting table through [`crate::RewardSource`].
//!
//! Format: one round per line, comma-separated numeric cells, one column per
//! arm.  A single leading header line is tolerated and skipped when any of
//! its cells fails numeric parsing (ad-click datasets in the wild usually
//! carry one).  After that, every cell must parse and every row must match
//! the first data row's column count.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::DenseTable;

/// Failures while parsing a reward file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Underlying I/O failure (missing file, read error).
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The input contained no data rows.
    #[error("reward table is empty")]
    Empty,

    /// A row's column count differed from the first data row's.
    #[error("ragged row at line {line}: expected {expected} columns, found {found}")]
    Ragged {
        /// 1-based line number in the input.
        line: usize,
        /// Column count of the first data row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },

    /// A cell failed numeric parsing (past the optional header line).
    #[error("non-numeric cell at line {line}, column {column}: {value:?}")]
    BadCell {
        /// 1-based line number in the input.
        line: usize,
        /// 1-based column number within the line.
        column: usize,
        /// The offending cell text.
        value: String,
    },
}

/// Load a reward table from a comma-delimited file.
///
/// Equivalent to [`read_table`] over a buffered reader for `path`.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<DenseTable, LoadError> {
    read_table(BufReader::new(File::open(path)?))
}

/// Parse a reward table from any buffered reader.
///
/// # Example
///
/// ```rust
/// use adsel::loader::read_table;
/// use adsel::RewardSource;
///
/// let input = "ad_0,ad_1\n1,0\n0,1\n";
/// let t = read_table(input.as_bytes()).unwrap();
/// assert_eq!(t.rows(), 2);
/// assert_eq!(t.arms(), 2);
/// ```
pub fn read_table<R: BufRead>(reader: R) -> Result<DenseTable, LoadError> {
    let mut expected: Option<usize> = None;
    let mut values: Vec<f64> = Vec::new();
    let mut data_rows = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let cells: Vec<&str> = trimmed.split(',').map(str::trim).collect();

        let mut parsed: Vec<f64> = Vec::with_capacity(cells.len());
        let mut bad: Option<(usize, String)> = None;
        for (col, cell) in cells.iter().enumerate() {
            match cell.parse::<f64>() {
                Ok(v) if v.is_finite() => parsed.push(v),
                _ => {
                    bad = Some((col + 1, (*cell).to_string()));
                    break;
                }
            }
        }

        if let Some((column, value)) = bad {
            // A bad cell on the first non-empty line is a header: skip it.
            if expected.is_none() && data_rows == 0 {
                continue;
            }
            return Err(LoadError::BadCell {
                line: line_no,
                column,
                value,
            });
        }

        let width = *expected.get_or_insert(parsed.len());
        if parsed.len() != width {
            return Err(LoadError::Ragged {
                line: line_no,
                expected: width,
                found: parsed.len(),
            });
        }
        values.extend_from_slice(&parsed);
        data_rows += 1;
    }

    // `expected` is only set once a data row has parsed, so this also
    // covers header-only input.
    let arms = expected.filter(|&w| w > 0).ok_or(LoadError::Empty)?;
    debug_assert!(data_rows > 0);
    DenseTable::from_flat(arms, values).ok_or(LoadError::Empty)
}

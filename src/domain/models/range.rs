//! A1-notation ranges for the meal sheet.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// First remote row holding data; row 1 is the header.
pub const FIRST_DATA_ROW: usize = 2;

/// Remote row number of the record at `position` in a read result.
///
/// `None` when the position has no row number.
pub const fn row_for_position(position: usize) -> Option<usize> {
    position.checked_add(FIRST_DATA_ROW)
}

/// Why a configured range could not be used.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeParseError {
    /// Nothing before the `!`, or a column span with no `!` at all.
    #[error("range '{0}' has no sheet name (expected e.g. 'Sheet1!A:Z')")]
    MissingSheet(String),

    /// A sheet name with no columns after it.
    #[error("range '{0}' is missing a column span (expected e.g. 'Sheet1!A:Z')")]
    MissingColumns(String),

    /// Column letters that are empty, too long or not letters.
    #[error("range '{0}' has an invalid column reference")]
    InvalidColumns(String),
}

/// The configured scan range, e.g. `Sheet1!A:Z`.
///
/// Write ranges are derived from it so that appends, clears and
/// header writes address the same sheet and columns the reads scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRange {
    raw: String,
    sheet: String,
    first_column: String,
    last_column: String,
}

impl SheetRange {
    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    pub fn first_column(&self) -> &str {
        &self.first_column
    }

    pub fn last_column(&self) -> &str {
        &self.last_column
    }

    /// The range as configured, used for reads.
    pub fn scan(&self) -> &str {
        &self.raw
    }

    /// First cell of `row`, e.g. `Sheet1!A5`.
    pub fn row_anchor(&self, row: usize) -> String {
        format!("{}!{}{}", self.sheet, self.first_column, row)
    }

    /// Every configured column of `row`, e.g. `Sheet1!A5:Z5`.
    pub fn row_span(&self, row: usize) -> String {
        format!(
            "{}!{}{}:{}{}",
            self.sheet, self.first_column, row, self.last_column, row
        )
    }
}

/// Column letters of a cell or column reference (`A`, `AB`, `C7`).
fn column_letters(reference: &str) -> Option<String> {
    let letters: String = reference
        .chars()
        .take_while(char::is_ascii_alphabetic)
        .collect();
    let rest = &reference[letters.len()..];
    if letters.is_empty() || letters.len() > 3 || !rest.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(letters.to_ascii_uppercase())
}

impl FromStr for SheetRange {
    type Err = RangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let (sheet, columns) = match raw.rsplit_once('!') {
            Some((sheet, _)) if sheet.is_empty() => {
                return Err(RangeParseError::MissingSheet(raw.to_string()))
            }
            Some((_, "")) => return Err(RangeParseError::MissingColumns(raw.to_string())),
            Some(parts) => parts,
            // `A:Z` lacks a sheet; a bare `Sheet1` lacks columns.
            None if raw.contains(':') => {
                return Err(RangeParseError::MissingSheet(raw.to_string()))
            }
            None => return Err(RangeParseError::MissingColumns(raw.to_string())),
        };

        let (first, last) = columns.split_once(':').unwrap_or((columns, columns));
        let invalid = || RangeParseError::InvalidColumns(raw.to_string());
        let first_column = column_letters(first).ok_or_else(invalid)?;
        let last_column = column_letters(last).ok_or_else(invalid)?;

        Ok(Self {
            raw: raw.to_string(),
            sheet: sheet.to_string(),
            first_column,
            last_column,
        })
    }
}

impl fmt::Display for SheetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

//! In-memory grid transport for testing.
//!
//! Holds a single sheet as a sparse grid of cells and interprets the A1
//! ranges the store adapter sends. Every request is recorded, and
//! failures can be injected per request kind to reproduce partial
//! failures such as torn updates.
//!
//! Appends land at their anchor row rather than after the detected
//! table, so two appends computed from the same read overwrite each
//! other the way racing writers do.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::errors::GridFailure;
use crate::domain::models::{GridRow, SheetRange};
use crate::domain::ports::{GridTransport, SheetTarget};

/// The four request kinds a grid transport serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// Read a range.
    Get,
    /// Append rows after a table.
    Append,
    /// Clear a range.
    Clear,
    /// Overwrite cells from an anchor.
    Update,
}

/// A request as received by the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Which operation was requested.
    pub kind: RequestKind,
    /// The A1 range as sent.
    pub range: String,
    /// Row payload; empty for reads and clears.
    pub rows: Vec<GridRow>,
}

#[derive(Debug, Clone, Copy)]
enum Failure {
    Status(u16),
    Transport,
}

#[derive(Debug, Clone, Copy)]
struct InjectedFailure {
    failure: Failure,
    once: bool,
}

impl Failure {
    fn to_grid_failure(self) -> GridFailure {
        match self {
            Self::Status(code) => GridFailure::status(code, reason_phrase(code)),
            Self::Transport => GridFailure::Transport(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "connection reset by peer",
            ))),
        }
    }
}

fn reason_phrase(code: u16) -> &'static str {
    match code {
        400 => "Bad Request",
        403 => "Forbidden",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "",
    }
}

#[derive(Debug, Default)]
struct GridState {
    /// Row-major cells, `cells[row - 1][column]`.
    cells: Vec<Vec<String>>,
    requests: Vec<RecordedRequest>,
    failures: HashMap<RequestKind, InjectedFailure>,
}

impl GridState {
    fn cell_mut(&mut self, row: usize, column: usize) -> &mut String {
        if self.cells.len() < row {
            self.cells.resize_with(row, Vec::new);
        }
        let cells = &mut self.cells[row - 1];
        if cells.len() <= column {
            cells.resize_with(column + 1, String::new);
        }
        &mut cells[column]
    }

    fn put(&mut self, row: usize, column: usize, rows: &[GridRow]) {
        for (offset, grid_row) in rows.iter().enumerate() {
            for (index, value) in grid_row.cells().iter().enumerate() {
                *self.cell_mut(row + offset, column + index) = value.clone();
            }
        }
    }

    /// Rows within the column window, trimmed the way the values API
    /// trims them: no trailing empty cells, no trailing empty rows.
    fn snapshot(&self, first: usize, last: usize) -> Vec<GridRow> {
        let mut rows: Vec<GridRow> = self
            .cells
            .iter()
            .map(|cells| {
                let window = cells
                    .get(first..cells.len().min(last + 1))
                    .unwrap_or_default();
                let end = window
                    .iter()
                    .rposition(|c| !c.is_empty())
                    .map_or(0, |i| i + 1);
                GridRow::new(window[..end].to_vec())
            })
            .collect();
        while rows.last().is_some_and(GridRow::is_empty) {
            rows.pop();
        }
        rows
    }

    fn take_failure(&mut self, kind: RequestKind) -> Option<Failure> {
        let injected = *self.failures.get(&kind)?;
        if injected.once {
            self.failures.remove(&kind);
        }
        Some(injected.failure)
    }
}

/// Zero-based column index of a column reference (`A` = 0, `AA` = 26).
fn column_index(letters: &str) -> usize {
    letters
        .bytes()
        .fold(0, |acc, b| acc * 26 + usize::from(b.to_ascii_uppercase() - b'A' + 1))
        - 1
}

/// Split a cell reference such as `B12` into a column index and row.
fn parse_cell(reference: &str) -> Option<(usize, usize)> {
    let split = reference.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = reference.split_at(split);
    if letters.is_empty() || !letters.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    let row = digits.parse::<usize>().ok().filter(|r| *r > 0)?;
    Some((column_index(letters), row))
}

/// Cells addressed by `Sheet!A5` or `Sheet!A5:Z5`: (row, first column, last column).
fn parse_span(range: &str) -> Option<(usize, usize, Option<usize>)> {
    let (_, cells) = range.rsplit_once('!')?;
    match cells.split_once(':') {
        Some((start, end)) => {
            let (first, row) = parse_cell(start)?;
            let (last, _) = parse_cell(end)?;
            Some((row, first, Some(last)))
        }
        None => {
            let (first, row) = parse_cell(cells)?;
            Some((row, first, None))
        }
    }
}

fn malformed_range(range: &str) -> GridFailure {
    GridFailure::status(400, format!("Unable to parse range: {range}"))
}

/// A single sheet held in memory.
#[derive(Debug)]
pub struct InMemoryGrid {
    sheet_id: String,
    api_key: String,
    state: RwLock<GridState>,
}

impl InMemoryGrid {
    /// Create an empty grid that answers to `sheet_id` and accepts `api_key`.
    pub fn new(sheet_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            sheet_id: sheet_id.into(),
            api_key: api_key.into(),
            state: RwLock::new(GridState::default()),
        }
    }

    /// Seed the grid, starting at row 1 column A.
    pub fn with_rows(mut self, rows: &[&[&str]]) -> Self {
        let seeded: Vec<GridRow> = rows.iter().map(|r| r.iter().copied().collect()).collect();
        self.state.get_mut().put(1, 0, &seeded);
        self
    }

    /// Fail every request of `kind` with `status`.
    pub async fn fail_always(&self, kind: RequestKind, status: u16) {
        self.inject(kind, Failure::Status(status), false).await;
    }

    /// Fail the next request of `kind` with `status`.
    pub async fn fail_next(&self, kind: RequestKind, status: u16) {
        self.inject(kind, Failure::Status(status), true).await;
    }

    /// Fail the next request of `kind` as if the connection dropped.
    pub async fn fail_transport_next(&self, kind: RequestKind) {
        self.inject(kind, Failure::Transport, true).await;
    }

    async fn inject(&self, kind: RequestKind, failure: Failure, once: bool) {
        self.state
            .write()
            .await
            .failures
            .insert(kind, InjectedFailure { failure, once });
    }

    /// Every request received so far, in order.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.read().await.requests.clone()
    }

    /// Requests of one kind, in order.
    pub async fn requests_of(&self, kind: RequestKind) -> Vec<RecordedRequest> {
        self.state
            .read()
            .await
            .requests
            .iter()
            .filter(|r| r.kind == kind)
            .cloned()
            .collect()
    }

    /// Number of requests of one kind.
    pub async fn request_count(&self, kind: RequestKind) -> usize {
        self.requests_of(kind).await.len()
    }

    /// Cells of a 1-based row with trailing empty cells removed.
    pub async fn row(&self, row: usize) -> Vec<String> {
        let state = self.state.read().await;
        let mut cells = row
            .checked_sub(1)
            .and_then(|index| state.cells.get(index))
            .cloned()
            .unwrap_or_default();
        while cells.last().is_some_and(String::is_empty) {
            cells.pop();
        }
        cells
    }

    /// Record the request, then check credentials and injected failures.
    async fn admit(
        &self,
        target: SheetTarget<'_>,
        kind: RequestKind,
        range: &str,
        rows: &[GridRow],
    ) -> Result<tokio::sync::RwLockWriteGuard<'_, GridState>, GridFailure> {
        let mut state = self.state.write().await;
        state.requests.push(RecordedRequest {
            kind,
            range: range.to_string(),
            rows: rows.to_vec(),
        });

        if target.api_key != self.api_key {
            return Err(GridFailure::status(403, reason_phrase(403)));
        }
        if target.sheet_id != self.sheet_id {
            return Err(GridFailure::status(404, reason_phrase(404)));
        }
        if let Some(failure) = state.take_failure(kind) {
            return Err(failure.to_grid_failure());
        }
        Ok(state)
    }
}

#[async_trait]
impl GridTransport for InMemoryGrid {
    async fn get_values(
        &self,
        target: SheetTarget<'_>,
        range: &str,
    ) -> Result<Vec<GridRow>, GridFailure> {
        let state = self.admit(target, RequestKind::Get, range, &[]).await?;
        let scan = range
            .parse::<SheetRange>()
            .map_err(|_| malformed_range(range))?;
        Ok(state.snapshot(
            column_index(scan.first_column()),
            column_index(scan.last_column()),
        ))
    }

    async fn append_values(
        &self,
        target: SheetTarget<'_>,
        range: &str,
        rows: &[GridRow],
    ) -> Result<(), GridFailure> {
        let mut state = self.admit(target, RequestKind::Append, range, rows).await?;
        let (row, column, _) = parse_span(range).ok_or_else(|| malformed_range(range))?;
        state.put(row, column, rows);
        Ok(())
    }

    async fn clear_values(
        &self,
        target: SheetTarget<'_>,
        range: &str,
    ) -> Result<(), GridFailure> {
        let mut state = self.admit(target, RequestKind::Clear, range, &[]).await?;
        let (row, first, last) = parse_span(range).ok_or_else(|| malformed_range(range))?;
        if let Some(cells) = state.cells.get_mut(row - 1) {
            let last = last.unwrap_or(first).min(cells.len().saturating_sub(1));
            for cell in cells.iter_mut().take(last + 1).skip(first) {
                cell.clear();
            }
        }
        Ok(())
    }

    async fn update_values(
        &self,
        target: SheetTarget<'_>,
        range: &str,
        rows: &[GridRow],
    ) -> Result<(), GridFailure> {
        let mut state = self.admit(target, RequestKind::Update, range, rows).await?;
        let (row, column, _) = parse_span(range).ok_or_else(|| malformed_range(range))?;
        state.put(row, column, rows);
        Ok(())
    }
}

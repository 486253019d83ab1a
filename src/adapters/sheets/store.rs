//! Meal store backed by a spreadsheet.
//!
//! Row 1 of the sheet is a header; the meal at position `p` of a read
//! lives on row `p + 2`. Positions are only meaningful relative to the
//! most recent read.
//!
//! Two behaviours are inherent to how the store uses the values API and
//! are not reported as errors:
//!
//! - **Lost updates.** `append` reads the sheet to find the next free row
//!   before writing. Two appends that overlap both pick the same row and
//!   the later write wins.
//! - **Torn writes.** `update` clears the whole row span and then writes
//!   the new cells. If the write fails (or the process dies) after the
//!   clear, the row is left empty. The write failure itself is returned
//!   as [`Phase::WriteRow`].

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tracing::{debug, error, info, instrument, warn};

use crate::domain::errors::{Phase, StoreError, StoreResult};
use crate::domain::models::{
    meals_from_grid, row_for_position, GridRow, Meal, SheetRange, SheetsConfig,
};
use crate::domain::ports::{GridTransport, Initialization, MealStore, SheetTarget};

use super::client::SheetsHttpTransport;

/// Row the header is written to.
const HEADER_ROW: usize = 1;

/// Marks the store as loading until dropped.
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// [`MealStore`] over any [`GridTransport`].
pub struct SheetStore<T> {
    transport: T,
    config: SheetsConfig,
    range: SheetRange,
    loading: AtomicBool,
}

impl SheetStore<SheetsHttpTransport> {
    /// Create a store talking HTTP to `config.base_url`.
    pub fn connect(config: SheetsConfig) -> anyhow::Result<Self> {
        let transport = SheetsHttpTransport::new(&config.base_url)?;
        Ok(Self::new(transport, config)?)
    }
}

impl<T: GridTransport> SheetStore<T> {
    /// Create a store over `transport`.
    ///
    /// Fails if the configured range is not valid A1 notation. A missing
    /// API key or sheet id is not checked here; every operation checks it
    /// before sending anything.
    pub fn new(transport: T, config: SheetsConfig) -> StoreResult<Self> {
        let range = config
            .range
            .parse::<SheetRange>()
            .map_err(|e| StoreError::Configuration(e.to_string()))?;
        Ok(Self {
            transport,
            config,
            range,
            loading: AtomicBool::new(false),
        })
    }

    /// The transport requests go through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The configured range, already parsed.
    pub fn range(&self) -> &SheetRange {
        &self.range
    }

    fn target(&self) -> StoreResult<SheetTarget<'_>> {
        let api_key = self.config.api_key().ok_or_else(|| {
            StoreError::Configuration(
                "API key is not configured (set sheets.api_key or MEALSHEET_SHEETS__API_KEY)"
                    .to_string(),
            )
        })?;
        let sheet_id = self.config.sheet_id().ok_or_else(|| {
            StoreError::Configuration(
                "sheet id is not configured (set sheets.sheet_id or MEALSHEET_SHEETS__SHEET_ID)"
                    .to_string(),
            )
        })?;
        Ok(SheetTarget { sheet_id, api_key })
    }

    async fn fetch(&self, target: SheetTarget<'_>) -> StoreResult<Vec<Meal>> {
        let _loading = LoadingGuard::start(&self.loading);
        let grid = self
            .transport
            .get_values(target, self.range.scan())
            .await
            .map_err(|f| StoreError::from_failure(Phase::Read, f))?;
        let meals = meals_from_grid(&grid);
        debug!(rows = grid.len(), meals = meals.len(), "fetched meal grid");
        Ok(meals)
    }

    #[instrument(skip(self), fields(range = %self.range))]
    async fn read_all_inner(&self) -> StoreResult<Vec<Meal>> {
        let target = self.target()?;
        self.fetch(target).await
    }

    #[instrument(skip(self, meal), fields(meal = %meal.name))]
    async fn append_inner(&self, meal: &Meal) -> StoreResult<()> {
        let target = self.target()?;
        let meals = self.fetch(target).await?.len();
        let row = row_for_position(meals)
            .ok_or(StoreError::PositionOutOfRange { position: meals })?;
        let anchor = self.range.row_anchor(row);

        debug!(row, range = %anchor, "appending meal");
        self.transport
            .append_values(target, &anchor, &[GridRow::from(meal)])
            .await
            .map_err(|f| StoreError::from_failure(Phase::Append, f))?;

        info!(row, "meal added");
        Ok(())
    }

    #[instrument(skip(self, meal), fields(meal = %meal.name))]
    async fn update_inner(&self, position: usize, meal: &Meal) -> StoreResult<()> {
        let target = self.target()?;
        let row = row_for_position(position).ok_or(StoreError::PositionOutOfRange { position })?;

        debug!(row, "clearing row before update");
        self.transport
            .clear_values(target, &self.range.row_span(row))
            .await
            .map_err(|f| StoreError::from_failure(Phase::ClearRow, f))?;

        // From here on a failure leaves the row empty.
        self.transport
            .update_values(target, &self.range.row_anchor(row), &[GridRow::from(meal)])
            .await
            .map_err(|f| {
                warn!(row, "row was cleared but not rewritten; it is now empty");
                StoreError::from_failure(Phase::WriteRow, f)
            })?;

        info!(row, "meal updated");
        Ok(())
    }

    #[instrument(skip(self), fields(range = %self.range))]
    async fn ensure_initialized_inner(&self) -> StoreResult<Initialization> {
        let target = self.target()?;
        if !self.fetch(target).await?.is_empty() {
            return Ok(Initialization::AlreadyInitialized);
        }

        self.transport
            .update_values(
                target,
                &self.range.row_anchor(HEADER_ROW),
                &[GridRow::header()],
            )
            .await
            .map_err(|f| StoreError::from_failure(Phase::Initialize, f))?;

        info!("header row written");
        Ok(Initialization::HeaderWritten)
    }
}

fn log_failure(operation: &'static str, err: &StoreError) {
    error!(
        operation,
        phase = err.phase().map(|p| p.as_str()),
        status = err.status(),
        error = %err,
        "meal store operation failed"
    );
}

#[async_trait]
impl<T: GridTransport> MealStore for SheetStore<T> {
    async fn read_all(&self) -> StoreResult<Vec<Meal>> {
        self.read_all_inner()
            .await
            .inspect_err(|e| log_failure("read_all", e))
    }

    async fn append(&self, meal: &Meal) -> StoreResult<()> {
        self.append_inner(meal)
            .await
            .inspect_err(|e| log_failure("append", e))
    }

    async fn update(&self, position: usize, meal: &Meal) -> StoreResult<()> {
        self.update_inner(position, meal)
            .await
            .inspect_err(|e| log_failure("update", e))
    }

    async fn ensure_initialized(&self) -> StoreResult<Initialization> {
        self.ensure_initialized_inner()
            .await
            .inspect_err(|e| log_failure("ensure_initialized", e))
    }

    fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }
}

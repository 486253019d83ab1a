//! Meal store port.

use async_trait::async_trait;

use crate::domain::errors::StoreResult;
use crate::domain::models::Meal;

/// Outcome of [`MealStore::ensure_initialized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Initialization {
    /// The store read as empty and the header row was written.
    HeaderWritten,
    /// The store already held at least one meal; nothing was written.
    AlreadyInitialized,
}

/// Persistence interface for the meal list.
///
/// Meals are addressed by their 0-based position in the most recent
/// [`read_all`](MealStore::read_all). Calls are not coordinated with each
/// other: concurrent appends can pick the same row and overwrite one
/// another, and an update that fails after clearing its row leaves that
/// row empty.
#[async_trait]
pub trait MealStore: Send + Sync {
    /// Read every meal in the store, in row order.
    async fn read_all(&self) -> StoreResult<Vec<Meal>>;

    /// Add a meal after the last one.
    async fn append(&self, meal: &Meal) -> StoreResult<()>;

    /// Replace the meal at `position`.
    async fn update(&self, position: usize, meal: &Meal) -> StoreResult<()>;

    /// Write the header row if the store holds no meals.
    async fn ensure_initialized(&self) -> StoreResult<Initialization>;

    /// Whether a read is currently in flight.
    fn is_loading(&self) -> bool;
}

//! Grid transport port - moves rows between the adapter and the remote grid.

use std::fmt;

use async_trait::async_trait;

use crate::domain::errors::GridFailure;
use crate::domain::models::GridRow;

/// The sheet a request is addressed to and the key that opens it.
#[derive(Clone, Copy)]
pub struct SheetTarget<'a> {
    pub sheet_id: &'a str,
    pub api_key: &'a str,
}

impl fmt::Debug for SheetTarget<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetTarget")
            .field("sheet_id", &self.sheet_id)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Raw access to a grid store's value ranges.
///
/// One method per remote request kind. Implementations report failures
/// without interpretation; the store adapter decides what they mean.
#[async_trait]
pub trait GridTransport: Send + Sync {
    /// Fetch every row in `range`. A range with no values yields an empty grid.
    async fn get_values(
        &self,
        target: SheetTarget<'_>,
        range: &str,
    ) -> Result<Vec<GridRow>, GridFailure>;

    /// Append `rows` to the table anchored at `range`.
    async fn append_values(
        &self,
        target: SheetTarget<'_>,
        range: &str,
        rows: &[GridRow],
    ) -> Result<(), GridFailure>;

    /// Clear every cell in `range`.
    async fn clear_values(&self, target: SheetTarget<'_>, range: &str)
        -> Result<(), GridFailure>;

    /// Overwrite cells starting at `range` with `rows`.
    async fn update_values(
        &self,
        target: SheetTarget<'_>,
        range: &str,
        rows: &[GridRow],
    ) -> Result<(), GridFailure>;
}

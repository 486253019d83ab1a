//! Values API request and response models.
//!
//! These structs map to the JSON payloads of the spreadsheet values
//! endpoints. They are used internally by the HTTP transport and are not
//! part of the public domain model.

use serde::{Deserialize, Serialize};

use crate::domain::models::GridRow;

/// A block of cells returned by `GET .../values/{range}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    /// The range the values cover, in A1 notation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    /// `ROWS` or `COLUMNS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<String>,
    /// Absent when the range holds no data at all.
    #[serde(default)]
    pub values: Option<Vec<GridRow>>,
}

impl ValueRange {
    pub fn into_rows(self) -> Vec<GridRow> {
        self.values.unwrap_or_default()
    }
}

/// Request body for append and update writes.
#[derive(Debug, Serialize)]
pub struct ValuesRequest<'a> {
    pub values: &'a [GridRow],
}

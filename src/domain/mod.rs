//! Domain layer for the meal sheet store
//!
//! Meal records, grid rows and ranges, the store and transport ports,
//! and the errors they share.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{GridFailure, Phase, StoreError, StoreResult};

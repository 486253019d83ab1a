//! Spreadsheet-backed meal store.
//!
//! - `client`: HTTP transport for the values API
//! - `models`: values API JSON payloads
//! - `store`: the [`MealStore`](crate::domain::ports::MealStore) adapter

pub mod client;
pub mod models;
pub mod store;

pub use client::SheetsHttpTransport;
pub use store::SheetStore;

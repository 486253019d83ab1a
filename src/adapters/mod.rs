//! Adapters implementing the domain ports.
//!
//! - `sheets`: the spreadsheet values API
//! - `memory`: an in-memory grid for tests and local experiments

pub mod memory;
pub mod sheets;

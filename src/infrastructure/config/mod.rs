//! Layered configuration for the meal store.
//!
//! Defaults, `.mealsheet/*.yaml` files and `MEALSHEET_*` environment
//! variables merged with figment, then validated.

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};

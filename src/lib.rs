//! Mealsheet - meal list persistence over a spreadsheet values API
//!
//! Meals live one per row in a Google Sheets spreadsheet: the name in the
//! first column, ingredients in the columns after it, under a single
//! header row. The store reads, appends and replaces rows through the
//! values REST API using a plain API key.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): meal records, ranges, ports and errors
//! - **Adapters** (`adapters`): the HTTP values API store and an in-memory grid
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use mealsheet::{ConfigLoader, Meal, MealStore, SheetStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let store = SheetStore::connect(config.sheets)?;
//!     store.append(&Meal::new("Tacos", vec!["tortillas".into()])).await?;
//!     for meal in store.read_all().await? {
//!         println!("{}", meal.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use adapters::memory::InMemoryGrid;
pub use adapters::sheets::{SheetStore, SheetsHttpTransport};
pub use domain::errors::{GridFailure, Phase, StoreError, StoreResult};
pub use domain::models::{Config, GridRow, LoggingConfig, Meal, SheetRange, SheetsConfig};
pub use domain::ports::{GridTransport, Initialization, MealStore, SheetTarget};
pub use infrastructure::config::{ConfigError, ConfigLoader};

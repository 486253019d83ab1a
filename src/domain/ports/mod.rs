//! Port trait definitions (Hexagonal Architecture)
//!
//! - MealStore: the meal list as seen by front ends
//! - GridTransport: raw value-range requests against a grid store

pub mod grid_transport;
pub mod meal_store;

pub use grid_transport::{GridTransport, SheetTarget};
pub use meal_store::{Initialization, MealStore};

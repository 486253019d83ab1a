pub mod config;
pub mod meal;
pub mod range;

pub use config::{Config, LogFormat, LoggingConfig, RotationPolicy, SheetsConfig};
pub use meal::{meals_from_grid, GridRow, Meal, HEADER_INGREDIENT_COLUMNS, NAME_HEADER};
pub use range::{row_for_position, RangeParseError, SheetRange, FIRST_DATA_ROW};

//! Display primitives shared by CLI command output.

pub mod table;

pub use table::*;

/// Render a success action result.
pub fn action_success(message: &str) -> String {
    format!("\u{2713} {message}")
}

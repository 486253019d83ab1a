//! Command-line front end for the meal store.

pub mod commands;
pub mod display;
pub mod output;
mod types;

use std::path::Path;

use anyhow::Result;

use crate::domain::errors::StoreError;
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;

pub use types::{Cli, Commands};

/// Load configuration from `path`, or from `.mealsheet/` when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Render a command failure as printed by [`handle_error`].
pub fn format_error(err: &anyhow::Error, json_mode: bool) -> String {
    if json_mode {
        let store_error = err.downcast_ref::<StoreError>();
        let body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
            "phase": store_error.and_then(StoreError::phase).map(|p| p.as_str()),
            "status": store_error.and_then(StoreError::status),
        });
        serde_json::to_string_pretty(&body).unwrap_or_default()
    } else {
        format!("Error: {err:#}")
    }
}

/// Print `err` and exit with status 1.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        println!("{}", format_error(&err, true));
    } else {
        eprintln!("{}", format_error(&err, false));
    }
    std::process::exit(1);
}

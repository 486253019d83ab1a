//! CLI command implementations.
//!
//! Each command exposes `run`, which talks to a [`MealStore`] and returns
//! its output value, and `execute`, which prints that value.
//!
//! [`MealStore`]: crate::domain::ports::MealStore

pub mod add;
pub mod init;
pub mod list;
pub mod update;

use anyhow::{bail, Result};

use crate::domain::models::Meal;

/// Build a meal from command-line input.
///
/// The name and every ingredient are trimmed, blank ingredients are
/// dropped, and a blank name is rejected.
pub fn meal_from_args(name: &str, ingredients: &[String]) -> Result<Meal> {
    let name = name.trim();
    if name.is_empty() {
        bail!("Meal name cannot be empty");
    }

    let ingredients = ingredients
        .iter()
        .map(|ingredient| ingredient.trim())
        .filter(|ingredient| !ingredient.is_empty())
        .map(str::to_string)
        .collect();

    Ok(Meal::new(name, ingredients))
}

//! Implementation of the `mealsheet list` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::display::{list_table, render_list};
use crate::cli::output::{output, truncate, CommandOutput};
use crate::domain::models::Meal;
use crate::domain::ports::MealStore;

const INGREDIENTS_WIDTH: usize = 60;

#[derive(Debug, Serialize)]
pub struct MealEntry {
    pub position: usize,
    pub name: String,
    pub ingredients: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MealListOutput {
    pub meals: Vec<MealEntry>,
    pub total: usize,
}

impl From<Vec<Meal>> for MealListOutput {
    fn from(meals: Vec<Meal>) -> Self {
        let meals: Vec<MealEntry> = meals
            .into_iter()
            .enumerate()
            .map(|(position, meal)| MealEntry {
                position,
                name: meal.name,
                ingredients: meal.ingredients,
            })
            .collect();
        let total = meals.len();
        Self { meals, total }
    }
}

impl CommandOutput for MealListOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["#", "name", "ingredients"]);
        for meal in &self.meals {
            table.add_row(vec![
                meal.position.to_string(),
                meal.name.clone(),
                truncate(&meal.ingredients.join(", "), INGREDIENTS_WIDTH),
            ]);
        }
        render_list("meal", &table, self.total)
    }
}

pub async fn run(store: &dyn MealStore) -> Result<MealListOutput> {
    let meals = store.read_all().await?;
    Ok(MealListOutput::from(meals))
}

pub async fn execute(store: &dyn MealStore, json_mode: bool) -> Result<()> {
    let result = run(store).await?;
    output(&result, json_mode);
    Ok(())
}

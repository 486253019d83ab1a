//! Implementation of the `mealsheet update` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::meal_from_args;
use crate::cli::display::action_success;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Meal;
use crate::domain::ports::MealStore;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Position of the meal as shown by `list`
    pub position: usize,

    /// New meal name
    pub name: String,

    /// New ingredients, one per argument
    pub ingredients: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateOutput {
    pub success: bool,
    pub position: usize,
    pub meal: Meal,
}

impl CommandOutput for UpdateOutput {
    fn to_human(&self) -> String {
        action_success(&format!(
            "Updated meal {} to {}",
            self.position, self.meal.name
        ))
    }
}

pub async fn run(args: UpdateArgs, store: &dyn MealStore) -> Result<UpdateOutput> {
    let meal = meal_from_args(&args.name, &args.ingredients)?;
    store.update(args.position, &meal).await?;
    Ok(UpdateOutput {
        success: true,
        position: args.position,
        meal,
    })
}

pub async fn execute(args: UpdateArgs, store: &dyn MealStore, json_mode: bool) -> Result<()> {
    let result = run(args, store).await?;
    output(&result, json_mode);
    Ok(())
}

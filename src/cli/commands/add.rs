//! Implementation of the `mealsheet add` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::meal_from_args;
use crate::cli::display::action_success;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Meal;
use crate::domain::ports::MealStore;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Meal name
    pub name: String,

    /// Ingredients, one per argument
    pub ingredients: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AddOutput {
    pub success: bool,
    pub meal: Meal,
}

impl CommandOutput for AddOutput {
    fn to_human(&self) -> String {
        let mut message = format!("Added {}", self.meal.name);
        if !self.meal.ingredients.is_empty() {
            message.push_str(&format!(" ({})", self.meal.ingredients.join(", ")));
        }
        action_success(&message)
    }
}

pub async fn run(args: AddArgs, store: &dyn MealStore) -> Result<AddOutput> {
    let meal = meal_from_args(&args.name, &args.ingredients)?;
    store.append(&meal).await?;
    Ok(AddOutput {
        success: true,
        meal,
    })
}

pub async fn execute(args: AddArgs, store: &dyn MealStore, json_mode: bool) -> Result<()> {
    let result = run(args, store).await?;
    output(&result, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryGrid, RequestKind};
    use crate::adapters::sheets::SheetStore;
    use crate::domain::models::SheetsConfig;

    fn store(rows: &[&[&str]]) -> SheetStore<InMemoryGrid> {
        let config = SheetsConfig {
            api_key: Some("key".to_string()),
            sheet_id: Some("sheet".to_string()),
            ..Default::default()
        };
        SheetStore::new(InMemoryGrid::new("sheet", "key").with_rows(rows), config).unwrap()
    }

    #[tokio::test]
    async fn test_add_trims_and_appends() {
        let store = store(&[&["Meal Name"], &["Tacos"]]);
        let args = AddArgs {
            name: " Curry ".to_string(),
            ingredients: vec!["rice ".to_string(), String::new()],
        };

        let result = run(args, &store).await.unwrap();
        assert_eq!(result.meal, Meal::new("Curry", vec!["rice".to_string()]));
        assert_eq!(result.to_human(), "\u{2713} Added Curry (rice)");
        assert_eq!(store.transport().row(3).await, vec!["Curry", "rice"]);
    }

    #[tokio::test]
    async fn test_add_blank_name_sends_nothing() {
        let store = store(&[]);
        let args = AddArgs {
            name: "  ".to_string(),
            ingredients: vec!["rice".to_string()],
        };

        assert!(run(args, &store).await.is_err());
        assert!(store.transport().requests().await.is_empty());
        assert_eq!(store.transport().request_count(RequestKind::Append).await, 0);
    }
}

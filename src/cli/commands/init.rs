//! Implementation of the `mealsheet init` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::display::action_success;
use crate::cli::output::{output, CommandOutput};
use crate::domain::ports::{Initialization, MealStore};

#[derive(Debug, Serialize)]
pub struct InitOutput {
    pub success: bool,
    pub header_written: bool,
    pub message: String,
}

impl From<Initialization> for InitOutput {
    fn from(outcome: Initialization) -> Self {
        let (header_written, message) = match outcome {
            Initialization::HeaderWritten => (true, "Header row written"),
            Initialization::AlreadyInitialized => (false, "Sheet already has meals; nothing written"),
        };
        Self {
            success: true,
            header_written,
            message: message.to_string(),
        }
    }
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        if self.header_written {
            action_success(&self.message)
        } else {
            self.message.clone()
        }
    }
}

pub async fn run(store: &dyn MealStore) -> Result<InitOutput> {
    let outcome = store.ensure_initialized().await?;
    Ok(InitOutput::from(outcome))
}

pub async fn execute(store: &dyn MealStore, json_mode: bool) -> Result<()> {
    let result = run(store).await?;
    output(&result, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryGrid;
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
    async fn test_init_empty_sheet_writes_header() {
        let store = store(&[]);
        let result = run(&store).await.unwrap();
        assert!(result.header_written);
        assert_eq!(store.transport().row(1).await[0], "Meal Name");
    }

    #[tokio::test]
    async fn test_init_existing_meals_is_noop() {
        let store = store(&[&["Meal Name"], &["Tacos"]]);
        let result = run(&store).await.unwrap();
        assert!(!result.header_written);
        assert_eq!(result.to_json()["header_written"], false);
    }
}

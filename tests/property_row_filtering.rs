use mealsheet::domain::models::{meals_from_grid, GridRow};
use proptest::prelude::*;

fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[a-z]{1,8}",
        " [a-z]{1,6} ",
    ]
}

fn grid() -> impl Strategy<Value = Vec<GridRow>> {
    prop::collection::vec(prop::collection::vec(cell(), 0..6), 0..12)
        .prop_map(|rows| rows.into_iter().map(GridRow::new).collect())
}

proptest! {
    /// Property: Every returned meal has a non-blank name and no blank ingredients
    #[test]
    fn prop_meals_never_carry_blank_cells(rows in grid()) {
        for meal in meals_from_grid(&rows) {
            prop_assert!(!meal.name.trim().is_empty());
            for ingredient in &meal.ingredients {
                prop_assert!(!ingredient.is_empty());
                prop_assert_eq!(ingredient.trim(), ingredient.as_str());
            }
        }
    }

    /// Property: One meal per data row with a non-blank first cell, in row order
    #[test]
    fn prop_meal_count_matches_named_rows(rows in grid()) {
        let meals = meals_from_grid(&rows);
        let named: Vec<String> = rows
            .iter()
            .skip(1)
            .filter_map(|row| row.cells().first())
            .filter(|name| !name.trim().is_empty())
            .map(|name| name.trim().to_string())
            .collect();

        prop_assert_eq!(meals.len(), named.len());
        for (meal, name) in meals.iter().zip(&named) {
            prop_assert_eq!(&meal.name, name);
        }
    }

    /// Property: The header row never becomes a meal
    #[test]
    fn prop_first_row_is_ignored(header in prop::collection::vec(cell(), 0..6)) {
        let rows = vec![GridRow::new(header)];
        prop_assert!(meals_from_grid(&rows).is_empty());
    }
}

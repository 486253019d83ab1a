//! Meal records and the raw grid rows they are stored as.

use serde::{Deserialize, Serialize};

/// Label of the name column in the header row.
pub const NAME_HEADER: &str = "Meal Name";

/// Number of "Ingredient N" labels written into the header row.
pub const HEADER_INGREDIENT_COLUMNS: usize = 5;

/// A meal entry: a name plus an ordered list of ingredients.
///
/// Reads only ever produce meals with a non-blank name and non-blank
/// ingredients. Meals built by callers are written as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    /// Display name, stored in the first column.
    pub name: String,
    /// Ingredients in column order.
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl Meal {
    /// Build a meal from a name and its ingredients.
    pub fn new(name: impl Into<String>, ingredients: Vec<String>) -> Self {
        Self {
            name: name.into(),
            ingredients,
        }
    }
}

/// One row of cells as exchanged with the remote grid.
///
/// Column 0 holds the meal name, columns 1.. hold ingredients. This is
/// the only place untyped rows live; everything past the store adapter
/// works with [`Meal`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridRow(pub Vec<String>);

impl GridRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self(cells)
    }

    /// The header row written into an empty sheet.
    pub fn header() -> Self {
        std::iter::once(NAME_HEADER.to_string())
            .chain((1..=HEADER_INGREDIENT_COLUMNS).map(|n| format!("Ingredient {n}")))
            .collect()
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert a data row into a meal.
    ///
    /// Returns `None` when the first cell is missing or blank. Ingredient
    /// cells are trimmed and blank ones dropped, wherever they sit.
    pub fn to_meal(&self) -> Option<Meal> {
        let name = self.0.first()?.trim();
        if name.is_empty() {
            return None;
        }

        let ingredients = self.0[1..]
            .iter()
            .map(|cell| cell.trim())
            .filter(|cell| !cell.is_empty())
            .map(str::to_string)
            .collect();

        Some(Meal::new(name, ingredients))
    }
}

impl From<&Meal> for GridRow {
    fn from(meal: &Meal) -> Self {
        let mut cells = Vec::with_capacity(meal.ingredients.len() + 1);
        cells.push(meal.name.clone());
        cells.extend(meal.ingredients.iter().cloned());
        Self(cells)
    }
}

impl<S: Into<String>> FromIterator<S> for GridRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Convert a fetched grid into meals.
///
/// The first row is a header and is skipped without inspection.
pub fn meals_from_grid(rows: &[GridRow]) -> Vec<Meal> {
    rows.iter().skip(1).filter_map(GridRow::to_meal).collect()
}

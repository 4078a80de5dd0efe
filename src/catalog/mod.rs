// Recipe catalog: an immutable, in-memory table loaded once at startup.
// Replacing the dataset means constructing a new Catalog and swapping the
// handle; nothing mutates a Catalog in place.

pub mod loader;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Re-exports
pub use loader::load_catalog;

/// Number of nutrition features per recipe.
pub const NUTRITION_DIMS: usize = 9;

/// Nutrition column names, in vector order.
pub const NUTRITION_COLUMNS: [&str; NUTRITION_DIMS] = [
    "Calories",
    "FatContent",
    "SaturatedFatContent",
    "CholesterolContent",
    "SodiumContent",
    "CarbohydrateContent",
    "FiberContent",
    "SugarContent",
    "ProteinContent",
];

/// Nutrition features, positionally aligned to [`NUTRITION_COLUMNS`].
pub type NutritionVector = [f64; NUTRITION_DIMS];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub cook_time: String,
    pub prep_time: String,
    pub total_time: String,
    pub ingredient_parts: Vec<String>,
    pub instructions: Vec<String>,
    pub nutrition: NutritionVector,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    loaded_at: DateTime<Utc>,
    rows_skipped: usize,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self::with_skipped(recipes, 0)
    }

    pub(crate) fn with_skipped(recipes: Vec<Recipe>, rows_skipped: usize) -> Self {
        Catalog {
            recipes,
            loaded_at: Utc::now(),
            rows_skipped,
        }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Rows dropped during loading (missing or malformed nutrition values).
    pub fn rows_skipped(&self) -> usize {
        self.rows_skipped
    }

    /// Per-column nutrition summary over the whole catalog.
    pub fn nutrition_summary(&self) -> Vec<ColumnSummary> {
        NUTRITION_COLUMNS
            .iter()
            .enumerate()
            .map(|(col, name)| {
                let mut min = f64::INFINITY;
                let mut max = f64::NEG_INFINITY;
                let mut sum = 0.0;
                for recipe in &self.recipes {
                    let value = recipe.nutrition[col];
                    min = min.min(value);
                    max = max.max(value);
                    sum += value;
                }
                let mean = if self.recipes.is_empty() {
                    0.0
                } else {
                    sum / self.recipes.len() as f64
                };
                ColumnSummary {
                    name: name.to_string(),
                    mean,
                    min: if min.is_finite() { min } else { 0.0 },
                    max: if max.is_finite() { max } else { 0.0 },
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(name: &str, calories: f64, protein: f64) -> Recipe {
        let mut nutrition = [0.0; NUTRITION_DIMS];
        nutrition[0] = calories;
        nutrition[8] = protein;
        Recipe {
            name: name.to_string(),
            cook_time: "PT30M".to_string(),
            prep_time: "PT10M".to_string(),
            total_time: "PT40M".to_string(),
            ingredient_parts: vec!["flour".to_string()],
            instructions: vec!["Mix.".to_string()],
            nutrition,
        }
    }

    #[test]
    fn test_nutrition_summary() {
        let catalog = Catalog::new(vec![recipe("a", 100.0, 5.0), recipe("b", 300.0, 15.0)]);
        let summary = catalog.nutrition_summary();

        assert_eq!(summary.len(), NUTRITION_DIMS);
        assert_eq!(summary[0].name, "Calories");
        assert_eq!(summary[0].mean, 200.0);
        assert_eq!(summary[0].min, 100.0);
        assert_eq!(summary[0].max, 300.0);
        assert_eq!(summary[8].mean, 10.0);
    }

    #[test]
    fn test_empty_catalog_summary() {
        let catalog = Catalog::new(Vec::new());
        let summary = catalog.nutrition_summary();
        assert!(summary.iter().all(|c| c.mean == 0.0));
    }
}

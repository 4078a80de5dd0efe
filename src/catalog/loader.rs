// CSV catalog loading.
//
// The dataset is a Food.com-style export: descriptive columns plus nine
// nutrition columns. List-valued columns (ingredients, instructions) are
// stored as R character vectors, e.g. c("flour", "sugar").

use crate::catalog::{Catalog, NutritionVector, Recipe, NUTRITION_DIMS};
use crate::error::{Error, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "CookTime", default)]
    cook_time: String,
    #[serde(rename = "PrepTime", default)]
    prep_time: String,
    #[serde(rename = "TotalTime", default)]
    total_time: String,
    #[serde(rename = "RecipeIngredientParts", default)]
    ingredient_parts: String,
    #[serde(rename = "RecipeInstructions", default)]
    instructions: String,
    #[serde(rename = "Calories")]
    calories: String,
    #[serde(rename = "FatContent")]
    fat: String,
    #[serde(rename = "SaturatedFatContent")]
    saturated_fat: String,
    #[serde(rename = "CholesterolContent")]
    cholesterol: String,
    #[serde(rename = "SodiumContent")]
    sodium: String,
    #[serde(rename = "CarbohydrateContent")]
    carbohydrate: String,
    #[serde(rename = "FiberContent")]
    fiber: String,
    #[serde(rename = "SugarContent")]
    sugar: String,
    #[serde(rename = "ProteinContent")]
    protein: String,
}

impl CsvRecord {
    /// Nutrition values in vector order, or None when any value is
    /// missing, unparseable, negative or non-finite.
    fn nutrition(&self) -> Option<NutritionVector> {
        let raw = [
            &self.calories,
            &self.fat,
            &self.saturated_fat,
            &self.cholesterol,
            &self.sodium,
            &self.carbohydrate,
            &self.fiber,
            &self.sugar,
            &self.protein,
        ];

        let mut nutrition = [0.0; NUTRITION_DIMS];
        for (slot, value) in nutrition.iter_mut().zip(raw) {
            let parsed: f64 = value.trim().parse().ok()?;
            if !parsed.is_finite() || parsed < 0.0 {
                return None;
            }
            *slot = parsed;
        }
        Some(nutrition)
    }
}

/// Load the recipe catalog from a CSV dataset.
///
/// Rows with unusable nutrition values are skipped with a warning; a
/// dataset yielding zero usable rows is an error.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let quoted = Regex::new(r#""((?:[^"\\]|\\.)*)""#)
        .map_err(|e| Error::Catalog(format!("Failed to compile list pattern: {e}")))?;

    let mut reader = csv::Reader::from_path(path)?;
    let mut recipes = Vec::new();
    let mut skipped = 0usize;

    for (row, result) in reader.deserialize::<CsvRecord>().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping row {}: {}", row + 1, e);
                skipped += 1;
                continue;
            }
        };

        let Some(nutrition) = record.nutrition() else {
            warn!(
                "Skipping row {} ({}): unusable nutrition values",
                row + 1,
                record.name
            );
            skipped += 1;
            continue;
        };

        recipes.push(Recipe {
            name: record.name,
            cook_time: record.cook_time,
            prep_time: record.prep_time,
            total_time: record.total_time,
            ingredient_parts: parse_r_list(&record.ingredient_parts, &quoted),
            instructions: parse_r_list(&record.instructions, &quoted),
            nutrition,
        });
    }

    if recipes.is_empty() {
        return Err(Error::Catalog(format!(
            "No usable recipes in {}",
            path.display()
        )));
    }

    info!(
        "Loaded catalog from {}: {} recipes ({} rows skipped)",
        path.display(),
        recipes.len(),
        skipped
    );

    Ok(Catalog::with_skipped(recipes, skipped))
}

/// Parse an R character vector like c("flour", "sugar") into its elements.
///
/// Bare strings become a single-element list; NA and character(0) become
/// an empty list.
fn parse_r_list(raw: &str, quoted: &Regex) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "NA" || trimmed == "character(0)" {
        return Vec::new();
    }

    if trimmed.contains('"') {
        return quoted
            .captures_iter(trimmed)
            .map(|c| c[1].replace("\\\"", "\""))
            .filter(|s| !s.is_empty())
            .collect();
    }

    vec![trimmed.to_string()]
}

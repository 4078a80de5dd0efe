use crate::api::{self, models::PredictionRequest};
use crate::catalog::{load_catalog, Catalog};
use crate::config::Settings;
use crate::engine::{RecommendParams, Recommender};
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

fn dataset_path(settings: &Settings, override_path: Option<PathBuf>) -> PathBuf {
    override_path.unwrap_or_else(|| settings.catalog.dataset_path.clone())
}

/// Recommend recipes for a nutrition target and print them as JSON
pub fn recommend(
    settings: &Settings,
    nutrition: Vec<f64>,
    ingredients: Option<String>,
    neighbors: Option<usize>,
    distances: bool,
    dataset: Option<PathBuf>,
) -> Result<()> {
    let catalog = load_catalog(dataset_path(settings, dataset))?;
    let recommender = Recommender::new(Arc::new(catalog), settings.engine.normalization);

    let request = PredictionRequest {
        nutrition_input: nutrition,
        ingredients,
        params: Some(RecommendParams {
            n_neighbors: neighbors.unwrap_or(settings.engine.default_neighbors),
            return_distance: distances,
        }),
    };

    let response = api::predict(&recommender, settings.engine.max_neighbors, &request)?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

/// Print catalog statistics
pub fn stats(settings: &Settings, dataset: Option<PathBuf>) -> Result<()> {
    let path = dataset_path(settings, dataset);
    let catalog = load_catalog(&path)?;

    println!("Catalog: {}", path.display());
    println!("  Recipes: {}", catalog.len());
    println!("  Rows skipped: {}", catalog.rows_skipped());
    println!("  Loaded at: {}", catalog.loaded_at().to_rfc3339());
    println!("\nNutrition columns:");
    println!(
        "  {:<22} {:>12} {:>12} {:>12}",
        "column", "mean", "min", "max"
    );
    for column in catalog.nutrition_summary() {
        println!(
            "  {:<22} {:>12.2} {:>12.2} {:>12.2}",
            column.name, column.mean, column.min, column.max
        );
    }

    Ok(())
}

/// Validate a dataset file and report what would be loaded
pub fn validate(path: &Path) -> Result<()> {
    let catalog: Catalog = load_catalog(path)?;
    info!("Dataset validation succeeded for {}", path.display());

    println!("\u{2713} Valid dataset: {}", path.display());
    println!("  Usable recipes: {}", catalog.len());
    if catalog.rows_skipped() > 0 {
        println!(
            "  Skipped rows: {} (missing or malformed nutrition values)",
            catalog.rows_skipped()
        );
    }

    Ok(())
}

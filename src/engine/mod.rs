// Content-based recipe matching engine.
//
// Pipeline per request: ingredient filter -> z-score normalization fitted
// on the candidate set -> brute-force nearest-neighbor search. Stateless
// per call; the catalog is the only shared (read-only) resource.

pub mod filter;
pub mod knn;
pub mod normalize;

use crate::catalog::{Catalog, NutritionVector, NUTRITION_DIMS};
use crate::config::NormalizationMode;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

// Re-exports
pub use filter::parse_terms;
pub use normalize::Normalizer;

/// Tuning parameters for a recommendation query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendParams {
    #[serde(default = "default_neighbors")]
    pub n_neighbors: usize,
    #[serde(default)]
    pub return_distance: bool,
}

fn default_neighbors() -> usize {
    5
}

impl Default for RecommendParams {
    fn default() -> Self {
        RecommendParams {
            n_neighbors: default_neighbors(),
            return_distance: false,
        }
    }
}

/// A matched recipe: catalog index plus normalized-space distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    pub index: usize,
    pub distance: f64,
}

/// Recommendation engine over a shared recipe catalog.
pub struct Recommender {
    catalog: Arc<Catalog>,
    mode: NormalizationMode,
    global: Option<Normalizer>,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>, mode: NormalizationMode) -> Self {
        let global = match mode {
            NormalizationMode::Global if !catalog.is_empty() => {
                let rows: Vec<NutritionVector> =
                    catalog.recipes().iter().map(|r| r.nutrition).collect();
                Some(Normalizer::fit(&rows))
            }
            _ => None,
        };

        Recommender {
            catalog,
            mode,
            global,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Find the best-matching recipes for a nutrition target.
    ///
    /// `nutrition` must hold exactly nine finite values; `terms` are
    /// pre-normalized ingredient terms (see [`parse_terms`]). An empty
    /// candidate set is a valid result, not an error.
    pub fn recommend(
        &self,
        nutrition: &[f64],
        terms: &[String],
        params: &RecommendParams,
    ) -> Result<Vec<Match>> {
        let query = validate_query(nutrition)?;
        if params.n_neighbors == 0 {
            return Err(Error::InvalidQuery(
                "n_neighbors must be at least 1".to_string(),
            ));
        }

        let candidates = filter::filter(&self.catalog, terms);
        debug!(
            "Recommend: {} candidates of {} recipes ({} terms, k={})",
            candidates.len(),
            self.catalog.len(),
            terms.len(),
            params.n_neighbors
        );

        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<NutritionVector> = candidates
            .iter()
            .filter_map(|&index| self.catalog.get(index).map(|r| r.nutrition))
            .collect();

        let normalizer = match (self.mode, &self.global) {
            (NormalizationMode::Global, Some(normalizer)) => normalizer.clone(),
            _ => Normalizer::fit(&rows),
        };

        let normalized: Vec<NutritionVector> =
            rows.iter().map(|row| normalizer.transform(row)).collect();
        let normalized_query = normalizer.transform(&query);

        let matches = knn::search(&normalized, &normalized_query, params.n_neighbors)
            .into_iter()
            .map(|(position, distance)| Match {
                index: candidates[position],
                distance,
            })
            .collect();

        Ok(matches)
    }
}

/// Re-assert the query invariant: exactly nine finite values.
fn validate_query(nutrition: &[f64]) -> Result<NutritionVector> {
    if nutrition.len() != NUTRITION_DIMS {
        return Err(Error::InvalidQuery(format!(
            "nutrition_input must have exactly {} items, got {}",
            NUTRITION_DIMS,
            nutrition.len()
        )));
    }

    let mut query = [0.0; NUTRITION_DIMS];
    for (slot, &value) in query.iter_mut().zip(nutrition) {
        if !value.is_finite() {
            return Err(Error::InvalidQuery(
                "nutrition_input values must be finite".to_string(),
            ));
        }
        *slot = value;
    }
    Ok(query)
}

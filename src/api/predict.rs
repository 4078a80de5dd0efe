use crate::api::models::{PredictionRequest, PredictionResponse, RecipeView};
use crate::engine::{parse_terms, Match, RecommendParams, Recommender};
use crate::error::{Error, Result};
use tracing::debug;

/// Handle a recommendation request against the shared catalog.
///
/// Owns boundary validation: nine finite, non-negative nutrition values
/// and a neighbor count between 1 and `max_neighbors`. An empty match
/// list is a valid response with `output: []`.
pub fn predict(
    recommender: &Recommender,
    max_neighbors: usize,
    request: &PredictionRequest,
) -> Result<PredictionResponse> {
    debug!(
        "Predict request: {} nutrition values, ingredients={:?}",
        request.nutrition_input.len(),
        request.ingredients
    );

    if request.nutrition_input.iter().any(|v| *v < 0.0) {
        return Err(Error::InvalidQuery(
            "nutrition_input values must be non-negative".to_string(),
        ));
    }

    let mut params = request.params.clone().unwrap_or_default();
    if params.n_neighbors == 0 {
        return Err(Error::InvalidQuery(
            "n_neighbors must be at least 1".to_string(),
        ));
    }
    params.n_neighbors = params.n_neighbors.min(max_neighbors);

    let terms = request
        .ingredients
        .as_deref()
        .map(parse_terms)
        .unwrap_or_default();

    let matches = recommender.recommend(&request.nutrition_input, &terms, &params)?;
    let views = format_matches(recommender, &matches, params.return_distance);

    Ok(PredictionResponse {
        output: Some(views),
    })
}

/// Project matches into typed recipe views, attaching distances on demand.
pub fn format_matches(
    recommender: &Recommender,
    matches: &[Match],
    return_distance: bool,
) -> Vec<RecipeView> {
    matches
        .iter()
        .filter_map(|m| {
            recommender.catalog().get(m.index).map(|recipe| {
                let distance = return_distance.then_some(m.distance);
                RecipeView::from_recipe(recipe, distance)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, NutritionVector, Recipe, NUTRITION_DIMS};
    use crate::config::NormalizationMode;
    use std::sync::Arc;

    fn recipe(name: &str, calories: f64, parts: &[&str]) -> Recipe {
        let mut nutrition: NutritionVector = [0.0; NUTRITION_DIMS];
        nutrition[0] = calories;
        Recipe {
            name: name.to_string(),
            cook_time: String::new(),
            prep_time: String::new(),
            total_time: String::new(),
            ingredient_parts: parts.iter().map(|p| p.to_string()).collect(),
            instructions: Vec::new(),
            nutrition,
        }
    }

    fn recommender() -> Recommender {
        let catalog = Catalog::new(vec![
            recipe("r1", 500.0, &["chicken"]),
            recipe("r2", 520.0, &["beef"]),
        ]);
        Recommender::new(Arc::new(catalog), NormalizationMode::PerRequest)
    }

    fn request(json: &str) -> PredictionRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_predict_happy_path() {
        let response = predict(
            &recommender(),
            20,
            &request(r#"{"nutrition_input": [500,0,0,0,0,0,0,0,0]}"#),
        )
        .unwrap();

        let output = response.output.unwrap();
        assert_eq!(output.len(), 2);
        assert_eq!(output[0].name, "r1");
        assert!(output[0].distance.is_none());
    }

    #[test]
    fn test_predict_rejects_wrong_arity() {
        let result = predict(
            &recommender(),
            20,
            &request(r#"{"nutrition_input": [1,2,3]}"#),
        );
        assert!(matches!(result, Err(Error::InvalidQuery(_))));
    }

    #[test]
    fn test_predict_rejects_negative_values() {
        let result = predict(
            &recommender(),
            20,
            &request(r#"{"nutrition_input": [-1,0,0,0,0,0,0,0,0]}"#),
        );
        assert!(matches!(result, Err(Error::InvalidQuery(_))));
    }

    #[test]
    fn test_predict_unmatched_ingredients_yield_empty_output() {
        let response = predict(
            &recommender(),
            20,
            &request(
                r#"{"nutrition_input": [500,0,0,0,0,0,0,0,0], "ingredients": "salmon"}"#,
            ),
        )
        .unwrap();

        assert_eq!(response.output, Some(Vec::new()));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["output"], serde_json::json!([]));
    }

    #[test]
    fn test_predict_caps_neighbors() {
        let response = predict(
            &recommender(),
            1,
            &request(r#"{"nutrition_input": [500,0,0,0,0,0,0,0,0], "params": {"n_neighbors": 50}}"#),
        )
        .unwrap();
        assert_eq!(response.output.unwrap().len(), 1);
    }

    #[test]
    fn test_predict_attaches_distances_when_requested() {
        let response = predict(
            &recommender(),
            20,
            &request(
                r#"{"nutrition_input": [500,0,0,0,0,0,0,0,0], "params": {"return_distance": true}}"#,
            ),
        )
        .unwrap();

        let output = response.output.unwrap();
        assert_eq!(output[0].distance, Some(0.0));
        assert!(output[1].distance.unwrap() > 0.0);
    }
}

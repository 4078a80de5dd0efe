use crate::catalog::Recipe;
use crate::engine::RecommendParams;
use serde::{Deserialize, Serialize};

/// Recommendation request
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRequest {
    pub nutrition_input: Vec<f64>,
    /// Semicolon-separated ingredient terms, e.g. "milk;eggs;butter".
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub params: Option<RecommendParams>,
}

/// Recommendation response
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub output: Option<Vec<RecipeView>>,
}

/// Typed recipe projection returned to callers.
///
/// Field names match the wire contract of the original dataset columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeView {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "CookTime")]
    pub cook_time: String,
    #[serde(rename = "PrepTime")]
    pub prep_time: String,
    #[serde(rename = "TotalTime")]
    pub total_time: String,
    #[serde(rename = "RecipeIngredientParts")]
    pub ingredient_parts: Vec<String>,
    #[serde(rename = "Calories")]
    pub calories: f64,
    #[serde(rename = "FatContent")]
    pub fat_content: f64,
    #[serde(rename = "SaturatedFatContent")]
    pub saturated_fat_content: f64,
    #[serde(rename = "CholesterolContent")]
    pub cholesterol_content: f64,
    #[serde(rename = "SodiumContent")]
    pub sodium_content: f64,
    #[serde(rename = "CarbohydrateContent")]
    pub carbohydrate_content: f64,
    #[serde(rename = "FiberContent")]
    pub fiber_content: f64,
    #[serde(rename = "SugarContent")]
    pub sugar_content: f64,
    #[serde(rename = "ProteinContent")]
    pub protein_content: f64,
    #[serde(rename = "RecipeInstructions")]
    pub instructions: Vec<String>,
    /// Normalized-space search distance, present only when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl RecipeView {
    pub fn from_recipe(recipe: &Recipe, distance: Option<f64>) -> Self {
        let n = &recipe.nutrition;
        RecipeView {
            name: recipe.name.clone(),
            cook_time: recipe.cook_time.clone(),
            prep_time: recipe.prep_time.clone(),
            total_time: recipe.total_time.clone(),
            ingredient_parts: recipe.ingredient_parts.clone(),
            calories: n[0],
            fat_content: n[1],
            saturated_fat_content: n[2],
            cholesterol_content: n[3],
            sodium_content: n[4],
            carbohydrate_content: n[5],
            fiber_content: n[6],
            sugar_content: n[7],
            protein_content: n[8],
            instructions: recipe.instructions.clone(),
            distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NUTRITION_DIMS;

    #[test]
    fn test_request_defaults() {
        let request: PredictionRequest =
            serde_json::from_str(r#"{"nutrition_input": [1,2,3,4,5,6,7,8,9]}"#).unwrap();

        assert_eq!(request.nutrition_input.len(), 9);
        assert!(request.ingredients.is_none());
        assert!(request.params.is_none());
    }

    #[test]
    fn test_params_defaults() {
        let params: RecommendParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.n_neighbors, 5);
        assert!(!params.return_distance);

        let params: RecommendParams =
            serde_json::from_str(r#"{"n_neighbors": 10, "return_distance": true}"#).unwrap();
        assert_eq!(params.n_neighbors, 10);
        assert!(params.return_distance);
    }

    #[test]
    fn test_view_serializes_wire_names_and_skips_absent_distance() {
        let recipe = Recipe {
            name: "Test".to_string(),
            cook_time: "PT30M".to_string(),
            prep_time: "PT10M".to_string(),
            total_time: "PT40M".to_string(),
            ingredient_parts: vec!["flour".to_string()],
            instructions: vec!["Bake.".to_string()],
            nutrition: [1.0; NUTRITION_DIMS],
        };

        let json = serde_json::to_value(RecipeView::from_recipe(&recipe, None)).unwrap();
        assert_eq!(json["Name"], "Test");
        assert_eq!(json["SaturatedFatContent"], 1.0);
        assert!(json.get("distance").is_none());

        let json = serde_json::to_value(RecipeView::from_recipe(&recipe, Some(0.5))).unwrap();
        assert_eq!(json["distance"], 0.5);
    }
}

// JSON boundary consumed by external collaborators (the HTTP layer lives
// outside this crate and calls in with plain data).

pub mod models;
pub mod predict;

// Re-exports
pub use models::{PredictionRequest, PredictionResponse, RecipeView};
pub use predict::predict;

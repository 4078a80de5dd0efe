// Per-column z-score normalization of the nutrition feature space.

use crate::catalog::{NutritionVector, NUTRITION_DIMS};

/// Fitted per-column mean and standard deviation.
///
/// A zero-variance column gets an effective std of 1 so it contributes
/// zero distance instead of NaN.
#[derive(Debug, Clone)]
pub struct Normalizer {
    mean: NutritionVector,
    std: NutritionVector,
}

impl Normalizer {
    /// Fit normalization parameters over a non-empty set of rows.
    ///
    /// Uses the population standard deviation (ddof = 0).
    pub fn fit(rows: &[NutritionVector]) -> Normalizer {
        let count = rows.len().max(1) as f64;

        let mut mean = [0.0; NUTRITION_DIMS];
        for row in rows {
            for (acc, value) in mean.iter_mut().zip(row) {
                *acc += value;
            }
        }
        for acc in &mut mean {
            *acc /= count;
        }

        let mut variance = [0.0; NUTRITION_DIMS];
        for row in rows {
            for (col, (acc, value)) in variance.iter_mut().zip(row).enumerate() {
                let delta = value - mean[col];
                *acc += delta * delta;
            }
        }

        let mut std = [0.0; NUTRITION_DIMS];
        for (slot, var) in std.iter_mut().zip(variance) {
            let sd = (var / count).sqrt();
            *slot = if sd > 0.0 { sd } else { 1.0 };
        }

        Normalizer { mean, std }
    }

    /// Apply the fitted transform: z = (x - mean) / std.
    pub fn transform(&self, vector: &NutritionVector) -> NutritionVector {
        let mut out = [0.0; NUTRITION_DIMS];
        for col in 0..NUTRITION_DIMS {
            out[col] = (vector[col] - self.mean[col]) / self.std[col];
        }
        out
    }
}

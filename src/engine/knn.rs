// Brute-force nearest-neighbor search in the normalized feature space.

use crate::catalog::NutritionVector;
use std::cmp::Ordering;

/// Euclidean distance between two normalized vectors.
fn euclidean(a: &NutritionVector, b: &NutritionVector) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Find the k nearest candidates to the query.
///
/// Returns (candidate position, distance) pairs ordered by ascending
/// distance; equal distances order by lower position, which is lower
/// catalog index since candidates arrive in catalog order. An undersized
/// candidate pool returns everything it has.
pub fn search(candidates: &[NutritionVector], query: &NutritionVector, k: usize) -> Vec<(usize, f64)> {
    let mut scored: Vec<(usize, f64)> = candidates
        .iter()
        .enumerate()
        .map(|(position, row)| (position, euclidean(row, query)))
        .collect();

    scored.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    scored.truncate(k);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NUTRITION_DIMS;

    fn row(calories: f64) -> NutritionVector {
        let mut v = [0.0; NUTRITION_DIMS];
        v[0] = calories;
        v
    }

    #[test]
    fn test_orders_by_ascending_distance() {
        let candidates = vec![row(10.0), row(1.0), row(5.0)];
        let results = search(&candidates, &row(0.0), 3);

        assert_eq!(
            results.iter().map(|r| r.0).collect::<Vec<_>>(),
            vec![1, 2, 0]
        );
        assert!(results.windows(2).all(|w| w[0].1 <= w[1].1));
    }

    #[test]
    fn test_result_count_is_min_of_k_and_pool() {
        let candidates = vec![row(1.0), row(2.0)];
        assert_eq!(search(&candidates, &row(0.0), 5).len(), 2);
        assert_eq!(search(&candidates, &row(0.0), 1).len(), 1);
        assert!(search(&[], &row(0.0), 3).is_empty());
    }

    #[test]
    fn test_ties_break_by_lower_position() {
        // Equidistant candidates on either side of the query.
        let candidates = vec![row(4.0), row(-4.0), row(4.0)];
        let results = search(&candidates, &row(0.0), 3);

        assert_eq!(
            results.iter().map(|r| r.0).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_exact_match_has_zero_distance() {
        let candidates = vec![row(7.0), row(9.0)];
        let results = search(&candidates, &row(7.0), 1);
        assert_eq!(results[0].0, 0);
        assert_eq!(results[0].1, 0.0);
    }
}

// Ingredient filtering over the catalog.

use crate::catalog::Catalog;

/// Parse a semicolon-separated ingredient string into normalized terms.
pub fn parse_terms(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}

/// Narrow the catalog to recipes containing every requested ingredient.
///
/// Returns catalog indices in original order. Terms match as
/// case-insensitive substrings of individual ingredient parts; an empty
/// term list keeps the full catalog.
pub fn filter(catalog: &Catalog, terms: &[String]) -> Vec<usize> {
    if terms.is_empty() {
        return (0..catalog.len()).collect();
    }

    catalog
        .recipes()
        .iter()
        .enumerate()
        .filter(|(_, recipe)| {
            terms.iter().all(|term| {
                recipe
                    .ingredient_parts
                    .iter()
                    .any(|part| part.to_lowercase().contains(term))
            })
        })
        .map(|(index, _)| index)
        .collect()
}

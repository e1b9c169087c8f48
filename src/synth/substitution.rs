use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Catalog key → alternatives, in suggestion order.
pub const SUBSTITUTION_TABLE: &[(&str, &[&str])] = &[
    ("paneer", &["tofu", "chickpeas", "lentils"]),
    ("ghee", &["olive_oil", "coconut_oil"]),
    ("basmati_rice", &["quinoa", "oats"]),
    ("spinach", &["cauliflower", "bell_peppers"]),
];

pub const MAX_SUGGESTIONS: usize = 3;

const NUTRITION_NOTE: &str = "Similar nutritional profile with slight variations";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Substitution {
    pub original: String,
    pub substitution: String,
    pub cost_difference: f64,
    pub note: String,
}

/// Suggests up to three catalog alternatives for `ingredient_id`.
///
/// Every table key contained in `ingredient_id` contributes its
/// alternatives that exist in the catalog and cost at most `budget` per
/// unit. Results keep table order and are truncated, not ranked. An id
/// that matches no key yields an empty list.
pub fn suggest_substitutions(catalog: &Catalog, ingredient_id: &str, budget: f64) -> Vec<Substitution> {
    let original_cost = catalog
        .get(ingredient_id)
        .map(|ingredient| ingredient.cost_per_unit)
        .unwrap_or(0.0);

    SUBSTITUTION_TABLE
        .iter()
        .filter(|(key, _)| ingredient_id.contains(*key))
        .flat_map(|(_, alternatives)| alternatives.iter())
        .filter_map(|alt| catalog.get(alt).map(|ingredient| (*alt, ingredient)))
        .filter(|(_, ingredient)| ingredient.cost_per_unit <= budget)
        .take(MAX_SUGGESTIONS)
        .map(|(alt, ingredient)| Substitution {
            original: ingredient_id.to_string(),
            substitution: alt.to_string(),
            cost_difference: ((ingredient.cost_per_unit - original_cost) * 100.0).round() / 100.0,
            note: NUTRITION_NOTE.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paneer_alternatives_in_table_order() {
        let catalog = Catalog::builtin();
        let suggestions = suggest_substitutions(&catalog, "paneer", 100.0);
        let names: Vec<&str> = suggestions.iter().map(|s| s.substitution.as_str()).collect();
        assert_eq!(names, vec!["tofu", "chickpeas", "lentils"]);
        assert_eq!(suggestions[0].cost_difference, -0.3);
        assert_eq!(suggestions[2].cost_difference, -0.4);
        assert!(suggestions.iter().all(|s| s.original == "paneer"));
    }

    #[test]
    fn test_budget_drops_expensive_alternatives() {
        let catalog = Catalog::builtin();
        let suggestions = suggest_substitutions(&catalog, "ghee", 0.16);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].substitution, "olive_oil");
        assert_eq!(suggestions[0].cost_difference, -0.05);
    }

    #[test]
    fn test_substring_match_without_catalog_entry() {
        let catalog = Catalog::builtin();
        // "fresh_spinach" is not a catalog key, so the original cost counts as zero.
        let suggestions = suggest_substitutions(&catalog, "fresh_spinach", 1.0);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].substitution, "cauliflower");
        assert_eq!(suggestions[0].cost_difference, 0.25);
    }

    #[test]
    fn test_unknown_ingredient_yields_nothing() {
        let catalog = Catalog::builtin();
        assert!(suggest_substitutions(&catalog, "saffron", 100.0).is_empty());
    }
}

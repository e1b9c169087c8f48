use serde::{Deserialize, Serialize};

use crate::catalog::{Ingredient, Nutrients};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct CostSummary {
    pub total: f64,
    pub per_serving: f64,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Sums the seven nutrients over a merged ingredient list.
pub fn aggregate_nutrients(ingredients: &[Ingredient]) -> Nutrients {
    let mut totals = Nutrients::default();
    for ingredient in ingredients {
        let factor = ingredient.unit.nutrition_factor(ingredient.quantity);
        totals.accumulate(&ingredient.per_unit, factor);
    }
    totals
}

/// Per-serving nutrition, rounded to one decimal.
///
/// Always derived from the full ingredient list so that repeated rescaling
/// never compounds rounding error from a stored per-serving figure.
pub fn calculate_nutrition_per_serving(ingredients: &[Ingredient], servings: u32) -> Nutrients {
    let servings = f64::from(servings.max(1));
    aggregate_nutrients(ingredients).map_values(|total| round_to(total / servings, 1))
}

/// Prices the actual quantity of each ingredient: `cost_per_unit * quantity`.
/// Per-serving cost is rounded to cents.
pub fn calculate_cost(ingredients: &[Ingredient], servings: u32) -> CostSummary {
    let total: f64 = ingredients
        .iter()
        .map(|ingredient| ingredient.cost_per_unit * ingredient.quantity)
        .sum();
    CostSummary {
        total: round_to(total, 2),
        per_serving: round_to(total / f64::from(servings.max(1)), 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn portion(catalog: &Catalog, key: &str, quantity: f64) -> Ingredient {
        catalog.get(key).unwrap().with_quantity(quantity)
    }

    #[test]
    fn test_nutrition_respects_unit_basis() {
        let catalog = Catalog::builtin();
        // 150 g lentils = 1.5 x per-100 profile; 2 tbsp olive oil = 2 x per-tbsp profile.
        let list = vec![
            portion(&catalog, "lentils", 150.0),
            portion(&catalog, "olive_oil", 2.0),
        ];
        let totals = aggregate_nutrients(&list);
        assert!((totals.calories - (116.0 * 1.5 + 119.0 * 2.0)).abs() < 1e-9);
        assert!((totals.fats - (0.4 * 1.5 + 13.5 * 2.0)).abs() < 1e-9);

        let per_serving = calculate_nutrition_per_serving(&list, 2);
        assert_eq!(per_serving.calories, 206.0);
        assert_eq!(per_serving.fats, 13.8);
    }

    #[test]
    fn test_nutrition_rounds_to_one_decimal() {
        let catalog = Catalog::builtin();
        let list = vec![portion(&catalog, "spinach", 100.0)];
        let per_serving = calculate_nutrition_per_serving(&list, 3);
        assert_eq!(per_serving.calories, 7.7);
        assert_eq!(per_serving.sodium, 26.3);
    }

    #[test]
    fn test_cost_uses_actual_quantity() {
        let catalog = Catalog::builtin();
        let list = vec![
            portion(&catalog, "lentils", 150.0),
            portion(&catalog, "ghee", 2.0),
        ];
        let cost = calculate_cost(&list, 2);
        assert_eq!(cost.total, 30.4);
        assert_eq!(cost.per_serving, 15.2);
    }

    #[test]
    fn test_empty_list_is_zero() {
        assert_eq!(calculate_nutrition_per_serving(&[], 2), Nutrients::default());
        assert_eq!(calculate_cost(&[], 4), CostSummary::default());
    }
}

use crate::catalog::Ingredient;
use crate::request::RecipeRequest;

/// Dietary restriction → catalog display names it excludes.
pub const DIETARY_EXCLUSIONS: &[(&str, &[&str])] = &[("vegan", &["paneer"])];

/// True when `ingredient` is excluded by any of the request's restrictions.
pub fn violates_dietary_rules(ingredient: &Ingredient, request: &RecipeRequest) -> bool {
    DIETARY_EXCLUSIONS.iter().any(|(restriction, excluded)| {
        request.has_restriction(restriction) && excluded.contains(&ingredient.name.as_str())
    })
}

/// True when the ingredient's reference portion fits the category budget.
pub fn within_budget(ingredient: &Ingredient, budget_per_category: f64) -> bool {
    ingredient.reference_cost() <= budget_per_category
}

/// Keeps the candidates that pass the budget and dietary rules, in order.
/// An empty result means the category contributes nothing.
pub fn filter_candidates<'a>(
    candidates: &[&'a Ingredient],
    request: &RecipeRequest,
    budget_per_category: f64,
) -> Vec<&'a Ingredient> {
    candidates
        .iter()
        .copied()
        .filter(|ingredient| within_budget(ingredient, budget_per_category))
        .filter(|ingredient| !violates_dietary_rules(ingredient, request))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::request::{Difficulty, MealType};

    fn request_with(restrictions: &[&str]) -> RecipeRequest {
        RecipeRequest {
            cuisine_preference: vec!["indian".to_string()],
            dietary_restrictions: restrictions.iter().map(|s| s.to_string()).collect(),
            available_ingredients: vec![],
            target_calories: 400,
            budget_limit: 200.0,
            meal_type: MealType::Lunch,
            difficulty: Difficulty::Easy,
            time_constraint: 45,
            health_conditions: vec![],
            serving_size: 2,
        }
    }

    fn proteins(catalog: &Catalog) -> Vec<&Ingredient> {
        ["chicken", "tofu", "lentils", "chickpeas", "paneer"]
            .iter()
            .filter_map(|k| catalog.get(k))
            .collect()
    }

    #[test]
    fn test_budget_filter_uses_reference_portion() {
        let catalog = Catalog::builtin();
        let request = request_with(&[]);
        // 200 / 5 categories = 40 per category; chicken (80) and paneer (60) are out.
        let names: Vec<&str> = filter_candidates(&proteins(&catalog), &request, 40.0)
            .into_iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["tofu", "red lentils", "chickpeas"]);
    }

    #[test]
    fn test_budget_boundary_is_inclusive() {
        let catalog = Catalog::builtin();
        let tofu = catalog.get("tofu").unwrap();
        assert!(within_budget(tofu, tofu.reference_cost()));
        assert!(!within_budget(tofu, tofu.reference_cost() - 0.01));
    }

    #[test]
    fn test_vegan_excludes_paneer() {
        let catalog = Catalog::builtin();
        let vegan = request_with(&["vegan"]);
        let kept = filter_candidates(&proteins(&catalog), &vegan, 1000.0);
        assert!(kept.iter().all(|i| i.name != "paneer"));
        assert_eq!(kept.len(), 4);

        let vegetarian = request_with(&["vegetarian"]);
        assert_eq!(filter_candidates(&proteins(&catalog), &vegetarian, 1000.0).len(), 5);
    }

    #[test]
    fn test_nothing_survives_tiny_budget() {
        let catalog = Catalog::builtin();
        assert!(filter_candidates(&proteins(&catalog), &request_with(&[]), 1.0).is_empty());
    }
}

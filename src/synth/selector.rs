use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{Catalog, Ingredient};
use crate::request::RecipeRequest;
use crate::templates::Template;

use super::constraints::filter_candidates;
use super::quantity::adjust_quantity;

fn normalize(name: &str) -> String {
    name.trim().to_lowercase().replace('_', " ")
}

/// Fuzzy match between a catalog name and a user hint: equal after
/// case/underscore normalization, or either contains the other.
pub fn matches_hint(ingredient_name: &str, hint: &str) -> bool {
    let name = normalize(ingredient_name);
    let hint = normalize(hint);
    if hint.is_empty() {
        return false;
    }
    name == hint || name.contains(&hint) || hint.contains(&name)
}

/// Picks one ingredient from an already-filtered candidate list: the first
/// candidate matching any hint, otherwise a uniform random choice.
pub fn choose_ingredient<'a, R: Rng + ?Sized>(
    filtered: &[&'a Ingredient],
    hints: &[&str],
    rng: &mut R,
) -> Option<&'a Ingredient> {
    let preferred = filtered
        .iter()
        .copied()
        .find(|ingredient| hints.iter().any(|hint| matches_hint(&ingredient.name, hint)));
    match preferred {
        Some(ingredient) => Some(ingredient),
        None => filtered.choose(rng).copied(),
    }
}

/// Walks the template in order and returns one quantity-adjusted ingredient
/// per category that has at least one surviving candidate.
pub fn select_ingredients<R: Rng + ?Sized>(
    catalog: &Catalog,
    template: &Template,
    request: &RecipeRequest,
    rng: &mut R,
) -> Vec<Ingredient> {
    let budget_per_category = request.budget_limit / template.structure.len().max(1) as f64;
    let hints: Vec<&str> = request.ingredient_hints().collect();

    let mut selected = Vec::with_capacity(template.structure.len());
    for &slot in &template.structure {
        let rule = slot.rule();
        let candidates = catalog.candidates(rule.candidate_keys, rule.category);
        let filtered = filter_candidates(&candidates, request, budget_per_category);

        match choose_ingredient(&filtered, &hints, rng) {
            Some(chosen) => {
                tracing::debug!(
                    slot = ?slot,
                    ingredient = %chosen.name,
                    candidates = filtered.len(),
                    "selected ingredient"
                );
                selected.push(adjust_quantity(chosen, slot, request.serving_size));
            }
            None => {
                tracing::warn!(
                    slot = ?slot,
                    budget_per_category,
                    "no ingredient survived filtering, omitting category"
                );
            }
        }
    }
    selected
}

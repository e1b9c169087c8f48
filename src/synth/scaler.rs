use chrono::{DateTime, Utc};
use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::catalog::{Ingredient, Unit};
use crate::error::{EngineError, EngineResult};
use crate::recipe::Recipe;
use crate::recipe_aggregator::{calculate_cost, calculate_nutrition_per_serving};

use super::quantity::{format_quantity, merge_ingredients, round_quantity};

static RE_QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+(?:\.\d+)?)\s+(cups?|tbsp|tsp|g|ml)\b").expect("quantity pattern is valid")
});

static RE_SERVING_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(serves )(\d+)\b|\b(\d+)( people)\b").expect("serving count pattern is valid")
});

const LARGE_BATCH_MULTIPLIER: f64 = 1.1;
const SMALL_BATCH_MULTIPLIER: f64 = 0.9;

/// Step function applied to prep and cook time when the batch size changes a lot.
pub fn time_multiplier(old_servings: u32, new_servings: u32) -> f64 {
    let old = f64::from(old_servings);
    let new = f64::from(new_servings);
    if new > old * 2.0 {
        LARGE_BATCH_MULTIPLIER
    } else if new < old / 2.0 {
        SMALL_BATCH_MULTIPLIER
    } else {
        1.0
    }
}

/// Rescales every "<number> <unit>" mention in one instruction.
///
/// Replacement is textual: each matched "<old> <unit>" is replaced wherever
/// that exact text occurs in the instruction, in match order.
pub fn rescale_instruction(instruction: &str, factor: f64) -> String {
    let replacements: Vec<(String, String)> = RE_QUANTITY
        .captures_iter(instruction)
        .filter_map(|caps| {
            let old_text = caps.get(0)?.as_str().to_string();
            let amount: f64 = caps.get(1)?.as_str().parse().ok()?;
            let unit_text = caps.get(2)?.as_str();
            let unit: Unit = unit_text.parse().ok()?;
            let scaled = round_quantity(amount * factor, unit);
            Some((old_text, format!("{} {}", format_quantity(scaled), unit_text)))
        })
        .collect();

    let mut updated = instruction.to_string();
    for (old_text, new_text) in replacements {
        updated = updated.replace(&old_text, &new_text);
    }
    updated
}

/// Rewrites "serves {old}" and "{old} people" to the new count in one pass,
/// so a count is never rewritten twice.
pub fn rescale_description(description: &str, old_servings: u32, new_servings: u32) -> String {
    let old = old_servings.to_string();
    let new = new_servings.to_string();
    RE_SERVING_COUNT
        .replace_all(description, |caps: &Captures| {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            match (caps.get(1), caps.get(2), caps.get(3), caps.get(4)) {
                (Some(prefix), Some(count), _, _) if count.as_str() == old => {
                    format!("{}{}", prefix.as_str(), new)
                }
                (_, _, Some(count), Some(suffix)) if count.as_str() == old => {
                    format!("{}{}", new, suffix.as_str())
                }
                _ => whole.to_string(),
            }
        })
        .into_owned()
}

fn scale_ingredients(ingredients: &[Ingredient], factor: f64) -> Vec<Ingredient> {
    let scaled: Vec<Ingredient> = ingredients
        .iter()
        .map(|ingredient| {
            let quantity = round_quantity(ingredient.quantity * factor, ingredient.unit);
            ingredient.with_quantity(quantity)
        })
        .collect();
    merge_ingredients(&scaled)
}

/// Produces a new recipe for `new_servings`; the source recipe is untouched.
///
/// Nutrition and cost are recomputed from the rescaled ingredient list.
pub fn scale_recipe(recipe: &Recipe, new_servings: u32, now: DateTime<Utc>) -> EngineResult<Recipe> {
    if new_servings == 0 {
        return Err(EngineError::InvalidServings(new_servings));
    }
    if recipe.servings == 0 {
        return Err(EngineError::InvalidRequest(format!(
            "recipe '{}' has no servings to scale from",
            recipe.id
        )));
    }

    let factor = f64::from(new_servings) / f64::from(recipe.servings);
    let ingredients = scale_ingredients(&recipe.ingredients, factor);
    let nutrition_per_serving = calculate_nutrition_per_serving(&ingredients, new_servings);
    let cost = calculate_cost(&ingredients, new_servings);

    let multiplier = time_multiplier(recipe.servings, new_servings);
    let instructions = recipe
        .instructions
        .iter()
        .map(|step| rescale_instruction(step, factor))
        .collect();

    let description = rescale_description(&recipe.description, recipe.servings, new_servings);

    Ok(Recipe {
        id: format!("{}_scaled_{}", recipe.id, new_servings),
        name: format!("{} ({} servings)", recipe.name, new_servings),
        description,
        preparation_time: (f64::from(recipe.preparation_time) * multiplier) as u32,
        cooking_time: (f64::from(recipe.cooking_time) * multiplier) as u32,
        servings: new_servings,
        ingredients,
        instructions,
        nutrition_per_serving,
        cost_per_serving: cost.per_serving,
        created_at: now,
        ..recipe.clone()
    })
}

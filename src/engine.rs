use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::EngineResult;
use crate::recipe::Recipe;
use crate::recipe_aggregator::{calculate_cost, calculate_nutrition_per_serving};
use crate::request::RecipeRequest;
use crate::synth::{assembler, instructions, merge_ingredients, scaler, selector, substitution};
use crate::synth::Substitution;
use crate::templates::{CookingMethod, TemplateRegistry};

/// One slot of batch output, at the same index as its request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Recipe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchEntry {
    pub fn from_result(index: usize, result: EngineResult<Recipe>) -> Self {
        match result {
            Ok(recipe) => BatchEntry { index, recipe: Some(recipe), error: None },
            Err(e) => BatchEntry { index, recipe: None, error: Some(e.to_string()) },
        }
    }
}

/// Used only when a template lists no cooking methods.
const FALLBACK_METHOD: CookingMethod = CookingMethod::Saute;

/// Recipe synthesis over a read-only catalog and template registry.
///
/// Every operation takes `&self`; one engine can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct RecipeEngine {
    catalog: Catalog,
    templates: TemplateRegistry,
}

impl RecipeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        RecipeEngine {
            catalog,
            templates: TemplateRegistry::builtin(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    pub fn generate<R: Rng + ?Sized>(&self, request: &RecipeRequest, rng: &mut R) -> EngineResult<Recipe> {
        self.generate_at(request, rng, Utc::now())
    }

    /// Generates a recipe stamped with `now`. All randomness comes from `rng`:
    /// per-category selection first, then one cooking-method draw, then the
    /// id suffix.
    pub fn generate_at<R: Rng + ?Sized>(
        &self,
        request: &RecipeRequest,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> EngineResult<Recipe> {
        let cuisine = request.validate()?;
        let template = self.templates.lookup(cuisine, request.meal_type);

        let selected = selector::select_ingredients(&self.catalog, template, request, rng);
        let ingredients = merge_ingredients(&selected);

        let cooking_method = template
            .cooking_methods
            .choose(rng)
            .copied()
            .unwrap_or(FALLBACK_METHOD);

        let id = format!("recipe_{}_{:04x}", now.format("%Y%m%d_%H%M%S"), rng.gen::<u16>());
        let nutrition_per_serving = calculate_nutrition_per_serving(&ingredients, request.serving_size);
        let cost = calculate_cost(&ingredients, request.serving_size);

        let recipe = Recipe {
            id,
            name: assembler::recipe_name(cuisine, request.meal_type, request),
            description: assembler::recipe_description(cuisine, request.meal_type, &ingredients, request),
            cuisine,
            category: request.meal_type,
            difficulty: request.difficulty,
            preparation_time: assembler::preparation_time(ingredients.len(), request.difficulty),
            cooking_time: assembler::cooking_time(cooking_method, request.difficulty),
            servings: request.serving_size,
            instructions: instructions::synthesize_instructions(&ingredients),
            tags: assembler::recipe_tags(&ingredients, request),
            seasonal_tags: assembler::seasonal_tags(now),
            health_benefits: assembler::health_benefits(&ingredients, request),
            ingredients,
            nutrition_per_serving,
            cost_per_serving: cost.per_serving,
            cooking_method,
            created_at: now,
            rating: None,
            review_count: 0,
        };

        tracing::info!(
            recipe_id = %recipe.id,
            name = %recipe.name,
            ingredients = recipe.ingredients.len(),
            method = %recipe.cooking_method,
            "generated recipe"
        );
        Ok(recipe)
    }

    pub fn scale(&self, recipe: &Recipe, new_servings: u32) -> EngineResult<Recipe> {
        self.scale_at(recipe, new_servings, Utc::now())
    }

    pub fn scale_at(&self, recipe: &Recipe, new_servings: u32, now: DateTime<Utc>) -> EngineResult<Recipe> {
        let scaled = scaler::scale_recipe(recipe, new_servings, now)?;
        tracing::info!(
            recipe_id = %scaled.id,
            from = recipe.servings,
            to = new_servings,
            "scaled recipe"
        );
        Ok(scaled)
    }

    /// Dietary restrictions do not filter suggestions; they are accepted for
    /// interface compatibility and logged.
    pub fn suggest_substitutions(
        &self,
        ingredient_id: &str,
        dietary_restrictions: &[String],
        budget: f64,
    ) -> Vec<Substitution> {
        let suggestions = substitution::suggest_substitutions(&self.catalog, ingredient_id, budget);
        tracing::debug!(
            ingredient = ingredient_id,
            ?dietary_restrictions,
            budget,
            found = suggestions.len(),
            "substitution lookup"
        );
        suggestions
    }

    /// Generates one recipe per request in parallel. Request `i` draws from
    /// its own RNG seeded with `seed + i`, so the output does not depend on
    /// thread scheduling.
    pub fn generate_batch(&self, requests: &[RecipeRequest], seed: u64) -> Vec<EngineResult<Recipe>> {
        let now = Utc::now();
        requests
            .par_iter()
            .enumerate()
            .map(|(i, request)| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
                self.generate_at(request, &mut rng, now)
            })
            .collect()
    }
}

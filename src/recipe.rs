use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::{Ingredient, Nutrients};
use crate::request::{Cuisine, Difficulty, MealType};
use crate::templates::CookingMethod;

/// A finished recipe. Values are never mutated after construction; scaling
/// produces a new `Recipe`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cuisine: Cuisine,
    pub category: MealType,
    pub difficulty: Difficulty,
    /// Minutes.
    pub preparation_time: u32,
    /// Minutes.
    pub cooking_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub nutrition_per_serving: Nutrients,
    pub cost_per_serving: f64,
    pub tags: BTreeSet<String>,
    pub seasonal_tags: BTreeSet<String>,
    pub health_benefits: BTreeSet<String>,
    pub cooking_method: CookingMethod,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
}

impl Recipe {
    pub fn total_time(&self) -> u32 {
        self.preparation_time + self.cooking_time
    }

    pub fn total_cost(&self) -> f64 {
        (self.cost_per_serving * f64::from(self.servings) * 100.0).round() / 100.0
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.name == name)
    }
}

pub mod daily_values;
pub mod health;

use serde::{Deserialize, Serialize};

use crate::catalog::Nutrients;
use crate::recipe::Recipe;

pub use daily_values::{daily_value_percentage, DailyValuePercentage};
pub use health::{dietary_flags, health_score};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionAnalysis {
    pub nutrition_per_serving: Nutrients,
    pub daily_value_percentage: DailyValuePercentage,
    pub health_score: u8,
    pub dietary_flags: Vec<String>,
    /// Preparation plus cooking minutes.
    pub total_time: u32,
    pub cost_per_serving: f64,
    pub total_cost: f64,
}

pub fn analyze_nutrition(recipe: &Recipe) -> NutritionAnalysis {
    let per_serving = recipe.nutrition_per_serving;
    NutritionAnalysis {
        nutrition_per_serving: per_serving,
        daily_value_percentage: daily_value_percentage(&per_serving),
        health_score: health_score(&per_serving),
        dietary_flags: dietary_flags(recipe),
        total_time: recipe.total_time(),
        cost_per_serving: recipe.cost_per_serving,
        total_cost: recipe.total_cost(),
    }
}

use serde::{Deserialize, Serialize};

use crate::catalog::Nutrients;

/// Reference daily intake for an adult on a 2000 kcal diet.
/// Sugar has no reference value and is not reported.
pub const DAILY_CALORIES: f64 = 2000.0;
pub const DAILY_PROTEIN_G: f64 = 50.0;
pub const DAILY_CARBS_G: f64 = 300.0;
pub const DAILY_FATS_G: f64 = 65.0;
pub const DAILY_FIBER_G: f64 = 25.0;
pub const DAILY_SODIUM_MG: f64 = 2300.0;

/// Share of the daily reference covered by one serving, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyValuePercentage {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub fiber: f64,
    pub sodium: f64,
}

fn percent_of(value: f64, reference: f64) -> f64 {
    (value / reference * 1000.0).round() / 10.0
}

/// Percentages are rounded to one decimal.
pub fn daily_value_percentage(per_serving: &Nutrients) -> DailyValuePercentage {
    DailyValuePercentage {
        calories: percent_of(per_serving.calories, DAILY_CALORIES),
        protein: percent_of(per_serving.protein, DAILY_PROTEIN_G),
        carbs: percent_of(per_serving.carbs, DAILY_CARBS_G),
        fats: percent_of(per_serving.fats, DAILY_FATS_G),
        fiber: percent_of(per_serving.fiber, DAILY_FIBER_G),
        sodium: percent_of(per_serving.sodium, DAILY_SODIUM_MG),
    }
}

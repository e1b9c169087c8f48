use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cuisine {
    Indian,
    Mediterranean,
    Asian,
    Italian,
    Mexican,
    Fusion,
}

impl Cuisine {
    pub const ALL: [Cuisine; 6] = [
        Cuisine::Indian,
        Cuisine::Mediterranean,
        Cuisine::Asian,
        Cuisine::Italian,
        Cuisine::Mexican,
        Cuisine::Fusion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Cuisine::Indian => "indian",
            Cuisine::Mediterranean => "mediterranean",
            Cuisine::Asian => "asian",
            Cuisine::Italian => "italian",
            Cuisine::Mexican => "mexican",
            Cuisine::Fusion => "fusion",
        }
    }
}

impl FromStr for Cuisine {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Cuisine::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| EngineError::InvalidRequest(format!("unknown cuisine '{}'", s)))
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Dessert,
}

impl MealType {
    pub const ALL: [MealType; 5] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
        MealType::Dessert,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
            MealType::Dessert => "dessert",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn prep_multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.3,
            Difficulty::Hard => 1.6,
        }
    }

    pub fn cook_multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 0.8,
            Difficulty::Medium => 1.0,
            Difficulty::Hard => 1.2,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_serving_size() -> u32 {
    2
}

fn default_time_constraint() -> u32 {
    60
}

/// Caller-supplied constraints for one generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRequest {
    /// The first entry selects the template and the recipe's cuisine.
    pub cuisine_preference: Vec<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub available_ingredients: Vec<String>,
    pub target_calories: u32,
    pub budget_limit: f64,
    pub meal_type: MealType,
    #[serde(alias = "difficulty_level")]
    pub difficulty: Difficulty,
    /// Minutes.
    #[serde(default = "default_time_constraint")]
    pub time_constraint: u32,
    #[serde(default)]
    pub health_conditions: Vec<String>,
    #[serde(default = "default_serving_size")]
    pub serving_size: u32,
}

impl RecipeRequest {
    /// Checks the fail-fast preconditions and returns the primary cuisine.
    pub fn validate(&self) -> EngineResult<Cuisine> {
        if self.serving_size == 0 {
            return Err(EngineError::InvalidRequest(
                "serving_size must be at least 1".to_string(),
            ));
        }
        if !self.budget_limit.is_finite() || self.budget_limit <= 0.0 {
            return Err(EngineError::InvalidRequest(format!(
                "budget_limit must be a positive number (got {})",
                self.budget_limit
            )));
        }
        let primary = self.cuisine_preference.first().ok_or_else(|| {
            EngineError::InvalidRequest("cuisine_preference must not be empty".to_string())
        })?;
        primary.parse()
    }

    pub fn has_restriction(&self, restriction: &str) -> bool {
        self.dietary_restrictions
            .iter()
            .any(|r| r.trim().eq_ignore_ascii_case(restriction))
    }

    pub fn has_condition(&self, condition: &str) -> bool {
        self.health_conditions
            .iter()
            .any(|c| c.trim().eq_ignore_ascii_case(condition))
    }

    /// Non-empty "available ingredient" hints, in request order.
    pub fn ingredient_hints(&self) -> impl Iterator<Item = &str> {
        self.available_ingredients
            .iter()
            .map(|h| h.trim())
            .filter(|h| !h.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> RecipeRequest {
        RecipeRequest {
            cuisine_preference: vec!["indian".to_string()],
            dietary_restrictions: vec![],
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

    #[test]
    fn test_validate_accepts_well_formed_request() {
        assert_eq!(base_request().validate(), Ok(Cuisine::Indian));
    }

    #[test]
    fn test_validate_rejects_bad_numbers() {
        let zero_servings = RecipeRequest {
            serving_size: 0,
            ..base_request()
        };
        assert!(matches!(zero_servings.validate(), Err(EngineError::InvalidRequest(_))));

        for budget in [0.0, -5.0, f64::NAN] {
            let request = RecipeRequest {
                budget_limit: budget,
                ..base_request()
            };
            assert!(request.validate().is_err(), "budget {} should be rejected", budget);
        }
    }

    #[test]
    fn test_validate_rejects_missing_or_unknown_cuisine() {
        let empty = RecipeRequest {
            cuisine_preference: vec![],
            ..base_request()
        };
        assert!(empty.validate().is_err());

        let unknown = RecipeRequest {
            cuisine_preference: vec!["martian".to_string()],
            ..base_request()
        };
        let err = unknown.validate().unwrap_err();
        assert!(err.to_string().contains("martian"));

        let mixed_case = RecipeRequest {
            cuisine_preference: vec!["Mexican".to_string()],
            ..base_request()
        };
        assert_eq!(mixed_case.validate(), Ok(Cuisine::Mexican));
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let json = r#"{
            "cuisine_preference": ["indian"],
            "target_calories": 400,
            "budget_limit": 150,
            "meal_type": "dinner",
            "difficulty_level": "hard"
        }"#;
        let request: RecipeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.serving_size, 2);
        assert_eq!(request.time_constraint, 60);
        assert_eq!(request.difficulty, Difficulty::Hard);
        assert!(request.available_ingredients.is_empty());
    }

    #[test]
    fn test_hints_skip_blank_entries() {
        let request = RecipeRequest {
            available_ingredients: vec![" lentils ".to_string(), "  ".to_string(), "spinach".to_string()],
            ..base_request()
        };
        let hints: Vec<&str> = request.ingredient_hints().collect();
        assert_eq!(hints, vec!["lentils", "spinach"]);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    G,
    Ml,
    Tsp,
    Tbsp,
    Cup,
    Piece,
}

/// How a unit's per-unit profile is expressed and how its quantities are rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitClass {
    /// g and ml: nutrition profile is per 100 units.
    Metric,
    /// tsp, tbsp and cup: nutrition profile is per single unit.
    Spoon,
    Count,
}

impl Unit {
    pub fn class(self) -> UnitClass {
        match self {
            Unit::G | Unit::Ml => UnitClass::Metric,
            Unit::Tsp | Unit::Tbsp | Unit::Cup => UnitClass::Spoon,
            Unit::Piece => UnitClass::Count,
        }
    }

    /// Multiplier turning a quantity into "profile units" for nutrition lookups.
    ///
    /// Only tsp and tbsp carry per-single-unit profiles in the catalog; every
    /// other unit (cup and piece included) falls back to the per-100 basis.
    pub fn nutrition_factor(self, quantity: f64) -> f64 {
        match self {
            Unit::Tsp | Unit::Tbsp => quantity,
            Unit::G | Unit::Ml => quantity / 100.0,
            _ => quantity / 100.0,
        }
    }

    /// Portion the budget filter prices an ingredient at.
    pub fn budget_reference_quantity(self) -> f64 {
        match self.class() {
            UnitClass::Metric => 100.0,
            UnitClass::Spoon | UnitClass::Count => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::G => "g",
            Unit::Ml => "ml",
            Unit::Tsp => "tsp",
            Unit::Tbsp => "tbsp",
            Unit::Cup => "cup",
            Unit::Piece => "piece",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "g" => Ok(Unit::G),
            "ml" => Ok(Unit::Ml),
            "tsp" => Ok(Unit::Tsp),
            "tbsp" => Ok(Unit::Tbsp),
            "cup" | "cups" => Ok(Unit::Cup),
            "piece" | "pieces" | "pc" => Ok(Unit::Piece),
            other => Err(format!("unknown unit '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Grain,
    Protein,
    Vegetable,
    Spice,
    Oil,
    Liquid,
}

impl IngredientCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            IngredientCategory::Grain => "grain",
            IngredientCategory::Protein => "protein",
            IngredientCategory::Vegetable => "vegetable",
            IngredientCategory::Spice => "spice",
            IngredientCategory::Oil => "oil",
            IngredientCategory::Liquid => "liquid",
        }
    }
}

impl FromStr for IngredientCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grain" => Ok(IngredientCategory::Grain),
            "protein" => Ok(IngredientCategory::Protein),
            "vegetable" => Ok(IngredientCategory::Vegetable),
            "spice" => Ok(IngredientCategory::Spice),
            "oil" => Ok(IngredientCategory::Oil),
            "liquid" => Ok(IngredientCategory::Liquid),
            other => Err(format!("unknown ingredient category '{}'", other)),
        }
    }
}

/// The seven tracked nutrients. Used both for per-unit catalog profiles and
/// for per-serving recipe totals.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct Nutrients {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
}

impl Nutrients {
    pub const KEYS: [&'static str; 7] = [
        "calories", "protein", "carbs", "fats", "fiber", "sugar", "sodium",
    ];

    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        calories: f64,
        protein: f64,
        carbs: f64,
        fats: f64,
        fiber: f64,
        sugar: f64,
        sodium: f64,
    ) -> Self {
        Self { calories, protein, carbs, fats, fiber, sugar, sodium }
    }

    /// Adds `profile * factor` into `self`, field by field.
    pub fn accumulate(&mut self, profile: &Nutrients, factor: f64) {
        let total = self;
        macro_rules! add_scaled {
            ($field:ident) => {
                total.$field += profile.$field * factor;
            };
        }
        add_scaled!(calories);
        add_scaled!(protein);
        add_scaled!(carbs);
        add_scaled!(fats);
        add_scaled!(fiber);
        add_scaled!(sugar);
        add_scaled!(sodium);
    }

    pub fn map_values(&self, f: impl Fn(f64) -> f64) -> Nutrients {
        Nutrients {
            calories: f(self.calories),
            protein: f(self.protein),
            carbs: f(self.carbs),
            fats: f(self.fats),
            fiber: f(self.fiber),
            sugar: f(self.sugar),
            sodium: f(self.sodium),
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        match key {
            "calories" => Some(self.calories),
            "protein" => Some(self.protein),
            "carbs" => Some(self.carbs),
            "fats" => Some(self.fats),
            "fiber" => Some(self.fiber),
            "sugar" => Some(self.sugar),
            "sodium" => Some(self.sodium),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        Self::KEYS
            .iter()
            .map(move |key| (*key, self.get(key).unwrap_or_default()))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub category: IngredientCategory,
    pub cost_per_unit: f64,
    pub per_unit: Nutrients,
}

impl Ingredient {
    /// Returns a copy carrying `quantity`; unit, category and profile are kept.
    pub fn with_quantity(&self, quantity: f64) -> Ingredient {
        Ingredient {
            quantity,
            ..self.clone()
        }
    }

    /// Price of the portion the budget filter compares against a category budget.
    pub fn reference_cost(&self) -> f64 {
        self.cost_per_unit * self.unit.budget_reference_quantity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_parsing_is_case_insensitive() {
        assert_eq!("G".parse::<Unit>(), Ok(Unit::G));
        assert_eq!("Cups".parse::<Unit>(), Ok(Unit::Cup));
        assert!("handful".parse::<Unit>().is_err());
    }

    #[test]
    fn test_nutrition_factor_respects_unit_basis() {
        assert_eq!(Unit::G.nutrition_factor(150.0), 1.5);
        assert_eq!(Unit::Ml.nutrition_factor(50.0), 0.5);
        assert_eq!(Unit::Tsp.nutrition_factor(2.0), 2.0);
        assert_eq!(Unit::Tbsp.nutrition_factor(1.5), 1.5);
        assert_eq!(Unit::Piece.nutrition_factor(100.0), 1.0);
    }

    #[test]
    fn test_reference_cost() {
        let lentils = Ingredient {
            name: "red lentils".to_string(),
            quantity: 100.0,
            unit: Unit::G,
            category: IngredientCategory::Protein,
            cost_per_unit: 0.20,
            per_unit: Nutrients::default(),
        };
        assert!((lentils.reference_cost() - 20.0).abs() < 1e-9);

        let ghee = Ingredient {
            unit: Unit::Tbsp,
            cost_per_unit: 0.20,
            ..lentils.clone()
        };
        assert!((ghee.reference_cost() - 0.20).abs() < 1e-9);
    }

    #[test]
    fn test_accumulate_and_map_values() {
        let profile = Nutrients::new(100.0, 10.0, 20.0, 5.0, 2.0, 1.0, 50.0);
        let mut total = Nutrients::default();
        total.accumulate(&profile, 1.5);
        total.accumulate(&profile, 0.5);
        assert_eq!(total.calories, 200.0);
        assert_eq!(total.sodium, 100.0);

        let halved = total.map_values(|v| v / 2.0);
        assert_eq!(halved.protein, 10.0);
        assert_eq!(halved.iter().count(), 7);
    }
}

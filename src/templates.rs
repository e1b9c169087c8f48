use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::catalog::IngredientCategory;
use crate::request::{Cuisine, MealType};

/// A structural role in a template. Several slots may draw from the same
/// ingredient category (`Grain`/`BaseGrain`, `Protein`/`MainDish`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateSlot {
    BaseGrain,
    Grain,
    Protein,
    MainDish,
    Vegetable,
    Spice,
    Oil,
    Liquid,
}

pub struct SlotRule {
    pub slot: TemplateSlot,
    pub category: IngredientCategory,
    /// Quantity for the two-serving reference recipe, in the ingredient's unit.
    pub base_quantity: f64,
    pub candidate_keys: &'static [&'static str],
}

const GRAINS: &[&str] = &["rice", "basmati_rice", "quinoa", "oats"];
const PROTEINS: &[&str] = &["chicken", "tofu", "lentils", "chickpeas", "paneer"];
const VEGETABLES: &[&str] = &["spinach", "tomatoes", "onions", "bell_peppers", "cauliflower"];
const SPICES: &[&str] = &["turmeric", "cumin", "coriander", "ginger", "garam_masala"];
const OILS: &[&str] = &["olive_oil", "ghee", "coconut_oil"];
const LIQUIDS: &[&str] = &["almond_milk"];

pub const SLOT_RULES: &[SlotRule] = &[
    SlotRule { slot: TemplateSlot::Protein, category: IngredientCategory::Protein, base_quantity: 150.0, candidate_keys: PROTEINS },
    SlotRule { slot: TemplateSlot::MainDish, category: IngredientCategory::Protein, base_quantity: 150.0, candidate_keys: PROTEINS },
    SlotRule { slot: TemplateSlot::Grain, category: IngredientCategory::Grain, base_quantity: 100.0, candidate_keys: GRAINS },
    SlotRule { slot: TemplateSlot::BaseGrain, category: IngredientCategory::Grain, base_quantity: 100.0, candidate_keys: GRAINS },
    SlotRule { slot: TemplateSlot::Vegetable, category: IngredientCategory::Vegetable, base_quantity: 200.0, candidate_keys: VEGETABLES },
    SlotRule { slot: TemplateSlot::Spice, category: IngredientCategory::Spice, base_quantity: 1.0, candidate_keys: SPICES },
    SlotRule { slot: TemplateSlot::Oil, category: IngredientCategory::Oil, base_quantity: 2.0, candidate_keys: OILS },
    SlotRule { slot: TemplateSlot::Liquid, category: IngredientCategory::Liquid, base_quantity: 200.0, candidate_keys: LIQUIDS },
];

impl TemplateSlot {
    pub fn rule(self) -> &'static SlotRule {
        SLOT_RULES
            .iter()
            .find(|rule| rule.slot == self)
            .unwrap_or_else(|| unreachable!("every slot has a rule"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CookingMethod {
    Steam,
    Saute,
    Boil,
    Temper,
    Curry,
    Fry,
    SlowCook,
    PressureCook,
    Roast,
}

impl CookingMethod {
    /// Base cooking time in minutes before the difficulty multiplier.
    pub fn base_minutes(self) -> u32 {
        match self {
            CookingMethod::Steam => 15,
            CookingMethod::Saute => 10,
            CookingMethod::Boil => 20,
            CookingMethod::Temper => 5,
            CookingMethod::Curry => 30,
            CookingMethod::Fry => 15,
            CookingMethod::SlowCook => 240,
            CookingMethod::PressureCook => 30,
            CookingMethod::Roast => 60,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CookingMethod::Steam => "steam",
            CookingMethod::Saute => "sauté",
            CookingMethod::Boil => "boil",
            CookingMethod::Temper => "temper",
            CookingMethod::Curry => "curry",
            CookingMethod::Fry => "fry",
            CookingMethod::SlowCook => "slow_cook",
            CookingMethod::PressureCook => "pressure_cook",
            CookingMethod::Roast => "roast",
        }
    }
}

impl fmt::Display for CookingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Template {
    pub structure: Vec<TemplateSlot>,
    pub cooking_methods: Vec<CookingMethod>,
    pub flavor_profile: Vec<&'static str>,
}

pub const DEFAULT_TEMPLATE_KEY: &str = "indian_lunch";

pub fn template_key(cuisine: Cuisine, meal_type: MealType) -> String {
    format!("{}_{}", cuisine.as_str(), meal_type.as_str())
}

/// Static "{cuisine}_{mealtype}" → template table with a fixed fallback.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    pub fn builtin() -> Self {
        use CookingMethod::*;
        use TemplateSlot::*;

        let mut templates = HashMap::new();
        templates.insert(
            "indian_breakfast".to_string(),
            Template {
                structure: vec![BaseGrain, Protein, Vegetable, Spice, Oil],
                cooking_methods: vec![Steam, Saute, Boil, Temper],
                flavor_profile: vec!["aromatic", "spicy", "savory"],
            },
        );
        templates.insert(
            DEFAULT_TEMPLATE_KEY.to_string(),
            Template {
                structure: vec![MainDish, Vegetable, Grain, Spice, Oil],
                cooking_methods: vec![Curry, Saute, Steam],
                flavor_profile: vec!["rich", "aromatic", "balanced"],
            },
        );
        templates.insert(
            "indian_dinner".to_string(),
            Template {
                structure: vec![Protein, Vegetable, Grain, Spice, Oil],
                cooking_methods: vec![SlowCook, PressureCook, Curry],
                flavor_profile: vec!["warm", "comforting", "nutritious"],
            },
        );
        TemplateRegistry { templates }
    }

    pub fn get(&self, key: &str) -> Option<&Template> {
        self.templates.get(key)
    }

    /// Looks up the template for a cuisine and meal type, falling back to
    /// the default template on a miss.
    pub fn lookup(&self, cuisine: Cuisine, meal_type: MealType) -> &Template {
        let key = template_key(cuisine, meal_type);
        if let Some(template) = self.get(&key) {
            return template;
        }
        tracing::debug!(template = %key, fallback = DEFAULT_TEMPLATE_KEY, "no template registered, using fallback");
        self.default_template()
    }

    pub fn default_template(&self) -> &Template {
        self.templates
            .get(DEFAULT_TEMPLATE_KEY)
            .unwrap_or_else(|| unreachable!("default template is always registered"))
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_template() {
        let registry = TemplateRegistry::builtin();
        let dinner = registry.lookup(Cuisine::Indian, MealType::Dinner);
        assert_eq!(dinner.structure[0], TemplateSlot::Protein);
        assert!(dinner.cooking_methods.contains(&CookingMethod::SlowCook));
    }

    #[test]
    fn test_lookup_miss_falls_back_to_default() {
        let registry = TemplateRegistry::builtin();
        let fallback = registry.lookup(Cuisine::Mexican, MealType::Dessert);
        assert_eq!(fallback, registry.default_template());
        assert_eq!(fallback.structure[0], TemplateSlot::MainDish);
    }

    #[test]
    fn test_slot_rules_cover_every_slot() {
        for slot in [
            TemplateSlot::BaseGrain,
            TemplateSlot::Grain,
            TemplateSlot::Protein,
            TemplateSlot::MainDish,
            TemplateSlot::Vegetable,
            TemplateSlot::Spice,
            TemplateSlot::Oil,
            TemplateSlot::Liquid,
        ] {
            assert_eq!(slot.rule().slot, slot);
        }
        assert_eq!(TemplateSlot::MainDish.rule().base_quantity, 150.0);
        assert_eq!(TemplateSlot::Liquid.rule().category, IngredientCategory::Liquid);
    }

    #[test]
    fn test_template_key_format() {
        assert_eq!(template_key(Cuisine::Indian, MealType::Breakfast), "indian_breakfast");
    }
}

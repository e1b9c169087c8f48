use crate::catalog::{Ingredient, UnitClass, Unit};
use crate::templates::TemplateSlot;

// Metric rounding thresholds (g, ml).
const METRIC_FINE_LIMIT: f64 = 10.0;
const METRIC_COARSE_LIMIT: f64 = 50.0;
const METRIC_MID_STEP: f64 = 5.0;
const METRIC_COARSE_STEP: f64 = 10.0;

// Spoon rounding thresholds (tsp, tbsp, cup).
const SPOON_MINIMUM: f64 = 0.25;
const SPOON_FINE_STEP: f64 = 0.25;
const SPOON_COARSE_STEP: f64 = 0.5;

/// Reference serving count the slot base quantities are written for.
pub const REFERENCE_SERVINGS: f64 = 2.0;

fn round_to_step(quantity: f64, step: f64) -> f64 {
    (quantity / step).round() * step
}

fn round_one_decimal(quantity: f64) -> f64 {
    (quantity * 10.0).round() / 10.0
}

const ONE_DECIMAL_STEP: f64 = 0.1;

/// The grid a quantity of this size is rounded onto.
pub fn rounding_step(quantity: f64, unit: Unit) -> f64 {
    match unit.class() {
        UnitClass::Metric => {
            if quantity < METRIC_FINE_LIMIT {
                ONE_DECIMAL_STEP
            } else if quantity < METRIC_COARSE_LIMIT {
                METRIC_MID_STEP
            } else {
                METRIC_COARSE_STEP
            }
        }
        UnitClass::Spoon => {
            if quantity < 1.0 {
                SPOON_FINE_STEP
            } else {
                SPOON_COARSE_STEP
            }
        }
        UnitClass::Count => ONE_DECIMAL_STEP,
    }
}

/// Rounds a quantity to a practical cooking amount for its unit.
///
/// Idempotent: re-rounding a rounded value returns it unchanged.
pub fn round_quantity(quantity: f64, unit: Unit) -> f64 {
    if unit.class() == UnitClass::Spoon && quantity < SPOON_MINIMUM {
        return SPOON_MINIMUM;
    }
    let step = rounding_step(quantity, unit);
    if step == ONE_DECIMAL_STEP {
        round_one_decimal(quantity)
    } else {
        round_to_step(quantity, step)
    }
}

/// Sets the slot's base quantity, scaled from the two-serving reference.
pub fn adjust_quantity(ingredient: &Ingredient, slot: TemplateSlot, servings: u32) -> Ingredient {
    let base = slot.rule().base_quantity;
    ingredient.with_quantity(base * f64::from(servings) / REFERENCE_SERVINGS)
}

/// Collapses entries sharing a name (summing quantities, first-seen entry
/// wins for every other field) and rounds each merged quantity.
/// First-seen order is preserved.
pub fn merge_ingredients(ingredients: &[Ingredient]) -> Vec<Ingredient> {
    let mut merged: Vec<Ingredient> = Vec::with_capacity(ingredients.len());
    for ingredient in ingredients {
        match merged.iter_mut().find(|m| m.name == ingredient.name) {
            Some(existing) => existing.quantity += ingredient.quantity,
            None => merged.push(ingredient.clone()),
        }
    }
    merged
        .into_iter()
        .map(|m| {
            let rounded = round_quantity(m.quantity, m.unit);
            m.with_quantity(rounded)
        })
        .collect()
}

/// Renders a quantity for instruction text: whole numbers without a decimal
/// point, otherwise at most two decimals with trailing zeros trimmed.
pub fn format_quantity(quantity: f64) -> String {
    if (quantity - quantity.round()).abs() < 1e-9 {
        return format!("{}", quantity.round() as i64);
    }
    let text = format!("{:.2}", quantity);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{IngredientCategory, Nutrients};

    fn ingredient(name: &str, quantity: f64, unit: Unit) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            quantity,
            unit,
            category: IngredientCategory::Vegetable,
            cost_per_unit: 0.1,
            per_unit: Nutrients::default(),
        }
    }

    #[test]
    fn test_round_metric_bands() {
        assert_eq!(round_quantity(7.46, Unit::G), 7.5);
        assert_eq!(round_quantity(23.0, Unit::G), 25.0);
        assert_eq!(round_quantity(47.6, Unit::Ml), 50.0);
        assert_eq!(round_quantity(154.0, Unit::G), 150.0);
        assert_eq!(round_quantity(225.0, Unit::G), 230.0);
    }

    #[test]
    fn test_round_spoon_bands() {
        assert_eq!(round_quantity(0.1, Unit::Tsp), 0.25);
        assert_eq!(round_quantity(0.6, Unit::Tbsp), 0.5);
        assert_eq!(round_quantity(0.9, Unit::Cup), 1.0);
        assert_eq!(round_quantity(1.2, Unit::Tsp), 1.0);
        assert_eq!(round_quantity(1.3, Unit::Tsp), 1.5);
    }

    #[test]
    fn test_round_count_units_to_one_decimal() {
        assert_eq!(round_quantity(2.345, Unit::Piece), 2.3);
    }

    #[test]
    fn test_rounding_step_bands() {
        assert_eq!(rounding_step(9.9, Unit::G), 0.1);
        assert_eq!(rounding_step(10.0, Unit::Ml), 5.0);
        assert_eq!(rounding_step(75.0, Unit::G), 10.0);
        assert_eq!(rounding_step(0.1, Unit::Tsp), 0.25);
        assert_eq!(rounding_step(1.0, Unit::Tbsp), 0.5);
        assert_eq!(rounding_step(3.0, Unit::Piece), 0.1);
    }

    #[test]
    fn test_rounding_is_idempotent() {
        let samples = [
            0.0, 0.04, 0.12, 0.24, 0.26, 0.37, 0.5, 0.74, 0.99, 1.0, 1.24, 1.26, 2.75, 3.3, 7.46,
            9.95, 9.96, 10.0, 12.5, 27.5, 47.4, 49.9, 50.0, 55.0, 99.9, 125.0, 333.3, 1234.5,
        ];
        for unit in [Unit::G, Unit::Ml, Unit::Tsp, Unit::Tbsp, Unit::Cup, Unit::Piece] {
            for x in samples {
                let once = round_quantity(x, unit);
                assert_eq!(round_quantity(once, unit), once, "x={} unit={}", x, unit);
            }
        }
    }

    #[test]
    fn test_adjust_quantity_scales_from_two_servings() {
        let lentils = ingredient("red lentils", 100.0, Unit::G);
        assert_eq!(adjust_quantity(&lentils, TemplateSlot::MainDish, 2).quantity, 150.0);
        assert_eq!(adjust_quantity(&lentils, TemplateSlot::Protein, 4).quantity, 300.0);
        assert_eq!(adjust_quantity(&lentils, TemplateSlot::Spice, 3).quantity, 1.5);
        assert_eq!(adjust_quantity(&lentils, TemplateSlot::Vegetable, 1).unit, Unit::G);
    }

    #[test]
    fn test_merge_sums_duplicates_and_keeps_first_seen_order() {
        let list = vec![
            ingredient("onions", 120.0, Unit::G),
            ingredient("cumin seeds", 0.5, Unit::Tsp),
            ingredient("onions", 33.0, Unit::G),
        ];
        let merged = merge_ingredients(&list);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].name, "onions");
        assert_eq!(merged[0].quantity, 150.0);
        assert_eq!(merged[1].quantity, 0.5);
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(4.0), "4");
        assert_eq!(format_quantity(1.5), "1.5");
        assert_eq!(format_quantity(0.25), "0.25");
        assert_eq!(format_quantity(2.3000000000000003), "2.3");
    }
}

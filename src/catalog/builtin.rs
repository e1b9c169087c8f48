use super::ingredient::IngredientCategory::{Grain, Liquid, Oil, Protein, Spice, Vegetable};
use super::ingredient::Unit::{Ml, Tbsp, Tsp, G};
use super::ingredient::{Ingredient, IngredientCategory, Nutrients, Unit};

// key, display name, unit, category, cost per unit,
// calories, protein, carbs, fats, fiber, sugar, sodium.
// Metric rows are per 100 g/ml; spoon rows are per single tsp/tbsp.
type Row = (&'static str, &'static str, Unit, IngredientCategory, f64, Nutrients);

const ROWS: &[Row] = &[
    // Grains, cooked
    ("basmati_rice", "basmati rice", G, Grain, 0.15, Nutrients::new(130.0, 2.7, 28.0, 0.3, 0.4, 0.1, 1.0)),
    ("rice", "rice", G, Grain, 0.15, Nutrients::new(130.0, 2.7, 28.0, 0.3, 0.4, 0.1, 1.0)),
    ("quinoa", "quinoa", G, Grain, 0.25, Nutrients::new(120.0, 4.4, 22.0, 1.9, 2.8, 0.9, 5.0)),
    ("oats", "oats", G, Grain, 0.10, Nutrients::new(68.0, 2.4, 12.0, 1.4, 2.8, 0.1, 3.0)),
    // Proteins
    ("chicken", "chicken", G, Protein, 0.80, Nutrients::new(165.0, 31.0, 0.0, 3.6, 0.0, 0.0, 74.0)),
    ("tofu", "tofu", G, Protein, 0.30, Nutrients::new(76.0, 8.0, 1.9, 4.8, 0.4, 0.6, 7.0)),
    ("lentils", "red lentils", G, Protein, 0.20, Nutrients::new(116.0, 9.0, 20.0, 0.4, 7.9, 0.2, 2.0)),
    ("chickpeas", "chickpeas", G, Protein, 0.25, Nutrients::new(164.0, 8.9, 27.0, 2.6, 8.0, 2.4, 7.0)),
    ("paneer", "paneer", G, Protein, 0.60, Nutrients::new(265.0, 18.0, 2.2, 20.0, 0.0, 2.2, 18.0)),
    // Vegetables
    ("spinach", "spinach", G, Vegetable, 0.15, Nutrients::new(23.0, 2.9, 3.6, 0.4, 2.2, 0.4, 79.0)),
    ("tomatoes", "tomatoes", G, Vegetable, 0.20, Nutrients::new(18.0, 0.9, 3.9, 0.2, 1.2, 2.6, 5.0)),
    ("onions", "onions", G, Vegetable, 0.10, Nutrients::new(40.0, 1.1, 9.3, 0.1, 1.7, 4.2, 4.0)),
    ("bell_peppers", "bell peppers", G, Vegetable, 0.30, Nutrients::new(31.0, 1.0, 7.0, 0.3, 2.5, 4.2, 4.0)),
    ("cauliflower", "cauliflower", G, Vegetable, 0.25, Nutrients::new(25.0, 1.9, 5.0, 0.3, 2.0, 1.9, 15.0)),
    // Spices
    ("turmeric", "turmeric", Tsp, Spice, 0.05, Nutrients::new(8.0, 0.3, 1.4, 0.2, 0.5, 0.1, 1.0)),
    ("cumin", "cumin seeds", Tsp, Spice, 0.03, Nutrients::new(8.0, 0.4, 0.9, 0.5, 0.2, 0.1, 10.0)),
    ("coriander", "coriander powder", Tsp, Spice, 0.02, Nutrients::new(5.0, 0.2, 0.9, 0.3, 0.8, 0.1, 35.0)),
    ("ginger", "ginger", Tsp, Spice, 0.05, Nutrients::new(2.0, 0.04, 0.4, 0.02, 0.05, 0.03, 0.3)),
    ("garam_masala", "garam masala", Tsp, Spice, 0.08, Nutrients::new(6.0, 0.3, 1.2, 0.3, 0.4, 0.1, 8.0)),
    // Oils and fats
    ("olive_oil", "olive oil", Tbsp, Oil, 0.15, Nutrients::new(119.0, 0.0, 0.0, 13.5, 0.0, 0.0, 0.0)),
    ("ghee", "ghee", Tbsp, Oil, 0.20, Nutrients::new(112.0, 0.0, 0.0, 12.7, 0.0, 0.0, 0.0)),
    ("coconut_oil", "coconut oil", Tbsp, Oil, 0.18, Nutrients::new(117.0, 0.0, 0.0, 13.6, 0.0, 0.0, 0.0)),
    // Dairy alternatives
    ("almond_milk", "almond milk", Ml, Liquid, 0.35, Nutrients::new(17.0, 0.6, 0.3, 1.1, 0.1, 0.3, 63.0)),
];

pub(crate) fn builtin_entries() -> Vec<(String, Ingredient)> {
    ROWS.iter()
        .map(|(key, name, unit, category, cost, per_unit)| {
            let quantity = unit.budget_reference_quantity();
            (
                key.to_string(),
                Ingredient {
                    name: name.to_string(),
                    quantity,
                    unit: *unit,
                    category: *category,
                    cost_per_unit: *cost,
                    per_unit: *per_unit,
                },
            )
        })
        .collect()
}

use chrono::{DateTime, Datelike, Utc};
use std::collections::BTreeSet;

use crate::catalog::{Ingredient, IngredientCategory};
use crate::request::{Cuisine, Difficulty, MealType, RecipeRequest};
use crate::templates::CookingMethod;

/// Restriction → tag it contributes.
pub const RESTRICTION_TAGS: &[(&str, &str)] = &[
    ("vegetarian", "vegetarian"),
    ("vegan", "vegan"),
    ("low_sugar", "low-sugar"),
];

/// Ingredient-name substring → benefit it contributes.
pub const INGREDIENT_BENEFITS: &[(&str, &str)] = &[
    ("turmeric", "anti-inflammatory"),
    ("ginger", "digestive health"),
    ("spinach", "iron rich"),
    ("lentils", "high fiber"),
    ("quinoa", "complete protein"),
];

/// Health condition → benefit it contributes.
pub const CONDITION_BENEFITS: &[(&str, &str)] = &[
    ("diabetes", "diabetes-friendly"),
    ("hypertension", "heart-healthy"),
];

const VITAMIN_RICH: &[&str] = &["spinach", "bell peppers"];

const DESCRIPTION_INGREDIENTS: usize = 3;
const PREP_MINUTES_PER_INGREDIENT: f64 = 3.0;

/// Capitalises the first letter of every alphabetic run, lowercasing the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

pub fn recipe_name(cuisine: Cuisine, meal_type: MealType, request: &RecipeRequest) -> String {
    let cuisine = title_case(cuisine.as_str());
    let meal = title_case(meal_type.as_str());
    match request.ingredient_hints().next() {
        Some(hint) => format!("{} {} {}", cuisine, title_case(&hint.replace('_', " ")), meal),
        None => format!("{} {} Bowl", cuisine, meal),
    }
}

/// Names the main ingredients among the first three of the list.
pub fn recipe_description(
    cuisine: Cuisine,
    meal_type: MealType,
    ingredients: &[Ingredient],
    request: &RecipeRequest,
) -> String {
    let featured: Vec<String> = ingredients
        .iter()
        .take(DESCRIPTION_INGREDIENTS)
        .filter(|i| {
            matches!(
                i.category,
                IngredientCategory::Protein | IngredientCategory::Vegetable | IngredientCategory::Grain
            )
        })
        .map(|i| title_case(&i.name))
        .collect();

    format!(
        "A delicious {} {} featuring {}. This nutritious recipe serves {} people and can be prepared in under {} minutes. Perfect for meeting your dietary needs while staying within budget.",
        title_case(cuisine.as_str()),
        meal_type.as_str(),
        featured.join(", "),
        request.serving_size,
        request.time_constraint
    )
}

pub fn recipe_tags(ingredients: &[Ingredient], request: &RecipeRequest) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();

    for (restriction, tag) in RESTRICTION_TAGS {
        if request.has_restriction(restriction) {
            tags.insert(tag.to_string());
        }
    }

    for ingredient in ingredients {
        if ingredient.name.contains("lentils") {
            tags.insert("high-protein".to_string());
        }
        if VITAMIN_RICH.contains(&ingredient.name.as_str()) {
            tags.insert("vitamin-rich".to_string());
        }
    }

    tags.extend(
        request
            .cuisine_preference
            .iter()
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty()),
    );
    tags.insert(request.meal_type.as_str().to_string());
    tags.insert(request.difficulty.as_str().to_string());
    tags
}

/// Season tags for the month of `now`.
pub fn seasonal_tags(now: DateTime<Utc>) -> BTreeSet<String> {
    let tags: [&str; 2] = match now.month() {
        12 | 1 | 2 => ["winter", "comfort"],
        3..=5 => ["spring", "fresh"],
        6..=8 => ["summer", "light"],
        _ => ["autumn", "warm"],
    };
    tags.iter().map(|t| t.to_string()).collect()
}

pub fn health_benefits(ingredients: &[Ingredient], request: &RecipeRequest) -> BTreeSet<String> {
    let mut benefits = BTreeSet::new();
    for ingredient in ingredients {
        for (needle, benefit) in INGREDIENT_BENEFITS {
            if ingredient.name.contains(needle) {
                benefits.insert(benefit.to_string());
            }
        }
    }
    for (condition, benefit) in CONDITION_BENEFITS {
        if request.has_condition(condition) {
            benefits.insert(benefit.to_string());
        }
    }
    benefits
}

pub fn preparation_time(ingredient_count: usize, difficulty: Difficulty) -> u32 {
    (ingredient_count as f64 * PREP_MINUTES_PER_INGREDIENT * difficulty.prep_multiplier()) as u32
}

pub fn cooking_time(method: CookingMethod, difficulty: Difficulty) -> u32 {
    (f64::from(method.base_minutes()) * difficulty.cook_multiplier()) as u32
}

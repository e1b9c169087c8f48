use crate::catalog::{Ingredient, IngredientCategory};

/// Quantity below which a vegetable is used whole rather than chopped.
const CHOP_THRESHOLD: f64 = 50.0;

/// Numbered step list. Each step text carries its own "{n}. " prefix.
struct Steps {
    lines: Vec<String>,
}

impl Steps {
    fn new() -> Self {
        Steps { lines: Vec::new() }
    }

    fn push(&mut self, text: impl AsRef<str>) {
        let number = self.lines.len() + 1;
        self.lines.push(format!("{}. {}", number, text.as_ref()));
    }
}

fn is_lentils(ingredient: &Ingredient) -> bool {
    ingredient.name.contains("lentils")
}

fn first_of(ingredients: &[Ingredient], category: IngredientCategory) -> Option<&Ingredient> {
    ingredients.iter().find(|i| i.category == category)
}

fn names_of(ingredients: &[Ingredient], category: IngredientCategory) -> Vec<&str> {
    ingredients
        .iter()
        .filter(|i| i.category == category)
        .map(|i| i.name.as_str())
        .collect()
}

/// Builds the ordered cooking steps for a merged ingredient list.
///
/// Prep steps follow ingredient order; the cooking phase follows a fixed
/// oil → spice → protein → vegetable → grain order, each step present only
/// when its category is.
pub fn synthesize_instructions(ingredients: &[Ingredient]) -> Vec<String> {
    let mut steps = Steps::new();
    steps.push("Gather all ingredients and wash vegetables thoroughly.");

    for ingredient in ingredients {
        match ingredient.category {
            IngredientCategory::Vegetable if ingredient.quantity >= CHOP_THRESHOLD => {
                steps.push(format!("Chop {} into medium pieces.", ingredient.name));
            }
            IngredientCategory::Protein if is_lentils(ingredient) => {
                steps.push(format!("Rinse {} until water runs clear.", ingredient.name));
            }
            IngredientCategory::Grain => {
                steps.push(format!("Rinse {} and drain well.", ingredient.name));
            }
            _ => {}
        }
    }

    if let Some(oil) = first_of(ingredients, IngredientCategory::Oil) {
        steps.push(format!("Heat {} in a large pan over medium heat.", oil.name));
    }

    let spices = names_of(ingredients, IngredientCategory::Spice);
    if !spices.is_empty() {
        steps.push(format!(
            "Add {} and sauté for 30 seconds until fragrant.",
            spices.join(", ")
        ));
    }

    if let Some(protein) = first_of(ingredients, IngredientCategory::Protein) {
        if is_lentils(protein) {
            steps.push(format!("Add {} with 2 cups water and bring to boil.", protein.name));
        } else {
            steps.push(format!("Add {} and cook for 3-4 minutes.", protein.name));
        }
    }

    let vegetables = names_of(ingredients, IngredientCategory::Vegetable);
    if !vegetables.is_empty() {
        steps.push(format!(
            "Add {} and cook until tender, about 8-10 minutes.",
            vegetables.join(", ")
        ));
    }

    if let Some(grain) = first_of(ingredients, IngredientCategory::Grain) {
        steps.push(format!(
            "In a separate pot, cook {} according to package instructions.",
            grain.name
        ));
    }

    steps.push("Taste and adjust salt and spices as needed.");
    steps.push("Serve hot with the cooked grain. Enjoy!");
    steps.lines
}

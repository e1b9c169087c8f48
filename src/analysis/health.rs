use crate::catalog::Nutrients;
use crate::recipe::Recipe;

const BASE_SCORE: i32 = 50;

/// Scores one serving on a 0-100 scale: rewards protein, fiber and a
/// moderate calorie count, penalises sodium, sugar and fat.
pub fn health_score(per_serving: &Nutrients) -> u8 {
    let mut score = BASE_SCORE;

    if per_serving.protein >= 15.0 {
        score += 10;
    }
    if per_serving.fiber >= 5.0 {
        score += 10;
    }
    if per_serving.calories <= 500.0 {
        score += 10;
    }

    if per_serving.sodium > 800.0 {
        score -= 10;
    }
    if per_serving.sugar > 15.0 {
        score -= 10;
    }
    if per_serving.fats > 20.0 {
        score -= 5;
    }

    score.clamp(0, 100) as u8
}

pub fn dietary_flags(recipe: &Recipe) -> Vec<String> {
    let n = &recipe.nutrition_per_serving;
    let mut flags = Vec::new();

    if n.calories > 600.0 {
        flags.push("high-calorie");
    } else if n.calories < 200.0 {
        flags.push("low-calorie");
    }
    if n.protein > 20.0 {
        flags.push("high-protein");
    }
    if n.sodium > 800.0 {
        flags.push("high-sodium");
    }
    if n.fiber > 8.0 {
        flags.push("high-fiber");
    }
    if recipe.has_tag("vegan") {
        flags.push("vegan-friendly");
    }
    if recipe.has_tag("vegetarian") {
        flags.push("vegetarian-friendly");
    }

    flags.into_iter().map(String::from).collect()
}

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod recipe;
pub mod recipe_aggregator;
pub mod request;
pub mod synth;
pub mod templates;

pub use engine::RecipeEngine;
pub use error::{EngineError, EngineResult};
pub use recipe::Recipe;
pub use request::{Cuisine, Difficulty, MealType, RecipeRequest};

pub mod assembler;
pub mod constraints;
pub mod instructions;
pub mod quantity;
pub mod scaler;
pub mod selector;
pub mod substitution;

pub use quantity::{merge_ingredients, round_quantity};
pub use scaler::scale_recipe;
pub use substitution::{suggest_substitutions, Substitution};

//! Domain models with validation at construction
//!
//! Request payloads arrive with every field optional so that a missing
//! field is reported as a ValidationError (400) rather than a body
//! rejection. Converting a payload into its validated field set is the
//! only way to obtain a value the repositories will accept.

pub mod validation;
pub mod ids;
pub mod recipe;
pub mod ingredient;
pub mod recipe_ingredient;

pub use validation::ValidationError;
pub use ids::EntityId;
pub use recipe::{Recipe, RecipeFields, RecipePayload};
pub use ingredient::{Ingredient, IngredientFields, IngredientPayload};
pub use recipe_ingredient::{
    Quantity, RecipeIngredient, RecipeIngredientKey, RecipeIngredientKeyPayload,
    RecipeIngredientLine, RecipeIngredientPayload,
};

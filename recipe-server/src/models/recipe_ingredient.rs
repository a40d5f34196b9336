//! Recipe-ingredient association
//!
//! An association row has no surrogate id. It is addressed by the pair
//! (recipe id, ingredient id), carried as a single `RecipeIngredientKey`
//! from request validation down to the statement that binds it.

use serde::{Deserialize, Serialize};

use super::validation::required;
use super::{EntityId, ValidationError};

/// Composite identity of an association row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredientKey {
    pub recipe_id: EntityId,
    pub ingredient_id: EntityId,
}

impl RecipeIngredientKey {
    pub fn new(recipe_id: EntityId, ingredient_id: EntityId) -> Self {
        Self {
            recipe_id,
            ingredient_id,
        }
    }

    fn from_parts(recipe_id: Option<i64>, ingredient_id: Option<i64>) -> Result<Self, ValidationError> {
        let recipe_id = EntityId::new("recipeId", required("recipeId", recipe_id)?)?;
        let ingredient_id = EntityId::new("ingredientId", required("ingredientId", ingredient_id)?)?;
        Ok(Self::new(recipe_id, ingredient_id))
    }
}

/// Amount of an ingredient in a recipe, in the ingredient's unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Quantity(f64);

impl Quantity {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationError::InvalidFormat {
                field: "quantity",
                reason: "must be a positive number",
            });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Validated association: full key plus quantity. Used for create and update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecipeIngredient {
    pub key: RecipeIngredientKey,
    pub quantity: Quantity,
}

/// Create/update request body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredientPayload {
    pub recipe_id: Option<i64>,
    pub ingredient_id: Option<i64>,
    pub quantity: Option<f64>,
}

impl TryFrom<RecipeIngredientPayload> for RecipeIngredient {
    type Error = ValidationError;

    fn try_from(p: RecipeIngredientPayload) -> Result<Self, Self::Error> {
        let key = RecipeIngredientKey::from_parts(p.recipe_id, p.ingredient_id)?;
        let quantity = Quantity::new(required("quantity", p.quantity)?)?;
        Ok(Self { key, quantity })
    }
}

/// Delete request body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredientKeyPayload {
    pub recipe_id: Option<i64>,
    pub ingredient_id: Option<i64>,
}

impl TryFrom<RecipeIngredientKeyPayload> for RecipeIngredientKey {
    type Error = ValidationError;

    fn try_from(p: RecipeIngredientKeyPayload) -> Result<Self, Self::Error> {
        Self::from_parts(p.recipe_id, p.ingredient_id)
    }
}

/// One ingredient line of a recipe, with name and unit resolved from Ingredients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredientLine {
    pub recipe_id: i64,
    pub ingredient_id: i64,
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: String,
}

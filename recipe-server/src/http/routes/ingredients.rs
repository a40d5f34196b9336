//! Ingredient endpoints

use std::sync::Arc;

use axum::Router;

use super::entities::{self, Resource};
use crate::http::server::AppState;
use crate::models::{Ingredient, IngredientFields, IngredientPayload, ValidationError};

impl Resource for Ingredient {
    type Payload = IngredientPayload;

    const PATH: &'static str = "/Ingredients";

    fn validate(payload: IngredientPayload) -> Result<IngredientFields, ValidationError> {
        IngredientFields::try_from(payload)
    }
}

/// Ingredient routes
pub fn router() -> Router<Arc<AppState>> {
    entities::router::<Ingredient>()
}

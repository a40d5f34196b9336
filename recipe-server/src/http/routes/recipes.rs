//! Recipe endpoints

use std::sync::Arc;

use axum::Router;

use super::entities::{self, Resource};
use crate::http::server::AppState;
use crate::models::{Recipe, RecipeFields, RecipePayload, ValidationError};

impl Resource for Recipe {
    type Payload = RecipePayload;

    const PATH: &'static str = "/Recipes";

    fn validate(payload: RecipePayload) -> Result<RecipeFields, ValidationError> {
        RecipeFields::try_from(payload)
    }
}

/// Recipe routes
pub fn router() -> Router<Arc<AppState>> {
    entities::router::<Recipe>()
}

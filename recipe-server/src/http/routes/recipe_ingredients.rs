//! Recipe_Ingredients endpoints
//!
//! Mutations are addressed by the (recipeId, ingredientId) pair in the
//! request body; there is no item path.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::instrument;

use super::MessageResponse;
use crate::db::RecipeIngredientRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{
    EntityId, RecipeIngredient, RecipeIngredientKey, RecipeIngredientKeyPayload,
    RecipeIngredientLine, RecipeIngredientPayload,
};

/// Response to a successful create: the composite identity
#[derive(Debug, Serialize)]
pub struct CreatedAssociation {
    #[serde(flatten)]
    pub key: RecipeIngredientKey,
    pub message: &'static str,
}

/// GET /Recipe_Ingredients/{recipeId} - ingredient lines of one recipe
#[instrument(skip(state))]
async fn list_for_recipe(
    State(state): State<Arc<AppState>>,
    Path(recipe_id): Path<String>,
) -> Result<Json<Vec<RecipeIngredientLine>>, ApiError> {
    let recipe_id = EntityId::parse("recipeId", &recipe_id)?;
    let lines = RecipeIngredientRepo::new(&state.pool)
        .list_for_recipe(recipe_id)
        .await?;
    Ok(Json(lines))
}

/// POST /Recipe_Ingredients - attach an ingredient to a recipe
#[instrument(skip_all, fields(key = tracing::field::Empty))]
async fn create_association(
    State(state): State<Arc<AppState>>,
    ValidJson(payload): ValidJson<RecipeIngredientPayload>,
) -> Result<(StatusCode, Json<CreatedAssociation>), ApiError> {
    let assoc = RecipeIngredient::try_from(payload)?;
    tracing::Span::current().record("key", tracing::field::debug(&assoc.key));

    let key = RecipeIngredientRepo::new(&state.pool).create(&assoc).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedAssociation {
            key,
            message: "Recipe ingredient added successfully",
        }),
    ))
}

/// PUT /Recipe_Ingredients - change the quantity of one pair
#[instrument(skip_all, fields(key = tracing::field::Empty))]
async fn update_association(
    State(state): State<Arc<AppState>>,
    ValidJson(payload): ValidJson<RecipeIngredientPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let assoc = RecipeIngredient::try_from(payload)?;
    tracing::Span::current().record("key", tracing::field::debug(&assoc.key));

    RecipeIngredientRepo::new(&state.pool)
        .update_quantity(&assoc)
        .await?;

    Ok(Json(MessageResponse::new(
        "Recipe ingredient updated successfully",
    )))
}

/// DELETE /Recipe_Ingredients - detach an ingredient from a recipe
#[instrument(skip_all, fields(key = tracing::field::Empty))]
async fn delete_association(
    State(state): State<Arc<AppState>>,
    ValidJson(payload): ValidJson<RecipeIngredientKeyPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let key = RecipeIngredientKey::try_from(payload)?;
    tracing::Span::current().record("key", tracing::field::debug(&key));

    RecipeIngredientRepo::new(&state.pool).delete(&key).await?;

    Ok(Json(MessageResponse::new(
        "Recipe ingredient deleted successfully",
    )))
}

/// Recipe ingredient routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/Recipe_Ingredients",
            post(create_association)
                .put(update_association)
                .delete(delete_association),
        )
        .route("/Recipe_Ingredients/{recipe_id}", get(list_for_recipe))
}

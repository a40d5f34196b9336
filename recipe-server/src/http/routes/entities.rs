//! Handlers shared by the single-key resources
//!
//! Recipes and Ingredients expose the same five operations. Each handler
//! here is generic over a `Resource` and is mounted once per table.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::instrument;

use super::MessageResponse;
use crate::db::{Entity, EntityRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson};
use crate::http::server::AppState;
use crate::models::{EntityId, ValidationError};

/// An entity exposed over HTTP
pub trait Resource: Entity + Serialize {
    /// Request body for create and replace
    type Payload: DeserializeOwned + Send + 'static;

    /// Collection path ("/Recipes")
    const PATH: &'static str;

    /// Validate a request body into the entity's full field set.
    fn validate(payload: Self::Payload) -> Result<Self::Fields, ValidationError>;
}

/// Response to a successful create
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: EntityId,
    pub message: String,
}

/// GET /{Resource}
#[instrument(skip_all, fields(resource = E::LABEL))]
pub async fn list<E: Resource>(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<E>>, ApiError> {
    let rows = EntityRepo::<E>::new(&state.pool).list_all().await?;
    Ok(Json(rows))
}

/// GET /{Resource}/{id}
#[instrument(skip_all, fields(resource = E::LABEL, id = %id))]
pub async fn get_one<E: Resource>(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<E>, ApiError> {
    let row = EntityRepo::<E>::new(&state.pool).get(id).await?;
    Ok(Json(row))
}

/// POST /{Resource}
#[instrument(skip_all, fields(resource = E::LABEL))]
pub async fn create<E: Resource>(
    State(state): State<Arc<AppState>>,
    ValidJson(payload): ValidJson<E::Payload>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let fields = E::validate(payload)?;
    let id = EntityRepo::<E>::new(&state.pool).create(&fields).await?;
    tracing::info!(id = %id, "created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: format!("{} added successfully", E::LABEL),
        }),
    ))
}

/// PUT /{Resource}/{id}
#[instrument(skip_all, fields(resource = E::LABEL, id = %id))]
pub async fn replace<E: Resource>(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    ValidJson(payload): ValidJson<E::Payload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let fields = E::validate(payload)?;
    EntityRepo::<E>::new(&state.pool).replace(id, &fields).await?;

    Ok(Json(MessageResponse::new(format!(
        "{} updated successfully",
        E::LABEL
    ))))
}

/// DELETE /{Resource}/{id}
#[instrument(skip_all, fields(resource = E::LABEL, id = %id))]
pub async fn delete<E: Resource>(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<MessageResponse>, ApiError> {
    EntityRepo::<E>::new(&state.pool).delete(id).await?;

    Ok(Json(MessageResponse::new(format!(
        "{} deleted successfully",
        E::LABEL
    ))))
}

/// Collection and item routes for one resource
pub fn router<E: Resource>() -> Router<Arc<AppState>> {
    let item_path = format!("{}/{{id}}", E::PATH);
    Router::new()
        .route(E::PATH, get(list::<E>).post(create::<E>))
        .route(
            &item_path,
            get(get_one::<E>).put(replace::<E>).delete(delete::<E>),
        )
}

//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the shared pool; every call acquires and releases its own connection
//! - Binds every caller-supplied value, identifiers come from constants
//! - Derives NotFound from the statement's own result, never a prior lookup

pub mod entities;
pub mod recipes;
pub mod ingredients;
pub mod recipe_ingredients;

pub use entities::{Entity, EntityRepo};
pub use recipe_ingredients::RecipeIngredientRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} not found")]
    NotFound { resource: &'static str, id: String },

    #[error("{message}")]
    Conflict { message: &'static str },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

//! Route handlers organized by resource

pub mod health;
pub mod entities;
pub mod recipes;
pub mod ingredients;
pub mod recipe_ingredients;

use serde::Serialize;

/// Body of a successful mutation
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

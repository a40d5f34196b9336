//! Recipe record and its validated field set

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::required_text;
use super::ValidationError;

/// Recipe row as stored
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub instructions: Option<String>,
    pub picture: String,
}

/// Create/replace request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipePayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub instructions: Option<String>,
    /// Older clients still send the column's former name.
    #[serde(alias = "picture1")]
    pub picture: Option<String>,
}

/// Validated full-record field set for create and replace.
///
/// Replace writes every column, so an omitted optional field clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeFields {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub instructions: Option<String>,
    pub picture: String,
}

impl TryFrom<RecipePayload> for RecipeFields {
    type Error = ValidationError;

    fn try_from(p: RecipePayload) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required_text("name", p.name)?,
            description: p.description,
            category: required_text("category", p.category)?,
            instructions: p.instructions,
            picture: required_text("picture", p.picture)?,
        })
    }
}

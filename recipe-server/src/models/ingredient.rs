//! Ingredient record and its validated field set

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::required_text;
use super::ValidationError;

/// Ingredient row as stored
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub calories: Option<f64>,
    pub unit: String,
}

/// Create/replace request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IngredientPayload {
    pub name: Option<String>,
    pub calories: Option<f64>,
    pub unit: Option<String>,
}

/// Validated full-record field set for create and replace.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientFields {
    pub name: String,
    pub calories: Option<f64>,
    pub unit: String,
}

impl TryFrom<IngredientPayload> for IngredientFields {
    type Error = ValidationError;

    fn try_from(p: IngredientPayload) -> Result<Self, Self::Error> {
        let name = required_text("name", p.name)?;
        if let Some(calories) = p.calories {
            if !calories.is_finite() || calories < 0.0 {
                return Err(ValidationError::InvalidFormat {
                    field: "calories",
                    reason: "must be a non-negative number",
                });
            }
        }
        Ok(Self {
            name,
            calories: p.calories,
            unit: required_text("unit", p.unit)?,
        })
    }
}

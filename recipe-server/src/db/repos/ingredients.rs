//! Ingredients table mapping

use super::entities::{Entity, SqliteQuery};
use crate::models::{Ingredient, IngredientFields};

impl Entity for Ingredient {
    type Fields = IngredientFields;

    const TABLE: &'static str = "Ingredients";
    const LABEL: &'static str = "Ingredient";
    const COLUMNS: &'static [&'static str] = &["name", "calories", "unit"];

    fn bind_fields<'q>(query: SqliteQuery<'q>, fields: &'q IngredientFields) -> SqliteQuery<'q> {
        query
            .bind(fields.name.as_str())
            .bind(fields.calories)
            .bind(fields.unit.as_str())
    }
}

//! Recipes table mapping

use super::entities::{Entity, SqliteQuery};
use crate::models::{Recipe, RecipeFields};

impl Entity for Recipe {
    type Fields = RecipeFields;

    const TABLE: &'static str = "Recipes";
    const LABEL: &'static str = "Recipe";
    const COLUMNS: &'static [&'static str] =
        &["name", "description", "category", "instructions", "picture"];

    fn bind_fields<'q>(query: SqliteQuery<'q>, fields: &'q RecipeFields) -> SqliteQuery<'q> {
        query
            .bind(fields.name.as_str())
            .bind(fields.description.as_deref())
            .bind(fields.category.as_str())
            .bind(fields.instructions.as_deref())
            .bind(fields.picture.as_str())
    }
}

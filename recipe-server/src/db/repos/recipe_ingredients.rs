//! Recipe_Ingredients repository
//!
//! Every mutation carries the full (recipe, ingredient) key and matches on
//! both columns together. Update and delete learn that a pair is absent
//! from the affected-row count alone.

use sqlx::{Row, SqlitePool};

use super::DbError;
use crate::models::{EntityId, RecipeIngredient, RecipeIngredientKey, RecipeIngredientLine};

const LABEL: &str = "Recipe ingredient";

/// Association repository
pub struct RecipeIngredientRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> RecipeIngredientRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Ingredient lines of one recipe, with name and unit joined in.
    ///
    /// The recipe row anchors a LEFT JOIN, so one statement tells the
    /// cases apart: no rows means the recipe is missing (NotFound), a
    /// single row with NULL association columns means an empty list.
    pub async fn list_for_recipe(
        &self,
        recipe_id: EntityId,
    ) -> Result<Vec<RecipeIngredientLine>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT
                r.id AS recipe_id,
                li.ingredient_id,
                li.ingredient_name,
                li.quantity,
                li.unit
            FROM Recipes r
            LEFT JOIN (
                SELECT ri.recipe_id, ri.ingredient_id, i.name AS ingredient_name, ri.quantity, i.unit
                FROM Recipe_Ingredients ri
                JOIN Ingredients i ON i.id = ri.ingredient_id
            ) li ON li.recipe_id = r.id
            WHERE r.id = ?
            ORDER BY li.ingredient_id
            "#,
        )
        .bind(recipe_id.get())
        .fetch_all(self.pool)
        .await?;

        if rows.is_empty() {
            return Err(DbError::not_found("Recipe", recipe_id));
        }

        let mut lines = Vec::with_capacity(rows.len());
        for row in rows {
            let Some(ingredient_id) = row.try_get::<Option<i64>, _>("ingredient_id")? else {
                continue;
            };
            lines.push(RecipeIngredientLine {
                recipe_id: row.try_get("recipe_id")?,
                ingredient_id,
                ingredient_name: row.try_get("ingredient_name")?,
                quantity: row.try_get("quantity")?,
                unit: row.try_get("unit")?,
            });
        }
        Ok(lines)
    }

    /// Insert an association row.
    ///
    /// Duplicate pairs and dangling references are refused by the table's
    /// constraints and come back as Conflict.
    pub async fn create(&self, assoc: &RecipeIngredient) -> Result<RecipeIngredientKey, DbError> {
        sqlx::query(
            "INSERT INTO Recipe_Ingredients (recipe_id, ingredient_id, quantity) VALUES (?, ?, ?)",
        )
        .bind(assoc.key.recipe_id.get())
        .bind(assoc.key.ingredient_id.get())
        .bind(assoc.quantity.get())
        .execute(self.pool)
        .await
        .map_err(constraint_error)?;

        Ok(assoc.key)
    }

    /// Set the quantity of the row addressed by the full key.
    pub async fn update_quantity(&self, assoc: &RecipeIngredient) -> Result<(), DbError> {
        let result = sqlx::query(
            "UPDATE Recipe_Ingredients SET quantity = ? WHERE recipe_id = ? AND ingredient_id = ?",
        )
        .bind(assoc.quantity.get())
        .bind(assoc.key.recipe_id.get())
        .bind(assoc.key.ingredient_id.get())
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(LABEL, describe(&assoc.key)));
        }
        Ok(())
    }

    pub async fn delete(&self, key: &RecipeIngredientKey) -> Result<(), DbError> {
        let result =
            sqlx::query("DELETE FROM Recipe_Ingredients WHERE recipe_id = ? AND ingredient_id = ?")
                .bind(key.recipe_id.get())
                .bind(key.ingredient_id.get())
                .execute(self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(LABEL, describe(key)));
        }
        Ok(())
    }
}

fn describe(key: &RecipeIngredientKey) -> String {
    format!("{}/{}", key.recipe_id, key.ingredient_id)
}

fn constraint_error(err: sqlx::Error) -> DbError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return DbError::Conflict {
                message: "Recipe ingredient already exists",
            };
        }
        if db_err.is_foreign_key_violation() {
            return DbError::Conflict {
                message: "Referenced recipe or ingredient does not exist",
            };
        }
    }
    DbError::Sqlx(err)
}

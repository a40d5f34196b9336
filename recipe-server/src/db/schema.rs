//! Table bootstrap
//!
//! Creates the three tables when absent. There is no versioning; an
//! existing database is left exactly as found.

use sqlx::SqlitePool;
use tracing::info;

const RECIPES: &str = r#"
    CREATE TABLE IF NOT EXISTS Recipes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT,
        category TEXT NOT NULL,
        instructions TEXT,
        picture TEXT NOT NULL
    )
"#;

const INGREDIENTS: &str = r#"
    CREATE TABLE IF NOT EXISTS Ingredients (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        calories REAL,
        unit TEXT NOT NULL
    )
"#;

// Deleting either parent removes its association rows in the same statement.
const RECIPE_INGREDIENTS: &str = r#"
    CREATE TABLE IF NOT EXISTS Recipe_Ingredients (
        recipe_id INTEGER NOT NULL REFERENCES Recipes(id) ON DELETE CASCADE,
        ingredient_id INTEGER NOT NULL REFERENCES Ingredients(id) ON DELETE CASCADE,
        quantity REAL NOT NULL,
        UNIQUE (recipe_id, ingredient_id)
    )
"#;

/// Create the Recipes, Ingredients and Recipe_Ingredients tables if missing.
pub async fn bootstrap(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in [RECIPES, INGREDIENTS, RECIPE_INGREDIENTS] {
        sqlx::query(statement).execute(pool).await?;
    }

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_recipe_ingredients_ingredient ON Recipe_Ingredients (ingredient_id)",
    )
    .execute(pool)
    .await?;

    info!("database schema ready");
    Ok(())
}

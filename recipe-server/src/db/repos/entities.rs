//! Single-key CRUD shared by Recipes and Ingredients
//!
//! The two tables differ only in their column set, so one repository is
//! parameterized over an `Entity` description instead of being written twice.

use std::marker::PhantomData;

use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};

use super::DbError;
use crate::models::EntityId;

/// Query with SQLite positional arguments
pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Table mapping for a single-primary-key entity.
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Send + Sync + Unpin + 'static {
    /// Validated field set written by create and replace
    type Fields: Send + Sync;

    /// Table name
    const TABLE: &'static str;

    /// Label used in error messages ("Recipe")
    const LABEL: &'static str;

    /// Writable columns, in the order `bind_fields` binds them
    const COLUMNS: &'static [&'static str];

    /// Bind one value per entry in `COLUMNS`.
    fn bind_fields<'q>(query: SqliteQuery<'q>, fields: &'q Self::Fields) -> SqliteQuery<'q>;
}

/// Repository over one entity table
pub struct EntityRepo<'a, E> {
    pool: &'a SqlitePool,
    _entity: PhantomData<fn() -> E>,
}

impl<'a, E: Entity> EntityRepo<'a, E> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    /// Every row, in the order the store returns them.
    pub async fn list_all(&self) -> Result<Vec<E>, DbError> {
        let sql = format!("SELECT id, {} FROM {}", E::COLUMNS.join(", "), E::TABLE);
        let rows = sqlx::query_as::<_, E>(&sql).fetch_all(self.pool).await?;
        Ok(rows)
    }

    pub async fn get(&self, id: EntityId) -> Result<E, DbError> {
        let sql = format!(
            "SELECT id, {} FROM {} WHERE id = ?",
            E::COLUMNS.join(", "),
            E::TABLE
        );
        sqlx::query_as::<_, E>(&sql)
            .bind(id.get())
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found(E::LABEL, id))
    }

    /// Insert one row and return the store-assigned id.
    pub async fn create(&self, fields: &E::Fields) -> Result<EntityId, DbError> {
        let placeholders = vec!["?"; E::COLUMNS.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            E::TABLE,
            E::COLUMNS.join(", "),
            placeholders
        );
        let result = E::bind_fields(sqlx::query(&sql), fields)
            .execute(self.pool)
            .await?;
        Ok(EntityId::from_store(result.last_insert_rowid()))
    }

    /// Overwrite every writable column of one row.
    ///
    /// A zero affected-row count is reported as NotFound.
    pub async fn replace(&self, id: EntityId, fields: &E::Fields) -> Result<(), DbError> {
        let assignments = E::COLUMNS
            .iter()
            .map(|column| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE {} SET {} WHERE id = ?", E::TABLE, assignments);
        let result = E::bind_fields(sqlx::query(&sql), fields)
            .bind(id.get())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(E::LABEL, id));
        }
        Ok(())
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), DbError> {
        let sql = format!("DELETE FROM {} WHERE id = ?", E::TABLE);
        let result = sqlx::query(&sql).bind(id.get()).execute(self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(E::LABEL, id));
        }
        Ok(())
    }
}

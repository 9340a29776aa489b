//! Sub-goal (KRA) repository

use sqlx::{FromRow, SqlitePool};

use super::{nest_kras, DbError, KraRow, TaskRow};
use crate::models::Kra;

#[derive(Debug, FromRow)]
struct InsertedKra {
    id: i64,
    name: String,
}

/// Sub-goal repository
pub struct KraRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> KraRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a sub-goal under `kpa_id`.
    ///
    /// A missing parent surfaces as `NotFound { resource: "KPA" }` from the
    /// foreign-key check.
    pub async fn create(&self, kpa_id: i64, name: &str) -> Result<Kra, DbError> {
        let row: InsertedKra =
            sqlx::query_as("INSERT INTO kras (name, kpa_id) VALUES (?, ?) RETURNING id, name")
                .bind(name)
                .bind(kpa_id)
                .fetch_one(self.pool)
                .await
                .map_err(|e| DbError::missing_parent(e, "KPA", kpa_id))?;

        tracing::debug!(kra_id = row.id, kpa_id, "created kra");
        Ok(Kra::childless(row.id, row.name))
    }

    /// Every sub-goal across all goals, tasks expanded.
    pub async fn list(&self) -> Result<Vec<Kra>, DbError> {
        let mut conn = self.pool.acquire().await?;

        let kras: Vec<KraRow> = sqlx::query_as("SELECT id, name, kpa_id FROM kras ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;
        let tasks: Vec<TaskRow> = sqlx::query_as("SELECT id, name, kra_id FROM tasks ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;

        Ok(nest_kras(kras, tasks).into_iter().map(|(_, kra)| kra).collect())
    }

    /// Delete a sub-goal; its tasks go with it.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM kras WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("KRA", id));
        }

        tracing::debug!(kra_id = id, "deleted kra");
        Ok(())
    }
}

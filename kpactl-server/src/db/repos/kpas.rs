//! Goal (KPA) repository
//!
//! - create: single INSERT ... RETURNING
//! - list/get: one query per tree level on a single checked-out connection
//! - delete: single DELETE, children removed by ON DELETE CASCADE

use std::collections::HashMap;

use sqlx::{FromRow, SqlitePool};

use super::{nest_kras, DbError, KraRow, TaskRow};
use crate::models::{Kpa, Kra};

#[derive(Debug, Clone, FromRow)]
struct KpaRow {
    id: i64,
    name: String,
}

/// Goal repository
pub struct KpaRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> KpaRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a goal. It starts with no sub-goals.
    pub async fn create(&self, name: &str) -> Result<Kpa, DbError> {
        let row: KpaRow = sqlx::query_as("INSERT INTO kpas (name) VALUES (?) RETURNING id, name")
            .bind(name)
            .fetch_one(self.pool)
            .await?;

        tracing::debug!(kpa_id = row.id, "created kpa");
        Ok(Kpa::childless(row.id, row.name))
    }

    /// All goals with sub-goals and tasks expanded, ordered by id.
    pub async fn list(&self) -> Result<Vec<Kpa>, DbError> {
        let mut conn = self.pool.acquire().await?;

        let kpas: Vec<KpaRow> = sqlx::query_as("SELECT id, name FROM kpas ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;
        let kras: Vec<KraRow> = sqlx::query_as("SELECT id, name, kpa_id FROM kras ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;
        let tasks: Vec<TaskRow> = sqlx::query_as("SELECT id, name, kra_id FROM tasks ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;

        let mut kras_by_kpa: HashMap<i64, Vec<Kra>> = HashMap::new();
        for (kpa_id, kra) in nest_kras(kras, tasks) {
            kras_by_kpa.entry(kpa_id).or_default().push(kra);
        }

        Ok(kpas
            .into_iter()
            .map(|row| Kpa {
                id: row.id,
                name: row.name,
                kras: kras_by_kpa.remove(&row.id).unwrap_or_default(),
            })
            .collect())
    }

    /// One goal with its subtree.
    pub async fn get(&self, id: i64) -> Result<Kpa, DbError> {
        let mut conn = self.pool.acquire().await?;

        let row: KpaRow = sqlx::query_as("SELECT id, name FROM kpas WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| DbError::not_found("KPA", id))?;

        let kras: Vec<KraRow> =
            sqlx::query_as("SELECT id, name, kpa_id FROM kras WHERE kpa_id = ? ORDER BY id")
                .bind(id)
                .fetch_all(&mut *conn)
                .await?;
        let tasks: Vec<TaskRow> = sqlx::query_as(
            r#"
            SELECT t.id, t.name, t.kra_id
            FROM tasks t
            JOIN kras k ON k.id = t.kra_id
            WHERE k.kpa_id = ?
            ORDER BY t.id
            "#,
        )
        .bind(id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(Kpa {
            id: row.id,
            name: row.name,
            kras: nest_kras(kras, tasks).into_iter().map(|(_, kra)| kra).collect(),
        })
    }

    /// Delete a goal and, through the cascade, everything under it.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM kpas WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("KPA", id));
        }

        tracing::debug!(kpa_id = id, "deleted kpa");
        Ok(())
    }
}

//! Task repository

use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::Task;

#[derive(Debug, FromRow)]
struct TaskOut {
    id: i64,
    name: String,
}

impl From<TaskOut> for Task {
    fn from(row: TaskOut) -> Self {
        Task {
            id: row.id,
            name: row.name,
        }
    }
}

/// Task repository
pub struct TaskRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TaskRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a task under `kra_id`; a missing sub-goal is `NotFound`.
    pub async fn create(&self, kra_id: i64, name: &str) -> Result<Task, DbError> {
        let row: TaskOut =
            sqlx::query_as("INSERT INTO tasks (name, kra_id) VALUES (?, ?) RETURNING id, name")
                .bind(name)
                .bind(kra_id)
                .fetch_one(self.pool)
                .await
                .map_err(|e| DbError::missing_parent(e, "KRA", kra_id))?;

        tracing::debug!(task_id = row.id, kra_id, "created task");
        Ok(row.into())
    }

    pub async fn list(&self) -> Result<Vec<Task>, DbError> {
        let rows: Vec<TaskOut> = sqlx::query_as("SELECT id, name FROM tasks ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Task::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{KpaRepo, KraRepo};
    use crate::testing;

    #[tokio::test]
    async fn created_task_is_listed() {
        let pool = testing::pool().await;
        let kpa = KpaRepo::new(&pool).create("Plan").await.unwrap();
        let kra = KraRepo::new(&pool).create(kpa.id, "Hiring").await.unwrap();

        let task = TaskRepo::new(&pool).create(kra.id, "Post job").await.unwrap();

        assert_eq!(TaskRepo::new(&pool).list().await.unwrap(), vec![task]);
    }

    #[tokio::test]
    async fn create_under_missing_kra_is_not_found() {
        let pool = testing::pool().await;
        let err = TaskRepo::new(&pool).create(7, "orphan").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "KRA", id: 7 }));
    }

    #[tokio::test]
    async fn duplicate_names_are_allowed() {
        let pool = testing::pool().await;
        let kpa = KpaRepo::new(&pool).create("Plan").await.unwrap();
        let kra = KraRepo::new(&pool).create(kpa.id, "Hiring").await.unwrap();
        let repo = TaskRepo::new(&pool);

        let first = repo.create(kra.id, "same").await.unwrap();
        let second = repo.create(kra.id, "same").await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }
}

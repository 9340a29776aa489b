//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - One statement per write, autocommitted
//! - Parent existence enforced by the foreign key, not a prior SELECT
//! - Nested reads fetch each level once and stitch children in memory

pub mod kpas;
pub mod kras;
pub mod tasks;

use std::collections::HashMap;

use sqlx::FromRow;

use crate::models::{Kra, Task};

pub use kpas::KpaRepo;
pub use kras::KraRepo;
pub use tasks::TaskRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },
}

impl DbError {
    fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound { resource, id }
    }

    /// Map a failed child insert: a foreign-key violation means the parent
    /// row does not exist.
    fn missing_parent(err: sqlx::Error, resource: &'static str, id: i64) -> Self {
        let is_fk = err
            .as_database_error()
            .is_some_and(|db| db.is_foreign_key_violation());

        if is_fk {
            Self::not_found(resource, id)
        } else {
            Self::Sqlx(err)
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub(crate) struct KraRow {
    pub id: i64,
    pub name: String,
    pub kpa_id: i64,
}

#[derive(Debug, Clone, FromRow)]
pub(crate) struct TaskRow {
    pub id: i64,
    pub name: String,
    pub kra_id: i64,
}

/// Group task rows by their sub-goal id, keeping row order.
pub(crate) fn tasks_by_kra(rows: Vec<TaskRow>) -> HashMap<i64, Vec<Task>> {
    let mut grouped: HashMap<i64, Vec<Task>> = HashMap::new();
    for row in rows {
        grouped.entry(row.kra_id).or_default().push(Task {
            id: row.id,
            name: row.name,
        });
    }
    grouped
}

/// Attach tasks to sub-goals, yielding `(kpa_id, Kra)` pairs in row order.
pub(crate) fn nest_kras(kras: Vec<KraRow>, tasks: Vec<TaskRow>) -> Vec<(i64, Kra)> {
    let mut tasks = tasks_by_kra(tasks);
    kras.into_iter()
        .map(|row| {
            let kra = Kra {
                id: row.id,
                name: row.name,
                tasks: tasks.remove(&row.id).unwrap_or_default(),
            };
            (row.kpa_id, kra)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, kra_id: i64) -> TaskRow {
        TaskRow {
            id,
            name: format!("task-{id}"),
            kra_id,
        }
    }

    #[test]
    fn nest_kras_keeps_order_and_groups_tasks() {
        let kras = vec![
            KraRow { id: 1, name: "a".into(), kpa_id: 7 },
            KraRow { id: 2, name: "b".into(), kpa_id: 8 },
        ];
        let tasks = vec![task(10, 2), task(11, 1), task(12, 2)];

        let nested = nest_kras(kras, tasks);

        assert_eq!(nested.len(), 2);
        assert_eq!(nested[0].0, 7);
        assert_eq!(nested[0].1.tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![11]);
        assert_eq!(nested[1].0, 8);
        assert_eq!(nested[1].1.tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![10, 12]);
    }

    #[test]
    fn kra_without_tasks_gets_empty_list() {
        let nested = nest_kras(vec![KraRow { id: 3, name: "solo".into(), kpa_id: 1 }], vec![]);
        assert!(nested[0].1.tasks.is_empty());
    }

    #[test]
    fn not_found_display() {
        let err = DbError::not_found("KPA", 5);
        assert_eq!(err.to_string(), "KPA 5 not found");
    }
}

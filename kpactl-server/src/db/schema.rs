//! Schema creation for the planning tables
//!
//! Idempotent: every statement is `IF NOT EXISTS`, so this runs on each
//! startup against new and existing files alike. A file written by an older
//! schema keeps its tables untouched; `incompatible_tables` reports those.

use sqlx::SqlitePool;

const KPAS: &str = r#"
    CREATE TABLE IF NOT EXISTS kpas (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )
"#;

const KRAS: &str = r#"
    CREATE TABLE IF NOT EXISTS kras (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        kpa_id INTEGER NOT NULL REFERENCES kpas(id) ON DELETE CASCADE
    )
"#;

const TASKS: &str = r#"
    CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        kra_id INTEGER NOT NULL REFERENCES kras(id) ON DELETE CASCADE
    )
"#;

const INDEXES: [&str; 2] = [
    "CREATE INDEX IF NOT EXISTS idx_kras_kpa_id ON kras(kpa_id)",
    "CREATE INDEX IF NOT EXISTS idx_tasks_kra_id ON tasks(kra_id)",
];

/// Create the three tables and their foreign-key indexes.
pub async fn ensure(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring kpa/kra/task schema...");

    for statement in [KPAS, KRAS, TASKS].into_iter().chain(INDEXES) {
        sqlx::query(statement).execute(pool).await?;
    }

    for table in incompatible_tables(pool).await? {
        tracing::warn!(
            table,
            "table predates the cascading schema (nullable name or no ON DELETE CASCADE); \
             deleting parents with children will fail - use a fresh database file"
        );
    }

    tracing::info!("Schema ready");
    Ok(())
}

/// Existing tables whose `name` column is nullable or whose parent foreign
/// key does not cascade.
pub async fn incompatible_tables(pool: &SqlitePool) -> Result<Vec<&'static str>, sqlx::Error> {
    let mut conn = pool.acquire().await?;
    let mut stale = Vec::new();

    for (table, has_parent) in [("kpas", false), ("kras", true), ("tasks", true)] {
        let name_not_null: Option<(i64,)> =
            sqlx::query_as("SELECT \"notnull\" FROM pragma_table_info(?) WHERE name = 'name'")
                .bind(table)
                .fetch_optional(&mut *conn)
                .await?;
        let nullable_name = !matches!(name_not_null, Some((1,)));

        let cascades = if has_parent {
            let actions: Vec<(String,)> =
                sqlx::query_as("SELECT on_delete FROM pragma_foreign_key_list(?)")
                    .bind(table)
                    .fetch_all(&mut *conn)
                    .await?;
            !actions.is_empty()
                && actions
                    .iter()
                    .all(|(action,)| action.eq_ignore_ascii_case("CASCADE"))
        } else {
            true
        };

        if nullable_name || !cascades {
            stale.push(table);
        }
    }

    Ok(stale)
}

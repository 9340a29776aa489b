//! kpactl-server: HTTP API over a three-level planning tree
//!
//! Goals (KPAs) own sub-goals (KRAs), which own tasks. Everything lives in a
//! single SQLite file with cascading foreign keys; the HTTP layer is a thin
//! create/read/delete surface over it.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, DbError};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};

#[cfg(test)]
pub(crate) mod testing {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use sqlx::SqlitePool;
    use tower::ServiceExt;
    use tracing_subscriber::EnvFilter;

    use crate::db::{create_memory_pool, schema};
    use crate::http::{build_router, AppState};

    /// Fresh in-memory database with the schema applied.
    pub async fn pool() -> SqlitePool {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let pool = create_memory_pool().await.expect("memory pool");
        schema::ensure(&pool).await.expect("schema");
        pool
    }

    pub async fn app() -> Router {
        build_router(AppState::new(pool().await))
    }

    /// Send one request and decode the JSON body (Null when empty).
    pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }
}

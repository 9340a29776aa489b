//! Task endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::TaskRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidQuery};
use crate::http::server::AppState;
use crate::models::{CreateTaskRequest, Task, TaskParent};

/// POST /task/?kra_id=
async fn create_task(
    State(state): State<Arc<AppState>>,
    ValidQuery(parent): ValidQuery<TaskParent>,
    ValidJson(req): ValidJson<CreateTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    let task = TaskRepo::new(&state.pool)
        .create(parent.kra_id, &req.name)
        .await?;
    Ok(Json(task))
}

/// GET /task/
async fn list_tasks(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = TaskRepo::new(&state.pool).list().await?;
    Ok(Json(tasks))
}

/// Task routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/task", get(list_tasks).post(create_task))
        .route("/task/", get(list_tasks).post(create_task))
}

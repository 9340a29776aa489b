//! Goal (KPA) endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::KpaRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{EntityId, ValidJson};
use crate::http::server::AppState;
use crate::models::{CreateKpaRequest, Detail, Kpa};

/// POST /kpa/ - create a goal
async fn create_kpa(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateKpaRequest>,
) -> Result<Json<Kpa>, ApiError> {
    let kpa = KpaRepo::new(&state.pool).create(&req.name).await?;
    Ok(Json(kpa))
}

/// GET /kpa/ - every goal with its subtree
async fn list_kpas(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Kpa>>, ApiError> {
    let kpas = KpaRepo::new(&state.pool).list().await?;
    Ok(Json(kpas))
}

/// GET /kpa/{id}
async fn get_kpa(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Json<Kpa>, ApiError> {
    let kpa = KpaRepo::new(&state.pool).get(id).await?;
    Ok(Json(kpa))
}

/// DELETE /kpa/{id} - cascades to sub-goals and tasks
async fn delete_kpa(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Json<Detail>, ApiError> {
    KpaRepo::new(&state.pool).delete(id).await?;
    tracing::info!(kpa_id = id, "KPA deleted");
    Ok(Json(Detail::new("KPA deleted")))
}

/// Goal routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/kpa", get(list_kpas).post(create_kpa))
        .route("/kpa/", get(list_kpas).post(create_kpa))
        .route("/kpa/{id}", get(get_kpa).delete(delete_kpa))
}

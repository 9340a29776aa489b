//! Sub-goal (KRA) endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get},
    Json, Router,
};

use crate::db::repos::KraRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{EntityId, ValidJson, ValidQuery};
use crate::http::server::AppState;
use crate::models::{CreateKraRequest, Detail, Kra, KraParent};

/// POST /kra/?kpa_id= - create a sub-goal under an existing goal
async fn create_kra(
    State(state): State<Arc<AppState>>,
    ValidQuery(parent): ValidQuery<KraParent>,
    ValidJson(req): ValidJson<CreateKraRequest>,
) -> Result<Json<Kra>, ApiError> {
    let kra = KraRepo::new(&state.pool)
        .create(parent.kpa_id, &req.name)
        .await?;
    Ok(Json(kra))
}

/// GET /kra/ - every sub-goal with its tasks
async fn list_kras(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Kra>>, ApiError> {
    let kras = KraRepo::new(&state.pool).list().await?;
    Ok(Json(kras))
}

/// DELETE /kra/{id} - cascades to tasks
async fn delete_kra(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Json<Detail>, ApiError> {
    KraRepo::new(&state.pool).delete(id).await?;
    tracing::info!(kra_id = id, "KRA deleted");
    Ok(Json(Detail::new("KRA deleted")))
}

/// Sub-goal routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/kra", get(list_kras).post(create_kra))
        .route("/kra/", get(list_kras).post(create_kra))
        .route("/kra/{id}", delete(delete_kra))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::testing::{app, send};

    #[tokio::test]
    async fn created_kra_nests_under_kpa() {
        let app = app().await;
        send(&app, "POST", "/kpa/", Some(json!({"name": "Quarterly Plan"}))).await;

        let (status, kra) =
            send(&app, "POST", "/kra/?kpa_id=1", Some(json!({"name": "Hiring"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(kra, json!({"id": 1, "name": "Hiring", "tasks": []}));

        let (_, kpa) = send(&app, "GET", "/kpa/1", None).await;
        assert_eq!(
            kpa,
            json!({
                "id": 1,
                "name": "Quarterly Plan",
                "kras": [{"id": 1, "name": "Hiring", "tasks": []}]
            })
        );
    }

    #[tokio::test]
    async fn missing_kpa_id_is_422() {
        let app = app().await;
        let (status, body) = send(&app, "POST", "/kra/", Some(json!({"name": "x"}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("kpa_id"));
    }

    #[tokio::test]
    async fn unknown_kpa_is_404() {
        let app = app().await;
        let (status, body) =
            send(&app, "POST", "/kra/?kpa_id=9", Some(json!({"name": "x"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "KPA not found"}));
    }

    #[tokio::test]
    async fn list_and_delete() {
        let app = app().await;
        send(&app, "POST", "/kpa/", Some(json!({"name": "Plan"}))).await;
        send(&app, "POST", "/kra/?kpa_id=1", Some(json!({"name": "a"}))).await;
        send(&app, "POST", "/kra/?kpa_id=1", Some(json!({"name": "b"}))).await;
        send(&app, "POST", "/task/?kra_id=1", Some(json!({"name": "t"}))).await;

        let (_, listed) = send(&app, "GET", "/kra/", None).await;
        assert_eq!(listed.as_array().unwrap().len(), 2);
        assert_eq!(listed[0]["tasks"], json!([{"id": 1, "name": "t"}]));

        let (status, body) = send(&app, "DELETE", "/kra/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"detail": "KRA deleted"}));

        let (_, tasks) = send(&app, "GET", "/task/", None).await;
        assert_eq!(tasks, json!([]));

        let (status, body) = send(&app, "DELETE", "/kra/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "KRA not found"}));
    }
}

use axum::{Json, response::IntoResponse, routing::get};
use serde_json::json;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub fn health_routes() -> OpenApiRouter {
    OpenApiRouter::new().route("/health", get(health_check))
}

use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Liveness answer plus the number of recipes currently held in memory.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PingResponse {
    pub message: String,
    pub recipes: usize,
}

#[utoipa::path(
    get,
    path = "/api/test/ping",
    tag = "testing",
    responses(
        (status = 200, description = "Service is up", body = PingResponse)
    )
)]
pub async fn ping(State(service): State<AppState>) -> impl IntoResponse {
    Json(PingResponse {
        message: "ping".to_string(),
        recipes: service.store().len(),
    })
}

use super::infos::RecipeResponse;
use crate::api::{service_error_response, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRecipeRequest {
    /// Recipe text, 10 to 2000 characters
    #[serde(default)]
    pub content: String,
}

#[utoipa::path(
    post,
    path = "/cities/{cityId}/recipes",
    tag = "recipes",
    params(
        ("cityId" = String, Path, description = "City identifier")
    ),
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created", body = RecipeResponse),
        (status = 400, description = "Invalid content", body = ErrorResponse),
        (status = 404, description = "City not found", body = ErrorResponse),
        (status = 500, description = "Provider failure", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(service): State<AppState>,
    Path(city_id): Path<String>,
    body: Result<Json<CreateRecipeRequest>, JsonRejection>,
) -> impl IntoResponse {
    // A missing or malformed body counts as empty content, reported after the city check
    let content = match body {
        Ok(Json(request)) => request.content,
        Err(rejection) => {
            tracing::debug!("Rejected recipe body: {}", rejection);
            String::new()
        }
    };

    match service.create_recipe(&city_id, &content).await {
        Ok(recipe) => (StatusCode::CREATED, Json(RecipeResponse::from(recipe))).into_response(),
        Err(e) => service_error_response(e),
    }
}

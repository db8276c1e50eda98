use crate::api::{service_error_response, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

#[utoipa::path(
    delete,
    path = "/cities/{cityId}/recipes/{recipeId}",
    tag = "recipes",
    params(
        ("cityId" = String, Path, description = "City identifier"),
        ("recipeId" = String, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 404, description = "City or recipe not found", body = ErrorResponse),
        (status = 500, description = "Provider failure", body = ErrorResponse)
    )
)]
pub async fn delete_recipe(
    State(service): State<AppState>,
    Path((city_id, recipe_id)): Path<(String, String)>,
) -> impl IntoResponse {
    match service.delete_recipe(&city_id, &recipe_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => service_error_response(e),
    }
}

pub mod cities;
pub mod testing;

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use cityinfo_core::ServiceError;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Map a service failure to its HTTP response. Upstream details are logged,
/// never returned to the client.
pub fn service_error_response(err: ServiceError) -> Response {
    match err {
        ServiceError::CityNotFound => error_response(StatusCode::NOT_FOUND, "City not found"),
        ServiceError::RecipeNotFound => error_response(StatusCode::NOT_FOUND, "Recipe not found"),
        ServiceError::InvalidContent(e) => error_response(StatusCode::BAD_REQUEST, e.to_string()),
        ServiceError::Upstream(e) => {
            tracing::error!("Provider call failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
        }
    }
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "City Infos API", description = "City details, weather and recipes"),
        components(schemas(ErrorResponse))
    )]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> =
        vec![cities::ApiDoc::openapi(), testing::ApiDoc::openapi()];

    for module_spec in modules {
        // Merge paths
        spec.paths.paths.extend(module_spec.paths.paths);

        // Merge components (schemas)
        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}

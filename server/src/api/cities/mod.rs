pub mod create_recipe;
pub mod delete_recipe;
pub mod infos;

use crate::AppState;
use axum::routing::{delete, get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /cities endpoints (mounted at /cities)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{cityId}/infos", get(infos::get_city_infos))
        .route("/{cityId}/recipes", post(create_recipe::create_recipe))
        .route(
            "/{cityId}/recipes/{recipeId}",
            delete(delete_recipe::delete_recipe),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        infos::get_city_infos,
        create_recipe::create_recipe,
        delete_recipe::delete_recipe,
    ),
    components(schemas(
        infos::CityInfoResponse,
        infos::WeatherPredictionResponse,
        infos::RecipeResponse,
        create_recipe::CreateRecipeRequest,
    ))
)]
pub struct ApiDoc;

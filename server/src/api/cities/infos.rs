use crate::api::{service_error_response, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use cityinfo_core::{CityInfo, Recipe, WeatherPrediction};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityInfoResponse {
    /// `[latitude, longitude]`, empty when unknown
    pub coordinates: Vec<f64>,
    pub population: u64,
    pub known_for: Vec<String>,
    /// At most two entries
    pub weather_predictions: Vec<WeatherPredictionResponse>,
    pub recipes: Vec<RecipeResponse>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WeatherPredictionResponse {
    pub when: String,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub id: u64,
    pub content: String,
}

impl From<WeatherPrediction> for WeatherPredictionResponse {
    fn from(p: WeatherPrediction) -> Self {
        Self {
            when: p.when,
            min: p.min,
            max: p.max,
        }
    }
}

impl From<Recipe> for RecipeResponse {
    fn from(r: Recipe) -> Self {
        Self {
            id: r.id,
            content: r.content,
        }
    }
}

impl From<CityInfo> for CityInfoResponse {
    fn from(info: CityInfo) -> Self {
        Self {
            coordinates: info.coordinates,
            population: info.population,
            known_for: info.known_for,
            weather_predictions: info
                .weather_predictions
                .into_iter()
                .map(Into::into)
                .collect(),
            recipes: info.recipes.into_iter().map(Into::into).collect(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/cities/{cityId}/infos",
    tag = "cities",
    params(
        ("cityId" = String, Path, description = "City identifier")
    ),
    responses(
        (status = 200, description = "City details, forecast and recipes", body = CityInfoResponse),
        (status = 404, description = "City not found", body = ErrorResponse),
        (status = 500, description = "Provider failure", body = ErrorResponse)
    )
)]
pub async fn get_city_infos(
    State(service): State<AppState>,
    Path(city_id): Path<String>,
) -> impl IntoResponse {
    match service.city_info(&city_id).await {
        Ok(info) => (StatusCode::OK, Json(CityInfoResponse::from(info))).into_response(),
        Err(e) => service_error_response(e),
    }
}

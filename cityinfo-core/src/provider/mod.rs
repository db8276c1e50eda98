//! City/weather provider access.
//!
//! Handlers only see the [`CityProvider`] trait; [`HttpProvider`] talks to the
//! real API and [`FakeProvider`] serves canned data in tests.

mod client;
mod fake;

pub use client::HttpProvider;
pub use fake::FakeProvider;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::ProviderError;
use crate::types::{CityDetails, CitySummary, WeatherPrediction};

/// Trait for city/weather providers, enabling mockability in tests.
#[async_trait]
pub trait CityProvider: Send + Sync {
    /// Free-text city search. An empty result means no match.
    async fn search_cities(&self, query: &str) -> Result<Vec<CitySummary>, ProviderError>;

    /// Details for a provider city id. Absence is `ProviderError::NotFound`.
    async fn city_details(&self, city_id: &str) -> Result<CityDetails, ProviderError>;

    /// Forecast for a provider city id, in provider order.
    async fn weather_predictions(
        &self,
        city_id: &str,
    ) -> Result<Vec<WeatherPrediction>, ProviderError>;
}

/// City detail body as sent by the provider. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CityPayload {
    #[serde(default)]
    coordinates: Option<CoordinatesPayload>,
    /// Some provider responses send whole numbers as floats (`2148000.0`).
    #[serde(default)]
    population: Option<f64>,
    #[serde(default)]
    known_for: Option<Vec<KnownForPayload>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CoordinatesPayload {
    Pair(Vec<f64>),
    Named { latitude: f64, longitude: f64 },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum KnownForPayload {
    Text(String),
    Item { content: String },
}

impl From<CityPayload> for CityDetails {
    fn from(payload: CityPayload) -> Self {
        let coordinates = match payload.coordinates {
            Some(CoordinatesPayload::Pair(pair)) if pair.len() == 2 => pair,
            Some(CoordinatesPayload::Named {
                latitude,
                longitude,
            }) => vec![latitude, longitude],
            _ => Vec::new(),
        };

        let known_for = payload
            .known_for
            .unwrap_or_default()
            .into_iter()
            .map(|entry| match entry {
                KnownForPayload::Text(text) => text,
                KnownForPayload::Item { content } => content,
            })
            .collect();

        CityDetails {
            coordinates,
            population: payload
                .population
                .filter(|p| p.is_finite() && *p >= 0.0)
                .map(|p| p.round() as u64)
                .unwrap_or(0),
            known_for,
        }
    }
}

/// Weather body as sent by the provider: either a list of predictions or a
/// `{today, tomorrow}` object. An object carrying neither day is rejected
/// when converted, so error bodies never read as an empty forecast.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum WeatherPayload {
    List(Vec<WeatherPrediction>),
    Daily {
        today: Option<TemperatureRange>,
        tomorrow: Option<TemperatureRange>,
    },
}

#[derive(Debug, Deserialize)]
pub(crate) struct TemperatureRange {
    min: f64,
    max: f64,
}

impl WeatherPayload {
    pub(crate) fn into_predictions(self) -> Result<Vec<WeatherPrediction>, ProviderError> {
        match self {
            WeatherPayload::List(predictions) => Ok(predictions),
            WeatherPayload::Daily {
                today: None,
                tomorrow: None,
            } => Err(ProviderError::InvalidResponse(
                "weather body has neither a prediction list nor today/tomorrow".to_string(),
            )),
            WeatherPayload::Daily { today, tomorrow } => Ok([("today", today), ("tomorrow", tomorrow)]
                .into_iter()
                .filter_map(|(when, range)| {
                    range.map(|r| WeatherPrediction {
                        when: when.to_string(),
                        min: r.min,
                        max: r.max,
                    })
                })
                .collect()),
        }
    }
}

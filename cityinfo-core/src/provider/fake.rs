//! Fake provider for testing.
//!
//! Serves registered cities, forecasts and search hits from memory so tests
//! run without network access or an API key.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use super::CityProvider;
use crate::error::ProviderError;
use crate::types::{CityDetails, CitySummary, WeatherPrediction};

/// A fake provider for testing.
///
/// Unknown city ids are reported as `NotFound`. Every call is recorded so tests
/// can assert which ids were requested.
#[derive(Debug, Default)]
pub struct FakeProvider {
    cities: HashMap<String, CityDetails>,
    weather: HashMap<String, Vec<WeatherPrediction>>,
    searches: HashMap<String, Vec<CitySummary>>,
    /// When set, every call fails with an upstream error.
    unavailable: bool,
    calls: RwLock<Vec<String>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a city and its details.
    pub fn with_city(mut self, city_id: &str, details: CityDetails) -> Self {
        self.cities.insert(city_id.to_string(), details);
        self
    }

    /// Register the forecast for a city id.
    pub fn with_weather(mut self, city_id: &str, predictions: Vec<WeatherPrediction>) -> Self {
        self.weather.insert(city_id.to_string(), predictions);
        self
    }

    /// Register the ids returned when searching for `query`.
    pub fn with_search(mut self, query: &str, ids: &[&str]) -> Self {
        let hits = ids
            .iter()
            .map(|id| CitySummary {
                id: id.to_string(),
                name: None,
            })
            .collect();
        self.searches.insert(query.to_string(), hits);
        self
    }

    /// Make every call fail as if the provider were unreachable.
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Calls made so far, as `"<operation>:<argument>"`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().clone()
    }

    fn record(&self, operation: &str, argument: &str) -> Result<(), ProviderError> {
        self.calls.write().push(format!("{}:{}", operation, argument));
        if self.unavailable {
            return Err(ProviderError::InvalidResponse(
                "fake provider is unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CityProvider for FakeProvider {
    async fn search_cities(&self, query: &str) -> Result<Vec<CitySummary>, ProviderError> {
        self.record("search", query)?;
        Ok(self.searches.get(query).cloned().unwrap_or_default())
    }

    async fn city_details(&self, city_id: &str) -> Result<CityDetails, ProviderError> {
        self.record("city", city_id)?;
        self.cities
            .get(city_id)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(city_id.to_string()))
    }

    async fn weather_predictions(
        &self,
        city_id: &str,
    ) -> Result<Vec<WeatherPrediction>, ProviderError> {
        self.record("weather", city_id)?;
        self.weather
            .get(city_id)
            .cloned()
            .ok_or_else(|| ProviderError::UnexpectedStatus {
                endpoint: "weather".to_string(),
                status: 404,
            })
    }
}

//! HTTP client for the city/weather provider.

use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::types::{CityDetails, CitySummary, WeatherPrediction};

use super::{CityPayload, CityProvider, WeatherPayload};

const USER_AGENT: &str = concat!("cityinfo/", env!("CARGO_PKG_VERSION"));

/// Production provider client. One call per operation, no retries or caching.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    /// Shared reqwest client for connection pooling.
    inner: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl HttpProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ProviderError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ProviderError::InvalidUrl(config.base_url.clone()));
        }

        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            inner,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// Build `{base}/{segments...}`. Segments are percent-encoded, so a path
    /// identifier can never escape its segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ProviderError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ProviderError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url, query: &[(&str, &str)]) -> Result<Response, ProviderError> {
        tracing::debug!(url = %url, "provider: request");
        let response = self
            .inner
            .get(url)
            .query(query)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await?;
        tracing::debug!(status = %response.status(), "provider: response");
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ProviderError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl CityProvider for HttpProvider {
    async fn search_cities(&self, query: &str) -> Result<Vec<CitySummary>, ProviderError> {
        let url = self.endpoint(&["cities"])?;
        let response = self.get(url, &[("search", query)]).await?;

        if !response.status().is_success() {
            return Err(ProviderError::NotFound(query.to_string()));
        }

        Self::decode(response).await
    }

    async fn city_details(&self, city_id: &str) -> Result<CityDetails, ProviderError> {
        let url = self.endpoint(&["cities", city_id])?;
        let response = self.get(url, &[]).await?;

        if !response.status().is_success() {
            return Err(ProviderError::NotFound(city_id.to_string()));
        }

        let payload: CityPayload = Self::decode(response).await?;
        Ok(payload.into())
    }

    async fn weather_predictions(
        &self,
        city_id: &str,
    ) -> Result<Vec<WeatherPrediction>, ProviderError> {
        let url = self.endpoint(&["weather", city_id])?;
        let response = self.get(url, &[]).await?;

        if !response.status().is_success() {
            return Err(ProviderError::UnexpectedStatus {
                endpoint: "weather".to_string(),
                status: response.status().as_u16(),
            });
        }

        let payload: WeatherPayload = Self::decode(response).await?;
        payload.into_predictions()
    }
}

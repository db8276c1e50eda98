//! City info aggregation and recipe mutations.
//!
//! Every operation starts by checking the city against the provider. Recipes
//! are always keyed by the identifier from the request path, even when search
//! resolution fetched details under a different provider id.

use std::sync::Arc;

use crate::config::ResolutionStrategy;
use crate::error::ServiceError;
use crate::provider::CityProvider;
use crate::store::RecipeStore;
use crate::types::{CityDetails, CityInfo, Recipe};
use crate::validation::validate_content;

/// Maximum number of forecast entries in a city info response.
pub const MAX_WEATHER_PREDICTIONS: usize = 2;

pub struct CityService {
    provider: Arc<dyn CityProvider>,
    store: RecipeStore,
    resolution: ResolutionStrategy,
}

impl CityService {
    pub fn new(provider: Arc<dyn CityProvider>, resolution: ResolutionStrategy) -> Self {
        Self {
            provider,
            store: RecipeStore::new(),
            resolution,
        }
    }

    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    /// Assemble provider details, the first forecasts and the city's recipes.
    ///
    /// A failed weather lookup fails the whole request as an upstream error.
    pub async fn city_info(&self, city_id: &str) -> Result<CityInfo, ServiceError> {
        let (resolved_id, details) = self.resolve_city(city_id).await?;

        let mut weather = self
            .provider
            .weather_predictions(&resolved_id)
            .await
            .map_err(ServiceError::Upstream)?;
        weather.truncate(MAX_WEATHER_PREDICTIONS);

        let recipes = self.store.list_by_city(city_id);

        Ok(CityInfo::new(details, weather, recipes))
    }

    /// Validate and store a recipe for an existing city.
    pub async fn create_recipe(&self, city_id: &str, content: &str) -> Result<Recipe, ServiceError> {
        self.ensure_city_exists(city_id).await?;
        validate_content(content)?;

        let recipe = self.store.append(city_id, content);
        tracing::info!(id = recipe.id, city_id, "recipe created");
        Ok(recipe)
    }

    /// Delete a recipe of an existing city. A non-numeric id never matches.
    pub async fn delete_recipe(&self, city_id: &str, recipe_id: &str) -> Result<(), ServiceError> {
        self.ensure_city_exists(city_id).await?;

        let Ok(id) = recipe_id.parse::<u64>() else {
            return Err(ServiceError::RecipeNotFound);
        };

        if !self.store.remove(id, city_id) {
            return Err(ServiceError::RecipeNotFound);
        }

        tracing::info!(id, city_id, "recipe deleted");
        Ok(())
    }

    /// Direct lookup used by the mutations regardless of the resolution strategy.
    async fn ensure_city_exists(&self, city_id: &str) -> Result<(), ServiceError> {
        self.provider
            .city_details(city_id)
            .await
            .map(|_| ())
            .map_err(ServiceError::from_city_lookup)
    }

    /// Returns the provider id used for the lookup along with the details.
    async fn resolve_city(&self, city_id: &str) -> Result<(String, CityDetails), ServiceError> {
        let resolved_id = match self.resolution {
            ResolutionStrategy::Direct => city_id.to_string(),
            ResolutionStrategy::Search => {
                let hits = self
                    .provider
                    .search_cities(city_id)
                    .await
                    .map_err(ServiceError::from_city_lookup)?;
                let Some(first) = hits.into_iter().next() else {
                    tracing::debug!(city_id, "city search returned no match");
                    return Err(ServiceError::CityNotFound);
                };
                first.id
            }
        };

        let details = self
            .provider
            .city_details(&resolved_id)
            .await
            .map_err(ServiceError::from_city_lookup)?;

        Ok((resolved_id, details))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContentError;
    use crate::provider::FakeProvider;
    use crate::types::WeatherPrediction;

    fn prediction(when: &str, min: f64, max: f64) -> WeatherPrediction {
        WeatherPrediction {
            when: when.to_string(),
            min,
            max,
        }
    }

    fn paris() -> CityDetails {
        CityDetails {
            coordinates: vec![48.8566, 2.3522],
            population: 2148000,
            known_for: vec!["Eiffel Tower".to_string()],
        }
    }

    fn fake() -> FakeProvider {
        FakeProvider::new().with_city("paris", paris()).with_weather(
            "paris",
            vec![
                prediction("today", 4.0, 11.0),
                prediction("tomorrow", 6.0, 13.0),
                prediction("in two days", 5.0, 12.0),
            ],
        )
    }

    fn service(provider: FakeProvider) -> CityService {
        CityService::new(Arc::new(provider), ResolutionStrategy::Direct)
    }

    #[tokio::test]
    async fn test_city_info_aggregates() {
        let service = service(fake());
        let recipe = service
            .create_recipe("paris", "a valid ten-plus char recipe")
            .await
            .unwrap();

        let info = service.city_info("paris").await.unwrap();
        assert_eq!(info.coordinates, vec![48.8566, 2.3522]);
        assert_eq!(info.population, 2148000);
        assert_eq!(info.known_for, vec!["Eiffel Tower"]);
        assert_eq!(info.weather_predictions.len(), MAX_WEATHER_PREDICTIONS);
        assert_eq!(info.weather_predictions[1].when, "tomorrow");
        assert_eq!(info.recipes, vec![recipe]);
    }

    #[tokio::test]
    async fn test_city_info_unknown_city() {
        let service = service(fake());
        let err = service.city_info("atlantis").await.unwrap_err();
        assert!(matches!(err, ServiceError::CityNotFound));
    }

    #[tokio::test]
    async fn test_city_info_weather_failure_is_upstream() {
        let service = service(FakeProvider::new().with_city("paris", paris()));
        let err = service.city_info("paris").await.unwrap_err();
        assert!(matches!(err, ServiceError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_provider_outage_is_upstream() {
        let service = service(fake().unavailable());
        assert!(matches!(
            service.city_info("paris").await.unwrap_err(),
            ServiceError::Upstream(_)
        ));
        assert!(matches!(
            service
                .create_recipe("paris", "a valid ten-plus char recipe")
                .await
                .unwrap_err(),
            ServiceError::Upstream(_)
        ));
    }

    #[tokio::test]
    async fn test_search_resolution_keys_recipes_by_path_id() {
        let provider = Arc::new(
            FakeProvider::new()
                .with_city("paris", paris())
                .with_city("city-75056", paris())
                .with_weather("city-75056", vec![prediction("today", 1.0, 2.0)])
                .with_search("paris", &["city-75056", "city-other"]),
        );
        let service = CityService::new(provider.clone(), ResolutionStrategy::Search);
        service
            .create_recipe("paris", "recipe stored under the path id")
            .await
            .unwrap();

        let info = service.city_info("paris").await.unwrap();
        assert_eq!(info.recipes.len(), 1);
        assert_eq!(info.weather_predictions.len(), 1);

        let calls = provider.calls();
        assert!(calls.contains(&"search:paris".to_string()));
        assert!(calls.contains(&"city:city-75056".to_string()));
        assert!(calls.contains(&"weather:city-75056".to_string()));
    }

    #[tokio::test]
    async fn test_search_without_match() {
        let service = CityService::new(Arc::new(fake()), ResolutionStrategy::Search);
        let err = service.city_info("paris").await.unwrap_err();
        assert!(matches!(err, ServiceError::CityNotFound));
    }

    #[tokio::test]
    async fn test_create_checks_city_before_content() {
        let service = service(fake());
        let err = service.create_recipe("atlantis", "").await.unwrap_err();
        assert!(matches!(err, ServiceError::CityNotFound));
        assert!(service.store().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_content() {
        let service = service(fake());
        let err = service.create_recipe("paris", "short").await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::InvalidContent(ContentError::TooShort)
        ));
        assert!(service.store().is_empty());
    }

    #[tokio::test]
    async fn test_create_keeps_content_as_received() {
        let service = service(fake());
        let recipe = service
            .create_recipe("paris", "  padded recipe text  ")
            .await
            .unwrap();
        assert_eq!(recipe.content, "  padded recipe text  ");
        assert_eq!(recipe.city_id, "paris");
    }

    #[tokio::test]
    async fn test_delete_flow() {
        let service = service(fake());
        let recipe = service
            .create_recipe("paris", "recipe that will be deleted")
            .await
            .unwrap();

        service
            .delete_recipe("paris", &recipe.id.to_string())
            .await
            .unwrap();
        assert!(service.city_info("paris").await.unwrap().recipes.is_empty());

        let err = service
            .delete_recipe("paris", &recipe.id.to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::RecipeNotFound));
    }

    #[tokio::test]
    async fn test_delete_non_numeric_id() {
        let service = service(fake());
        let err = service.delete_recipe("paris", "abc").await.unwrap_err();
        assert!(matches!(err, ServiceError::RecipeNotFound));
    }

    #[tokio::test]
    async fn test_delete_unknown_city_even_with_recipes() {
        let service = service(fake());
        service.store().append("atlantis", "orphaned recipe content");

        let err = service.delete_recipe("atlantis", "1").await.unwrap_err();
        assert!(matches!(err, ServiceError::CityNotFound));
        assert_eq!(service.store().len(), 1);
    }
}

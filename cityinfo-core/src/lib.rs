pub mod config;
pub mod error;
pub mod provider;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;

pub use config::{ProviderConfig, ResolutionStrategy};
pub use error::{ConfigError, ContentError, ProviderError, ServiceError};
pub use provider::{CityProvider, FakeProvider, HttpProvider};
pub use service::{CityService, MAX_WEATHER_PREDICTIONS};
pub use store::RecipeStore;
pub use types::{CityDetails, CityInfo, CitySummary, Recipe, WeatherPrediction};
pub use validation::validate_content;

use serde::Deserialize;

/// A user-submitted recipe attached to a city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: u64,
    /// The city identifier exactly as it appeared in the request path.
    pub city_id: String,
    pub content: String,
}

/// One day of forecast temperatures.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherPrediction {
    pub when: String,
    pub min: f64,
    pub max: f64,
}

/// Normalized city details from the provider, with defaults already applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityDetails {
    /// `[latitude, longitude]`, or empty when the provider has none.
    pub coordinates: Vec<f64>,
    pub population: u64,
    pub known_for: Vec<String>,
}

/// A search hit from the provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CitySummary {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Everything returned for `GET /cities/{cityId}/infos`.
#[derive(Debug, Clone, PartialEq)]
pub struct CityInfo {
    pub coordinates: Vec<f64>,
    pub population: u64,
    pub known_for: Vec<String>,
    pub weather_predictions: Vec<WeatherPrediction>,
    pub recipes: Vec<Recipe>,
}

impl CityInfo {
    pub fn new(
        details: CityDetails,
        weather_predictions: Vec<WeatherPrediction>,
        recipes: Vec<Recipe>,
    ) -> Self {
        Self {
            coordinates: details.coordinates,
            population: details.population,
            known_for: details.known_for,
            weather_predictions,
            recipes,
        }
    }
}

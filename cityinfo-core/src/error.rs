use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("City not found: {0}")]
    NotFound(String),

    #[error("Invalid provider URL: {0}")]
    InvalidUrl(String),

    #[error("Provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Provider returned status {status} for {endpoint}")]
    UnexpectedStatus { endpoint: String, status: u16 },

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Reasons a recipe body is rejected. The messages are returned to clients as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content cannot be empty.")]
    Empty,

    #[error("Content must be at least 10 characters.")]
    TooShort,

    #[error("Content must be less than 2000 characters.")]
    TooLong,
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("City not found")]
    CityNotFound,

    #[error(transparent)]
    InvalidContent(#[from] ContentError),

    #[error("Recipe not found")]
    RecipeNotFound,

    #[error("Upstream provider failure: {0}")]
    Upstream(#[source] ProviderError),
}

impl ServiceError {
    /// Map a city lookup failure: absence is `CityNotFound`, anything else is upstream.
    pub fn from_city_lookup(err: ProviderError) -> Self {
        match err {
            ProviderError::NotFound(_) => ServiceError::CityNotFound,
            other => ServiceError::Upstream(other),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: String, value: String },
}

use plantwatch_api::models::ThresholdError;
use reqwest::header::InvalidHeaderValue;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Settings error: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("Invalid thresholds: {0}")]
    Thresholds(#[from] ThresholdError),

    #[error("API key is not a valid header value: {0}")]
    InvalidCredential(#[from] InvalidHeaderValue),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

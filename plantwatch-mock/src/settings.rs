use std::env;
use std::time::Duration;

use plantwatch_api::models::SensorThresholds;
use serde::{Deserialize, Serialize};

use crate::client::RetryPolicy;
use crate::error::Error;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const KEY_VAR: &str = "SUPABASE_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoint {
    /// Base URL of the storage service
    pub url: String,
    /// Sent both as `apikey` and as bearer token
    pub api_key: String,
    /// Path of the readings resource below `url`
    pub resource: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    /// Pause between two readings
    pub interval_secs: u64,
    /// Total attempts per reading
    pub max_retries: u32,
    pub retry_delay_secs: u64,
}

impl Schedule {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries, Duration::from_secs(self.retry_delay_secs))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub endpoint: Endpoint,
    pub schedule: Schedule,
    #[serde(default)]
    pub thresholds: SensorThresholds,
}

impl Settings {
    /// Embedded defaults overlaid with `SUPABASE_URL` and `SUPABASE_KEY`,
    /// taken from the process environment or a `.env` file.
    pub fn new() -> Result<Self, Error> {
        // variables already set in the process win over the file
        dotenvy::dotenv().ok();

        let mut settings = Self::from_toml(include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../",
            "configs/default.toml"
        )))?;

        settings.override_from_env();

        Ok(settings)
    }

    pub fn from_toml(source: &str) -> Result<Self, Error> {
        let settings: Settings = toml::from_str(source)?;
        settings.thresholds.validate()?;

        Ok(settings)
    }

    pub fn override_from_env(&mut self) {
        self.override_endpoint(env::var(URL_VAR).ok(), env::var(KEY_VAR).ok());
    }

    pub fn override_endpoint(&mut self, url: Option<String>, api_key: Option<String>) {
        if let Some(url) = url.filter(|url| !url.trim().is_empty()) {
            self.endpoint.url = url;
        }
        if let Some(api_key) = api_key {
            self.endpoint.api_key = api_key;
        }
    }
}

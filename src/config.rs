//! Configuration for the wetterkarte service
//!
//! Everything is sourced from environment variables. The two upstream
//! API keys are required and are never embedded in source; the rest
//! has working defaults.

use anyhow::{Context, Result, bail};
use std::env;

fn default_geocoding_base_url() -> String {
    "https://api.opencagedata.com/geocode/v1/geojson".to_string()
}

fn default_forecast_base_url() -> String {
    "https://api.openweathermap.org/data/2.5/forecast".to_string()
}

fn default_forecast_lang() -> String {
    "de".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_port() -> u16 {
    8080
}

/// Runtime configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct WetterkarteConfig {
    /// API key for the reverse-geocoding service
    pub opencage_api_key: String,
    /// API key for the forecast service
    pub openweathermap_api_key: String,
    /// Base URL of the reverse-geocoding endpoint
    pub geocoding_base_url: String,
    /// Base URL of the forecast endpoint
    pub forecast_base_url: String,
    /// Language for forecast condition descriptions
    pub forecast_lang: String,
    /// Outbound HTTP timeout in seconds
    pub timeout_seconds: u64,
    /// Listen port for the web server
    pub port: u16,
}

impl Default for WetterkarteConfig {
    fn default() -> Self {
        Self {
            opencage_api_key: String::new(),
            openweathermap_api_key: String::new(),
            geocoding_base_url: default_geocoding_base_url(),
            forecast_base_url: default_forecast_base_url(),
            forecast_lang: default_forecast_lang(),
            timeout_seconds: default_timeout_seconds(),
            port: default_port(),
        }
    }
}

impl WetterkarteConfig {
    /// Load configuration from environment variables and validate it
    pub fn from_env() -> Result<Self> {
        let config = Self {
            opencage_api_key: env::var("OPENCAGE_API_KEY")
                .context("Missing OPENCAGE_API_KEY env var")?,
            openweathermap_api_key: env::var("OPENWEATHERMAP_API_KEY")
                .context("Missing OPENWEATHERMAP_API_KEY env var")?,
            geocoding_base_url: env::var("WETTERKARTE_GEOCODING_URL")
                .unwrap_or_else(|_| default_geocoding_base_url()),
            forecast_base_url: env::var("WETTERKARTE_FORECAST_URL")
                .unwrap_or_else(|_| default_forecast_base_url()),
            forecast_lang: env::var("WETTERKARTE_FORECAST_LANG")
                .unwrap_or_else(|_| default_forecast_lang()),
            timeout_seconds: match env::var("WETTERKARTE_TIMEOUT_SECONDS") {
                Ok(raw) => raw
                    .parse()
                    .context("WETTERKARTE_TIMEOUT_SECONDS must be an integer")?,
                Err(_) => default_timeout_seconds(),
            },
            port: match env::var("WETTERKARTE_PORT") {
                Ok(raw) => raw.parse().context("WETTERKARTE_PORT must be a port number")?,
                Err(_) => default_port(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.opencage_api_key.is_empty() {
            bail!("Geocoding API key cannot be empty");
        }
        if self.openweathermap_api_key.is_empty() {
            bail!("Forecast API key cannot be empty");
        }
        for url in [&self.geocoding_base_url, &self.forecast_base_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                bail!("API base URL must be a valid HTTP or HTTPS URL: {url}");
            }
        }
        if self.timeout_seconds == 0 || self.timeout_seconds > 300 {
            bail!("Timeout must be between 1 and 300 seconds");
        }
        Ok(())
    }
}

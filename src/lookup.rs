//! Geocoding and forecast lookup client
//!
//! HTTP access to the two upstream services backing the
//! click-to-forecast chain: OpenCage reverse geocoding and the
//! OpenWeatherMap 5-day/3-hour forecast. Both response bodies are
//! deserialized into explicit schemas and converted to domain models
//! at this boundary.

use crate::config::WetterkarteConfig;
use crate::error::LookupError;
use crate::models::{Coordinate, ForecastList, Place};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Lookup operations consumed by the forecast pipeline
#[async_trait]
pub trait GeoLookupClient: Send + Sync {
    /// Resolve a coordinate to its nearest named place.
    ///
    /// `Ok(None)` is the zero-match outcome. It is an expected answer
    /// for clicks without a nearby city, not an error.
    async fn reverse_geocode(&self, coordinate: &Coordinate)
    -> Result<Option<Place>, LookupError>;

    /// Fetch the forecast for a `"city,country_code"` query key
    async fn fetch_forecast(
        &self,
        city: &str,
        country_code: &str,
    ) -> Result<ForecastList, LookupError>;
}

/// Production client talking to the public geocoding and forecast APIs
pub struct HttpGeoLookupClient {
    /// HTTP client
    client: Client,
    /// Service configuration (endpoints, keys, language)
    config: WetterkarteConfig,
}

impl HttpGeoLookupClient {
    /// Create a new lookup client from validated configuration
    pub fn new(config: WetterkarteConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("wetterkarte/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// GET a URL and deserialize the body against an explicit schema.
    ///
    /// HTTP and transport failures surface as `Network`; a 2xx body
    /// that does not match the schema fails fast as
    /// `MalformedResponse`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        endpoint: &'static str,
    ) -> Result<T, LookupError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| LookupError::malformed(endpoint, e))
    }
}

#[async_trait]
impl GeoLookupClient for HttpGeoLookupClient {
    #[instrument(skip(self, coordinate), fields(query = %coordinate.geocode_query()))]
    async fn reverse_geocode(
        &self,
        coordinate: &Coordinate,
    ) -> Result<Option<Place>, LookupError> {
        let query = coordinate.geocode_query();
        // The `+` separator is literal, so the query is not URL-encoded
        let url = format!(
            "{}?q={}&min_confidence=1&key={}",
            self.config.geocoding_base_url, query, self.config.opencage_api_key
        );

        debug!("Requesting reverse geocode");
        let response: opencage::GeocodeResponse = self.get_json(&url, "geocoding").await?;

        match response.into_place() {
            Some(place) => {
                info!("Resolved '{}' to {}", query, place.display_name());
                Ok(Some(place))
            }
            None => {
                warn!("No geocoding result for '{}'", query);
                Ok(None)
            }
        }
    }

    #[instrument(skip(self))]
    async fn fetch_forecast(
        &self,
        city: &str,
        country_code: &str,
    ) -> Result<ForecastList, LookupError> {
        let url = format!(
            "{}?q={},{}&lang={}&APPID={}",
            self.config.forecast_base_url,
            urlencoding::encode(city),
            country_code,
            self.config.forecast_lang,
            self.config.openweathermap_api_key
        );

        debug!("Requesting forecast");
        let response: openweathermap::ForecastResponse = self.get_json(&url, "forecast").await?;
        let forecast = response.into_forecast()?;

        info!(
            "Retrieved {} forecast slices for {},{}",
            forecast.len(),
            city,
            country_code
        );
        Ok(forecast)
    }
}

/// OpenCage reverse-geocoding response schema (GeoJSON-like)
mod opencage {
    use crate::models::Place;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct GeocodeResponse {
        pub features: Vec<Feature>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Feature {
        pub properties: Properties,
    }

    #[derive(Debug, Deserialize)]
    pub struct Properties {
        pub components: Components,
    }

    /// Address components of one geocoding feature. The provider omits
    /// fields it cannot determine, so everything is optional here.
    #[derive(Debug, Deserialize)]
    pub struct Components {
        pub city: Option<String>,
        pub country: Option<String>,
        pub country_code: Option<String>,
    }

    impl GeocodeResponse {
        /// First feature as a `Place`, or `None` when the response has
        /// no feature or the best feature carries no city/country.
        pub fn into_place(self) -> Option<Place> {
            let components = self.features.into_iter().next()?.properties.components;
            Some(Place::new(
                components.city?,
                components.country?,
                components.country_code?,
            ))
        }
    }
}

/// OpenWeatherMap 5-day forecast response schema
mod openweathermap {
    use crate::error::LookupError;
    use crate::models::{ForecastEntry, ForecastList};
    use chrono::DateTime;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub list: Vec<ForecastSlice>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastSlice {
        /// Unix timestamp in seconds
        pub dt: i64,
        pub main: MainData,
        pub weather: Vec<Condition>,
    }

    #[derive(Debug, Deserialize)]
    pub struct MainData {
        /// Temperature in Kelvin
        pub temp: f32,
    }

    #[derive(Debug, Deserialize)]
    pub struct Condition {
        pub description: String,
        pub icon: String,
    }

    impl ForecastResponse {
        /// Convert response slices to domain entries, preserving order.
        /// Kelvin is converted to Celsius here, at the boundary.
        pub fn into_forecast(self) -> Result<ForecastList, LookupError> {
            let mut entries = Vec::with_capacity(self.list.len());

            for slice in self.list {
                let timestamp = DateTime::from_timestamp(slice.dt, 0).ok_or_else(|| {
                    LookupError::malformed("forecast", format!("timestamp {} out of range", slice.dt))
                })?;

                let condition = slice
                    .weather
                    .into_iter()
                    .next()
                    .ok_or_else(|| LookupError::malformed("forecast", "empty condition list"))?;

                entries.push(ForecastEntry {
                    timestamp,
                    temperature_celsius: ForecastEntry::kelvin_to_celsius(slice.main.temp),
                    condition_description: condition.description,
                    icon_id: condition.icon,
                });
            }

            Ok(ForecastList::new(entries))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocode_response_first_feature_wins() {
        let body = r#"{"features":[
            {"properties":{"components":{"city":"Berlin","country":"Germany","country_code":"de"}}},
            {"properties":{"components":{"city":"Potsdam","country":"Germany","country_code":"de"}}}
        ]}"#;
        let response: opencage::GeocodeResponse = serde_json::from_str(body).unwrap();
        let place = response.into_place().unwrap();
        assert_eq!(place.city, "Berlin");
        assert_eq!(place.country_name, "Germany");
        assert_eq!(place.country_code, "de");
    }

    #[test]
    fn test_geocode_response_zero_features_is_no_result() {
        let body = r#"{"features":[]}"#;
        let response: opencage::GeocodeResponse = serde_json::from_str(body).unwrap();
        assert!(response.into_place().is_none());
    }

    #[test]
    fn test_geocode_response_feature_without_city_is_no_result() {
        // A mid-ocean click resolves to a feature with no city component
        let body = r#"{"features":[{"properties":{"components":{"country":"Germany","country_code":"de"}}}]}"#;
        let response: opencage::GeocodeResponse = serde_json::from_str(body).unwrap();
        assert!(response.into_place().is_none());
    }

    #[test]
    fn test_geocode_response_missing_features_is_malformed() {
        let result: Result<opencage::GeocodeResponse, _> = serde_json::from_str(r#"{"status":"ok"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_forecast_response_converts_kelvin_and_keeps_order() {
        let body = r#"{"list":[
            {"dt":1531148400,"main":{"temp":300.15},"weather":[{"description":"Leichter Regen","icon":"10d"}]},
            {"dt":1531159200,"main":{"temp":273.15},"weather":[{"description":"Klarer Himmel","icon":"01d"}]}
        ]}"#;
        let response: openweathermap::ForecastResponse = serde_json::from_str(body).unwrap();
        let forecast = response.into_forecast().unwrap();

        assert_eq!(forecast.len(), 2);
        assert_eq!(forecast.entries[0].rounded_temperature(), 27);
        assert_eq!(forecast.entries[0].icon_id, "10d");
        assert_eq!(forecast.entries[1].rounded_temperature(), 0);
        assert!(forecast.entries[0].timestamp < forecast.entries[1].timestamp);
    }

    #[test]
    fn test_forecast_response_empty_condition_list_is_malformed() {
        let body = r#"{"list":[{"dt":1531148400,"main":{"temp":300.15},"weather":[]}]}"#;
        let response: openweathermap::ForecastResponse = serde_json::from_str(body).unwrap();
        let err = response.into_forecast().unwrap_err();
        assert!(matches!(err, LookupError::MalformedResponse { .. }));
    }
}

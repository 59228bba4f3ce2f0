//! `wetterkarte` - click-to-forecast weather map service
//!
//! Backs a browser map widget: a clicked coordinate is
//! reverse-geocoded to a city/country, the multi-day forecast for that
//! place is fetched, and a rendered view model is returned for
//! display, alongside a population-scaled city layer.

pub mod api;
pub mod config;
pub mod error;
pub mod layer;
pub mod lookup;
pub mod models;
pub mod pipeline;
pub mod view;
pub mod web;

// Re-export core types for public API
pub use config::WetterkarteConfig;
pub use error::LookupError;
pub use layer::{CityLayerConfig, CityLayerToggle};
pub use lookup::{GeoLookupClient, HttpGeoLookupClient};
pub use models::{Coordinate, ForecastEntry, ForecastList, Place};
pub use pipeline::ForecastPipeline;
pub use view::{BufferedView, ForecastLine, ViewSink, ViewState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}

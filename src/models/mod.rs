//! Data models for the wetterkarte service
//!
//! Core domain models organized by concern:
//! - Coordinate: a clicked map position
//! - Place: the reverse-geocoded city/country for a coordinate
//! - Forecast: the forecast slices rendered for a place

pub mod coordinate;
pub mod forecast;
pub mod place;

// Re-export all public types for convenient access
pub use coordinate::Coordinate;
pub use forecast::{ForecastEntry, ForecastList};
pub use place::Place;

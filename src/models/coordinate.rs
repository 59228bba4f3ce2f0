//! Coordinate model for captured map clicks

use serde::{Deserialize, Serialize};

/// A clicked map position in decimal degrees.
///
/// Captured once per click and immutable afterwards. Display and
/// geocoding both use the 3-decimal rendering, so what the user sees
/// is exactly what gets queried.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude formatted for display (3 decimal places)
    #[must_use]
    pub fn display_latitude(&self) -> String {
        format!("{:.3}", self.latitude)
    }

    /// Longitude formatted for display (3 decimal places)
    #[must_use]
    pub fn display_longitude(&self) -> String {
        format!("{:.3}", self.longitude)
    }

    /// Reverse-geocoding query value, `<lat>+<lon>` with 3 decimals.
    ///
    /// The `+` is a literal separator expected by the geocoding
    /// endpoint, not an encoded space.
    #[must_use]
    pub fn geocode_query(&self) -> String {
        format!("{:.3}+{:.3}", self.latitude, self.longitude)
    }
}

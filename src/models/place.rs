//! Place model for reverse-geocoded locations

use serde::{Deserialize, Serialize};

/// A named place derived from a reverse-geocode response.
///
/// Only ever constructed from the first feature of a geocoding
/// response; a coordinate with no matching feature yields no `Place`
/// at all rather than a partially filled one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    /// City name
    pub city: String,
    /// Full country name
    pub country_name: String,
    /// Country code (ISO 3166-1 alpha-2, lowercase as returned)
    pub country_code: String,
}

impl Place {
    /// Create a new place
    #[must_use]
    pub fn new(city: String, country_name: String, country_code: String) -> Self {
        Self {
            city,
            country_name,
            country_code,
        }
    }

    /// Display name, `"<city>, <country>"`
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.city, self.country_name)
    }
}

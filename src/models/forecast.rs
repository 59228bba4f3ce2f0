//! Forecast model and display methods

use chrono::{DateTime, Locale, Utc};
use serde::{Deserialize, Serialize};

/// Base URL for condition icons hosted by the forecast provider
const ICON_BASE_URL: &str = "https://openweathermap.org/img/w";

/// One forecast time slice (typically a 3-hour increment)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Timestamp of this slice
    pub timestamp: DateTime<Utc>,
    /// Temperature in Celsius (converted at the response boundary)
    pub temperature_celsius: f32,
    /// Human-readable description of weather conditions
    pub condition_description: String,
    /// Condition icon ID from the forecast provider
    pub icon_id: String,
}

impl ForecastEntry {
    /// Convert temperature from Kelvin to Celsius
    #[must_use]
    pub fn kelvin_to_celsius(kelvin: f32) -> f32 {
        kelvin - 273.15
    }

    /// Temperature rounded to the nearest whole degree for display
    #[must_use]
    pub fn rounded_temperature(&self) -> i32 {
        self.temperature_celsius.round() as i32
    }

    /// Remote URL of the small condition icon
    #[must_use]
    pub fn icon_url(&self) -> String {
        format!("{ICON_BASE_URL}/{}.png", self.icon_id)
    }

    /// Timestamp rendered in the hard-coded German locale,
    /// e.g. `"Montag, 9. Juli 2018, 15 Uhr"`
    #[must_use]
    pub fn format_timestamp(&self) -> String {
        self.timestamp
            .format_localized("%A, %-d. %B %Y, %-H Uhr", Locale::de_DE)
            .to_string()
    }
}

/// Ordered forecast slices for one place.
///
/// Order is chronological as returned by the forecast provider and is
/// never re-sorted or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastList {
    /// Forecast slices in provider order
    pub entries: Vec<ForecastEntry>,
}

impl ForecastList {
    /// Create a forecast list from slices already in provider order
    #[must_use]
    pub fn new(entries: Vec<ForecastEntry>) -> Self {
        Self { entries }
    }

    /// Number of forecast slices
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the forecast carries no slices
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate slices in render order
    pub fn iter(&self) -> std::slice::Iter<'_, ForecastEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn entry(temperature_celsius: f32) -> ForecastEntry {
        ForecastEntry {
            timestamp: DateTime::from_timestamp(1_531_148_400, 0).unwrap(),
            temperature_celsius,
            condition_description: "Leichter Regen".to_string(),
            icon_id: "10d".to_string(),
        }
    }

    #[rstest]
    #[case(273.15, 0.0)]
    #[case(300.15, 27.0)]
    #[case(250.15, -23.0)]
    fn test_kelvin_to_celsius(#[case] kelvin: f32, #[case] celsius: f32) {
        assert!((ForecastEntry::kelvin_to_celsius(kelvin) - celsius).abs() < 1e-4);
    }

    #[rstest]
    #[case(26.85, 27)]
    #[case(0.0, 0)]
    #[case(-0.4, 0)]
    #[case(-22.6, -23)]
    fn test_rounded_temperature(#[case] celsius: f32, #[case] rounded: i32) {
        assert_eq!(entry(celsius).rounded_temperature(), rounded);
    }

    #[test]
    fn test_icon_url() {
        assert_eq!(
            entry(20.0).icon_url(),
            "https://openweathermap.org/img/w/10d.png"
        );
    }

    #[test]
    fn test_german_timestamp_formatting() {
        // 2018-07-09T15:00:00Z
        assert_eq!(entry(20.0).format_timestamp(), "Montag, 9. Juli 2018, 15 Uhr");
    }

    #[test]
    fn test_list_preserves_order() {
        let list = ForecastList::new(vec![entry(1.0), entry(3.0), entry(2.0)]);
        let temperatures: Vec<f32> = list.iter().map(|e| e.temperature_celsius).collect();
        assert_eq!(temperatures, vec![1.0, 3.0, 2.0]);
    }
}

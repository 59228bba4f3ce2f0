//! View sink written by the forecast pipeline

use crate::error::LookupError;
use crate::models::{Coordinate, ForecastList, Place};
use serde::Serialize;
use std::sync::Mutex;

/// Display surface for one click-to-forecast flow.
///
/// The pipeline is the only writer; implementations own no business
/// logic. All methods are synchronous so that coordinate feedback can
/// land before any network I/O resolves.
pub trait ViewSink: Send + Sync {
    /// Show the clicked coordinate (both display fields at once)
    fn show_coordinate(&self, coordinate: &Coordinate);
    /// Show the resolved place name
    fn show_place(&self, place: &Place);
    /// Replace the forecast display contents, one line per entry
    fn render_forecast(&self, forecast: &ForecastList);
    /// Report a terminal failure without touching prior content
    fn show_error(&self, error: &LookupError);
}

/// One rendered forecast line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastLine {
    /// Localized date/time heading
    pub time: String,
    /// Whole-degree temperature
    pub temperature_celsius: i32,
    /// Condition text in the configured language
    pub conditions: String,
    /// Remote icon URL
    pub icon_url: String,
}

/// Serializable snapshot of the display surface
#[derive(Debug, Clone, Default, Serialize)]
pub struct ViewState {
    /// Clicked latitude, 3 decimal places
    pub latitude: Option<String>,
    /// Clicked longitude, 3 decimal places
    pub longitude: Option<String>,
    /// Resolved place, `"<city>, <country>"`
    pub place: Option<String>,
    /// Forecast lines in provider order
    pub forecast: Vec<ForecastLine>,
    /// Terminal failure for this click, if any
    pub error: Option<String>,
}

/// View sink buffering into a [`ViewState`] that is handed back to the
/// browser once the pipeline finishes.
#[derive(Debug, Default)]
pub struct BufferedView {
    state: Mutex<ViewState>,
}

impl BufferedView {
    /// Create an empty view
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone the current view state
    #[must_use]
    pub fn snapshot(&self) -> ViewState {
        self.state.lock().expect("view state lock poisoned").clone()
    }

    /// Consume the view, yielding its final state
    #[must_use]
    pub fn into_state(self) -> ViewState {
        self.state.into_inner().expect("view state lock poisoned")
    }
}

impl ViewSink for BufferedView {
    fn show_coordinate(&self, coordinate: &Coordinate) {
        let mut state = self.state.lock().expect("view state lock poisoned");
        state.latitude = Some(coordinate.display_latitude());
        state.longitude = Some(coordinate.display_longitude());
    }

    fn show_place(&self, place: &Place) {
        let mut state = self.state.lock().expect("view state lock poisoned");
        state.place = Some(place.display_name());
    }

    fn render_forecast(&self, forecast: &ForecastList) {
        let lines = forecast
            .iter()
            .map(|entry| ForecastLine {
                time: entry.format_timestamp(),
                temperature_celsius: entry.rounded_temperature(),
                conditions: entry.condition_description.clone(),
                icon_url: entry.icon_url(),
            })
            .collect();

        let mut state = self.state.lock().expect("view state lock poisoned");
        // Replace wholesale, mirroring a cleared-and-refilled container
        state.forecast = lines;
    }

    fn show_error(&self, error: &LookupError) {
        let mut state = self.state.lock().expect("view state lock poisoned");
        state.error = Some(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ForecastEntry;
    use chrono::DateTime;

    fn forecast_of(icons: &[&str]) -> ForecastList {
        ForecastList::new(
            icons
                .iter()
                .map(|icon| ForecastEntry {
                    timestamp: DateTime::from_timestamp(1_531_148_400, 0).unwrap(),
                    temperature_celsius: 20.0,
                    condition_description: "Klarer Himmel".to_string(),
                    icon_id: (*icon).to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_render_replaces_previous_contents() {
        let view = BufferedView::new();
        view.render_forecast(&forecast_of(&["01d", "02d", "03d"]));
        view.render_forecast(&forecast_of(&["10n"]));

        let state = view.into_state();
        assert_eq!(state.forecast.len(), 1);
        assert!(state.forecast[0].icon_url.contains("10n"));
    }

    #[test]
    fn test_error_leaves_prior_render_untouched() {
        let view = BufferedView::new();
        view.render_forecast(&forecast_of(&["01d"]));
        view.show_error(&LookupError::no_result("0.000+0.000"));

        let state = view.into_state();
        assert_eq!(state.forecast.len(), 1);
        assert!(state.error.is_some());
    }

    #[test]
    fn test_coordinate_fills_both_fields() {
        let view = BufferedView::new();
        view.show_coordinate(&Coordinate::new(52.520_008, 13.404_954));

        let state = view.snapshot();
        assert_eq!(state.latitude.as_deref(), Some("52.520"));
        assert_eq!(state.longitude.as_deref(), Some("13.405"));
    }
}

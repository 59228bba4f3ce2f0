//! Population-scaled city layer: frontend configuration and toggle

use serde::Serialize;

const VISIBLE_LABEL: &str = "Remove Cities";
const HIDDEN_LABEL: &str = "Add Cities";

/// Two-state visibility toggle for the city layer.
///
/// The button label IS the state: `"Remove Cities"` while the layer is
/// shown, `"Add Cities"` while it is hidden. No visibility flag is
/// held anywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityLayerToggle {
    label: String,
}

impl Default for CityLayerToggle {
    fn default() -> Self {
        Self::new()
    }
}

impl CityLayerToggle {
    /// Initial state: layer visible, button offering to remove it
    #[must_use]
    pub fn new() -> Self {
        Self {
            label: VISIBLE_LABEL.to_string(),
        }
    }

    /// Current button label
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Visibility derived from the label
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.label == VISIBLE_LABEL
    }

    /// Flip label and visibility; returns whether the layer is visible
    /// after the flip
    pub fn toggle(&mut self) -> bool {
        self.label = if self.is_visible() {
            HIDDEN_LABEL
        } else {
            VISIBLE_LABEL
        }
        .to_string();
        self.is_visible()
    }
}

/// Static configuration of the city layer, served to the frontend.
/// Symbol sizes scale linearly with population between the two bounds.
#[derive(Debug, Clone, Serialize)]
pub struct CityLayerConfig {
    /// Feature service providing city geometries and populations
    pub feature_service_url: String,
    /// Legend heading
    pub legend_title: String,
    /// Layer opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Population mapped to the smallest symbol
    pub min_population: u32,
    /// Population mapped to the largest symbol
    pub max_population: u32,
    /// Smallest symbol diameter in pixels
    pub min_symbol_px: u32,
    /// Largest symbol diameter in pixels
    pub max_symbol_px: u32,
}

impl Default for CityLayerConfig {
    fn default() -> Self {
        Self {
            feature_service_url:
                "https://services1.arcgis.com/XRQ58kpEa17kSlHX/ArcGIS/rest/services/World_Cities/FeatureServer/0"
                    .to_string(),
            legend_title: "City Population".to_string(),
            opacity: 0.5,
            min_population: 50_000,
            max_population: 1_500_000,
            min_symbol_px: 6,
            max_symbol_px: 25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_visible() {
        let toggle = CityLayerToggle::new();
        assert!(toggle.is_visible());
        assert_eq!(toggle.label(), "Remove Cities");
    }

    #[test]
    fn test_toggle_flips_label_and_visibility() {
        let mut toggle = CityLayerToggle::new();
        assert!(!toggle.toggle());
        assert_eq!(toggle.label(), "Add Cities");
        assert!(!toggle.is_visible());
    }

    #[test]
    fn test_double_toggle_restores_initial_state() {
        let mut toggle = CityLayerToggle::new();
        toggle.toggle();
        assert!(toggle.toggle());
        assert_eq!(toggle.label(), "Remove Cities");
        assert!(toggle.is_visible());
    }
}

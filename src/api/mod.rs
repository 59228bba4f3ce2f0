//! HTTP API surface for the map frontend

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::State,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::layer::{CityLayerConfig, CityLayerToggle};
use crate::lookup::HttpGeoLookupClient;
use crate::models::Coordinate;
use crate::pipeline::ForecastPipeline;
use crate::view::{BufferedView, ViewState};

/// State shared across API routes
pub struct AppState {
    /// Upstream lookup client
    pub client: HttpGeoLookupClient,
    /// Static city layer configuration
    pub city_layer: CityLayerConfig,
    /// Server-held visibility toggle for the city layer
    pub city_toggle: Mutex<CityLayerToggle>,
}

impl AppState {
    /// Create state with a fresh toggle and default layer config
    pub fn new(client: HttpGeoLookupClient) -> Self {
        Self {
            client,
            city_layer: CityLayerConfig::default(),
            city_toggle: Mutex::new(CityLayerToggle::new()),
        }
    }
}

/// A clicked map position as posted by the frontend
#[derive(Debug, Deserialize)]
pub struct ClickRequest {
    pub latitude: f64,
    pub longitude: f64,
}

/// Result of flipping the city layer toggle
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub label: String,
    pub visible: bool,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/forecast", post(post_forecast))
        .route("/citylayer", get(get_city_layer))
        .route("/citylayer/toggle", post(post_city_layer_toggle))
        .with_state(state)
}

/// Run one click through the pipeline and hand back the buffered view.
///
/// Each request gets its own view, so overlapping clicks race only in
/// the browser, never over shared server state.
async fn post_forecast(
    State(state): State<Arc<AppState>>,
    Json(click): Json<ClickRequest>,
) -> Json<ViewState> {
    let view = BufferedView::new();
    let pipeline = ForecastPipeline::new(&state.client, &view);
    pipeline
        .on_map_click(Coordinate::new(click.latitude, click.longitude))
        .await;
    Json(view.into_state())
}

async fn get_city_layer(State(state): State<Arc<AppState>>) -> Json<CityLayerConfig> {
    Json(state.city_layer.clone())
}

async fn post_city_layer_toggle(State(state): State<Arc<AppState>>) -> Json<ToggleResponse> {
    let mut toggle = state.city_toggle.lock().expect("city toggle lock poisoned");
    let visible = toggle.toggle();
    Json(ToggleResponse {
        label: toggle.label().to_string(),
        visible,
    })
}

//! Click-to-forecast pipeline
//!
//! Orchestrates the four-stage chain triggered by a map click:
//! capture the coordinate, reverse-geocode it to a place, fetch the
//! forecast for that place, render the result. Each stage depends on
//! the previous one succeeding; the first failure ends the chain.

use crate::error::LookupError;
use crate::lookup::GeoLookupClient;
use crate::models::Coordinate;
use crate::view::ViewSink;
use tracing::{debug, error, instrument};

/// Drives one click through capture, geocode, lookup and render.
///
/// Borrows its collaborators, so a pipeline is cheap to construct per
/// click. Nothing serializes overlapping clicks: concurrent chains
/// race against the same view and the last one to resolve wins, as in
/// the original widget. Per-request views keep that race client-side.
pub struct ForecastPipeline<'a, C, V> {
    client: &'a C,
    view: &'a V,
}

impl<'a, C: GeoLookupClient, V: ViewSink> ForecastPipeline<'a, C, V> {
    /// Create a pipeline over a lookup client and a view sink
    pub fn new(client: &'a C, view: &'a V) -> Self {
        Self { client, view }
    }

    /// Handle one map click.
    ///
    /// Fire-and-forget: failures are terminal for this click only and
    /// never surface to the caller. The coordinate is echoed to the
    /// view before the first network call starts, so the user gets
    /// click feedback even when the chain later stalls or fails.
    #[instrument(skip_all, fields(lat = coordinate.latitude, lon = coordinate.longitude))]
    pub async fn on_map_click(&self, coordinate: Coordinate) {
        self.view.show_coordinate(&coordinate);

        if let Err(err) = self.run_chain(coordinate).await {
            if err.is_no_result() {
                debug!("Chain stopped: {err}");
            } else {
                error!("Chain failed: {err}");
            }
            self.view.show_error(&err);
        }
    }

    /// Stages 2-4. The forecast is always keyed by the resolved place,
    /// never by the raw coordinate, and the geocode uses the captured
    /// coordinate rather than re-reading the rendered text.
    async fn run_chain(&self, coordinate: Coordinate) -> Result<(), LookupError> {
        let place = self
            .client
            .reverse_geocode(&coordinate)
            .await?
            .ok_or_else(|| LookupError::no_result(coordinate.geocode_query()))?;
        self.view.show_place(&place);

        let forecast = self
            .client
            .fetch_forecast(&place.city, &place.country_code)
            .await?;
        self.view.render_forecast(&forecast);
        Ok(())
    }
}

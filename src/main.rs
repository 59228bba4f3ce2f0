use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use wetterkarte::api::AppState;
use wetterkarte::lookup::HttpGeoLookupClient;
use wetterkarte::{WetterkarteConfig, web};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = WetterkarteConfig::from_env()?;
    let port = config.port;
    let client = HttpGeoLookupClient::new(config)?;
    let state = Arc::new(AppState::new(client));

    web::run(port, state).await
}

// Main entry point - Dependency injection and dashboard startup
mod application;
mod domain;
mod error;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard::Dashboard;
use crate::application::map_view::UniformJitter;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_api::HttpDashboardApi;
use crate::presentation::commands::run_console;
use crate::presentation::console::ConsoleDocument;
use crate::presentation::map_layer::{MarkerLayer, TileLayer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Backend adapter (infrastructure layer)
    let api = Arc::new(HttpDashboardApi::new(config.backend.base_url.clone())?);

    // Display surfaces (presentation layer); no map means no dashboard
    let map = Arc::new(MarkerLayer::initialize(
        config.map.center(),
        config.map.zoom,
        TileLayer {
            url_template: config.map.tile_url.clone(),
            attribution: config.map.attribution.clone(),
        },
    )?);
    let document = Arc::new(ConsoleDocument::new());

    // Panels and timers (application layer)
    let mut dashboard = Dashboard::new(
        &config,
        api,
        document.clone(),
        map.clone(),
        Arc::new(UniformJitter::new(config.pins.spread)),
    );

    tracing::info!("Starting city dashboard against {}", config.backend.base_url);
    dashboard.start().await;

    let result = run_console(&dashboard, &document, &map).await;
    dashboard.shutdown().await;

    result
}

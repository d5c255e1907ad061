//! Serve command - runs API + UI combined on the same port

use tokio::net::TcpListener;
use tracing::info;

use super::{build_socket_addr, shutdown_signal};
use crate::api::create_router_with_ui;
use crate::config::AppConfig;
use crate::infrastructure::logging::init_logging;

/// Run the combined API + UI server
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    init_logging(&config.logging);

    let state = crate::create_app_state(&config)?;
    let app = create_router_with_ui(state, &config.ui.static_dir);

    let addr = build_socket_addr(&config)?;
    info!("Starting dashboard (API + UI) on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

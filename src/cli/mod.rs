//! CLI module for the pandemic dashboard
//!
//! Provides subcommands for running the dashboard in different modes:
//! - `serve`: API + UI combined (default)
//! - `api`: API server only, with Prometheus metrics
//! - `forecast`: one-shot prediction table printed to stdout

pub mod api;
pub mod forecast;
pub mod serve;

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::signal;
use tracing::{info, warn};

use crate::config::AppConfig;

/// Pandemic Prediction Dashboard - case trends, global spread and short-term forecasts
#[derive(Parser)]
#[command(name = "pandemic-dashboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run API + UI server combined (default mode)
    Serve,

    /// Run API server only
    Api,

    /// Print the prediction table for one country
    Forecast(forecast::ForecastArgs),
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}

/// Resolves on Ctrl+C or SIGTERM. A handler that fails to install is logged
/// and never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_forecast_command() {
        let cli = Cli::try_parse_from([
            "pandemic-dashboard",
            "forecast",
            "--country",
            "Italy",
            "--days",
            "14",
        ])
        .unwrap();

        match cli.command {
            Command::Forecast(args) => {
                assert_eq!(args.country, "Italy");
                assert_eq!(args.days, Some(14));
                assert!(args.data.is_none());
            }
            _ => panic!("expected forecast command"),
        }
    }

    #[test]
    fn test_socket_addr_from_config() {
        let config = AppConfig::default();
        let addr = build_socket_addr(&config).unwrap();
        assert_eq!(addr.port(), 8050);
    }
}

//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, DatasetConfig, LogFormat, LoggingConfig, MetricsConfig, ServerConfig, UiConfig,
};

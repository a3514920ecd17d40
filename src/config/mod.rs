//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, CoachConfig, DocumentsConfig, ExtractionConfig, LogFormat, LoggingConfig,
    OneOrMany, SearchConfig, ServerConfig,
};

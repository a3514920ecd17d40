//! Infrastructure layer - External service implementations

pub mod documents;
pub mod extract;
pub mod http_client;
pub mod llm;
pub mod logging;
pub mod services;

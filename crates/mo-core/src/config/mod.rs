//! Configuration data structures.
//!
//! Data only: TOML -> DTO mapping. Loading from disk lives in the shell.

mod app_config;

pub use app_config::{AppConfig, AuthConfig, LocationConfig, LoggingConfig, OtpConfig};

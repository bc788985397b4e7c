//! Configuration
//!
//! Layered configuration: defaults, then an optional TOML file, then
//! `DARTH__`-prefixed environment variables.

/// Figment-based loader, validation and programmatic builder
pub mod loader;
/// Configuration data types
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader, validate_app_config};
pub use types::{AppConfig, CacheConfig, LoggingConfig};

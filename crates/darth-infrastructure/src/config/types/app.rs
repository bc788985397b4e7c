//! Main application configuration

use super::{CacheConfig, LoggingConfig};
use serde::{Deserialize, Serialize};

/// Root configuration
///
/// ```toml
/// [cache]
/// provider = "redis"
/// redis_url = "redis://localhost:6379"
/// namespace = "DARTH"
///
/// [logging]
/// level = "debug"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Cache store and backend settings
    pub cache: CacheConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

//! Cache configuration types

use crate::constants::*;
use darth_application::constants::DEFAULT_FANOUT_LIMIT;
use darth_application::HandleOptions;
use darth_domain::constants::DEFAULT_NAMESPACE;
use serde::{Deserialize, Serialize};

/// Cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Default for new handles; disabled handles skip writes
    pub enabled: bool,

    /// Registered backend name ("moka", "redis", "null")
    pub provider: String,

    /// Namespace for cache keys
    pub namespace: String,

    /// Default TTL in seconds for handles built from this config
    pub default_ttl_secs: u64,

    /// Redis URL (for Redis provider)
    pub redis_url: Option<String>,

    /// Entry bound for the Moka provider, unbounded when unset
    ///
    /// Setting it turns on Moka's size-based eviction: live entries may
    /// disappear before their TTL once the bound is reached.
    pub max_capacity: Option<u64>,

    /// Maximum in-flight backend requests per wildcard fan-out
    pub fanout_limit: usize,

    /// Keys requested per SCAN round trip (for Redis provider)
    pub scan_count: usize,
}

impl CacheConfig {
    /// Handle options carrying this config's TTL and enabled flag
    pub fn handle_options(&self) -> HandleOptions {
        HandleOptions::new(self.default_ttl_secs).with_enabled(self.enabled)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: CACHE_DEFAULT_PROVIDER.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            default_ttl_secs: CACHE_DEFAULT_TTL_SECS,
            redis_url: None,
            max_capacity: None,
            fanout_limit: DEFAULT_FANOUT_LIMIT,
            scan_count: CACHE_DEFAULT_SCAN_COUNT,
        }
    }
}

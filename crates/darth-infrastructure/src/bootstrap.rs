//! Store bootstrap
//!
//! Turns an [`AppConfig`] into a ready [`CacheStore`]: resolves the
//! configured backend from the provider registry and builds the store's
//! explicit configuration object.

use crate::config::{AppConfig, CacheConfig, validate_app_config};
use darth_application::ports::registry::{KvProviderConfig, resolve_kv_provider};
use darth_application::{CacheStore, StoreConfig};
use darth_domain::error::Result;
use tracing::info;

// Force linkme registration of all providers
extern crate darth_providers;

/// Registry lookup config for the configured backend
pub fn provider_config(cache: &CacheConfig) -> KvProviderConfig {
    let mut config = KvProviderConfig::new(&cache.provider).with_scan_count(cache.scan_count);
    if let Some(max_capacity) = cache.max_capacity {
        config = config.with_max_capacity(max_capacity);
    }
    if let Some(url) = &cache.redis_url {
        config = config.with_uri(url);
    }
    config
}

/// Store-wide settings taken from the cache section
pub fn store_config(cache: &CacheConfig) -> StoreConfig {
    StoreConfig::new()
        .with_namespace(&cache.namespace)
        .with_fanout_limit(cache.fanout_limit)
}

/// Validate `config`, resolve its backend and build the store
///
/// Remote backends connect lazily: an unreachable Redis server surfaces
/// on the first cache operation, not here.
pub fn bootstrap_store(config: &AppConfig) -> Result<CacheStore> {
    validate_app_config(config)?;

    let provider = resolve_kv_provider(&provider_config(&config.cache))?;
    info!(provider = %config.cache.provider, "Cache backend resolved");

    CacheStore::new(provider, store_config(&config.cache))
}

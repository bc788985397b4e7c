//! Configuration type defaults and conversions

use darth_application::constants::DEFAULT_FANOUT_LIMIT;
use darth_infrastructure::config::{AppConfig, CacheConfig};
use darth_infrastructure::constants::{
    CACHE_DEFAULT_PROVIDER, CACHE_DEFAULT_SCAN_COUNT, CACHE_DEFAULT_TTL_SECS,
};

#[test]
fn test_cache_config_default() {
    let config = CacheConfig::default();
    assert!(config.enabled);
    assert_eq!(config.provider, CACHE_DEFAULT_PROVIDER);
    assert_eq!(config.namespace, "DARTH");
    assert_eq!(config.default_ttl_secs, CACHE_DEFAULT_TTL_SECS);
    assert!(config.redis_url.is_none());
    assert_eq!(config.max_capacity, None);
    assert_eq!(config.fanout_limit, DEFAULT_FANOUT_LIMIT);
    assert_eq!(config.scan_count, CACHE_DEFAULT_SCAN_COUNT);
}

#[test]
fn test_handle_options_follow_cache_config() {
    let config = CacheConfig {
        enabled: false,
        default_ttl_secs: 42,
        ..CacheConfig::default()
    };

    let options = config.handle_options();
    assert_eq!(options.ttl_secs, 42);
    assert!(!options.enabled);
    assert!(options.namespace.is_none());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config: AppConfig = toml::from_str(
        r#"
        [cache]
        namespace = "XYZ"
        "#,
    )
    .unwrap();

    assert_eq!(config.cache.namespace, "XYZ");
    assert_eq!(config.cache.provider, CACHE_DEFAULT_PROVIDER);
    assert_eq!(config.logging.level, "info");
}

//! Configuration loader tests
//!
//! Each test reads the environment under its own prefix so tests can run
//! in parallel without seeing each other's variables.

use darth_domain::Error;
use darth_infrastructure::config::{AppConfig, ConfigBuilder, ConfigLoader};
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Loader reading `path` and environment variables under `prefix`
fn loader(prefix: &str, path: &std::path::Path) -> ConfigLoader {
    ConfigLoader::new()
        .with_env_prefix(prefix)
        .with_config_path(path)
}

fn set_env(key: &str, value: &str) {
    // SAFETY: every test uses a distinct variable prefix
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: every test uses a distinct variable prefix
    unsafe {
        env::remove_var(key);
    }
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = loader("DARTH_T_DEFAULTS", &dir.path().join("absent.toml"))
        .load()
        .unwrap();

    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_toml_file_overrides_defaults() {
    let file = toml_file(
        r#"
        [cache]
        namespace = "XYZ"
        default_ttl_secs = 100
        fanout_limit = 4

        [logging]
        level = "debug"
        json_format = true
        "#,
    );

    let config = loader("DARTH_T_TOML", file.path()).load().unwrap();

    assert_eq!(config.cache.namespace, "XYZ");
    assert_eq!(config.cache.default_ttl_secs, 100);
    assert_eq!(config.cache.fanout_limit, 4);
    assert_eq!(config.cache.provider, "moka");
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
}

#[test]
fn test_env_overrides_file() {
    let file = toml_file(
        r#"
        [cache]
        namespace = "FROM_FILE"
        "#,
    );
    set_env("DARTH_T_ENV__CACHE__NAMESPACE", "FROM_ENV");
    set_env("DARTH_T_ENV__CACHE__DEFAULT_TTL_SECS", "7");

    let config = loader("DARTH_T_ENV", file.path()).load();

    remove_env("DARTH_T_ENV__CACHE__NAMESPACE");
    remove_env("DARTH_T_ENV__CACHE__DEFAULT_TTL_SECS");

    let config = config.unwrap();
    assert_eq!(config.cache.namespace, "FROM_ENV");
    assert_eq!(config.cache.default_ttl_secs, 7);
}

#[test]
fn test_single_underscore_prefix_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    set_env("DARTH_T_SINGLE_CACHE_NAMESPACE", "IGNORED");

    let config = loader("DARTH_T_SINGLE", &dir.path().join("absent.toml")).load();

    remove_env("DARTH_T_SINGLE_CACHE_NAMESPACE");
    assert_eq!(config.unwrap().cache.namespace, "DARTH");
}

#[test]
fn test_invalid_values_fail_fast() {
    let cases = [
        ("[cache]\nnamespace = \"\"", "namespace"),
        ("[cache]\nnamespace = \"A::B\"", "namespace"),
        ("[cache]\ndefault_ttl_secs = 0", "TTL"),
        ("[cache]\nfanout_limit = 0", "fan-out"),
        ("[cache]\nscan_count = 0", "scan count"),
        ("[cache]\nprovider = \"redis\"", "Redis URL"),
        ("[cache]\nprovider = \"memcached\"", "memcached"),
        ("[logging]\nlevel = \"loud\"", "log level"),
    ];

    for (contents, needle) in cases {
        let file = toml_file(contents);
        let err = loader("DARTH_T_INVALID", file.path()).load().unwrap_err();
        match err {
            Error::Configuration { message, .. } => {
                assert!(message.contains(needle), "{contents:?}: {message}");
            }
            other => panic!("{contents:?}: expected Configuration error, got {other:?}"),
        }
    }
}

#[test]
fn test_zero_ttl_allowed_when_disabled() {
    let file = toml_file("[cache]\nenabled = false\ndefault_ttl_secs = 0");
    let config = loader("DARTH_T_DISABLED", file.path()).load().unwrap();
    assert!(!config.cache.enabled);
}

#[test]
fn test_malformed_toml_is_configuration_error() {
    let file = toml_file("[cache\nnamespace = ");
    let err = loader("DARTH_T_MALFORMED", file.path()).load().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("darth.toml");
    let config = ConfigBuilder::new()
        .with_redis_url("redis://localhost:6379")
        .with_namespace("SAVED")
        .with_default_ttl_secs(60)
        .build_validated()
        .unwrap();

    let loader = loader("DARTH_T_SAVE", &path);
    loader.save_to_file(&config, &path).unwrap();

    assert_eq!(loader.load().unwrap(), config);
}

#[test]
fn test_builder_validation() {
    assert!(ConfigBuilder::new().with_fanout_limit(0).build_validated().is_err());
    assert!(ConfigBuilder::new().with_provider("null").build_validated().is_ok());

    let unchecked = ConfigBuilder::new().with_fanout_limit(0).build();
    assert_eq!(unchecked.cache.fanout_limit, 0);
}

#[test]
fn test_loader_accessors() {
    let loader = ConfigLoader::new();
    assert_eq!(loader.env_prefix(), "DARTH");
    assert!(loader.config_path().is_none());
}

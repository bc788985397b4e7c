//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.
//!
//! Uses Figment for configuration management.

use crate::config::{AppConfig, CacheConfig, LoggingConfig};
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use darth_application::ports::registry::list_kv_providers;
use darth_domain::error::{Error, Result};
use darth_domain::value_objects::validate_segment;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `DARTH__CACHE__NAMESPACE`)
    pub fn load(&self) -> Result<AppConfig> {
        // Start with default configuration
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        // Add configuration file if specified
        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Nested keys use a double underscore (e.g., DARTH__CACHE__DEFAULT_TTL_SECS)
        figment = figment.merge(
            Env::prefixed(&format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix))
                .split(CONFIG_ENV_SEPARATOR),
        );

        // Extract and deserialize configuration
        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Environment variable prefix
    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }

    /// Find the first default configuration file that exists
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let mut candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
        }

        candidates.into_iter().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Fails fast on the first invalid section.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_cache_config(&config.cache)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

fn validate_cache_config(cache: &CacheConfig) -> Result<()> {
    validate_segment("namespace", &cache.namespace)
        .map_err(|e| Error::configuration(format!("Invalid cache namespace: {e}")))?;

    if cache.enabled && cache.default_ttl_secs == 0 {
        return Err(Error::configuration(
            "Cache TTL cannot be 0 when cache is enabled",
        ));
    }
    if cache.fanout_limit == 0 {
        return Err(Error::configuration("Cache fan-out limit cannot be 0"));
    }
    if cache.scan_count == 0 {
        return Err(Error::configuration("Cache scan count cannot be 0"));
    }
    if cache.provider == "redis" && cache.redis_url.is_none() {
        return Err(Error::configuration(
            "Redis URL is required when the cache provider is redis",
        ));
    }

    let providers = list_kv_providers();
    if !providers.iter().any(|(name, _)| *name == cache.provider) {
        let available: Vec<&str> = providers.iter().map(|(name, _)| *name).collect();
        return Err(Error::configuration(format!(
            "Unknown cache provider '{}'. Available providers: {available:?}",
            cache.provider
        )));
    }
    Ok(())
}

fn validate_logging_config(logging: &LoggingConfig) -> Result<()> {
    parse_log_level(&logging.level)?;
    if logging.file_output.is_some() && logging.max_files == 0 {
        return Err(Error::configuration(
            "Maximum log files cannot be 0 when file output is enabled",
        ));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cache configuration
    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.config.cache = cache;
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Select the backend by registered name
    pub fn with_provider<S: Into<String>>(mut self, provider: S) -> Self {
        self.config.cache.provider = provider.into();
        self
    }

    /// Use Redis at `url`
    pub fn with_redis_url<S: Into<String>>(mut self, url: S) -> Self {
        self.config.cache.provider = "redis".to_string();
        self.config.cache.redis_url = Some(url.into());
        self
    }

    /// Set the key namespace
    pub fn with_namespace<S: Into<String>>(mut self, namespace: S) -> Self {
        self.config.cache.namespace = namespace.into();
        self
    }

    /// Set the default TTL
    pub fn with_default_ttl_secs(mut self, ttl_secs: u64) -> Self {
        self.config.cache.default_ttl_secs = ttl_secs;
        self
    }

    /// Set the fan-out limit
    pub fn with_fanout_limit(mut self, fanout_limit: usize) -> Self {
        self.config.cache.fanout_limit = fanout_limit;
        self
    }

    /// Build the configuration without validating it
    pub fn build(self) -> AppConfig {
        self.config
    }

    /// Build and validate the configuration
    pub fn build_validated(self) -> Result<AppConfig> {
        validate_app_config(&self.config)?;
        Ok(self.config)
    }
}

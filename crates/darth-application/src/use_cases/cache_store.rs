//! Cache Store Use Case
//!
//! Factory bound to one KV backend and one explicit configuration object.
//! Every handle it produces is independent; there is no process-wide store.

use crate::constants::DEFAULT_FANOUT_LIMIT;
use crate::use_cases::cache_handle::CacheHandle;
use darth_domain::constants::DEFAULT_NAMESPACE;
use darth_domain::error::{Error, Result};
use darth_domain::ports::{KvProvider, NamedEntity};
use darth_domain::value_objects::validate_segment;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Store-wide configuration shared by every handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Key prefix isolating this deployment's keys
    pub namespace: String,
    /// Maximum in-flight backend requests per wildcard fan-out
    pub fanout_limit: usize,
}

impl StoreConfig {
    /// Create a store config with the default namespace
    pub fn new() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            fanout_limit: DEFAULT_FANOUT_LIMIT,
        }
    }

    /// Set the namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the fan-out limit
    pub fn with_fanout_limit(mut self, fanout_limit: usize) -> Self {
        self.fanout_limit = fanout_limit;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validate_segment("namespace", &self.namespace)?;
        if self.fanout_limit == 0 {
            return Err(Error::configuration("Fan-out limit cannot be 0"));
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-handle options
///
/// `ttl_secs` has no default: every handle states its own expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandleOptions {
    /// Entry lifetime in seconds
    pub ttl_secs: u64,
    /// When false, writes are no-ops
    pub enabled: bool,
    /// Namespace override; the store's namespace when `None`
    pub namespace: Option<String>,
}

impl HandleOptions {
    /// Create options with the given TTL, enabled, inheriting the namespace
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            ttl_secs,
            enabled: true,
            namespace: None,
        }
    }

    /// Set the enabled flag
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Override the namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

/// Factory producing [`CacheHandle`]s over one KV backend
///
/// # Example
///
/// ```ignore
/// use darth_application::{CacheStore, HandleOptions, StoreConfig};
///
/// let store = CacheStore::new(provider, StoreConfig::new().with_namespace("XYZ"))?;
/// let users = store.handle("User", HandleOptions::new(100))?;
/// users.write(&user, &Qualifier::by_id(1)).await?;
/// ```
#[derive(Clone)]
pub struct CacheStore {
    provider: Arc<dyn KvProvider>,
    config: StoreConfig,
}

impl CacheStore {
    /// Create a store over `provider`
    pub fn new(provider: Arc<dyn KvProvider>, config: StoreConfig) -> Result<Self> {
        config.validate()?;
        info!(
            provider = provider.provider_name(),
            namespace = %config.namespace,
            fanout_limit = config.fanout_limit,
            "Cache store created"
        );
        Ok(Self { provider, config })
    }

    /// Create a handle for an entity name
    pub fn handle(&self, entity: &str, options: HandleOptions) -> Result<CacheHandle> {
        let namespace = options
            .namespace
            .unwrap_or_else(|| self.config.namespace.clone());
        CacheHandle::new(
            Arc::clone(&self.provider),
            namespace,
            entity.to_string(),
            options.ttl_secs,
            options.enabled,
            self.config.fanout_limit,
        )
    }

    /// Create a handle for an upstream model type
    pub fn handle_for<E: NamedEntity>(&self, options: HandleOptions) -> Result<CacheHandle> {
        self.handle(E::entity_name(), options)
    }

    /// Store configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Default namespace for handles
    pub fn namespace(&self) -> &str {
        &self.config.namespace
    }

    /// Backend shared by every handle
    pub fn provider(&self) -> Arc<dyn KvProvider> {
        Arc::clone(&self.provider)
    }
}

impl fmt::Debug for CacheStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheStore")
            .field("provider", &self.provider.provider_name())
            .field("config", &self.config)
            .finish()
    }
}

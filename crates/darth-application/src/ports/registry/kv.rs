//! KV Provider Registry
//!
//! Auto-registration system for key-value providers.
//! Providers register themselves via `#[linkme::distributed_slice(KV_PROVIDERS)]`
//! and are discovered at runtime by name.

use std::sync::Arc;

use darth_domain::error::{Error, Result};
use darth_domain::ports::KvProvider;

/// Configuration for KV provider creation
///
/// Contains all configuration options that a provider might need.
/// Providers should use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct KvProviderConfig {
    /// Provider name (e.g., "moka", "redis", "null")
    pub provider: String,
    /// Connection URI (for remote stores)
    pub uri: Option<String>,
    /// Entry bound for in-process stores; `None` keeps them unbounded
    pub max_capacity: Option<u64>,
    /// Keys requested per SCAN round trip (for Redis)
    pub scan_count: Option<usize>,
}

impl KvProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the URI
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Set the max capacity
    pub fn with_max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }

    /// Set the SCAN batch size
    pub fn with_scan_count(mut self, scan_count: usize) -> Self {
        self.scan_count = Some(scan_count);
        self
    }
}

/// Registry entry for KV providers
///
/// Each provider implementation registers one entry containing metadata and
/// a factory function to create provider instances.
pub struct KvProviderEntry {
    /// Unique provider name (e.g., "moka", "redis", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&KvProviderConfig) -> std::result::Result<Arc<dyn KvProvider>, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static KV_PROVIDERS: [KvProviderEntry] = [..];

/// Resolve a KV provider by name from the registry
///
/// # Returns
/// * `Ok(Arc<dyn KvProvider>)` - Created provider instance
/// * `Err(Error::Configuration)` - Provider not found or creation failed
pub fn resolve_kv_provider(config: &KvProviderConfig) -> Result<Arc<dyn KvProvider>> {
    let provider_name = &config.provider;

    if let Some(entry) = KV_PROVIDERS.iter().find(|e| e.name == provider_name.as_str()) {
        return (entry.factory)(config).map_err(|e| {
            Error::configuration(format!("Failed to create KV provider '{provider_name}': {e}"))
        });
    }

    // List available providers for helpful error message
    let available: Vec<&str> = KV_PROVIDERS.iter().map(|e| e.name).collect();

    Err(Error::configuration(format!(
        "Unknown KV provider '{provider_name}'. Available providers: {available:?}"
    )))
}

/// List all registered KV providers
///
/// Returns a list of (name, description) tuples for all registered providers.
pub fn list_kv_providers() -> Vec<(&'static str, &'static str)> {
    KV_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}

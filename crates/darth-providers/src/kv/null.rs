//! Null KV provider
//!
//! A provider implementation that doesn't store anything.
//! Useful for testing and switching storage off entirely.

use async_trait::async_trait;
use darth_domain::error::Result;
use darth_domain::ports::KvProvider;
use std::sync::Arc;

/// Null KV provider that doesn't store anything
///
/// Every GET misses, every SETEX is accepted and dropped, every DEL removes
/// nothing and every pattern scan is empty.
///
/// # Example
///
/// ```rust
/// use darth_providers::kv::NullKvProvider;
///
/// let provider = NullKvProvider::new();
/// // All operations succeed but nothing is stored
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullKvProvider;

impl NullKvProvider {
    /// Create a new null provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl KvProvider for NullKvProvider {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn set_ex(&self, _key: &str, _value: &str, _ttl_secs: u64) -> Result<()> {
        Ok(())
    }

    async fn del(&self, _key: &str) -> Result<u64> {
        Ok(0)
    }

    async fn keys(&self, _pattern: &str) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use darth_application::ports::registry::{KV_PROVIDERS, KvProviderConfig, KvProviderEntry};

#[linkme::distributed_slice(KV_PROVIDERS)]
static NULL_PROVIDER: KvProviderEntry = KvProviderEntry {
    name: "null",
    description: "No-op provider that stores nothing",
    factory: |_config: &KvProviderConfig| Ok(Arc::new(NullKvProvider::new())),
};

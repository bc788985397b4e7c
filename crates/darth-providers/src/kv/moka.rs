//! Moka in-process KV provider
//!
//! Concurrent in-memory store using Moka, for single-instance deployments
//! and tests.
//!
//! ## Features
//!
//! - Per-entry TTL taken from each SETEX call
//! - Unbounded by default; an explicit capacity turns on Moka's size-based eviction
//! - Glob pattern matching for the KEYS primitive (`*`, `?`, `[...]`)
//!
//! ## Example
//!
//! ```ignore
//! use darth_providers::kv::MokaKvProvider;
//!
//! let provider = MokaKvProvider::with_capacity(1000);
//! ```

use async_trait::async_trait;
use darth_domain::error::{Error, Result};
use darth_domain::ports::KvProvider;
use moka::Expiry;
use moka::future::Cache;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Stored value plus the TTL it was written with
#[derive(Clone)]
struct Entry {
    value: Arc<str>,
    ttl: Duration,
}

/// Expires each entry after the TTL given at write time
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(&self, _key: &String, entry: &Entry, _created_at: Instant) -> Option<Duration> {
        Some(entry.ttl)
    }

    // Overwrites restart the clock, as SETEX does.
    fn expire_after_update(
        &self,
        _key: &String,
        entry: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// Moka-based in-process KV provider
#[derive(Clone)]
pub struct MokaKvProvider {
    cache: Cache<String, Entry>,
    max_capacity: Option<u64>,
}

impl Default for MokaKvProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaKvProvider {
    /// Create an unbounded Moka provider
    ///
    /// Entries leave only through TTL expiry or DEL.
    pub fn new() -> Self {
        Self {
            cache: Cache::builder().expire_after(PerEntryTtl).build(),
            max_capacity: None,
        }
    }

    /// Create a Moka provider holding at most `max_capacity` entries
    ///
    /// Past the bound Moka evicts live entries by its TinyLFU admission
    /// policy, before their TTL runs out.
    pub fn with_capacity(max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryTtl)
            .build();

        Self {
            cache,
            max_capacity: Some(max_capacity),
        }
    }

    /// Entry bound, `None` when unbounded
    pub fn max_capacity(&self) -> Option<u64> {
        self.max_capacity
    }

    /// Number of live entries
    pub async fn entry_count(&self) -> u64 {
        // Run pending tasks to ensure entry_count is accurate
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}

#[async_trait]
impl KvProvider for MokaKvProvider {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .cache
            .get(key)
            .await
            .map(|entry| entry.value.to_string()))
    }

    async fn set_ex(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()> {
        if ttl_secs == 0 {
            return Err(Error::backend(format!(
                "Moka SETEX failed for {key}: expire time must be positive"
            )));
        }

        let entry = Entry {
            value: Arc::from(value),
            ttl: Duration::from_secs(ttl_secs),
        };
        self.cache.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<u64> {
        Ok(u64::from(self.cache.remove(key).await.is_some()))
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        let matcher = glob::Pattern::new(pattern).map_err(|e| {
            Error::backend_with_source(format!("Moka KEYS failed: invalid pattern {pattern}"), e)
        })?;

        Ok(self
            .cache
            .iter()
            .filter(|(key, _)| matcher.matches(key))
            .map(|(key, _)| String::clone(&key))
            .collect())
    }

    fn provider_name(&self) -> &str {
        "moka"
    }
}

impl std::fmt::Debug for MokaKvProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaKvProvider")
            .field("max_capacity", &self.max_capacity)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use darth_application::ports::registry::{KV_PROVIDERS, KvProviderConfig, KvProviderEntry};

#[linkme::distributed_slice(KV_PROVIDERS)]
static MOKA_PROVIDER: KvProviderEntry = KvProviderEntry {
    name: "moka",
    description: "Moka in-process store with per-entry TTL",
    factory: |config: &KvProviderConfig| {
        let provider = if let Some(max_capacity) = config.max_capacity {
            MokaKvProvider::with_capacity(max_capacity)
        } else {
            MokaKvProvider::new()
        };
        Ok(Arc::new(provider))
    },
};

//! Redis KV provider
//!
//! Remote store implementation using Redis as the backend.
//! Suitable for multi-instance deployments sharing one keyspace.
//!
//! ## Features
//!
//! - GET / SETEX / DEL mapped one-to-one onto Redis commands
//! - Pattern listing via cursor-based `SCAN MATCH` instead of blocking `KEYS`
//! - One multiplexed connection, opened lazily and shared by concurrent calls
//!
//! ## Example
//!
//! ```ignore
//! use darth_providers::kv::RedisKvProvider;
//!
//! let provider = RedisKvProvider::new("redis://localhost:6379")?;
//! // Or with host/port
//! let provider = RedisKvProvider::with_host_port("localhost", 6379)?;
//! ```

use crate::constants::{REDIS_DEFAULT_SCAN_COUNT, REDIS_DEFAULT_URI};
use async_trait::async_trait;
use darth_domain::error::{Error, Result};
use darth_domain::ports::KvProvider;
use redis::{AsyncCommands, Client, aio::MultiplexedConnection};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;

/// Redis KV provider
///
/// Clones share the same client and connection.
#[derive(Clone)]
pub struct RedisKvProvider {
    client: Client,
    connection: Arc<OnceCell<MultiplexedConnection>>,
    address: String,
    scan_count: usize,
}

impl RedisKvProvider {
    /// Create a new Redis provider with connection string
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL (e.g., "redis://localhost:6379")
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string).map_err(|e| {
            Error::configuration_with_source(format!("Failed to create Redis client: {e}"), e)
        })?;

        Ok(Self {
            client,
            connection: Arc::new(OnceCell::new()),
            address: redact_credentials(connection_string),
            scan_count: REDIS_DEFAULT_SCAN_COUNT,
        })
    }

    /// Create a new Redis provider with host and port
    pub fn with_host_port(host: &str, port: u16) -> Result<Self> {
        Self::new(&format!("redis://{host}:{port}"))
    }

    /// Set the number of keys requested per SCAN round trip
    pub fn with_scan_count(mut self, scan_count: usize) -> Self {
        self.scan_count = scan_count.max(1);
        self
    }

    /// Server address with any credentials removed
    pub fn server_address(&self) -> &str {
        &self.address
    }

    /// Keys requested per SCAN round trip
    pub fn scan_count(&self) -> usize {
        self.scan_count
    }

    /// Get the shared connection, opening it on first use
    async fn get_connection(&self) -> Result<MultiplexedConnection> {
        let connection = self
            .connection
            .get_or_try_init(|| async {
                debug!(server = %self.address, "Opening Redis connection");
                self.client
                    .get_multiplexed_async_connection()
                    .await
                    .map_err(|e| {
                        Error::backend_with_source(format!("Failed to get Redis connection: {e}"), e)
                    })
            })
            .await?;
        Ok(connection.clone())
    }
}

#[async_trait]
impl KvProvider for RedisKvProvider {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.get_connection().await?;

        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|e| Error::backend_with_source(format!("Redis GET failed for {key}: {e}"), e))
    }

    async fn set_ex(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()> {
        let mut conn = self.get_connection().await?;

        let result: redis::RedisResult<()> = conn.set_ex(key, value, ttl_secs).await;
        result.map_err(|e| Error::backend_with_source(format!("Redis SETEX failed for {key}: {e}"), e))
    }

    async fn del(&self, key: &str) -> Result<u64> {
        let mut conn = self.get_connection().await?;

        let deleted: redis::RedisResult<u64> = conn.del(key).await;
        deleted.map_err(|e| Error::backend_with_source(format!("Redis DEL failed for {key}: {e}"), e))
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        let mut conn = self.get_connection().await?;

        let mut keys = Vec::new();
        let mut cursor: u64 = 0;
        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(self.scan_count)
                .query_async(&mut conn)
                .await
                .map_err(|e| {
                    Error::backend_with_source(format!("Redis SCAN failed for {pattern}: {e}"), e)
                })?;

            keys.extend(batch);
            if next == 0 {
                break;
            }
            cursor = next;
        }

        // SCAN may return a key more than once
        keys.sort_unstable();
        keys.dedup();
        Ok(keys)
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisKvProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisKvProvider")
            .field("server", &self.address)
            .field("scan_count", &self.scan_count)
            .field("connected", &self.connection.initialized())
            .finish()
    }
}

/// Drop the `user:password@` part of a connection URL
fn redact_credentials(url: &str) -> String {
    match (url.split_once("://"), url.rsplit_once('@')) {
        (Some((scheme, _)), Some((_, host))) => format!("{scheme}://{host}"),
        _ => url.to_string(),
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use darth_application::ports::registry::{KV_PROVIDERS, KvProviderConfig, KvProviderEntry};

/// Factory function for creating Redis provider instances.
fn redis_kv_factory(
    config: &KvProviderConfig,
) -> std::result::Result<Arc<dyn KvProvider>, String> {
    let uri = config.uri.as_deref().unwrap_or(REDIS_DEFAULT_URI);

    let mut provider =
        RedisKvProvider::new(uri).map_err(|e| format!("Failed to create Redis provider: {e}"))?;
    if let Some(scan_count) = config.scan_count {
        provider = provider.with_scan_count(scan_count);
    }

    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(KV_PROVIDERS)]
static REDIS_PROVIDER: KvProviderEntry = KvProviderEntry {
    name: "redis",
    description: "Redis remote store",
    factory: redis_kv_factory,
};

//! Key-Value Provider Port
//!
//! Port for the remote key-value store behind the cache. Implementations
//! expose the four primitives the cache handle is built on and nothing
//! more: connection management, pooling and timeouts are their own concern.
//!
//! ## Contract
//!
//! | Primitive | Contract |
//! |-----------|----------|
//! | `get` | stored value, or `None` when absent or expired |
//! | `set_ex` | store value; key expires after `ttl_secs` |
//! | `del` | remove key if present; idempotent, returns removed count |
//! | `keys` | keys currently matching a glob pattern; point-in-time, non-transactional |

use crate::error::Result;
use async_trait::async_trait;

/// Key-Value Provider Port
///
/// # Implementations
///
/// - **Moka**: In-process store with per-entry TTL
/// - **Redis**: Remote store for multi-instance deployments
/// - **Null**: Stores nothing, for disabled caching and tests
///
/// # Example
///
/// ```ignore
/// use darth_domain::ports::KvProvider;
///
/// kv.set_ex("DARTH::User::1", r#"{"name":"Alice"}"#, 300).await?;
/// if let Some(json) = kv.get("DARTH::User::1").await? {
///     println!("{json}");
/// }
/// let removed = kv.del("DARTH::User::1").await?;
/// ```
#[async_trait]
pub trait KvProvider: Send + Sync + std::fmt::Debug {
    /// Get the serialized value stored at `key`
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` at `key`, expiring after `ttl_secs` seconds
    async fn set_ex(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()>;

    /// Delete `key`, returning the number of keys removed (0 or 1)
    async fn del(&self, key: &str) -> Result<u64>;

    /// List keys matching a glob `pattern`
    async fn keys(&self, pattern: &str) -> Result<Vec<String>>;

    /// Get the name/identifier of this provider implementation
    ///
    /// # Returns
    /// A string identifier for the provider (e.g., "moka", "redis", "null")
    fn provider_name(&self) -> &str;
}

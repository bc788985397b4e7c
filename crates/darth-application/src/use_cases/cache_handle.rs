//! Cache Handle Use Case
//!
//! Per-entity read, write and invalidate operations over a [`KvProvider`].
//!
//! Point qualifiers map to a single backend call. Wildcard qualifiers scan
//! the keyspace with the backend's pattern primitive, drop matches that do
//! not structurally belong to the qualifier, then fan out one GET or DEL per
//! key with at most `fanout_limit` requests in flight. The scan is a
//! point-in-time snapshot: keys created after it are missed, and keys
//! deleted before their GET is issued are skipped.

use darth_domain::error::{Error, Result};
use darth_domain::ports::KvProvider;
use darth_domain::value_objects::{CacheKey, Qualifier, build_key, matches_key, validate_segment};
use futures::{StreamExt, TryStreamExt, stream};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Result of [`CacheHandle::read`]
///
/// The shape follows the qualifier: point qualifiers yield `One`, wildcard
/// qualifiers yield `Many`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// Point read; `None` when the key is absent
    One(Option<T>),
    /// Wildcard read; empty when nothing matched. Order is unspecified.
    Many(Vec<T>),
}

impl<T> Lookup<T> {
    /// Flatten into a vector of found values
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(value) => value.into_iter().collect(),
            Self::Many(values) => values,
        }
    }

    /// Number of values found
    pub fn len(&self) -> usize {
        match self {
            Self::One(value) => usize::from(value.is_some()),
            Self::Many(values) => values.len(),
        }
    }

    /// True if nothing was found
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cache operations for one entity
///
/// State is fixed at construction. [`with_ttl`](Self::with_ttl) and
/// [`with_enabled`](Self::with_enabled) return new handles.
#[derive(Clone)]
pub struct CacheHandle {
    provider: Arc<dyn KvProvider>,
    namespace: String,
    entity: String,
    ttl_secs: u64,
    enabled: bool,
    fanout_limit: usize,
}

// Construction and accessors
impl CacheHandle {
    pub(crate) fn new(
        provider: Arc<dyn KvProvider>,
        namespace: String,
        entity: String,
        ttl_secs: u64,
        enabled: bool,
        fanout_limit: usize,
    ) -> Result<Self> {
        validate_segment("namespace", &namespace)?;
        validate_segment("entity", &entity)?;
        validate_ttl(&entity, ttl_secs, enabled)?;
        if fanout_limit == 0 {
            return Err(Error::configuration("Fan-out limit cannot be 0"));
        }

        debug!(
            namespace = %namespace,
            entity = %entity,
            ttl_secs,
            enabled,
            "Cache handle created"
        );

        Ok(Self {
            provider,
            namespace,
            entity,
            ttl_secs,
            enabled,
            fanout_limit,
        })
    }

    /// A copy of this handle with a different TTL
    pub fn with_ttl(&self, ttl_secs: u64) -> Result<Self> {
        validate_ttl(&self.entity, ttl_secs, self.enabled)?;
        Ok(Self {
            ttl_secs,
            ..self.clone()
        })
    }

    /// A copy of this handle with caching switched on or off
    pub fn with_enabled(&self, enabled: bool) -> Result<Self> {
        validate_ttl(&self.entity, self.ttl_secs, enabled)?;
        Ok(Self {
            enabled,
            ..self.clone()
        })
    }

    /// Entity key segment
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Namespace key segment
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Entry lifetime in seconds
    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    /// Whether writes reach the backend
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Maximum in-flight requests per wildcard fan-out
    pub fn fanout_limit(&self) -> usize {
        self.fanout_limit
    }

    /// Storage key or pattern for a qualifier
    pub fn key(&self, qualifier: &Qualifier) -> Result<CacheKey> {
        build_key(&self.namespace, &self.entity, qualifier)
    }
}

// Canonical operations
impl CacheHandle {
    /// Read the entries a qualifier addresses
    ///
    /// Point qualifiers return [`Lookup::One`]; wildcard qualifiers return
    /// [`Lookup::Many`]. Absent keys are not errors.
    pub async fn read<T>(&self, qualifier: &Qualifier) -> Result<Lookup<T>>
    where
        T: DeserializeOwned + Send,
    {
        let key = self.key(qualifier)?;
        if key.is_pattern() {
            let keys = self.matched_keys(qualifier, &key).await?;
            self.fetch_many(keys).await.map(Lookup::Many)
        } else {
            self.fetch_one(&key).await.map(Lookup::One)
        }
    }

    /// Store `value` under a point qualifier with the handle's TTL
    ///
    /// Resolves immediately without touching the backend when the handle is
    /// disabled.
    pub async fn write<T>(&self, value: &T, qualifier: &Qualifier) -> Result<()>
    where
        T: Serialize + ?Sized + Sync,
    {
        if !self.enabled {
            debug!(entity = %self.entity, %qualifier, "Caching disabled, write skipped");
            return Ok(());
        }
        if qualifier.is_wildcard() {
            return Err(Error::invalid_write_qualifier(qualifier.to_string()));
        }

        let key = self.key(qualifier)?;
        let json = serde_json::to_string(value).map_err(|e| {
            Error::serialization_with_source(format!("Failed to serialize value for {key}: {e}"), e)
        })?;

        debug!(key = %key, ttl_secs = self.ttl_secs, "Writing cache entry");
        self.provider
            .set_ex(key.as_str(), &json, self.ttl_secs)
            .await
    }

    /// Remove the entries a qualifier addresses
    ///
    /// Returns the number of keys removed. Zero matches is success. On a
    /// wildcard, the first failed DEL fails the call; deletions already
    /// issued may still take effect.
    pub async fn invalidate(&self, qualifier: &Qualifier) -> Result<u64> {
        let key = self.key(qualifier)?;
        if !key.is_pattern() {
            return self.provider.del(key.as_str()).await;
        }

        let keys = self.matched_keys(qualifier, &key).await?;
        let matched = keys.len();
        let provider = self.provider.as_ref();
        let removed = stream::iter(keys)
            .map(|key| async move { provider.del(&key).await })
            .buffer_unordered(self.fanout_limit)
            .try_fold(0_u64, |total, n| async move { Ok::<_, Error>(total + n) })
            .await?;

        info!(
            entity = %self.entity,
            %qualifier,
            matched,
            removed,
            "Cache entries invalidated"
        );
        Ok(removed)
    }
}

// Single-shape projections
impl CacheHandle {
    /// Read one entry; the qualifier must be a point qualifier
    pub async fn get<T>(&self, qualifier: &Qualifier) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        require_point("get", qualifier)?;
        let key = self.key(qualifier)?;
        self.fetch_one(&key).await
    }

    /// Read many entries; the qualifier must be a wildcard
    pub async fn get_many<T>(&self, qualifier: &Qualifier) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        require_wildcard("get_many", qualifier)?;
        Ok(self.read(qualifier).await?.into_vec())
    }

    /// Store one entry; same as [`write`](Self::write)
    pub async fn set<T>(&self, value: &T, qualifier: &Qualifier) -> Result<()>
    where
        T: Serialize + ?Sized + Sync,
    {
        self.write(value, qualifier).await
    }

    /// Remove one entry; the qualifier must be a point qualifier
    pub async fn delete(&self, qualifier: &Qualifier) -> Result<u64> {
        require_point("delete", qualifier)?;
        self.invalidate(qualifier).await
    }

    /// Remove many entries; the qualifier must be a wildcard
    pub async fn delete_many(&self, qualifier: &Qualifier) -> Result<u64> {
        require_wildcard("delete_many", qualifier)?;
        self.invalidate(qualifier).await
    }
}

// Legacy names kept for existing call sites
impl CacheHandle {
    /// Use [`read`](Self::read)
    #[deprecated(note = "use `read`")]
    pub async fn search<T>(&self, qualifier: &Qualifier) -> Result<Lookup<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.read(qualifier).await
    }

    /// Use [`read`](Self::read)
    #[deprecated(note = "use `read`")]
    pub async fn search_one<T>(&self, qualifier: &Qualifier) -> Result<Lookup<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.read(qualifier).await
    }

    /// Use [`invalidate`](Self::invalidate)
    #[deprecated(note = "use `invalidate`")]
    pub async fn expire(&self, qualifier: &Qualifier) -> Result<u64> {
        self.invalidate(qualifier).await
    }

    /// Use [`invalidate`](Self::invalidate)
    #[deprecated(note = "use `invalidate`")]
    pub async fn expire_one(&self, qualifier: &Qualifier) -> Result<u64> {
        self.invalidate(qualifier).await
    }

    /// Use [`invalidate`](Self::invalidate)
    #[deprecated(note = "use `invalidate`")]
    pub async fn expire_pattern(&self, qualifier: &Qualifier) -> Result<u64> {
        self.invalidate(qualifier).await
    }

    /// Use [`write`](Self::write)
    #[deprecated(note = "use `write`")]
    pub async fn set_cache<T>(&self, value: &T, qualifier: &Qualifier) -> Result<()>
    where
        T: Serialize + ?Sized + Sync,
    {
        self.write(value, qualifier).await
    }
}

// Backend plumbing
impl CacheHandle {
    async fn fetch_one<T: DeserializeOwned>(&self, key: &CacheKey) -> Result<Option<T>> {
        match self.provider.get(key.as_str()).await? {
            Some(json) => decode(key.as_str(), &json).map(Some),
            None => {
                debug!(key = %key, "Cache miss");
                Ok(None)
            }
        }
    }

    async fn matched_keys(&self, qualifier: &Qualifier, pattern: &CacheKey) -> Result<Vec<String>> {
        let candidates = self.provider.keys(pattern.as_str()).await?;
        let scanned = candidates.len();
        let keys: Vec<String> = candidates
            .into_iter()
            .filter(|key| matches_key(&self.namespace, &self.entity, qualifier, key))
            .collect();

        debug!(
            pattern = %pattern,
            scanned,
            matched = keys.len(),
            "Pattern scan complete"
        );
        Ok(keys)
    }

    async fn fetch_many<T: DeserializeOwned>(&self, keys: Vec<String>) -> Result<Vec<T>> {
        let provider = self.provider.as_ref();
        let fetched: Vec<(String, Option<String>)> = stream::iter(keys)
            .map(|key| async move {
                let value = provider.get(&key).await?;
                Ok::<_, Error>((key, value))
            })
            .buffer_unordered(self.fanout_limit)
            .try_collect()
            .await?;

        let mut values = Vec::with_capacity(fetched.len());
        for (key, json) in fetched {
            match json {
                Some(json) => values.push(decode(&key, &json)?),
                // Deleted between the scan and its GET
                None => debug!(key = %key, "Matched key vanished before fetch"),
            }
        }
        Ok(values)
    }
}

impl fmt::Debug for CacheHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheHandle")
            .field("provider", &self.provider.provider_name())
            .field("namespace", &self.namespace)
            .field("entity", &self.entity)
            .field("ttl_secs", &self.ttl_secs)
            .field("enabled", &self.enabled)
            .field("fanout_limit", &self.fanout_limit)
            .finish()
    }
}

fn decode<T: DeserializeOwned>(key: &str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| {
        Error::serialization_with_source(format!("Failed to deserialize cached value at {key}: {e}"), e)
    })
}

fn validate_ttl(entity: &str, ttl_secs: u64, enabled: bool) -> Result<()> {
    if enabled && ttl_secs == 0 {
        return Err(Error::configuration(format!(
            "Cache TTL for '{entity}' cannot be 0 when caching is enabled"
        )));
    }
    Ok(())
}

fn require_point(operation: &'static str, qualifier: &Qualifier) -> Result<()> {
    if qualifier.is_point() {
        Ok(())
    } else {
        Err(Error::unexpected_qualifier_shape(operation, "point", qualifier.to_string()))
    }
}

fn require_wildcard(operation: &'static str, qualifier: &Qualifier) -> Result<()> {
    if qualifier.is_wildcard() {
        Ok(())
    } else {
        Err(Error::unexpected_qualifier_shape(operation, "wildcard", qualifier.to_string()))
    }
}

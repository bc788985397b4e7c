//! Provider Registry
//!
//! Providers register themselves into distributed slices declared here and
//! are resolved by name at bootstrap time.

/// KV provider registry
pub mod kv;

pub use kv::{KV_PROVIDERS, KvProviderConfig, KvProviderEntry, list_kv_providers, resolve_kv_provider};

//! Application Ports
//!
//! - **registry/** - Auto-registration of KV provider implementations

/// Provider registry
pub mod registry;

pub use registry::{
    KV_PROVIDERS, KvProviderConfig, KvProviderEntry, list_kv_providers, resolve_kv_provider,
};

//! # Darth - Provider Implementations
//!
//! Key-value backends implementing the `KvProvider` port defined in
//! `darth-domain`. Each provider registers itself in the application
//! layer's `KV_PROVIDERS` registry so bootstrap code can select it by name.
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullKvProvider`](kv::NullKvProvider) | Testing | Stores nothing |
//! | [`MokaKvProvider`](kv::MokaKvProvider) | Local | In-process store with per-entry TTL |
//! | [`RedisKvProvider`](kv::RedisKvProvider) | Distributed | Redis-backed for multi-instance |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! darth-providers = { version = "0.1", default-features = false, features = ["kv-redis"] }
//! ```

// Re-export darth-domain types commonly used with providers
pub use darth_domain::error::{Error, Result};
pub use darth_domain::ports::KvProvider;

/// Provider-specific constants
pub mod constants;

/// Key-value provider implementations
///
/// Implements `KvProvider` trait for storage backends.
pub mod kv;

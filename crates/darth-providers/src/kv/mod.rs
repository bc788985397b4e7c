//! Key-Value Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullKvProvider`] | Testing | No-op stub, caching disabled |
//! | [`MokaKvProvider`] | Local | In-process store (single instance) |
//! | [`RedisKvProvider`] | Distributed | Redis-backed for multi-instance |
//!
//! ## Provider Selection Guide
//!
//! - **Development/Testing**: Use `MokaKvProvider`, or `NullKvProvider` to disable storage
//! - **Multi Instance**: Use `RedisKvProvider` so every instance shares one keyspace

#[cfg(feature = "kv-moka")]
pub mod moka;
pub mod null;
#[cfg(feature = "kv-redis")]
pub mod redis;

// Re-export for convenience
#[cfg(feature = "kv-moka")]
pub use moka::MokaKvProvider;
pub use null::NullKvProvider;
#[cfg(feature = "kv-redis")]
pub use redis::RedisKvProvider;

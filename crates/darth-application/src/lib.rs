//! Application Layer - Darth
//!
//! Use cases of the caching façade built on the domain key schema and the
//! [`KvProvider`](darth_domain::KvProvider) port.
//!
//! ## Use Cases
//!
//! - [`CacheStore`]: factory bound to a backend and a [`StoreConfig`],
//!   producing independent handles (no process-wide state)
//! - [`CacheHandle`]: per-entity read / write / invalidate operations
//!
//! ## Ports
//!
//! - `ports::registry`: linkme registry through which KV providers register
//!   themselves by name
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `darth-domain`: For key schema, errors and port traits
//! - Pure Rust libraries for async, serialization, etc.

pub mod constants;
pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;

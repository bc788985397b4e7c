//! Use Cases
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`CacheStore`] | Factory producing per-entity handles |
//! | [`CacheHandle`] | Read / write / invalidate for one entity |

/// Per-entity cache operations
pub mod cache_handle;
/// Handle factory and its configuration object
pub mod cache_store;

pub use cache_handle::{CacheHandle, Lookup};
pub use cache_store::{CacheStore, HandleOptions, StoreConfig};

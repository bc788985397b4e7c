//! # Darth
//!
//! Entity caching façade over a key-value store.
//!
//! Application lookups (an entity type, an id, an optional action, or a
//! wildcard scope) map onto deterministic keys of the form
//! `NAMESPACE::Entity::id` and `NAMESPACE::Entity::action::id`. Entries are
//! written with a TTL and invalidated singly or in bulk by pattern.
//!
//! ## Example
//!
//! ```ignore
//! use darth::{ConfigLoader, HandleOptions, Lookup, Qualifier};
//!
//! let store = darth::open_store(&ConfigLoader::new())?;
//! let users = store.handle("User", HandleOptions::new(100))?;
//!
//! users.write(&user, &Qualifier::by_action("current", 1)).await?;
//! let all: Lookup<User> = users.read(&Qualifier::all_for_id(1)).await?;
//! users.invalidate(&Qualifier::all_for_entity()).await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Key schema, qualifiers, errors and ports
//! - `application` - Store factory, cache handles and the provider registry
//! - `infrastructure` - Configuration, logging and bootstrap
//! - `providers` - Moka, Redis and Null key-value backends

/// Domain layer - key schema, qualifiers and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use darth_domain::*;
}

/// Application layer - store factory and cache handles
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use darth_application::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use darth_infrastructure::*;
}

/// Key-value backends
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use darth_providers::kv::*;
}

// Re-export commonly used types at the crate root
pub use darth_application::{CacheHandle, CacheStore, HandleOptions, Lookup, StoreConfig};
pub use darth_domain::{Error, KvProvider, NamedEntity, Qualifier, QualifierParts, Result};
pub use darth_infrastructure::logging::init_logging;
pub use darth_infrastructure::{AppConfig, ConfigBuilder, ConfigLoader, bootstrap_store};

/// Load configuration and build a store from it
pub fn open_store(loader: &ConfigLoader) -> Result<CacheStore> {
    let config = loader.load()?;
    bootstrap_store(&config)
}

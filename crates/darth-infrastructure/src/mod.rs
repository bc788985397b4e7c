//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that wire the caching façade to a
//! running process.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered TOML + environment configuration |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Wiring
//! | Module | Description |
//! |--------|-------------|
//! | [`bootstrap`] | Builds a `CacheStore` from configuration |
//! | [`error_ext`] | Context helpers mapping foreign errors into domain errors |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::{bootstrap_store, provider_config, store_config};
pub use config::{AppConfig, CacheConfig, ConfigBuilder, ConfigLoader, LoggingConfig};
pub use error_ext::ErrorContext;

//! # Domain Layer
//!
//! Core types of the Darth caching façade. Nothing in this crate performs
//! I/O: it defines how cache keys are addressed, which errors exist, and the
//! ports that backends and upstream entity layers must implement.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | [`Qualifier`], [`CacheKey`] and the key schema |
//! | [`ports`] | [`KvProvider`] backend port, [`NamedEntity`] upstream port |
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`constants`] | Key delimiter, wildcard marker, default namespace |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{KvProvider, NamedEntity};
pub use value_objects::{CacheKey, Qualifier, QualifierParts, build_key, matches_key};

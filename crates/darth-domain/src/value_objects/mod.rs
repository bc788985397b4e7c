//! Value Objects
//!
//! Immutable types describing which cache entries an operation addresses.

/// Storage keys and the key schema functions
pub mod cache_key;
/// Qualifier tagged union and the legacy option bag
pub mod qualifier;

pub use cache_key::{CacheKey, build_key, matches_key, validate_segment};
pub use qualifier::{Qualifier, QualifierParts};

//! Domain layer constants
//!
//! Key-format constants are part of the storage contract: other deployments
//! reading the same keyspace depend on these exact strings.

// ============================================================================
// KEY SCHEMA CONSTANTS
// ============================================================================

/// Namespace used when the caller does not configure one
pub const DEFAULT_NAMESPACE: &str = "DARTH";

/// Separator between key segments (`NS::Entity::id`)
pub const KEY_DELIMITER: &str = "::";

/// Glob marker used by wildcard qualifiers
pub const KEY_WILDCARD: &str = "*";

/// Characters with glob meaning for the backend's pattern primitive
///
/// Includes `\`, which Redis `SCAN MATCH` treats as an escape.
pub const GLOB_METACHARACTERS: [char; 5] = ['*', '?', '[', ']', '\\'];

/// Single character of the delimiter; segments may not start or end with it
pub const KEY_DELIMITER_CHAR: char = ':';

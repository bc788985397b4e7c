//! Cache key schema
//!
//! Pure functions mapping `(namespace, entity, qualifier)` onto storage keys.
//!
//! | Qualifier | Key |
//! |-----------|-----|
//! | `ById(id)` | `{namespace}::{entity}::{id}` |
//! | `ByAction(action, id)` | `{namespace}::{entity}::{action}::{id}` |
//! | `AllForId(id)` | `{namespace}::{entity}*{id}` |
//! | `AllForEntity` | `{namespace}::{entity}*` |
//!
//! Segments may not contain the delimiter or glob metacharacters, nor start
//! or end with `:`, so a key always parses back into exactly one shape.

use crate::constants::{GLOB_METACHARACTERS, KEY_DELIMITER, KEY_DELIMITER_CHAR, KEY_WILDCARD};
use crate::error::{Error, Result};
use crate::value_objects::Qualifier;
use std::fmt;

/// A storage key or key pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    raw: String,
    pattern: bool,
}

impl CacheKey {
    /// Key string as sent to the backend
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True if the key is a glob pattern for the backend's KEYS primitive
    pub fn is_pattern(&self) -> bool {
        self.pattern
    }

    /// Consume the key and return the raw string
    pub fn into_string(self) -> String {
        self.raw
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

/// Validate a single key segment
///
/// `role` names the segment in the error (`"namespace"`, `"entity"`,
/// `"action"`, `"id"`).
pub fn validate_segment(role: &str, segment: &str) -> Result<()> {
    if segment.is_empty() {
        return Err(Error::invalid_key_segment(
            segment,
            format!("{role} cannot be empty"),
        ));
    }
    if segment.contains(KEY_DELIMITER) {
        return Err(Error::invalid_key_segment(
            segment,
            format!("{role} cannot contain '{KEY_DELIMITER}'"),
        ));
    }
    // A leading or trailing ':' would fuse with the delimiter into ':::'
    if segment.starts_with(KEY_DELIMITER_CHAR) || segment.ends_with(KEY_DELIMITER_CHAR) {
        return Err(Error::invalid_key_segment(
            segment,
            format!("{role} cannot start or end with '{KEY_DELIMITER_CHAR}'"),
        ));
    }
    if segment.contains(GLOB_METACHARACTERS) {
        return Err(Error::invalid_key_segment(
            segment,
            format!("{role} cannot contain glob characters {GLOB_METACHARACTERS:?}"),
        ));
    }
    if segment.chars().any(char::is_control) {
        return Err(Error::invalid_key_segment(
            segment,
            format!("{role} cannot contain control characters"),
        ));
    }
    Ok(())
}

fn require_id<'a>(qualifier: &'a Qualifier, id: &'a str) -> Result<&'a str> {
    if id.is_empty() {
        return Err(Error::missing_identifier(qualifier.kind()));
    }
    validate_segment("id", id)?;
    Ok(id)
}

/// Build the storage key for a qualifier
///
/// # Example
///
/// ```
/// use darth_domain::{Qualifier, build_key};
///
/// let key = build_key("DARTH", "User", &Qualifier::by_action("current", 1)).unwrap();
/// assert_eq!(key.as_str(), "DARTH::User::current::1");
/// ```
pub fn build_key(namespace: &str, entity: &str, qualifier: &Qualifier) -> Result<CacheKey> {
    validate_segment("namespace", namespace)?;
    validate_segment("entity", entity)?;

    let d = KEY_DELIMITER;
    let (raw, pattern) = match qualifier {
        Qualifier::ById { id } => {
            let id = require_id(qualifier, id)?;
            (format!("{namespace}{d}{entity}{d}{id}"), false)
        }
        Qualifier::ByAction { action, id } => {
            let id = require_id(qualifier, id)?;
            validate_segment("action", action)?;
            (format!("{namespace}{d}{entity}{d}{action}{d}{id}"), false)
        }
        Qualifier::AllForId { id } => {
            let id = require_id(qualifier, id)?;
            (format!("{namespace}{d}{entity}{KEY_WILDCARD}{id}"), true)
        }
        Qualifier::AllForEntity => (format!("{namespace}{d}{entity}{KEY_WILDCARD}"), true),
    };

    Ok(CacheKey { raw, pattern })
}

/// Check whether a stored key belongs to the set a qualifier addresses
///
/// The backend's glob match is wider than the qualifier: `NS::User*1` also
/// matches `NS::User::11` and `NS::UserProfile::1`. This parses the key
/// structurally and compares entity, action and id segments exactly.
pub fn matches_key(namespace: &str, entity: &str, qualifier: &Qualifier, key: &str) -> bool {
    let prefix = format!("{namespace}{KEY_DELIMITER}{entity}{KEY_DELIMITER}");
    let Some(rest) = key.strip_prefix(prefix.as_str()) else {
        return false;
    };

    let segments: Vec<&str> = rest.split(KEY_DELIMITER).collect();
    let (action, id) = match segments.as_slice() {
        [id] => (None, *id),
        [action, id] => (Some(*action), *id),
        _ => return false,
    };
    let well_formed = |segment: &str| {
        !segment.is_empty()
            && !segment.starts_with(KEY_DELIMITER_CHAR)
            && !segment.ends_with(KEY_DELIMITER_CHAR)
    };
    if !well_formed(id) || !action.is_none_or(well_formed) {
        return false;
    }

    match qualifier {
        Qualifier::ById { id: wanted } => action.is_none() && id == wanted,
        Qualifier::ByAction {
            action: wanted_action,
            id: wanted,
        } => action == Some(wanted_action.as_str()) && id == wanted,
        Qualifier::AllForId { id: wanted } => id == wanted,
        Qualifier::AllForEntity => true,
    }
}

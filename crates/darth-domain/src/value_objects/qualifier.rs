//! Qualifier value object
//!
//! Selects which key (or key pattern) a cache operation addresses. The enum
//! is closed: every call site picks one of exactly four shapes.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selector for the cache entries an operation addresses
///
/// # Example
///
/// ```
/// use darth_domain::Qualifier;
///
/// let one = Qualifier::by_id(1);
/// let scoped = Qualifier::by_action("current", 1);
/// assert!(one.is_point());
/// assert!(scoped.is_point());
/// assert!(Qualifier::all_for_id(1).is_wildcard());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Qualifier {
    /// Single resource by identifier
    ById {
        /// Resource identifier
        id: String,
    },
    /// Single resource scoped by an action name
    ByAction {
        /// Action/operation name
        action: String,
        /// Resource identifier
        id: String,
    },
    /// Every cached entry for one identifier, with or without action
    AllForId {
        /// Resource identifier
        id: String,
    },
    /// Every cached entry for the entity type
    AllForEntity,
}

impl Qualifier {
    /// Address a single resource by id
    pub fn by_id(id: impl fmt::Display) -> Self {
        Self::ById { id: id.to_string() }
    }

    /// Address a single resource by action and id
    pub fn by_action(action: impl Into<String>, id: impl fmt::Display) -> Self {
        Self::ByAction {
            action: action.into(),
            id: id.to_string(),
        }
    }

    /// Address every entry cached for an id
    pub fn all_for_id(id: impl fmt::Display) -> Self {
        Self::AllForId { id: id.to_string() }
    }

    /// Address every entry cached for the entity
    pub fn all_for_entity() -> Self {
        Self::AllForEntity
    }

    /// True if the qualifier names exactly one key
    pub fn is_point(&self) -> bool {
        matches!(self, Self::ById { .. } | Self::ByAction { .. })
    }

    /// True if the qualifier names a key pattern
    pub fn is_wildcard(&self) -> bool {
        !self.is_point()
    }

    /// Identifier carried by the qualifier, if any
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::ById { id } | Self::ByAction { id, .. } | Self::AllForId { id } => Some(id),
            Self::AllForEntity => None,
        }
    }

    /// Action carried by the qualifier, if any
    pub fn action(&self) -> Option<&str> {
        match self {
            Self::ByAction { action, .. } => Some(action),
            _ => None,
        }
    }

    /// Stable name of the qualifier shape, used in errors and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ById { .. } => "by_id",
            Self::ByAction { .. } => "by_action",
            Self::AllForId { .. } => "all_for_id",
            Self::AllForEntity => "all_for_entity",
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ById { id } => write!(f, "by_id({id})"),
            Self::ByAction { action, id } => write!(f, "by_action({action}, {id})"),
            Self::AllForId { id } => write!(f, "all_for_id({id})"),
            Self::AllForEntity => f.write_str("all_for_entity"),
        }
    }
}

/// Loosely-typed option bag accepted by older call sites
///
/// Converts into a [`Qualifier`] with [`TryFrom`]. Combinations that do not
/// name exactly one shape are rejected instead of resolved by precedence.
///
/// | Fields set | Result |
/// |------------|--------|
/// | `expire_all` | `AllForEntity` |
/// | `id` | `ById` |
/// | `id`, `action` | `ByAction` |
/// | `id`, `all` | `AllForId` |
/// | no `id` | `MissingIdentifier` |
/// | anything else | `UnrecognizedQualifier` |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifierParts {
    /// Resource identifier
    pub id: Option<String>,
    /// Action/operation name
    pub action: Option<String>,
    /// Match every entry for `id`
    #[serde(default)]
    pub all: bool,
    /// Match every entry for the entity
    #[serde(default)]
    pub expire_all: bool,
}

impl QualifierParts {
    /// Empty option bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id
    pub fn with_id(mut self, id: impl fmt::Display) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Set the action
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Set the `all` flag
    pub fn with_all(mut self, all: bool) -> Self {
        self.all = all;
        self
    }

    /// Set the `expire_all` flag
    pub fn with_expire_all(mut self, expire_all: bool) -> Self {
        self.expire_all = expire_all;
        self
    }
}

impl TryFrom<QualifierParts> for Qualifier {
    type Error = Error;

    fn try_from(parts: QualifierParts) -> Result<Self> {
        // Empty strings count as absent, as they did for the option bag.
        let id = parts.id.filter(|id| !id.is_empty());
        let action = parts.action.filter(|action| !action.is_empty());

        if parts.expire_all {
            if id.is_some() || action.is_some() || parts.all {
                return Err(Error::unrecognized_qualifier(
                    "expire_all cannot be combined with id, action or all",
                ));
            }
            return Ok(Self::AllForEntity);
        }

        let Some(id) = id else {
            return Err(Error::missing_identifier(if parts.all {
                "all_for_id"
            } else if action.is_some() {
                "by_action"
            } else {
                "by_id"
            }));
        };

        match (action, parts.all) {
            (None, false) => Ok(Self::ById { id }),
            (Some(action), false) => Ok(Self::ByAction { action, id }),
            (None, true) => Ok(Self::AllForId { id }),
            (Some(action), true) => Err(Error::unrecognized_qualifier(format!(
                "action '{action}' and all cannot be combined"
            ))),
        }
    }
}

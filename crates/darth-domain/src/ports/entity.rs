//! Entity Port
//!
//! The upstream model layer supplies the entity name used as the second key
//! segment. It must be stable across deploys or cached entries are orphaned.

/// A model type that can be cached
///
/// # Example
///
/// ```
/// use darth_domain::NamedEntity;
///
/// struct User;
///
/// impl NamedEntity for User {
///     fn entity_name() -> &'static str {
///         "User"
///     }
/// }
///
/// assert_eq!(User::entity_name(), "User");
/// ```
pub trait NamedEntity {
    /// Stable type name, used as the entity key segment
    fn entity_name() -> &'static str;
}

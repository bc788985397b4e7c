//! Domain Port Interfaces
//!
//! Contracts between the domain and its external collaborators.
//!
//! ## Organization
//!
//! - **entity** - Upstream model layer exposing a stable type name
//! - **providers/** - Key-value backend primitives

/// Upstream entity port
pub mod entity;
/// External service provider ports
pub mod providers;

pub use entity::NamedEntity;
pub use providers::KvProvider;

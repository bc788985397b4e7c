//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | KvProvider | Remote key-value store primitives (GET/SETEX/DEL/KEYS) |

/// Key-value provider port
pub mod kv;

pub use kv::KvProvider;

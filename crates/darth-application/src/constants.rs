//! Application layer constants

/// Maximum in-flight backend requests per wildcard fan-out
pub const DEFAULT_FANOUT_LIMIT: usize = 16;

//! Provider-specific constants

/// Redis URI used when none is configured
pub const REDIS_DEFAULT_URI: &str = "redis://localhost:6379";

/// Keys requested per SCAN round trip
pub const REDIS_DEFAULT_SCAN_COUNT: usize = 100;

//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Key-schema constants are defined in `darth_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "darth.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "darth";

/// Environment variable prefix for configuration
///
/// Variables are read as `DARTH__SECTION__FIELD`.
pub const CONFIG_ENV_PREFIX: &str = "DARTH";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default backend provider name
pub const CACHE_DEFAULT_PROVIDER: &str = "moka";

/// Default cache TTL in seconds (5 minutes)
pub const CACHE_DEFAULT_TTL_SECS: u64 = 300;

/// Default keys per Redis SCAN round trip
pub const CACHE_DEFAULT_SCAN_COUNT: usize = 100;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_FILTER: &str = "DARTH_LOG";

/// Default log file name stem
pub const LOG_FILE_PREFIX: &str = "darth";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 5;

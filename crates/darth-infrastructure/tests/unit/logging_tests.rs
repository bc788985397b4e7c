//! Logging Tests

use darth_infrastructure::constants::{DEFAULT_LOG_LEVEL, LOG_MAX_FILES};
use darth_infrastructure::logging::{LoggingConfig, init_logging, parse_log_level};
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("ERROR").unwrap(), Level::ERROR);

    assert!(parse_log_level("invalid").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
    assert_eq!(config.max_files, LOG_MAX_FILES);
}

#[test]
fn test_init_logging_rejects_bad_level() {
    let config = LoggingConfig {
        level: "loud".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init_logging(&config).is_err());
}

// The only test in this binary that installs the global subscriber
#[test]
fn test_init_logging_twice_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = LoggingConfig {
        json_format: true,
        file_output: Some(dir.path().join("darth.log")),
        ..LoggingConfig::default()
    };

    init_logging(&config).unwrap();
    let err = init_logging(&config).unwrap_err();
    assert!(matches!(err, darth_domain::Error::Configuration { .. }));
}

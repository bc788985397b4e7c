//! Error Extension Tests

use darth_domain::error::{Error, Result};
use darth_infrastructure::error_ext::ErrorContext;
use std::io;

fn not_found() -> std::result::Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "file not found"))
}

#[test]
fn test_io_context_is_configuration_error() {
    let result: Result<()> = not_found().io_context("failed to read file");

    if let Err(Error::Configuration { source, message }) = result {
        assert!(message.contains("failed to read file"));
        assert!(message.contains("file not found"));
        assert!(source.is_some());
    } else {
        panic!("Expected Configuration error");
    }
}

#[test]
fn test_config_context() {
    let result: Result<()> = not_found().config_context("bad config");
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_context_keeps_source_chain() {
    let err = not_found().config_context("outer").unwrap_err();
    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("file not found"));
}

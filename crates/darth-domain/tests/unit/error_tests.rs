//! Unit tests for domain error types

use darth_domain::Error;

#[test]
fn test_missing_identifier_error() {
    let error = Error::missing_identifier("by_id");
    match &error {
        Error::MissingIdentifier { qualifier } => assert_eq!(*qualifier, "by_id"),
        _ => panic!("Expected MissingIdentifier error"),
    }
    assert!(error.is_validation());
    assert!(!error.is_backend());
}

#[test]
fn test_invalid_write_qualifier_display() {
    let error = Error::invalid_write_qualifier("all_for_entity");
    let display_str = format!("{error}");
    assert!(display_str.contains("all_for_entity"));
    assert!(error.is_validation());
}

#[test]
fn test_backend_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let error = Error::backend_with_source("GET failed", io);
    match &error {
        Error::Backend { message, source } => {
            assert_eq!(message, "GET failed");
            assert!(source.is_some());
        }
        _ => panic!("Expected Backend error"),
    }
    assert!(error.is_backend());
    assert!(!error.is_validation());
}

#[test]
fn test_serialization_from_serde_json() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: Error = parse_err.into();
    match error {
        Error::Serialization { source, .. } => assert!(source.is_some()),
        _ => panic!("Expected Serialization error"),
    }
}

#[test]
fn test_configuration_error() {
    let error = Error::configuration("namespace cannot be empty");
    match error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "namespace cannot be empty");
            assert!(source.is_none());
        }
        _ => panic!("Expected Configuration error"),
    }
}

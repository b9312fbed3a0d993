//! Unit tests for domain error types

use fsmkv_domain::{Error, StorageOperation};
use std::error::Error as _;

#[test]
fn test_not_found_error() {
    let error = Error::not_found("fsm:1:2:3:data:name");
    assert!(error.is_not_found());
    match error {
        Error::NotFound { resource } => assert_eq!(resource, "fsm:1:2:3:data:name"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_operation_names() {
    let names: Vec<&str> = [
        StorageOperation::GetState,
        StorageOperation::SetState,
        StorageOperation::ResetState,
        StorageOperation::ResetData,
        StorageOperation::DeleteData,
        StorageOperation::EncodeData,
        StorageOperation::SetData,
        StorageOperation::GetData,
        StorageOperation::DecodeData,
    ]
    .into_iter()
    .map(StorageOperation::as_str)
    .collect();

    assert_eq!(
        names,
        vec![
            "get state",
            "set state",
            "reset state",
            "reset data",
            "delete data",
            "encode data",
            "set data",
            "get data",
            "decode data",
        ]
    );
}

#[test]
fn test_wrapped_error_display_and_source() {
    let error = Error::wrap(
        StorageOperation::SetState,
        Error::infrastructure("connection refused"),
    );

    assert_eq!(error.operation(), Some(StorageOperation::SetState));
    assert_eq!(
        error.to_string(),
        "fsmkv/storage: set state: Infrastructure error: connection refused"
    );

    let source = error.source().expect("wrapped error has a source");
    assert_eq!(source.to_string(), "Infrastructure error: connection refused");
    assert!(matches!(error.cause(), Error::Infrastructure { .. }));
}

#[test]
fn test_cancelled_detection_through_wrapper() {
    let error = Error::wrap(StorageOperation::GetData, Error::Cancelled);
    assert!(error.is_cancelled());
    assert!(!error.is_not_found());
    assert!(!Error::infrastructure("x").is_cancelled());
}

#[test]
fn test_infrastructure_with_source() {
    let io = std::io::Error::other("socket closed");
    let error = Error::infrastructure_with_source("Redis GET failed", io);

    match &error {
        Error::Infrastructure { message, source } => {
            assert_eq!(message, "Redis GET failed");
            assert!(source.is_some());
        }
        _ => panic!("Expected Infrastructure error"),
    }
    assert_eq!(error.operation(), None);
}

#[test]
fn test_configuration_error() {
    let error = Error::configuration("unknown backend");
    assert_eq!(error.to_string(), "Configuration error: unknown backend");
}

#[test]
fn test_configuration_with_source() {
    let parse = "ten".parse::<u64>().unwrap_err();
    let error = Error::configuration_with_source("state_ttl_secs is not a number", parse);

    assert_eq!(
        error.to_string(),
        "Configuration error: state_ttl_secs is not a number"
    );
    assert!(error.source().is_some());
}

#[test]
fn test_codec_error_from_serde() {
    let serde_error = serde_json::from_str::<u32>("nope").unwrap_err();
    let error: Error = serde_error.into();
    assert!(matches!(error, Error::Codec { .. }));
}

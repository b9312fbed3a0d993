//! Error Extension Tests

use fsmkv_domain::error::{Error, Result};
use fsmkv_infrastructure::error_ext::ErrorContext;
use std::error::Error as _;
use std::io;

#[test]
fn test_context_maps_to_infrastructure_error() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).context("failed to read file");

    match result {
        Err(Error::Infrastructure { message, source }) => {
            assert_eq!(message, "failed to read file: file not found");
            assert!(source.is_some());
        }
        other => panic!("Expected Infrastructure error, got {other:?}"),
    }
}

#[test]
fn test_config_context_maps_to_configuration_error() {
    let parse_error = "x".parse::<u64>().unwrap_err();

    let err = Err::<u64, _>(parse_error)
        .config_context("bad ttl")
        .unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().starts_with("Configuration error: bad ttl"));
    assert!(err.source().is_some());
}

#[test]
fn test_ok_passes_through() {
    let value = Ok::<_, io::Error>(7).context("unused").unwrap();
    assert_eq!(value, 7);
}

use super::*;

#[test]
fn test_network_error_connection_refused() {
    let err = ImagoError::Network {
        message: "connection refused".to_string(),
        source: None,
    };

    assert!(matches!(err, ImagoError::Network { .. }));
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn test_network_error_helper() {
    let err = ImagoError::network("failed to build HTTP client");
    assert!(matches!(err, ImagoError::Network { .. }));
    assert!(err.to_string().contains("failed to build HTTP client"));
}

#[test]
fn test_network_error_with_source() {
    use std::io;

    let io_err = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
    let err = ImagoError::network_with_source("failed to connect", io_err);
    assert!(matches!(err, ImagoError::Network { .. }));

    use std::error::Error;
    assert!(err.source().is_some());
}

#[test]
fn test_validation_error_helper() {
    let err = ImagoError::validation("unexpected configuration shape");
    assert!(matches!(err, ImagoError::Validation { .. }));
    assert!(err.to_string().contains("unexpected configuration shape"));
}

#[test]
fn test_validation_error_with_source() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err = ImagoError::validation_with_source("could not parse file", json_err);
    assert!(matches!(err, ImagoError::Validation { .. }));
}

#[test]
fn test_config_error_with_path() {
    let err = ImagoError::config("directory not found", Some("./configs"));
    assert!(matches!(err, ImagoError::Config { .. }));
    assert!(err.to_string().contains("directory not found"));

    if let ImagoError::Config { path, .. } = err {
        assert_eq!(path.as_deref(), Some("./configs"));
    }
}

#[test]
fn test_config_error_without_path() {
    let err = ImagoError::config("invalid settings", None);
    if let ImagoError::Config { path, .. } = err {
        assert!(path.is_none());
    }
}

#[test]
fn test_config_error_with_source() {
    use std::io;

    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err = ImagoError::config_with_source("failed to read settings", Some("a.yaml"), io_err);
    assert!(matches!(err, ImagoError::Config { .. }));
}

#[test]
fn test_errors_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ImagoError>();
}

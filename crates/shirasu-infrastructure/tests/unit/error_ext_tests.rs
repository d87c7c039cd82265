//! Error context extension tests

use shirasu_domain::Error;
use shirasu_infrastructure::error_ext::ErrorContext;

fn io_failure() -> std::result::Result<(), std::io::Error> {
    Err(std::io::Error::other("disk on fire"))
}

#[test]
fn test_context_wraps_message() {
    match io_failure().context("Reading state") {
        Err(Error::Internal { message }) => {
            assert_eq!(message, "Reading state: disk on fire");
        }
        other => panic!("Expected Internal error, got {other:?}"),
    }
}

#[test]
fn test_config_context_keeps_source() {
    match io_failure().config_context("Loading config") {
        Err(Error::Configuration { message, source }) => {
            assert!(message.starts_with("Loading config"));
            assert!(source.is_some());
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_network_context_is_not_reconnectable() {
    let error = io_failure().network_context("Handshake").unwrap_err();
    assert!(matches!(error, Error::Network { .. }));
    assert_eq!(error.reconnect_reason(), None);
}

#[test]
fn test_with_context_is_lazy() {
    let ok: std::result::Result<u8, std::io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 1);
}

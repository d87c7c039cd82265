//! Tests for domain error types

use std::time::Duration;

use shirasu_domain::Error;

#[test]
fn test_unknown_dependency_lists_every_name() {
    let error = Error::unknown_dependencies(["a", "b"]);
    assert_eq!(error.to_string(), "unknown dependencies: a, b");
    assert!(error.is_resolution_error());
}

#[test]
fn test_circular_dependency_shows_chain() {
    let error = Error::circular_dependencies(
        vec!["int".to_string()],
        vec!["int".to_string(), "float".to_string()],
    );
    let display = error.to_string();
    assert!(display.contains("circular dependencies: int"));
    assert!(display.contains("int -> float"));
}

#[test]
fn test_reconnect_reason() {
    assert_eq!(
        Error::ConnectionClosed.reconnect_reason(),
        Some("Connection closed")
    );
    assert_eq!(
        Error::ConnectionRefused.reconnect_reason(),
        Some("Connection refused")
    );
    assert_eq!(Error::internal("boom").reconnect_reason(), None);
    assert_eq!(
        Error::timeout("call", Duration::from_millis(5)).reconnect_reason(),
        None
    );
}

#[test]
fn test_registration_errors() {
    match Error::duplicate_addon("echo") {
        Error::DuplicateAddon { name } => assert_eq!(name, "echo"),
        other => panic!("Expected DuplicateAddon error, got {other:?}"),
    }

    match Error::load_addon("@dummy", "not registered") {
        Error::LoadAddon { module, message } => {
            assert_eq!(module, "@dummy");
            assert_eq!(message, "not registered");
        }
        other => panic!("Expected LoadAddon error, got {other:?}"),
    }

    assert!(!Error::no_such_addon("x").is_resolution_error());
}

#[test]
fn test_action_failed_display() {
    let error = Error::ActionFailed {
        action: "send_group_msg".to_string(),
        retcode: 100,
        msg: "SEND_MSG_API_ERROR".to_string(),
        wording: "message blocked".to_string(),
    };
    let display = error.to_string();
    assert!(display.contains("SEND_MSG_API_ERROR"));
    assert!(display.contains("message blocked"));
}

#[test]
fn test_json_error_conversion() {
    let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = parse_error.into();
    assert!(matches!(error, Error::Json { .. }));
}

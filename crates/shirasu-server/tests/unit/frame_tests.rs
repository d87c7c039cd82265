//! Frame classification tests

use serde_json::json;
use shirasu_domain::Error;
use shirasu_server::transport::{ActionRequest, Frame};

#[test]
fn test_request_wire_shape() {
    let request = ActionRequest {
        action: "send_private_msg",
        params: json!({ "user_id": 7 }),
        echo: 3,
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({ "action": "send_private_msg", "params": { "user_id": 7 }, "echo": 3 })
    );
}

#[test]
fn test_frames_with_echo_are_responses() {
    let frame = Frame::classify(json!({ "status": "ok", "retcode": 0, "data": null, "echo": 5 }))
        .unwrap();
    let Frame::Response(response) = frame else {
        panic!("expected a response");
    };
    assert_eq!(response.id(), Some(5));
    assert_eq!(response.into_data("get_status").unwrap(), json!({}));

    let Frame::Response(response) = Frame::classify(json!({ "status": "ok", "echo": "12" })).unwrap()
    else {
        panic!("expected a response");
    };
    assert_eq!(response.id(), Some(12));
}

#[test]
fn test_frames_without_echo_are_events() {
    let frame = Frame::classify(json!({
        "post_type": "notice",
        "notice_type": "group_increase",
        "user_id": 9,
    }))
    .unwrap();
    assert!(matches!(frame, Frame::Event(event) if event.post_type() == "notice"));

    assert!(Frame::classify(json!({ "hello": "world" })).is_err());
}

#[test]
fn test_failed_response_keeps_remote_fields() {
    let Frame::Response(response) = Frame::classify(json!({
        "status": "failed",
        "retcode": 1404,
        "msg": "API_NOT_FOUND",
        "wording": "API不存在",
        "echo": 1,
    }))
    .unwrap() else {
        panic!("expected a response");
    };

    match response.into_data("nope") {
        Err(Error::ActionFailed {
            action,
            retcode,
            msg,
            wording,
        }) => {
            assert_eq!(action, "nope");
            assert_eq!(retcode, 1404);
            assert_eq!(msg, "API_NOT_FOUND");
            assert_eq!(wording, "API不存在");
        }
        other => panic!("Expected ActionFailed, got {other:?}"),
    }
}

//! Tests for the message model and CQ-code parsing

use serde_json::json;
use shirasu_domain::message::{Message, MessageSegment};

fn first(raw: &str) -> MessageSegment {
    Message::parse(raw).segments()[0].clone()
}

#[test]
fn test_parse_image() {
    let file = "taffy.jpg";
    let image = first(&format!("[CQ:image,file={file}]"));
    assert_eq!(image.kind, "image");
    assert_eq!(image.data_str("file"), Some(file));
}

#[test]
fn test_parse_text() {
    let text = "this is simple text, nothing else";
    assert_eq!(first(text).as_text(), Some(text));
}

#[test]
fn test_parse_at() {
    assert_eq!(first("[CQ:at,qq=1883]"), MessageSegment::at(1883));
}

#[test]
fn test_parse_record() {
    let record = first("[CQ:record,file=taffy.mp3]");
    assert_eq!(record, MessageSegment::record("taffy.mp3"));
}

#[test]
fn test_parse_poke() {
    let poke = first("[CQ:poke]");
    assert_eq!(poke.kind, "poke");
    assert!(poke.data.is_empty());
}

#[test]
fn test_parse_xml() {
    let data = "<something></something>";
    assert_eq!(first(&format!("[CQ:xml,data={data}]")), MessageSegment::xml(data));
}

#[test]
fn test_parse_json() {
    let data = r#"{"a": true}"#;
    assert_eq!(first(&format!("[CQ:json,data={data}]")), MessageSegment::json(data));
}

#[test]
fn test_parse_mixed_segments_in_order() {
    let message = Message::parse("hi [CQ:at,qq=2] there[CQ:poke]");
    let kinds: Vec<&str> = message.segments().iter().map(|s| s.kind.as_str()).collect();
    assert_eq!(kinds, ["text", "at", "text", "poke"]);
    assert_eq!(message.plain_text(), "hi  there");
}

#[test]
fn test_parse_unescapes_entities() {
    let message = Message::parse("a&#91;1&#93; &amp; [CQ:image,file=x&#44;y.jpg]");
    assert_eq!(message.segments()[0].as_text(), Some("a[1] & "));
    assert_eq!(message.segments()[1].data_str("file"), Some("x,y.jpg"));
}

#[test]
fn test_display_renders_cq_code() {
    let message = Message::from("[a], b")
        .with(MessageSegment::at(42))
        .with(MessageSegment::image("x,y.jpg"));
    assert_eq!(
        message.to_string(),
        "&#91;a&#93;, b[CQ:at,qq=42][CQ:image,file=x&#44;y.jpg]"
    );
    assert_eq!(Message::parse(&message.to_string()), message);
}

#[test]
fn test_to_wire_is_segment_array() {
    let message = Message::from("hello").with(MessageSegment::at(7));
    assert_eq!(
        message.to_wire(),
        json!([
            { "type": "text", "data": { "text": "hello" } },
            { "type": "at", "data": { "qq": "7" } },
        ])
    );
}

#[test]
fn test_mentions() {
    let message = Message::parse("[CQ:at,qq=1] hi");
    assert!(message.mentions(1));
    assert!(!message.mentions(2));
}

#[test]
fn test_empty_message() {
    let message = Message::parse("");
    assert!(message.is_empty());
    assert_eq!(message.plain_text(), "");
}

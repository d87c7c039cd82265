//! CQ-code text format
//!
//! `[CQ:type,key=value,...]` marks a non-text segment; everything outside
//! the brackets is text. `&`, `[` and `]` are escaped everywhere, `,` only
//! inside parameter values.

use serde_json::{Map, Value};

use super::MessageSegment;

const OPEN: &str = "[CQ:";

pub(crate) fn escape(raw: &str, in_param: bool) -> String {
    let escaped = raw
        .replace('&', "&amp;")
        .replace('[', "&#91;")
        .replace(']', "&#93;");
    if in_param {
        escaped.replace(',', "&#44;")
    } else {
        escaped
    }
}

pub(crate) fn unescape(raw: &str) -> String {
    raw.replace("&#44;", ",")
        .replace("&#91;", "[")
        .replace("&#93;", "]")
        .replace("&amp;", "&")
}

pub(crate) fn parse_segments(raw: &str) -> Vec<MessageSegment> {
    let mut segments = Vec::new();
    let mut rest = raw;

    while let Some(start) = rest.find(OPEN) {
        let (text, tail) = rest.split_at(start);
        push_text(&mut segments, text);

        let Some(end) = tail.find(']') else {
            // Unterminated code: keep it as text.
            push_text(&mut segments, tail);
            return segments;
        };

        let body = &tail[OPEN.len()..end];
        match parse_code(body) {
            Some(segment) => segments.push(segment),
            None => push_text(&mut segments, &tail[..=end]),
        }
        rest = &tail[end + 1..];
    }

    push_text(&mut segments, rest);
    segments
}

fn push_text(segments: &mut Vec<MessageSegment>, raw: &str) {
    if !raw.is_empty() {
        segments.push(MessageSegment::text(unescape(raw)));
    }
}

fn parse_code(body: &str) -> Option<MessageSegment> {
    let mut parts = body.split(',');
    let kind = parts.next().filter(|k| !k.is_empty())?;

    let mut data = Map::new();
    for param in parts {
        let (key, value) = param.split_once('=').unwrap_or((param, ""));
        data.insert(key.to_string(), Value::String(unescape(value)));
    }
    Some(MessageSegment::new(kind, data))
}

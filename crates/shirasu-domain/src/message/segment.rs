//! Message segments and their constructors

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::cq;

pub(crate) const TEXT: &str = "text";
pub(crate) const AT: &str = "at";

/// One typed piece of a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageSegment {
    /// Segment type (`text`, `at`, `image`, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Segment parameters
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl MessageSegment {
    /// Create a segment of an arbitrary type
    pub fn new<S: Into<String>>(kind: S, data: Map<String, Value>) -> Self {
        Self {
            kind: kind.into(),
            data,
        }
    }

    /// Plain text
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self::with_param(TEXT, "text", text.into())
    }

    /// Mention a user
    pub fn at<U: ToString>(user_id: U) -> Self {
        Self::with_param(AT, "qq", user_id.to_string())
    }

    /// Image by file name or URL
    pub fn image<S: Into<String>>(file: S) -> Self {
        Self::with_param("image", "file", file.into())
    }

    /// Voice record by file name or URL
    pub fn record<S: Into<String>>(file: S) -> Self {
        Self::with_param("record", "file", file.into())
    }

    /// Poke
    pub fn poke() -> Self {
        Self::new("poke", Map::new())
    }

    /// XML rich message
    pub fn xml<S: Into<String>>(data: S) -> Self {
        Self::with_param("xml", "data", data.into())
    }

    /// JSON rich message
    pub fn json<S: Into<String>>(data: S) -> Self {
        Self::with_param("json", "data", data.into())
    }

    fn with_param(kind: &str, key: &str, value: String) -> Self {
        let mut data = Map::new();
        data.insert(key.to_string(), Value::String(value));
        Self::new(kind, data)
    }

    /// Text content if this is a text segment
    pub fn as_text(&self) -> Option<&str> {
        if self.kind == TEXT {
            self.data_str("text")
        } else {
            None
        }
    }

    /// A string parameter
    pub fn data_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    /// JSON object form `{type, data}`
    pub fn to_wire(&self) -> Value {
        json!({ "type": self.kind, "data": self.data })
    }
}

impl fmt::Display for MessageSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = self.as_text() {
            return f.write_str(&cq::escape(text, false));
        }

        write!(f, "[CQ:{}", self.kind)?;
        for (key, value) in &self.data {
            let rendered = match value {
                Value::String(s) => cq::escape(s, true),
                other => cq::escape(&other.to_string(), true),
            };
            write!(f, ",{key}={rendered}")?;
        }
        f.write_str("]")
    }
}

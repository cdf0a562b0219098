//! Key/value fields attached to records

use std::fmt;

use serde::Serialize;
use serde_json::Value as JsonValue;

/// A single structured field
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    key: String,
    value: JsonValue,
}

impl Field {
    pub fn new(key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Field holding the `Display` rendering of a value
    pub fn display(key: impl Into<String>, value: &dyn fmt::Display) -> Self {
        Self::new(key, value.to_string())
    }

    /// Field holding any serializable value.
    ///
    /// A value that fails to serialize becomes a `<key>Error` field carrying
    /// the serializer's message.
    pub fn serialize<T: Serialize + ?Sized>(key: impl Into<String>, value: &T) -> Self {
        let key = key.into();
        match serde_json::to_value(value) {
            Ok(value) => Self { key, value },
            Err(e) => Self::new(format!("{}Error", key), e.to_string()),
        }
    }

    /// The `error` field added by `error`, `panic` and `fatal` logging
    pub fn error(err: &dyn std::error::Error) -> Self {
        Self::new("error", err.to_string())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &JsonValue {
        &self.value
    }
}

/// Shorthand for [`Field::new`]
pub fn field(key: impl Into<String>, value: impl Into<JsonValue>) -> Field {
    Field::new(key, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_field_values() {
        assert_eq!(field("count", 3).value(), &JsonValue::from(3));
        assert_eq!(field("ok", true).value(), &JsonValue::Bool(true));
        assert_eq!(Field::display("addr", &"10.0.0.1:80").value(), "10.0.0.1:80");
    }

    #[test]
    fn test_serialize_field() {
        let tags: HashMap<&str, u8> = [("retries", 2)].into_iter().collect();
        let f = Field::serialize("tags", &tags);
        assert_eq!(f.key(), "tags");
        assert_eq!(f.value()["retries"], 2);

        let bad: HashMap<(u8, u8), u8> = [((1, 2), 3)].into_iter().collect();
        let f = Field::serialize("grid", &bad);
        assert_eq!(f.key(), "gridError");
        assert!(f.value().is_string());
    }

    #[test]
    fn test_error_field() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let f = Field::error(&err);
        assert_eq!(f.key(), "error");
        assert_eq!(f.value(), "disk full");
    }
}

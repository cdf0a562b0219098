//! Request bodies
//!
//! Strings and structured values take different paths, so the kind is chosen
//! by the caller's type rather than by what a value happens to serialize to.

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::errors::{RestkitError, Result};

pub(crate) const JSON_CONTENT_TYPE: &str = "application/json";
pub(crate) const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Body of an outgoing request
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    /// No payload
    #[default]
    Empty,

    /// Sent byte for byte, with no implicit content type
    Text(String),

    /// Sent as its JSON encoding with `Content-Type: application/json`
    Json(JsonValue),
}

impl RequestBody {
    /// JSON body from any serializable value.
    ///
    /// Every value is encoded, including ones that serialize to a JSON string
    /// (kept quoted) or to `null` (sent as the literal `null`).
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        serde_json::to_value(value)
            .map(RequestBody::Json)
            .map_err(|e| RestkitError::Serialization(e.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RequestBody::Empty)
    }

    pub(crate) fn into_payload(self) -> Result<Option<Payload>> {
        match self {
            RequestBody::Empty => Ok(None),
            RequestBody::Text(text) => Ok(Some(Payload::Verbatim(text))),
            RequestBody::Json(value) => serde_json::to_vec(&value)
                .map(|bytes| Some(Payload::Json(bytes)))
                .map_err(|e| RestkitError::Serialization(e.to_string())),
        }
    }
}

impl From<&str> for RequestBody {
    fn from(text: &str) -> Self {
        RequestBody::Text(text.to_string())
    }
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        RequestBody::Text(text)
    }
}

impl From<&String> for RequestBody {
    fn from(text: &String) -> Self {
        RequestBody::Text(text.clone())
    }
}

/// A JSON value is structured even when it holds a string
impl From<JsonValue> for RequestBody {
    fn from(value: JsonValue) -> Self {
        RequestBody::Json(value)
    }
}

impl From<()> for RequestBody {
    fn from(_: ()) -> Self {
        RequestBody::Empty
    }
}

/// Encoded bytes ready for the transport
#[derive(Debug, PartialEq)]
pub(crate) enum Payload {
    Verbatim(String),
    Json(Vec<u8>),
    Form(String),
}

impl Payload {
    pub(crate) fn content_type(&self) -> Option<&'static str> {
        match self {
            Payload::Verbatim(_) => None,
            Payload::Json(_) => Some(JSON_CONTENT_TYPE),
            Payload::Form(_) => Some(FORM_CONTENT_TYPE),
        }
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        match self {
            Payload::Verbatim(s) | Payload::Form(s) => s.into_bytes(),
            Payload::Json(bytes) => bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    enum Status {
        Active,
    }

    fn encoded(body: RequestBody) -> Option<Payload> {
        body.into_payload().unwrap()
    }

    #[test]
    fn test_strings_are_verbatim() {
        assert_eq!(
            encoded("{\"already\":\"encoded\"}".into()),
            Some(Payload::Verbatim("{\"already\":\"encoded\"}".to_string()))
        );

        let owned = String::from("plain text");
        assert_eq!(encoded((&owned).into()), Some(Payload::Verbatim(owned.clone())));
        assert_eq!(encoded(owned.clone().into()), Some(Payload::Verbatim(owned)));
    }

    #[test]
    fn test_string_like_values_stay_quoted() {
        let at = Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap();
        assert_eq!(
            encoded(RequestBody::json(&at).unwrap()),
            Some(Payload::Json(b"\"2026-10-17T09:00:00Z\"".to_vec()))
        );
        assert_eq!(
            encoded(RequestBody::json(&Status::Active).unwrap()),
            Some(Payload::Json(b"\"Active\"".to_vec()))
        );
        assert_eq!(encoded(RequestBody::json(&'x').unwrap()), Some(Payload::Json(b"\"x\"".to_vec())));
        assert_eq!(encoded(json!("x").into()), Some(Payload::Json(b"\"x\"".to_vec())));
    }

    #[test]
    fn test_null_values_are_sent() {
        assert_eq!(
            encoded(RequestBody::json(&None::<u32>).unwrap()),
            Some(Payload::Json(b"null".to_vec()))
        );
        assert_eq!(encoded(RequestBody::json(&()).unwrap()), Some(Payload::Json(b"null".to_vec())));
    }

    #[test]
    fn test_empty_sends_nothing() {
        assert!(RequestBody::default().is_empty());
        assert_eq!(encoded(().into()), None);
    }

    #[test]
    fn test_structured_body_is_json() {
        let payload = encoded(RequestBody::json(&json!({"name": "ada", "age": 36})).unwrap()).unwrap();
        assert_eq!(payload.content_type(), Some(JSON_CONTENT_TYPE));
        assert_eq!(payload.into_bytes(), br#"{"name":"ada","age":36}"#.to_vec());
    }

    #[test]
    fn test_unserializable_value_fails() {
        let mut map = BTreeMap::new();
        map.insert((1, 2), "tuple keys are not valid JSON object keys");
        assert!(matches!(RequestBody::json(&map), Err(RestkitError::Serialization(_))));
    }
}

//! Detects API errors hidden inside successful exchanges.
//!
//! The Content API sometimes answers with a 2xx status and an error envelope
//! in the body, either `{"error": {"message", "code", "type"}}` or
//! `{"Message": ..., "code": ...}`. Envelopes are recognised here, before the
//! response shape is checked.

use serde_json::{Map, Value};
use tripadvisor_core::TripAdvisorError;

/// Message used when an error envelope does not carry one
pub const UNKNOWN_API_ERROR: &str = "Unknown API error";

/// Details of an error envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorDescriptor {
    /// Error message
    pub message: String,
    /// Numeric error code
    pub code: Option<i64>,
    /// Error type tag
    pub kind: Option<String>,
}

impl From<ApiErrorDescriptor> for TripAdvisorError {
    fn from(d: ApiErrorDescriptor) -> Self {
        Self::Api {
            message: d.message,
            code: d.code,
            kind: d.kind,
        }
    }
}

/// Result of inspecting a response body
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// A candidate payload, still to be shape-checked
    Payload(Value),
    /// An error envelope
    ApiError(ApiErrorDescriptor),
}

impl Classification {
    /// Payload as `Ok`, envelope as [`TripAdvisorError::Api`]
    pub fn into_result(self) -> Result<Value, TripAdvisorError> {
        match self {
            Self::Payload(value) => Ok(value),
            Self::ApiError(descriptor) => Err(descriptor.into()),
        }
    }
}

/// Decide whether `body` is an error envelope or a payload
#[must_use]
pub fn classify(body: Value) -> Classification {
    match envelope(&body) {
        Some(descriptor) => Classification::ApiError(descriptor),
        None => Classification::Payload(body),
    }
}

fn envelope(body: &Value) -> Option<ApiErrorDescriptor> {
    let root = body.as_object()?;

    if let Some(Value::Object(inner)) = root.get("error") {
        return Some(ApiErrorDescriptor {
            message: string_field(inner, "message")
                .unwrap_or_else(|| UNKNOWN_API_ERROR.to_string()),
            code: code_field(inner).or_else(|| code_field(root)),
            kind: string_field(inner, "type").or_else(|| string_field(root, "type")),
        });
    }

    root.contains_key("Message").then(|| ApiErrorDescriptor {
        message: string_field(root, "Message").unwrap_or_else(|| UNKNOWN_API_ERROR.to_string()),
        code: code_field(root),
        kind: string_field(root, "type"),
    })
}

fn string_field(map: &Map<String, Value>, name: &str) -> Option<String> {
    map.get(name).and_then(Value::as_str).map(str::to_string)
}

fn code_field(map: &Map<String, Value>) -> Option<i64> {
    match map.get("code")? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_error_envelope() {
        let body = json!({"error": {"message": "Invalid key", "code": 401, "type": "AuthError"}});
        assert_eq!(
            classify(body),
            Classification::ApiError(ApiErrorDescriptor {
                message: "Invalid key".into(),
                code: Some(401),
                kind: Some("AuthError".into()),
            })
        );
    }

    #[test]
    fn test_top_level_message_envelope() {
        let body = json!({"Message": "Not found", "code": 404});
        let err = classify(body).into_result().unwrap_err();
        assert_eq!(
            err,
            TripAdvisorError::Api {
                message: "Not found".into(),
                code: Some(404),
                kind: None,
            }
        );
    }

    #[test]
    fn test_string_code_is_parsed() {
        let body = json!({"error": {"message": "Too many", "code": "429"}});
        let Classification::ApiError(d) = classify(body) else {
            panic!("expected error envelope");
        };
        assert_eq!(d.code, Some(429));
    }

    #[test]
    fn test_missing_message_uses_placeholder() {
        let body = json!({"error": {"code": 500}});
        let Classification::ApiError(d) = classify(body) else {
            panic!("expected error envelope");
        };
        assert_eq!(d.message, UNKNOWN_API_ERROR);
    }

    #[test]
    fn test_payloads_pass_through() {
        for body in [
            json!({"data": []}),
            json!({"error": "just a string field"}),
            json!({"message": "lowercase is a payload field"}),
            json!([1, 2, 3]),
            Value::Null,
        ] {
            assert_eq!(classify(body.clone()), Classification::Payload(body));
        }
    }
}

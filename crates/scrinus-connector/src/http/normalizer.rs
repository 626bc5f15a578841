//! Response normalization
//!
//! A decodable JSON body is returned as-is on *any* status: the API signals
//! application-level failure through the JSON `success` field, not always
//! through HTTP status, and callers above are responsible for checking it.
//! Only undecodable bodies are classified by status — 401/403 become
//! authentication errors carrying the signed plaintext for diagnostics,
//! everything else a plain request error.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::http::transport::ResponseEnvelope;

/// Decode the body, or classify the failure by HTTP status.
///
/// `plaintext` is the canonical string that was signed for this request,
/// when the call was authenticated.
pub fn normalize(envelope: &ResponseEnvelope, plaintext: Option<&str>) -> Result<Value> {
    match serde_json::from_str::<Value>(&envelope.body) {
        Ok(value) => Ok(value),
        Err(_) => match envelope.status {
            401 | 403 => Err(Error::Authentication {
                status: envelope.status,
                reason: envelope.reason.clone(),
                plaintext: plaintext.unwrap_or_default().to_string(),
            }),
            status => Err(Error::Request {
                status,
                reason: envelope.reason.clone(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(status: u16, reason: &str, body: &str) -> ResponseEnvelope {
        ResponseEnvelope {
            status,
            reason: reason.to_string(),
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_decodable_body_returned_unchanged() {
        let result = normalize(
            &envelope(200, "OK", r#"{"success":true,"data":[]}"#),
            None,
        )
        .unwrap();
        assert_eq!(result, json!({"success": true, "data": []}));
    }

    #[test]
    fn test_decodable_body_wins_over_error_status() {
        // Application-level failures arrive as JSON on non-2xx statuses too.
        let result = normalize(
            &envelope(400, "Bad Request", r#"{"success":false,"message":"nope"}"#),
            None,
        )
        .unwrap();
        assert_eq!(result["success"], json!(false));
    }

    #[test]
    fn test_403_non_json_is_authentication_error() {
        let err = normalize(
            &envelope(403, "Forbidden", "<html>denied</html>"),
            Some("alice|date|GET|https|host|/device||digest"),
        )
        .unwrap_err();
        match err {
            Error::Authentication {
                status,
                reason,
                plaintext,
            } => {
                assert_eq!(status, 403);
                assert_eq!(reason, "Forbidden");
                assert_eq!(plaintext, "alice|date|GET|https|host|/device||digest");
            }
            other => panic!("expected Authentication, got {other:?}"),
        }
    }

    #[test]
    fn test_401_non_json_is_authentication_error() {
        let err = normalize(&envelope(401, "Unauthorized", "denied"), None).unwrap_err();
        assert!(matches!(err, Error::Authentication { status: 401, .. }));
    }

    #[test]
    fn test_other_status_non_json_is_request_error() {
        let err = normalize(&envelope(500, "Internal Server Error", "boom"), None).unwrap_err();
        match err {
            Error::Request { status, reason } => {
                assert_eq!(status, 500);
                assert_eq!(reason, "Internal Server Error");
            }
            other => panic!("expected Request, got {other:?}"),
        }
    }
}

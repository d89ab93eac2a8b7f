use poem::http::StatusCode;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Error body sent back to the caller. `status` follows HTTP semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, name: &str, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            name: name.to_string(),
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "ValidationError", message)
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "InternalError",
            "Internal server error",
        )
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> ErrorResponse;
}

/// Reply published for every request: exactly one of `response` or `err`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<ErrorResponse>,
}

impl ReplyEnvelope {
    pub fn ok<T: Serialize>(body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => Self {
                response: Some(value),
                err: None,
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize reply");
                Self::error(ErrorResponse::internal())
            }
        }
    }

    pub fn error(err: ErrorResponse) -> Self {
        Self {
            response: None,
            err: Some(err),
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        // Holds only `Value`s and strings.
        serde_json::to_vec(self).unwrap_or_default()
    }
}

/// Deserializes a request payload. An empty payload is read as JSON `null`.
pub fn parse_payload<T: DeserializeOwned>(payload: &[u8]) -> Result<T, ErrorResponse> {
    let payload = if payload.iter().all(u8::is_ascii_whitespace) {
        b"null".as_slice()
    } else {
        payload
    };
    serde_json::from_slice(payload)
        .map_err(|e| ErrorResponse::validation(format!("Invalid payload: {}", e)))
}

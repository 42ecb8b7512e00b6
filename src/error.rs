use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Result alias used by all API methods
pub type ApiResult<T> = Result<T, ApiError>;

/// Error payload the API attaches to failed responses
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub code: Option<i32>,
    pub message: Option<String>,
    pub debug_info: Option<String>,
    pub error_code: Option<i32>,
}

impl ErrorBody {
    /// Best-effort parse of a response body. Non-JSON bodies are kept verbatim
    /// as the message so nothing the server said is lost.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|_| ErrorBody {
            message: (!body.trim().is_empty()).then(|| body.to_string()),
            ..ErrorBody::default()
        })
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message, &self.debug_info) {
            (Some(msg), Some(debug)) => write!(f, "{} ({})", msg, debug),
            (Some(msg), None) => write!(f, "{}", msg),
            (None, Some(debug)) => write!(f, "{}", debug),
            (None, None) => write!(f, "no error details"),
        }
    }
}

/// Errors returned by the FileGate API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: DNS, connection refused, timeout
    #[error("connection error: {0}")]
    Connection(String),

    #[error("bad request: {0}")]
    BadRequest(ErrorBody),

    #[error("authentication required: {0}")]
    Unauthorized(ErrorBody),

    #[error("payment required: {0}")]
    PaymentRequired(ErrorBody),

    #[error("forbidden: {0}")]
    Forbidden(ErrorBody),

    #[error("not found: {0}")]
    NotFound(ErrorBody),

    #[error("conflict: {0}")]
    Conflict(ErrorBody),

    #[error("precondition failed: {0}")]
    PreconditionFailed(ErrorBody),

    #[error("too many requests: {0}")]
    TooManyRequests(ErrorBody),

    /// 5xx responses
    #[error("server error ({status}): {body}")]
    Server { status: u16, body: ErrorBody },

    /// Any other unexpected status
    #[error("unexpected status {status}: {body}")]
    Http { status: u16, body: ErrorBody },

    /// Response body did not match the declared model
    #[error("invalid response shape: {0}")]
    Validation(String),

    /// An adapter method was called before a session was established
    #[error("client is not connected, call a connect method or set_tokens first")]
    Disconnected,

    /// Client-side misconfiguration (bad base URL, missing credentials)
    #[error("invalid client configuration: {0}")]
    InvalidClient(String),
}

impl ApiError {
    /// Translate an HTTP error status plus its raw body into a typed error.
    ///
    /// Logs the failure; the error is always returned to the caller, there is
    /// no swallow mode.
    pub fn from_status(status: StatusCode, raw_body: &str) -> Self {
        let body = ErrorBody::parse(raw_body);
        tracing::warn!(
            target: "filegate_api::error",
            status = status.as_u16(),
            message = body.message.as_deref().unwrap_or(""),
            "API request failed"
        );
        match status {
            StatusCode::BAD_REQUEST => ApiError::BadRequest(body),
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized(body),
            StatusCode::PAYMENT_REQUIRED => ApiError::PaymentRequired(body),
            StatusCode::FORBIDDEN => ApiError::Forbidden(body),
            StatusCode::NOT_FOUND => ApiError::NotFound(body),
            StatusCode::CONFLICT => ApiError::Conflict(body),
            StatusCode::PRECONDITION_FAILED => ApiError::PreconditionFailed(body),
            StatusCode::TOO_MANY_REQUESTS => ApiError::TooManyRequests(body),
            s if s.is_server_error() => ApiError::Server { status: s.as_u16(), body },
            s => ApiError::Http { status: s.as_u16(), body },
        }
    }

    /// HTTP status behind this error, if it came from a response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::BadRequest(_) => Some(400),
            ApiError::Unauthorized(_) => Some(401),
            ApiError::PaymentRequired(_) => Some(402),
            ApiError::Forbidden(_) => Some(403),
            ApiError::NotFound(_) => Some(404),
            ApiError::Conflict(_) => Some(409),
            ApiError::PreconditionFailed(_) => Some(412),
            ApiError::TooManyRequests(_) => Some(429),
            ApiError::Server { status, .. } | ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the caller needs to re-authenticate to proceed
    pub fn requires_login(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_) | ApiError::Disconnected)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Validation(err.to_string())
        } else {
            ApiError::Connection(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_translation_picks_typed_variants() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND, r#"{"message":"no such group"}"#);
        assert!(err.is_not_found());
        assert_eq!(err.status_code(), Some(404));

        let err = ApiError::from_status(StatusCode::CONFLICT, "");
        assert!(err.is_conflict());

        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert!(matches!(err, ApiError::Server { status: 500, .. }));

        let err = ApiError::from_status(StatusCode::IM_A_TEAPOT, "");
        assert!(matches!(err, ApiError::Http { status: 418, .. }));
    }

    #[test]
    fn error_body_parses_json_and_keeps_plain_text() {
        let body = ErrorBody::parse(r#"{"code":404,"message":"Group not found","debugInfo":"id 42"}"#);
        assert_eq!(body.code, Some(404));
        assert_eq!(body.message.as_deref(), Some("Group not found"));
        assert_eq!(body.debug_info.as_deref(), Some("id 42"));

        let body = ErrorBody::parse("plain text error");
        assert_eq!(body.message.as_deref(), Some("plain text error"));
        assert_eq!(body.code, None);
    }

    #[test]
    fn requires_login_covers_auth_kinds() {
        assert!(ApiError::Disconnected.requires_login());
        assert!(ApiError::from_status(StatusCode::UNAUTHORIZED, "").requires_login());
        assert!(!ApiError::from_status(StatusCode::FORBIDDEN, "").requires_login());
    }
}

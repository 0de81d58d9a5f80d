//! Error types and HTTP error response handling.
//!
//! `AuthError` classifies why an API key could not be extracted from a
//! request. `AppError` is the service-wide error that handlers and middleware
//! return, converted into an HTTP response with a status code and JSON body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Reasons an API key could not be extracted from the `Authorization` header.
///
/// Variants are compared structurally; callers should match on them rather
/// than on their display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The header is missing or its value is empty. No credential supplied.
    #[error("no authorization header included")]
    NoAuthHeader,

    /// The header is present but is not of the form `ApiKey <token>`.
    #[error("malformed authorization header")]
    MalformedHeader,
}

impl AuthError {
    /// Machine-readable code used in error response bodies.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::NoAuthHeader => "no_auth_header",
            AuthError::MalformedHeader => "malformed_auth_header",
        }
    }

    /// HTTP status the service responds with for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::NoAuthHeader => StatusCode::UNAUTHORIZED,
            AuthError::MalformedHeader => StatusCode::BAD_REQUEST,
        }
    }
}

/// Application-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// API key could not be extracted from the request.
    ///
    /// `#[from]` lets `?` lift an `AuthError` straight out of extraction.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `Auth(NoAuthHeader)` → 401 Unauthorized
/// - `Auth(MalformedHeader)` → 400 Bad Request
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Auth(err) => (err.status(), err.code(), err.to_string()),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

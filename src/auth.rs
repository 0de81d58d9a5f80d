//! API key extraction from the `Authorization` header.
//!
//! Clients authenticate by sending:
//! ```text
//! Authorization: ApiKey <token>
//! ```
//!
//! This module only performs syntactic extraction. It does not check the key
//! against any store.

use crate::error::AuthError;
use axum::http::{HeaderMap, header::AUTHORIZATION};

/// Scheme token that must lead the `Authorization` header value.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Extract the API key from a request's headers.
///
/// The header value is split on whitespace runs. The first token must be
/// exactly `ApiKey` and the second token is returned as the key. Any further
/// tokens are ignored.
///
/// # Errors
///
/// - `AuthError::NoAuthHeader` if the header is missing or empty
/// - `AuthError::MalformedHeader` if the value is not `ApiKey <token>`
pub fn get_api_key(headers: &HeaderMap) -> Result<String, AuthError> {
    let value = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AuthError::NoAuthHeader),
    };

    // Keys may carry UTF-8; only undecodable bytes are rejected
    let value = std::str::from_utf8(value.as_bytes()).map_err(|_| AuthError::MalformedHeader)?;

    let mut tokens = value.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(API_KEY_SCHEME), Some(key)) => Ok(key.to_string()),
        _ => Err(AuthError::MalformedHeader),
    }
}

//! Identity echo for authenticated callers.

use crate::{auth::API_KEY_SCHEME, middleware::auth::AuthContext};
use axum::{Extension, Json};
use serde::Serialize;

/// Identity of the key an authenticated request was made with.
///
/// Carries the fingerprint only; the raw key is never echoed back.
#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    /// Authorization scheme the key was presented with
    pub scheme: &'static str,

    /// Hex SHA-256 of the presented key
    pub key_fingerprint: String,
}

/// Report which key the request was made with.
///
/// # Endpoint
///
/// `GET /api/v1/whoami`
///
/// # Response
///
/// - **Success (200 OK)**: scheme and key fingerprint
/// - **Error (401)**: no Authorization header
/// - **Error (400)**: malformed Authorization header
///
/// ```json
/// {
///   "scheme": "ApiKey",
///   "key_fingerprint": "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// }
/// ```
pub async fn whoami(Extension(auth): Extension<AuthContext>) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        scheme: API_KEY_SCHEME,
        key_fingerprint: auth.key_fingerprint,
    })
}

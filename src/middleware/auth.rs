//! API key authentication middleware.
//!
//! This middleware intercepts every protected request to:
//! 1. Extract the API key from the Authorization header
//! 2. Inject authentication context into the request
//! 3. Reject requests without a well-formed key (401 or 400)

use crate::{auth::get_api_key, error::AppError, models::api_key::ApiKey};
use axum::{extract::Request, middleware::Next, response::Response};

/// Authentication context attached to authenticated requests.
///
/// Inserted into the request's extension map; handlers extract it with
/// `Extension<AuthContext>`.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Hex SHA-256 of the key supplied by the client, safe to log and return
    pub key_fingerprint: String,
}

/// API key authentication middleware function.
///
/// # Flow
///
/// 1. Extract `Authorization: ApiKey <key>` header from request
/// 2. If missing or empty: return 401 Unauthorized
/// 3. If malformed: return 400 Bad Request
/// 4. Otherwise inject `AuthContext` into the request and call next handler
///
/// The key is not verified against any store.
pub async fn auth_middleware(mut request: Request, next: Next) -> Result<Response, AppError> {
    let key_fingerprint = match get_api_key(request.headers()) {
        Ok(key) => ApiKey::from(key).fingerprint(),
        Err(err) => {
            tracing::warn!(
                method = %request.method(),
                path = %request.uri().path(),
                error = %err,
                "Rejected request without usable API key"
            );
            return Err(err.into());
        }
    };

    tracing::debug!(key_fingerprint = %key_fingerprint, "API key extracted");

    request
        .extensions_mut()
        .insert(AuthContext { key_fingerprint });

    Ok(next.run(request).await)
}

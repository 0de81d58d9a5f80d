//! HTTP request handlers (route handlers).

/// Health check endpoint
pub mod health;
/// Authenticated identity endpoint
pub mod whoami;

//! Data models shared by middleware and handlers.

/// Client-supplied API key
pub mod api_key;

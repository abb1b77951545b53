//! Header parsing utilities.

use axum::http::HeaderMap;

/// Header carrying the client's extraction session.
pub const SESSION_ID: &str = "Session-Id";

/// Extension trait for convenient header parsing.
pub trait HeaderMapExt {
    /// Get a header value as a string, returning None if missing or not ASCII.
    fn get_str(&self, name: &str) -> Option<&str>;

    /// Get a trimmed header value, treating blank values as missing.
    fn get_nonblank(&self, name: &str) -> Option<&str>;
}

impl HeaderMapExt for HeaderMap {
    fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| v.to_str().ok())
    }

    fn get_nonblank(&self, name: &str) -> Option<&str> {
        self.get_str(name).map(str::trim).filter(|v| !v.is_empty())
    }
}

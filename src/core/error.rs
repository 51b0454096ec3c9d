//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`StorageError`] - localStorage operations for persisted preferences
//! - [`SurfaceError`] - Drawing surface acquisition
//! - [`AudioError`] - Web Audio availability

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, aborted, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Non-2xx response with a server-provided reason
    #[error("API: {0}")]
    Api(String),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text, wrong shape)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
    /// The endpoint is not configured
    #[error("Endpoint not configured")]
    Disabled,
}

/// Preference storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available (private mode, sandboxed frame).
    #[error("localStorage not available")]
    Unavailable,
    /// Failed to write to localStorage.
    #[error("failed to save to localStorage")]
    WriteFailed,
}

/// Drawing surface errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The host element is missing from the page.
    #[error("animation area not found")]
    Unavailable,
    /// The 2D context could not be obtained.
    #[error("2d context unavailable")]
    ContextUnavailable,
}

/// Audio output errors. Never shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    #[error("audio not supported")]
    Unavailable,
    #[error("audio blocked: {0}")]
    Blocked(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(FetchError::HttpError(404).to_string(), "HTTP error: 404");
        assert_eq!(
            FetchError::Api("Comando vazio".into()).to_string(),
            "API: Comando vazio"
        );
        assert_eq!(FetchError::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn test_surface_error_messages() {
        assert_eq!(
            SurfaceError::Unavailable.to_string(),
            "animation area not found"
        );
    }
}

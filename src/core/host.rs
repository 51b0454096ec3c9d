//! Outside-world capabilities the interpreter depends on.
//!
//! Implemented by `backend::BrowserHost` in the page and by small fakes in
//! tests.

use serde::{Deserialize, Serialize};

use crate::core::error::FetchError;
use crate::core::locale::GeoInfo;

/// Network-backed lookups. All methods report failure as a [`FetchError`];
/// turning that into transcript lines is the caller's job.
#[allow(async_fn_in_trait)]
pub trait ShellHost {
    /// The caller's public IPv4 address.
    async fn public_ip(&self) -> Result<String, FetchError>;

    /// Ask the remote fallback service to handle `line`.
    ///
    /// Returns [`FetchError::Disabled`] when no service is configured.
    async fn remote_command(&self, line: &str) -> Result<Vec<String>, FetchError>;

    /// Language hints for the visitor's address.
    async fn geolocate(&self) -> Result<GeoInfo, FetchError>;

    /// The browser's declared UI language, e.g. `pt-BR`.
    fn declared_language(&self) -> Option<String>;
}

/// Wall-clock labels for transcript headers and the badge.
pub trait Clock {
    /// Current local time as `dd/mm/yyyy, HH:MM`.
    fn now_label(&self) -> String;
}

/// Body of `POST /api/terminal`.
#[derive(Debug, Serialize)]
pub struct RemoteRequest<'a> {
    pub command: &'a str,
}

#[derive(Debug, Deserialize)]
struct RemoteLines {
    lines: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RemoteDetail {
    detail: Option<String>,
}

/// Minimal view of an HTTP response.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpReply {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Decode a remote fallback response.
///
/// Non-success statuses become [`FetchError::Api`] carrying the body's
/// `detail` field, or the status text when there is none.
pub fn interpret_remote(reply: &HttpReply) -> Result<Vec<String>, FetchError> {
    if !reply.ok() {
        let detail = serde_json::from_str::<RemoteDetail>(&reply.body)
            .ok()
            .and_then(|d| d.detail)
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| reply.status_text.clone());
        return Err(FetchError::Api(detail));
    }

    serde_json::from_str::<RemoteLines>(&reply.body)
        .map(|r| r.lines)
        .map_err(|e| FetchError::JsonParseError(e.to_string()))
}

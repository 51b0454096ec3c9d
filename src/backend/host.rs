//! Browser implementations of [`ShellHost`] and [`Clock`].

use serde::Deserialize;
use tracing::debug;

use crate::config::{
    GEO_LOOKUP_URL, IP_LOOKUP_URL, REMOTE_API_PATH, REMOTE_BASE_ATTRIBUTE, REMOTE_BASE_BUILD,
    REMOTE_BASE_GLOBAL, REMOTE_TIMEOUT_MS,
};
use crate::core::error::FetchError;
use crate::core::host::{Clock, RemoteRequest, interpret_remote};
use crate::core::locale::GeoInfo;
use crate::core::ShellHost;
use crate::utils::format::{format_short_datetime, local_now};
use crate::utils::{dom, fetch_json, post_json};

#[derive(Deserialize)]
struct IpResponse {
    ip: String,
}

/// Talks to the lookup services and the optional remote fallback.
#[derive(Clone, Debug, Default)]
pub struct BrowserHost {
    /// Full `.../api/terminal` URL, or `None` when the fallback is off.
    remote_url: Option<String>,
}

impl BrowserHost {
    pub fn new(remote_url: Option<String>) -> Self {
        Self { remote_url }
    }

    /// Configure from the page: `<html data-terminal-api-base>`, then
    /// `window.TERMINAL_API_BASE`, then the build-time value.
    pub fn from_page() -> Self {
        let base = dom::root_data_attribute(REMOTE_BASE_ATTRIBUTE)
            .filter(|b| !b.trim().is_empty())
            .or_else(|| dom::window_string(REMOTE_BASE_GLOBAL).filter(|b| !b.trim().is_empty()))
            .or_else(|| REMOTE_BASE_BUILD.map(str::to_string));
        let remote_url = base.as_deref().and_then(remote_endpoint);
        debug!("remote fallback: {:?}", remote_url);
        Self { remote_url }
    }
}

/// `<base>/api/terminal`, ignoring trailing slashes; `None` for a blank base.
pub fn remote_endpoint(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| format!("{}{}", base, REMOTE_API_PATH))
}

impl ShellHost for BrowserHost {
    async fn public_ip(&self) -> Result<String, FetchError> {
        fetch_json::<IpResponse>(IP_LOOKUP_URL).await.map(|r| r.ip)
    }

    async fn remote_command(&self, line: &str) -> Result<Vec<String>, FetchError> {
        let url = self.remote_url.as_deref().ok_or(FetchError::Disabled)?;
        let reply = post_json(url, &RemoteRequest { command: line }, REMOTE_TIMEOUT_MS).await?;
        interpret_remote(&reply)
    }

    async fn geolocate(&self) -> Result<GeoInfo, FetchError> {
        fetch_json::<GeoInfo>(GEO_LOOKUP_URL).await
    }

    fn declared_language(&self) -> Option<String> {
        dom::navigator_language()
    }
}

/// Local wall clock from `Date`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_label(&self) -> String {
        format_short_datetime(&local_now())
    }
}

/// Current badge label.
pub fn badge_time() -> String {
    BrowserClock.now_label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_endpoint() {
        assert_eq!(
            remote_endpoint("https://api.example.com").as_deref(),
            Some("https://api.example.com/api/terminal")
        );
        assert_eq!(
            remote_endpoint(" https://api.example.com/// ").as_deref(),
            Some("https://api.example.com/api/terminal")
        );
        assert_eq!(remote_endpoint(""), None);
        assert_eq!(remote_endpoint("  / "), None);
    }

    #[tokio::test]
    async fn test_disabled_without_endpoint() {
        let host = BrowserHost::new(None);
        assert_eq!(host.remote_command("ls").await, Err(FetchError::Disabled));
    }
}

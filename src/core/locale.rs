//! Greeting selection from the visitor's location or browser language.

use serde::Deserialize;
use tracing::debug;

use crate::config::{DEFAULT_GREETING, GREETINGS};
use crate::core::host::ShellHost;

/// The fields of the geolocation response we use.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GeoInfo {
    /// Comma-separated language tags, e.g. `pt-BR,es,en`.
    #[serde(default)]
    pub languages: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

/// Greeting for a two-letter language code, case-insensitively.
pub fn greeting_for(code: &str) -> Option<&'static str> {
    let code = code.to_lowercase();
    GREETINGS
        .iter()
        .find(|(lang, _)| *lang == code)
        .map(|(_, greeting)| *greeting)
}

/// First two characters of a language tag.
fn prefix(tag: &str) -> Option<&str> {
    let tag = tag.trim();
    tag.get(..2)
}

/// Pick a greeting: the first geolocated language, then the country code,
/// then the browser's declared language, then the default.
pub fn resolve_greeting(geo: Option<&GeoInfo>, declared: Option<&str>) -> &'static str {
    let from_geo = geo.and_then(|geo| {
        geo.languages
            .as_deref()
            .and_then(|langs| langs.split(',').next())
            .and_then(prefix)
            .and_then(greeting_for)
            .or_else(|| geo.country_code.as_deref().and_then(greeting_for))
    });

    from_geo
        .or_else(|| declared.and_then(prefix).and_then(greeting_for))
        .unwrap_or(DEFAULT_GREETING)
}

/// Geolocate the visitor and resolve a greeting. Lookup failures fall back
/// to the declared language.
pub async fn detect_greeting<H: ShellHost>(host: &H) -> &'static str {
    let geo = match host.geolocate().await {
        Ok(geo) => Some(geo),
        Err(e) => {
            debug!("geolocation unavailable: {}", e);
            None
        }
    };
    resolve_greeting(geo.as_ref(), host.declared_language().as_deref())
}

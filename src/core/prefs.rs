//! Persisted visitor preferences: hidden flag and sound settings.

use std::collections::HashMap;

use tracing::warn;

use crate::config::prefs::{HIDDEN_KEY, SOUND_ENABLED_KEY, SOUND_INTENSITY_KEY, SOUND_VOLUME_KEY};
use crate::core::error::StorageError;
use crate::core::rain::SoundSettings;

/// String key/value storage that survives reloads.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store, for tests and for browsers without localStorage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Preferences {
    pub hidden: bool,
    pub sound: SoundSettings,
}

impl Preferences {
    /// Read every preference, keeping defaults for missing or unparsable
    /// values. Volume and intensity are clamped to `0.0..=1.0`.
    pub fn load(store: &impl PreferenceStore) -> Self {
        let defaults = SoundSettings::default();
        Self {
            hidden: store.get(HIDDEN_KEY).as_deref() == Some("1"),
            sound: SoundSettings {
                enabled: store
                    .get(SOUND_ENABLED_KEY)
                    .map_or(defaults.enabled, |v| v != "0"),
                volume: read_unit(store, SOUND_VOLUME_KEY).unwrap_or(defaults.volume),
                intensity: read_unit(store, SOUND_INTENSITY_KEY).unwrap_or(defaults.intensity),
            },
        }
    }

    pub fn save_hidden(store: &mut impl PreferenceStore, hidden: bool) {
        write_flag(store, HIDDEN_KEY, hidden);
    }

    pub fn save_sound_enabled(store: &mut impl PreferenceStore, enabled: bool) {
        write_flag(store, SOUND_ENABLED_KEY, enabled);
    }
}

fn read_unit(store: &impl PreferenceStore, key: &str) -> Option<f64> {
    store
        .get(key)?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(0.0, 1.0))
}

fn write_flag(store: &mut impl PreferenceStore, key: &str, on: bool) {
    if let Err(e) = store.set(key, if on { "1" } else { "0" }) {
        warn!("could not persist {}: {}", key, e);
    }
}

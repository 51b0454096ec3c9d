//! localStorage-backed preferences.

use crate::core::error::StorageError;
use crate::core::prefs::PreferenceStore;
use crate::utils::dom;

/// Reads and writes `window.localStorage`. Private browsing or sandboxed
/// frames make every call fail softly.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        dom::local_storage()
            .ok_or(StorageError::Unavailable)?
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed)
    }
}

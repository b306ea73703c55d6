//! `localStorage`-backed preference store implementation.
//!
//! The browser API is synchronous; the [`PrefsStore`] futures resolve immediately. Storage that
//! is disabled or full surfaces as [`PrefsError`] so the runtime can fall back to in-memory
//! settings for the session.

use storefront_host::{PrefsError, PrefsStore, PrefsStoreFuture};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser preference store backed by `window.localStorage`.
pub struct WebPrefsStore;

impl WebPrefsStore {
    /// Loads a raw JSON string for a preference key.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::Unavailable`] when localStorage cannot be reached.
    pub fn load_json(self, key: &str) -> Result<Option<String>, PrefsError> {
        bridge::local_storage_get(key).map_err(|_| PrefsError::Unavailable)
    }

    /// Saves a raw JSON string for a preference key.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::Write`] when localStorage is unavailable or rejects the write
    /// (for example when the quota is exceeded).
    pub fn save_json(self, key: &str, raw_json: &str) -> Result<(), PrefsError> {
        bridge::local_storage_set(key, raw_json).map_err(PrefsError::Write)
    }

    /// Deletes a preference key from localStorage.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::Write`] when the delete fails.
    pub fn delete_json(self, key: &str) -> Result<(), PrefsError> {
        bridge::local_storage_remove(key).map_err(PrefsError::Write)
    }
}

impl PrefsStore for WebPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, PrefsError>> {
        let store = *self;
        Box::pin(async move { store.load_json(key) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), PrefsError>> {
        let store = *self;
        Box::pin(async move { store.save_json(key, raw_json) })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), PrefsError>> {
        let store = *self;
        Box::pin(async move { store.delete_json(key) })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_targets_report_storage_unavailable() {
        let store = WebPrefsStore;
        assert_eq!(store.load_json("k"), Err(PrefsError::Unavailable));
        assert!(matches!(store.save_json("k", "{}"), Err(PrefsError::Write(_))));
        assert!(matches!(store.delete_json("k"), Err(PrefsError::Write(_))));
    }
}

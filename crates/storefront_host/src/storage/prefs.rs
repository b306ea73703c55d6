//! Lightweight preference storage contracts and adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Object-safe boxed future used by [`PrefsStore`] async methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Failures surfaced by a [`PrefsStore`] or the typed helpers around it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefsError {
    /// The backing storage is disabled or missing (private mode, blocked cookies).
    #[error("preference storage unavailable")]
    Unavailable,
    /// The backing storage rejected a write (quota exceeded, read-only).
    #[error("preference write failed: {0}")]
    Write(String),
    /// A stored value could not be decoded into the requested type.
    #[error("preference decode failed: {0}")]
    Decode(String),
    /// A value could not be encoded for storage.
    #[error("preference encode failed: {0}")]
    Encode(String),
}

/// Host service for lightweight preference values (JSON stored as text per key).
pub trait PrefsStore {
    /// Loads a raw JSON string for a preference key.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, PrefsError>>;

    /// Saves a raw JSON string for a preference key.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), PrefsError>>;

    /// Deletes a preference key.
    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), PrefsError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for headless targets and baseline tests.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, PrefsError>> {
        Box::pin(async { Ok(None) })
    }

    fn save_pref<'a>(
        &'a self,
        _key: &'a str,
        _raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), PrefsError>> {
        Box::pin(async { Ok(()) })
    }

    fn delete_pref<'a>(&'a self, _key: &'a str) -> PrefsStoreFuture<'a, Result<(), PrefsError>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
///
/// [`MemoryPrefsStore::rejecting_writes`] builds a store whose saves fail, which is how tests
/// exercise quota-exceeded and disabled-storage paths.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
    write_failure: Option<String>,
}

impl MemoryPrefsStore {
    /// Creates a store pre-populated with one raw value.
    pub fn with_value(key: &str, raw_json: &str) -> Self {
        let store = Self::default();
        store
            .inner
            .borrow_mut()
            .insert(key.to_string(), raw_json.to_string());
        store
    }

    /// Creates a store whose writes fail with `reason`.
    pub fn rejecting_writes(reason: &str) -> Self {
        Self {
            inner: Rc::default(),
            write_failure: Some(reason.to_string()),
        }
    }

    /// Returns the raw value currently stored for `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, PrefsError>> {
        Box::pin(async move { Ok(self.inner.borrow().get(key).cloned()) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), PrefsError>> {
        Box::pin(async move {
            if let Some(reason) = &self.write_failure {
                return Err(PrefsError::Write(reason.clone()));
            }
            self.inner
                .borrow_mut()
                .insert(key.to_string(), raw_json.to_string());
            Ok(())
        })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), PrefsError>> {
        Box::pin(async move {
            self.inner.borrow_mut().remove(key);
            Ok(())
        })
    }
}

/// Loads and deserializes a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when the store read or JSON deserialization fails.
pub async fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, PrefsError> {
    let Some(raw) = store.load_pref(key).await? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| PrefsError::Decode(e.to_string()))?;
    Ok(Some(value))
}

/// Serializes and saves a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub async fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), PrefsError> {
    let raw = serde_json::to_string(value).map_err(|e| PrefsError::Encode(e.to_string()))?;
    store.save_pref(key, &raw).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct PanelPref {
        collapsed: bool,
    }

    #[test]
    fn memory_prefs_store_saves_loads_and_deletes() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        block_on(store_obj.save_pref("pref.key", "{\"k\":1}")).expect("save");
        assert_eq!(
            block_on(store_obj.load_pref("pref.key")).expect("load"),
            Some("{\"k\":1}".to_string())
        );
        block_on(store_obj.delete_pref("pref.key")).expect("delete");
        assert_eq!(block_on(store_obj.load_pref("pref.key")).expect("load"), None);
    }

    #[test]
    fn typed_helpers_decode_what_they_encode() {
        let store = MemoryPrefsStore::default();
        block_on(save_pref_with(&store, "panel", &PanelPref { collapsed: true }))
            .expect("save typed pref");

        let loaded: Option<PanelPref> = block_on(load_pref_with(&store, "panel")).expect("load");
        assert_eq!(loaded, Some(PanelPref { collapsed: true }));
    }

    #[test]
    fn corrupt_value_reports_decode_error() {
        let store = MemoryPrefsStore::with_value("panel", "{not json");
        let loaded = block_on(load_pref_with::<_, PanelPref>(&store, "panel"));
        assert!(matches!(loaded, Err(PrefsError::Decode(_))));
    }

    #[test]
    fn rejecting_store_fails_writes_but_still_reads() {
        let store = MemoryPrefsStore::rejecting_writes("quota exceeded");
        let saved = block_on(store.save_pref("k", "{}"));
        assert_eq!(saved, Err(PrefsError::Write("quota exceeded".to_string())));
        assert_eq!(block_on(store.load_pref("k")).expect("load"), None);
    }

    #[test]
    fn noop_prefs_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        let store_obj: &dyn PrefsStore = &store;
        assert_eq!(block_on(store_obj.load_pref("k")).expect("load"), None);
        block_on(store_obj.save_pref("k", "{}")).expect("save");
        block_on(store_obj.delete_pref("k")).expect("delete");
    }
}

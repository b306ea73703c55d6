use storefront_host::{ContentLoadError, LocationSnapshot, Unsubscribe, ViewportSize};

pub(crate) async fn fetch_text(_address: &str) -> Result<String, ContentLoadError> {
    Err(ContentLoadError::Unavailable)
}

pub(crate) fn origin() -> Option<String> {
    None
}

pub(crate) fn location_snapshot() -> LocationSnapshot {
    LocationSnapshot::root()
}

pub(crate) fn assign_location(_address: &str) -> Result<(), String> {
    Ok(())
}

pub(crate) fn replace_address_with_root() -> Result<(), String> {
    Ok(())
}

pub(crate) fn viewport() -> ViewportSize {
    ViewportSize::default()
}

pub(crate) fn prefers_reduced_motion() -> bool {
    false
}

pub(crate) fn watch_reduced_motion(_on_change: Box<dyn Fn(bool)>) -> Option<Unsubscribe> {
    None
}

pub(crate) fn local_storage_get(_key: &str) -> Result<Option<String>, String> {
    Err("localStorage unavailable".to_string())
}

pub(crate) fn local_storage_set(_key: &str, _raw: &str) -> Result<(), String> {
    Err("localStorage unavailable".to_string())
}

pub(crate) fn local_storage_remove(_key: &str) -> Result<(), String> {
    Err("localStorage unavailable".to_string())
}

use storefront_host::{ContentLoadError, LocationSnapshot, Unsubscribe, ViewportSize};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{RequestCredentials, RequestInit, Response, UrlSearchParams};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

pub(crate) async fn fetch_text(address: &str) -> Result<String, ContentLoadError> {
    let window = web_sys::window().ok_or(ContentLoadError::Unavailable)?;
    let init = RequestInit::new();
    init.set_method("GET");
    init.set_credentials(RequestCredentials::SameOrigin);

    let response = JsFuture::from(window.fetch_with_str_and_init(address, &init))
        .await
        .map_err(|err| ContentLoadError::Network(js_error_to_string(err)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|err| ContentLoadError::Network(js_error_to_string(err)))?;
    if !response.ok() {
        return Err(ContentLoadError::Status(response.status()));
    }

    let body = response
        .text()
        .map_err(|err| ContentLoadError::Body(js_error_to_string(err)))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|err| ContentLoadError::Body(js_error_to_string(err)))?;
    text.as_string()
        .ok_or_else(|| ContentLoadError::Body("response body is not text".to_string()))
}

pub(crate) fn origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

pub(crate) fn location_snapshot() -> LocationSnapshot {
    let Some(window) = web_sys::window() else {
        return LocationSnapshot::root();
    };
    let location = window.location();
    let search = location.search().unwrap_or_default();
    let mut query = Vec::new();
    if let Ok(params) = UrlSearchParams::new_with_str(&search) {
        if let Ok(Some(entries)) = js_sys::try_iter(params.as_ref()) {
            for entry in entries.flatten() {
                let pair = js_sys::Array::from(&entry);
                if let (Some(key), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string())
                {
                    query.push((key, value));
                }
            }
        }
    }

    LocationSnapshot {
        path: location.pathname().unwrap_or_else(|_| "/".to_string()),
        query,
        search,
        hash: location.hash().unwrap_or_default(),
        document_title: window.document().map(|doc| doc.title()).unwrap_or_default(),
    }
}

pub(crate) fn assign_location(address: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    window
        .location()
        .set_href(address)
        .map_err(js_error_to_string)
}

pub(crate) fn replace_address_with_root() -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let history = window.history().map_err(js_error_to_string)?;
    history
        .replace_state_with_url(&JsValue::NULL, "", Some("/"))
        .map_err(js_error_to_string)
}

pub(crate) fn viewport() -> ViewportSize {
    let fallback = ViewportSize::default();
    let Some(window) = web_sys::window() else {
        return fallback;
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .map(|value| value as i32)
        .unwrap_or(fallback.width);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .map(|value| value as i32)
        .unwrap_or(fallback.height);
    ViewportSize {
        width: width.max(320),
        height: height.max(240),
    }
}

pub(crate) fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub(crate) fn watch_reduced_motion(on_change: Box<dyn Fn(bool)>) -> Option<Unsubscribe> {
    let query = web_sys::window()?
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()?;
    let listener = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::wrap(Box::new(
        move |ev: web_sys::MediaQueryListEvent| on_change(ev.matches()),
    ));
    query
        .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
        .ok()?;
    Some(Box::new(move || {
        let _ = query
            .remove_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
        drop(listener);
    }))
}

pub(crate) fn local_storage_get(key: &str) -> Result<Option<String>, String> {
    let storage = local_storage()?;
    storage.get_item(key).map_err(js_error_to_string)
}

pub(crate) fn local_storage_set(key: &str, raw: &str) -> Result<(), String> {
    let storage = local_storage()?;
    storage.set_item(key, raw).map_err(js_error_to_string)
}

pub(crate) fn local_storage_remove(key: &str) -> Result<(), String> {
    let storage = local_storage()?;
    storage.remove_item(key).map_err(js_error_to_string)
}

fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or_else(|| "window unavailable".to_string())?
        .local_storage()
        .map_err(js_error_to_string)?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

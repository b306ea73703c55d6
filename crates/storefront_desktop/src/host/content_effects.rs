use std::{cell::Cell, rc::Rc};

use leptos::{logging, spawn_local, Callable, SignalWithUntracked};
use storefront_host::window_view_url;

use crate::{
    host::DesktopHostContext,
    model::WindowId,
    reducer::DesktopAction,
    registry,
    runtime_context::DesktopRuntimeContext,
};

/// Fetches a window's fragment and reports the result, unless the window closes first.
pub(super) fn load_content(
    host: DesktopHostContext,
    runtime: DesktopRuntimeContext,
    window_id: WindowId,
    address: String,
) {
    let live = runtime.state.with_untracked(|state| {
        registry::get(state, window_id)
            .map(|window| !window.is_closing())
            .unwrap_or(false)
    });
    if !live {
        return;
    }

    let alive = Rc::new(Cell::new(true));
    let abandon = alive.clone();
    host.cleanup()
        .register(window_id, move || abandon.set(false));

    let loader = host.services().content.clone();
    let dispatch = runtime.dispatch;
    spawn_local(async move {
        let result = loader.load_fragment(&window_view_url(&address)).await;
        if !alive.get() {
            return;
        }
        if let Err(err) = &result {
            logging::warn!("content load for `{address}` failed: {err}");
        }
        dispatch.call(DesktopAction::ContentLoaded { window_id, result });
    });
}

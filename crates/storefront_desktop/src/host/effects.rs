//! Runtime-effect dispatch for the desktop host boundary.

use std::time::Duration;

use leptos::{logging, set_timeout, spawn_local, Callable};

use crate::{
    host::{content_effects, DesktopHostContext},
    persistence,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

pub(super) fn run_runtime_effect(
    host: DesktopHostContext,
    runtime: DesktopRuntimeContext,
    effect: RuntimeEffect,
) {
    match effect {
        RuntimeEffect::ScheduleTransition { ticket, delay_ms } => {
            let dispatch = runtime.dispatch;
            set_timeout(
                move || dispatch.call(DesktopAction::TransitionElapsed { ticket }),
                Duration::from_millis(u64::from(delay_ms)),
            );
        }
        RuntimeEffect::LoadContent { window_id, address } => {
            content_effects::load_content(host, runtime, window_id, address);
        }
        RuntimeEffect::NavigateFullPage(address) => {
            if let Err(err) = host.services().navigation.navigate_full_page(&address) {
                logging::warn!("full-page navigation to `{address}` failed: {err}");
            }
        }
        RuntimeEffect::ResetAddress => {
            if let Err(err) = host.services().navigation.reset_address() {
                logging::warn!("address reset failed: {err}");
            }
        }
        RuntimeEffect::PersistSettings(settings) => {
            let prefs = host.services().prefs.clone();
            let dispatch = runtime.dispatch;
            spawn_local(async move {
                if let Err(message) = persistence::persist_settings(prefs.as_ref(), &settings).await
                {
                    dispatch.call(DesktopAction::SettingsPersistFailed { message });
                }
            });
        }
        RuntimeEffect::RunCleanup(window_id) => {
            host.cleanup().run(window_id);
        }
    }
}

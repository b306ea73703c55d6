//! Desktop shell UI composition and interaction surfaces.

mod menus;
pub mod surfaces;
mod taskbar;
mod window;

use std::time::Duration;

use leptos::*;

use self::{menus::StartMenu, surfaces::SurfaceFrame, taskbar::Taskbar, window::DesktopWindow};

use crate::{
    links::{self, LinkTarget},
    model::{LaunchContext, PointerPosition, WindowId, DEFAULT_TASKBAR_HEIGHT},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell UI: icons, window layer, start menu and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let desktop_apps = runtime.env.with_value(|env| env.apps.desktop_apps());

    let resize_listener = window_event_listener(ev::resize, move |_| {
        let viewport = runtime
            .host
            .with_value(|host| host.services().environment.viewport());
        runtime.dispatch_action(DesktopAction::SetViewport {
            width: viewport.width,
            height: viewport.height,
        });
    });
    on_cleanup(move || resize_listener.remove());

    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if state.with_untracked(|s| s.start_menu_open) {
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if state.with_untracked(|s| s.start_menu_open) {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let link_listener = window_event_listener(ev::click, move |ev| {
        if ev.default_prevented() || is_modified_click(&ev) {
            return;
        }
        let Some(target) = link_target_from_event(&ev) else {
            return;
        };
        let routes = runtime.host.with_value(|host| host.routes());
        if let Some(action) = links::action_for(&target, routes.as_ref()) {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
            runtime.dispatch_action(action);
        }
    });
    on_cleanup(move || link_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.with_untracked(|ui| ui.dragging.is_some()) {
            runtime.dispatch_action(DesktopAction::UpdateDrag {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_| {
        if runtime.interaction.with_untracked(|ui| ui.dragging.is_some()) {
            runtime.dispatch_action(DesktopAction::EndDrag);
        }
    };

    view! {
        <div
            id="storefront-desktop-root"
            class="storefront-desktop"
            tabindex="-1"
            data-host=runtime.host.with_value(|host| host.host_strategy_name())
            data-reduced-motion=move || state.with(|s| s.reduced_motion()).to_string()
            style=move || {
                format!(
                    "--ui-scale:{:.2};--taskbar-height:{}px;",
                    f64::from(state.with(|s| s.settings.ui_scale)) / 100.0,
                    DEFAULT_TASKBAR_HEIGHT
                )
            }
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div class="desktop-icons" role="list">
                {desktop_apps
                    .into_iter()
                    .map(|app| {
                        let app_id = app.app_id.clone();
                        let launch = move || {
                            runtime.dispatch_action(DesktopAction::LaunchApp {
                                app_id: app_id.clone(),
                                context: LaunchContext::default(),
                            });
                        };
                        let launch_on_key = launch.clone();
                        view! {
                            <button
                                type="button"
                                role="listitem"
                                class="desktop-icon"
                                on:dblclick=move |_| launch()
                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        launch_on_key();
                                    }
                                }
                            >
                                <span class="desktop-icon-glyph" aria-hidden="true">{app.icon}</span>
                                <span class="desktop-icon-label">{app.label}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="desktop-window-layer">
                <For
                    each=move || runtime.surfaces.get()
                    key=|surface| surface.window_id.0
                    let:surface
                >
                    <DesktopWindow surface />
                </For>
            </div>

            <StartMenu />
            <Taskbar />
        </div>
    }
}

fn is_modified_click(ev: &web_sys::MouseEvent) -> bool {
    ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key()
}

#[cfg(target_arch = "wasm32")]
fn link_target_from_event(ev: &web_sys::MouseEvent) -> Option<LinkTarget> {
    use wasm_bindgen::JsCast;

    let element = ev
        .target()?
        .dyn_into::<web_sys::Element>()
        .ok()?
        .closest(links::ACTIONABLE_SELECTOR)
        .ok()??;
    let href = if element.tag_name().eq_ignore_ascii_case("a") {
        element.get_attribute("href")
    } else {
        None
    };
    Some(LinkTarget {
        open_url: element.get_attribute("data-open-url"),
        open_app: element.get_attribute("data-openapp"),
        href,
        title_attr: element.get_attribute("data-title"),
        text: element.text_content().unwrap_or_default(),
        no_os: element.has_attribute("data-no-os"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn link_target_from_event(_: &web_sys::MouseEvent) -> Option<LinkTarget> {
    None
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

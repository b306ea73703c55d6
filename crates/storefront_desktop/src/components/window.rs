use super::*;
use crate::{
    components::surfaces::{window_dom_id, SurfaceSlot},
    drag::DragOrigin,
    model::{WindowContent, WindowState},
    registry,
};
use storefront_host::CONTENT_FALLBACK_MESSAGE;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Which part of the chrome a pointer-down landed on.
#[cfg(target_arch = "wasm32")]
fn drag_origin(ev: &web_sys::PointerEvent) -> DragOrigin {
    let in_controls = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(".window-controls").ok().flatten())
        .is_some();
    if in_controls {
        DragOrigin::ControlButton
    } else {
        DragOrigin::TitleBar
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn drag_origin(_: &web_sys::PointerEvent) -> DragOrigin {
    DragOrigin::TitleBar
}

fn window_class(frame: &SurfaceFrame) -> String {
    let mut class = format!("desktop-window {}", frame.visual.presentation.css_class());
    if frame.visual.state == WindowState::Active {
        class.push_str(" is-active");
    }
    if frame.visual.maximized {
        class.push_str(" is-maximized");
    }
    class
}

fn window_style(frame: &SurfaceFrame) -> String {
    let rect = frame.rect;
    let mut style = format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        rect.x, rect.y, rect.w, rect.h, frame.visual.stacking
    );
    if let Some(target) = frame.minimize_target {
        style.push_str(&format!(
            "--minimize-dx:{}px;--minimize-dy:{}px;",
            target.dx, target.dy
        ));
    }
    style
}

#[component]
pub(super) fn DesktopWindow(surface: SurfaceSlot) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_id = surface.window_id;
    let frame = surface.frame;
    let title = frame.with_untracked(|frame| frame.title.clone());

    let content = Signal::derive(move || {
        runtime.state.with(|state| {
            registry::get(state, window_id)
                .map(|window| window.content.clone())
                .unwrap_or(WindowContent::Loading)
        })
    });

    let focus = move |_: web_sys::PointerEvent| {
        if frame.with_untracked(|frame| frame.visual.state != WindowState::Active) {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    };
    let begin_drag = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 || !ev.is_primary() {
            return;
        }
        let origin = drag_origin(&ev);
        if origin.starts_drag() {
            try_set_pointer_capture(&ev);
            ev.prevent_default();
        }
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginDrag {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
            origin,
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
    };
    let swallow_pointer = move |ev: web_sys::PointerEvent| {
        ev.stop_propagation();
    };

    view! {
        <section
            id=window_dom_id(window_id)
            class=move || frame.with(window_class)
            style=move || frame.with(window_style)
            role="dialog"
            aria-label=title.clone()
            on:pointerdown=focus
        >
            <header
                class="window-titlebar"
                on:pointerdown=begin_drag
                on:dblclick=titlebar_double_click
            >
                <span class="window-title">{title.clone()}</span>
                <div class="window-controls">
                    <button
                        type="button"
                        aria-label="Minimize window"
                        on:pointerdown=swallow_pointer
                        on:dblclick=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
                        }
                    >
                        "\u{2013}"
                    </button>
                    <button
                        type="button"
                        aria-label=move || {
                            if frame.with(|frame| frame.visual.maximized) {
                                "Restore window"
                            } else {
                                "Maximize window"
                            }
                        }
                        on:pointerdown=swallow_pointer
                        on:dblclick=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
                        }
                    >
                        "\u{25a1}"
                    </button>
                    <button
                        type="button"
                        aria-label="Close window"
                        on:pointerdown=swallow_pointer
                        on:dblclick=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
                        }
                    >
                        "\u{00d7}"
                    </button>
                </div>
            </header>
            <div class="window-body">
                {move || match content.get() {
                    WindowContent::Loading => {
                        view! { <div class="window-loading" aria-busy="true">"Loading\u{2026}"</div> }
                            .into_view()
                    }
                    WindowContent::Ready(html) => {
                        view! { <div class="window-content" inner_html=html></div> }.into_view()
                    }
                    WindowContent::Failed => {
                        view! { <div class="window-error">{CONTENT_FALLBACK_MESSAGE}</div> }
                            .into_view()
                    }
                }}
            </div>
        </section>
    }
}

//! Signal-backed window surfaces rendered by the window layer.

use leptos::*;

use crate::{
    model::{Presentation, WindowId, WindowRect, WindowState},
    runtime_context::DesktopRuntimeContext,
    surface::{
        MinimizeTarget, SurfaceFactory, SurfaceHost, SurfaceVisual, TaskbarAnchors, WindowSurface,
    },
};

/// Chrome-level facts one window surface renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceFrame {
    pub title: String,
    pub rect: WindowRect,
    pub visual: SurfaceVisual,
    /// Offset toward the taskbar entry for minimize and restore animations.
    pub minimize_target: Option<MinimizeTarget>,
}

/// Mounted surface handle listed by the window layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSlot {
    pub window_id: WindowId,
    pub frame: RwSignal<SurfaceFrame>,
}

pub(crate) fn window_dom_id(window_id: WindowId) -> String {
    format!("storefront-window-{}", window_id.0)
}

pub(crate) fn taskbar_entry_dom_id(window_id: WindowId) -> String {
    format!("storefront-taskbar-entry-{}", window_id.0)
}

/// Reads taskbar entry positions from the rendered taskbar.
pub struct DomTaskbarAnchors;

impl TaskbarAnchors for DomTaskbarAnchors {
    fn entry_rect(&self, window_id: WindowId) -> Option<WindowRect> {
        measure_dom(&taskbar_entry_dom_id(window_id))
    }
}

pub struct SignalSurfaceFactory {
    owner: Owner,
    slots: RwSignal<Vec<SurfaceSlot>>,
}

pub struct SignalSurface {
    window_id: WindowId,
    frame: RwSignal<SurfaceFrame>,
    slots: RwSignal<Vec<SurfaceSlot>>,
}

impl SurfaceFactory for SignalSurfaceFactory {
    type Surface = SignalSurface;

    fn create(&mut self, window_id: WindowId, title: &str) -> SignalSurface {
        let initial = SurfaceFrame {
            title: title.to_string(),
            rect: WindowRect {
                x: 0,
                y: 0,
                w: 0,
                h: 0,
            },
            visual: SurfaceVisual {
                state: WindowState::Inactive,
                presentation: Presentation::Opening,
                maximized: false,
                stacking: 0,
            },
            minimize_target: None,
        };
        // Owned by the provider, not by the sync effect that runs this.
        let frame = with_owner(self.owner, || create_rw_signal(initial));
        self.slots
            .update(|slots| slots.push(SurfaceSlot { window_id, frame }));
        SignalSurface {
            window_id,
            frame,
            slots: self.slots,
        }
    }
}

impl WindowSurface for SignalSurface {
    fn set_geometry(&mut self, rect: WindowRect) {
        self.frame.update(|frame| frame.rect = rect);
    }

    fn set_visual_state(&mut self, visual: SurfaceVisual) {
        self.frame.update(|frame| frame.visual = visual);
    }

    fn set_minimize_target(&mut self, target: MinimizeTarget) {
        self.frame.update(|frame| frame.minimize_target = Some(target));
    }

    fn destroy(&mut self) {
        let window_id = self.window_id;
        self.slots
            .update(|slots| slots.retain(|slot| slot.window_id != window_id));
    }

    fn measure(&self) -> WindowRect {
        measure_dom(&window_dom_id(self.window_id)).unwrap_or_else(|| self.frame.get_untracked().rect)
    }
}

#[cfg(target_arch = "wasm32")]
fn measure_dom(dom_id: &str) -> Option<WindowRect> {
    let element = web_sys::window()?.document()?.get_element_by_id(dom_id)?;
    let bounds = element.get_bounding_client_rect();
    Some(WindowRect {
        x: bounds.left().round() as i32,
        y: bounds.top().round() as i32,
        w: bounds.width().round() as i32,
        h: bounds.height().round() as i32,
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn measure_dom(_: &str) -> Option<WindowRect> {
    None
}

/// Installs the effect that keeps surface slots in step with the desktop state.
pub(crate) fn install(runtime: DesktopRuntimeContext) {
    let host = store_value(
        SurfaceHost::new(SignalSurfaceFactory {
            owner: runtime.owner,
            slots: runtime.surfaces,
        })
        .with_anchors(DomTaskbarAnchors),
    );

    create_effect(move |_| {
        let desktop = runtime.state.get();
        host.update_value(|host| host.sync(&desktop));
    });
}

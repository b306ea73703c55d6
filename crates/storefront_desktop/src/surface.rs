//! Capability interface for the visual chrome owned by each window.
//!
//! The reducer only ever touches plain [`DesktopState`]. A [`SurfaceHost`] diffs that state against
//! the surfaces it has mounted and forwards the differences to a [`SurfaceFactory`]: new records get
//! a surface, changed geometry or visual state is pushed, and removed records have their surface
//! destroyed. Surfaces that start minimizing or restoring are told where their taskbar entry
//! sits so the animation can travel toward it.

use std::collections::BTreeMap;

use crate::model::{DesktopState, Presentation, WindowId, WindowRecord, WindowRect, WindowState};

/// Visual facts a surface renders besides its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceVisual {
    pub state: WindowState,
    pub presentation: Presentation,
    pub maximized: bool,
    pub stacking: u32,
}

impl SurfaceVisual {
    pub fn of(window: &WindowRecord) -> Self {
        Self {
            state: window.state,
            presentation: window.presentation,
            maximized: window.maximized,
            stacking: window.stacking,
        }
    }
}

/// Offset from a surface's centre to its taskbar entry's centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimizeTarget {
    pub dx: i32,
    pub dy: i32,
}

impl MinimizeTarget {
    pub fn between(surface: WindowRect, entry: WindowRect) -> Self {
        let (from_x, from_y) = surface.center();
        let (to_x, to_y) = entry.center();
        Self {
            dx: to_x - from_x,
            dy: to_y - from_y,
        }
    }
}

/// Looks up the on-screen rectangle of a window's taskbar entry.
pub trait TaskbarAnchors {
    fn entry_rect(&self, window_id: WindowId) -> Option<WindowRect>;
}

/// One mounted window surface.
pub trait WindowSurface {
    fn set_geometry(&mut self, rect: WindowRect);

    fn set_visual_state(&mut self, visual: SurfaceVisual);

    /// Where the next minimize or restore animation travels, relative to the surface.
    fn set_minimize_target(&mut self, target: MinimizeTarget);

    /// Tears the surface down. Called once, after the window's close transition completes.
    fn destroy(&mut self);

    /// Current on-screen rectangle of the surface.
    fn measure(&self) -> WindowRect;
}

/// Builds surfaces for newly registered windows.
pub trait SurfaceFactory {
    type Surface: WindowSurface;

    fn create(&mut self, window_id: WindowId, title: &str) -> Self::Surface;
}

struct Mounted<S> {
    surface: S,
    rect: WindowRect,
    visual: SurfaceVisual,
}

/// Keeps one surface per window record in sync with [`DesktopState`].
pub struct SurfaceHost<F: SurfaceFactory> {
    factory: F,
    anchors: Option<Box<dyn TaskbarAnchors>>,
    mounted: BTreeMap<WindowId, Mounted<F::Surface>>,
}

impl<F: SurfaceFactory> SurfaceHost<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            anchors: None,
            mounted: BTreeMap::new(),
        }
    }

    pub fn with_anchors(mut self, anchors: impl TaskbarAnchors + 'static) -> Self {
        self.anchors = Some(Box::new(anchors));
        self
    }

    /// Applies the difference between `state` and the mounted surfaces.
    pub fn sync(&mut self, state: &DesktopState) {
        for window in &state.windows {
            let visual = SurfaceVisual::of(window);
            match self.mounted.get_mut(&window.id) {
                Some(mounted) => {
                    if mounted.rect != window.rect {
                        mounted.surface.set_geometry(window.rect);
                        mounted.rect = window.rect;
                    }
                    if mounted.visual != visual {
                        if enters_taskbar_transition(mounted.visual, visual) {
                            if let Some(target) =
                                minimize_target(self.anchors.as_deref(), &mounted.surface, window)
                            {
                                mounted.surface.set_minimize_target(target);
                            }
                        }
                        mounted.surface.set_visual_state(visual);
                        mounted.visual = visual;
                    }
                }
                None => {
                    let mut surface = self.factory.create(window.id, &window.title);
                    surface.set_geometry(window.rect);
                    surface.set_visual_state(visual);
                    self.mounted.insert(
                        window.id,
                        Mounted {
                            surface,
                            rect: window.rect,
                            visual,
                        },
                    );
                }
            }
        }

        let removed: Vec<WindowId> = self
            .mounted
            .keys()
            .copied()
            .filter(|id| !state.windows.iter().any(|w| w.id == *id))
            .collect();
        for window_id in removed {
            if let Some(mut mounted) = self.mounted.remove(&window_id) {
                mounted.surface.destroy();
            }
        }
    }

    pub fn surface(&self, window_id: WindowId) -> Option<&F::Surface> {
        self.mounted.get(&window_id).map(|mounted| &mounted.surface)
    }

    pub fn measure(&self, window_id: WindowId) -> Option<WindowRect> {
        self.surface(window_id).map(WindowSurface::measure)
    }

    pub fn len(&self) -> usize {
        self.mounted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty()
    }
}

fn enters_taskbar_transition(previous: SurfaceVisual, next: SurfaceVisual) -> bool {
    matches!(
        next.presentation,
        Presentation::Minimizing | Presentation::Restoring
    ) && previous.presentation != next.presentation
}

fn minimize_target<S: WindowSurface>(
    anchors: Option<&dyn TaskbarAnchors>,
    surface: &S,
    window: &WindowRecord,
) -> Option<MinimizeTarget> {
    let entry = anchors?.entry_rect(window.id)?;
    // Hidden surfaces measure as empty.
    let measured = surface.measure();
    let from = if measured.w > 0 && measured.h > 0 {
        measured
    } else {
        window.rect
    };
    Some(MinimizeTarget::between(from, entry))
}

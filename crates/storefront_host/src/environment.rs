//! Display environment queries (viewport size, motion preference).

/// Inner size of the page the shell is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    /// Width in CSS pixels.
    pub width: i32,
    /// Height in CSS pixels.
    pub height: i32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
        }
    }
}

/// Ends a host subscription when called.
pub type Unsubscribe = Box<dyn FnOnce()>;

/// Host service for display facts the window manager lays windows out against.
pub trait DisplayEnvironment {
    /// Returns the current viewport size.
    fn viewport(&self) -> ViewportSize;

    /// Returns whether the host asks for reduced motion.
    fn prefers_reduced_motion(&self) -> bool;

    /// Calls `on_change` with the new preference whenever the host's reduced-motion setting
    /// flips.
    ///
    /// Returns `None` when the host cannot report changes.
    fn watch_reduced_motion(&self, on_change: Box<dyn Fn(bool)>) -> Option<Unsubscribe> {
        let _ = on_change;
        None
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Fixed display environment for headless targets and tests.
pub struct FixedDisplayEnvironment {
    /// Reported viewport.
    pub viewport: ViewportSize,
    /// Reported reduced-motion preference.
    pub reduced_motion: bool,
}

impl DisplayEnvironment for FixedDisplayEnvironment {
    fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

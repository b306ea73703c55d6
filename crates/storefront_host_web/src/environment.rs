//! Viewport and media-query adapter.

use storefront_host::{DisplayEnvironment, Unsubscribe, ViewportSize};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Reads `innerWidth`/`innerHeight` and the `prefers-reduced-motion` media query.
pub struct WebDisplayEnvironment;

impl DisplayEnvironment for WebDisplayEnvironment {
    fn viewport(&self) -> ViewportSize {
        bridge::viewport()
    }

    fn prefers_reduced_motion(&self) -> bool {
        bridge::prefers_reduced_motion()
    }

    fn watch_reduced_motion(&self, on_change: Box<dyn Fn(bool)>) -> Option<Unsubscribe> {
        bridge::watch_reduced_motion(on_change)
    }
}

//! Host-service bundle injected into the desktop runtime.

use std::rc::Rc;

use crate::{
    ContentLoader, DisplayEnvironment, FixedDisplayEnvironment, NavigationService,
    NoopContentLoader, NoopNavigationService, NoopPrefsStore, PrefsStore, ProtectedRoutePolicy,
    RouteClassifier,
};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed services.
    Browser,
    /// Inert services for native builds and tests.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host service bundle.
///
/// All environment-specific selection happens before this bundle reaches the desktop runtime,
/// which keeps the window manager free of browser types.
#[derive(Clone)]
pub struct HostServices {
    /// Settings and other small preference values.
    pub prefs: Rc<dyn PrefsStore>,
    /// Window content fetcher.
    pub content: Rc<dyn ContentLoader>,
    /// Protected-route classifier consulted before opening addresses.
    pub routes: Rc<dyn RouteClassifier>,
    /// Full-page navigation and address rewriting.
    pub navigation: Rc<dyn NavigationService>,
    /// Viewport and motion queries.
    pub environment: Rc<dyn DisplayEnvironment>,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a headless bundle for `origin` with inert services.
    pub fn headless(origin: &str) -> Self {
        Self {
            prefs: Rc::new(NoopPrefsStore),
            content: Rc::new(NoopContentLoader),
            routes: Rc::new(ProtectedRoutePolicy::new(origin)),
            navigation: Rc::new(NoopNavigationService),
            environment: Rc::new(FixedDisplayEnvironment::default()),
            host_strategy: HostStrategy::Headless,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}

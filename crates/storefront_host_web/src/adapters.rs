use std::rc::Rc;

use storefront_host::{HostServices, HostStrategy, ProtectedRoutePolicy};

use crate::{
    bridge, WebContentLoader, WebDisplayEnvironment, WebNavigationService, WebPrefsStore,
};

/// Origin assumed when the page origin cannot be read (native builds).
const FALLBACK_ORIGIN: &str = "http://localhost";

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Headless
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Builds the host service bundle for the current build target.
///
/// Browser builds get the `web_sys` adapters with a route classifier bound to the page origin;
/// native builds get [`HostServices::headless`].
pub fn build_host_services() -> HostServices {
    let origin = bridge::origin().unwrap_or_else(|| FALLBACK_ORIGIN.to_string());
    match selected_host_strategy() {
        HostStrategy::Browser => HostServices {
            prefs: Rc::new(WebPrefsStore),
            content: Rc::new(WebContentLoader),
            routes: Rc::new(ProtectedRoutePolicy::new(&origin)),
            navigation: Rc::new(WebNavigationService),
            environment: Rc::new(WebDisplayEnvironment),
            host_strategy: HostStrategy::Browser,
        },
        HostStrategy::Headless => HostServices::headless(&origin),
    }
}

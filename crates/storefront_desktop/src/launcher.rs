//! App launches and generic address opens.

use storefront_host::{RouteClassifier, RouteDisposition};

use crate::{
    apps::AppRegistry,
    lifecycle,
    model::{AppId, DesktopState, LaunchContext, OpenWindowRequest, WindowId, DEFAULT_WINDOW_TITLE},
    reducer::RuntimeEffect,
    registry, window_manager,
};

/// Result of a launch: the window shown (if any) plus the side effects to run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LaunchOutcome {
    pub window_id: Option<WindowId>,
    pub effects: Vec<RuntimeEffect>,
}

/// Launches `app_id`, reusing the existing window of single-instance apps.
///
/// Unregistered ids open a generic window for `context.url` (default `/`) titled
/// `context.title` (default: the app id).
pub fn launch_app(
    state: &mut DesktopState,
    apps: &AppRegistry,
    routes: &dyn RouteClassifier,
    app_id: &AppId,
    context: &LaunchContext,
) -> LaunchOutcome {
    state.start_menu_open = false;
    let mut outcome = LaunchOutcome::default();

    let Some(app) = apps.get(app_id) else {
        let address = context.url.clone().unwrap_or_else(|| "/".to_string());
        let title = context
            .title
            .clone()
            .unwrap_or_else(|| app_id.to_string());
        return open_url(state, routes, &address, Some(&title));
    };

    if app.single_instance {
        if let Some(existing) = registry::find_by_app_id(state, app_id) {
            lifecycle::restore(state, existing, &mut outcome.effects);
            window_manager::focus(state, existing);
            outcome.window_id = Some(existing);
            return outcome;
        }
    }

    let request = (app.launch)(context).with_app_id(app_id.clone());
    outcome.window_id = Some(lifecycle::open_window(state, request, &mut outcome.effects));
    outcome
}

/// Opens an address in a window, or navigates the whole page when it is protected.
pub fn open_url(
    state: &mut DesktopState,
    routes: &dyn RouteClassifier,
    address: &str,
    title: Option<&str>,
) -> LaunchOutcome {
    state.start_menu_open = false;
    let mut outcome = LaunchOutcome::default();
    match routes.classify(address) {
        RouteDisposition::FullPage(target) => {
            outcome.effects.push(RuntimeEffect::NavigateFullPage(target));
        }
        RouteDisposition::Window(relative) => {
            let request =
                OpenWindowRequest::url(title.unwrap_or(DEFAULT_WINDOW_TITLE), relative);
            outcome.window_id = Some(lifecycle::open_window(state, request, &mut outcome.effects));
        }
    }
    outcome
}

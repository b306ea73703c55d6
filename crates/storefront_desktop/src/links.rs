//! Click interception for links and open-buttons inside the shell.

use storefront_host::{RouteClassifier, RouteDisposition};

use crate::{
    model::{AppId, LaunchContext},
    reducer::DesktopAction,
};

/// Attributes read from the closest actionable element of a click.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkTarget {
    pub open_url: Option<String>,
    pub open_app: Option<String>,
    pub href: Option<String>,
    pub title_attr: Option<String>,
    pub text: String,
    /// `data-no-os`: let the browser handle the link.
    pub no_os: bool,
}

/// CSS selector matching the elements [`action_for`] understands.
pub const ACTIONABLE_SELECTOR: &str = "[data-open-url],[data-openapp],a[href]";

/// Maps a clicked element to a shell action. `None` leaves the click to the browser.
pub fn action_for(target: &LinkTarget, routes: &dyn RouteClassifier) -> Option<DesktopAction> {
    if let Some(url) = target.open_url.as_deref().filter(|u| !u.is_empty()) {
        return Some(DesktopAction::OpenUrl {
            address: url.to_string(),
            title: Some(
                target
                    .title_attr
                    .clone()
                    .unwrap_or_else(|| "Window".to_string()),
            ),
        });
    }
    if let Some(app) = target.open_app.as_deref().filter(|a| !a.is_empty()) {
        return Some(DesktopAction::LaunchApp {
            app_id: AppId::new(app),
            context: LaunchContext::default(),
        });
    }

    let href = target.href.as_deref()?.trim();
    if target.no_os
        || href.is_empty()
        || href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
    {
        return None;
    }
    // Protected and cross-origin links keep their native navigation.
    let RouteDisposition::Window(relative) = routes.classify(href) else {
        return None;
    };
    let text = target.text.trim();
    Some(DesktopAction::OpenUrl {
        address: relative,
        title: Some(if text.is_empty() { "Link" } else { text }.to_string()),
    })
}

//! `window.location`/`history` navigation adapter.

use storefront_host::{LocationSnapshot, NavigationService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser navigation backed by `window.location` and `history.replaceState`.
pub struct WebNavigationService;

impl NavigationService for WebNavigationService {
    fn current_location(&self) -> LocationSnapshot {
        bridge::location_snapshot()
    }

    fn navigate_full_page(&self, address: &str) -> Result<(), String> {
        bridge::assign_location(address)
    }

    fn reset_address(&self) -> Result<(), String> {
        bridge::replace_address_with_root()
    }
}

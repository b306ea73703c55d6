//! Page-level navigation and address-bar contracts.

use std::{cell::RefCell, rc::Rc};

/// The browser location observed at boot, already split and percent-decoded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocationSnapshot {
    /// Path component, always starting with `/`.
    pub path: String,
    /// Decoded query parameters in document order.
    pub query: Vec<(String, String)>,
    /// Raw query string including the leading `?`, or empty.
    pub search: String,
    /// Raw fragment including the leading `#`, or empty.
    pub hash: String,
    /// Document title at boot.
    pub document_title: String,
}

impl LocationSnapshot {
    /// Builds a root location with no parameters.
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
            ..Self::default()
        }
    }

    /// Returns the first value of query parameter `name`.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Host service for leaving the shell and rewriting the visible address.
pub trait NavigationService {
    /// Returns the current location.
    fn current_location(&self) -> LocationSnapshot;

    /// Navigates the whole page to `address`, abandoning the shell.
    ///
    /// # Errors
    ///
    /// Returns an error when the host refuses the navigation.
    fn navigate_full_page(&self, address: &str) -> Result<(), String>;

    /// Replaces the visible address with the root path without reloading.
    ///
    /// # Errors
    ///
    /// Returns an error when the host history API is unavailable.
    fn reset_address(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Navigation service for headless targets: always at root, navigation requests are ignored.
pub struct NoopNavigationService;

impl NavigationService for NoopNavigationService {
    fn current_location(&self) -> LocationSnapshot {
        LocationSnapshot::root()
    }

    fn navigate_full_page(&self, _address: &str) -> Result<(), String> {
        Ok(())
    }

    fn reset_address(&self) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// Navigation double that starts at a fixed location and records every request.
pub struct RecordingNavigation {
    location: Rc<RefCell<LocationSnapshot>>,
    navigations: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigation {
    /// Starts at `location`.
    pub fn at(location: LocationSnapshot) -> Self {
        Self {
            location: Rc::new(RefCell::new(location)),
            navigations: Rc::default(),
        }
    }

    /// Full-page navigations requested so far.
    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }
}

impl NavigationService for RecordingNavigation {
    fn current_location(&self) -> LocationSnapshot {
        self.location.borrow().clone()
    }

    fn navigate_full_page(&self, address: &str) -> Result<(), String> {
        self.navigations.borrow_mut().push(address.to_string());
        Ok(())
    }

    fn reset_address(&self) -> Result<(), String> {
        let mut location = self.location.borrow_mut();
        let title = std::mem::take(&mut location.document_title);
        *location = LocationSnapshot {
            document_title: title,
            ..LocationSnapshot::root()
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn recording_navigation_resets_to_root_and_keeps_title() {
        let nav = RecordingNavigation::at(LocationSnapshot {
            path: "/products/mug".to_string(),
            query: vec![("variant".to_string(), "2".to_string())],
            search: "?variant=2".to_string(),
            hash: String::new(),
            document_title: "Mug".to_string(),
        });

        assert_eq!(nav.current_location().query_param("variant"), Some("2"));
        nav.reset_address().expect("reset");
        let location = nav.current_location();
        assert_eq!(location.path, "/");
        assert!(location.query.is_empty());
        assert_eq!(location.document_title, "Mug");

        nav.navigate_full_page("/checkout").expect("navigate");
        assert_eq!(nav.navigations(), vec!["/checkout".to_string()]);
    }
}

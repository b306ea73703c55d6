//! Boot-time deep links read from the page address.
//!
//! `?open=<address>` opens an address, `?osapp=<id>` launches an app (`open` wins when both are
//! present), and landing directly on a storefront page opens that page in a window. Each case
//! resets the visible address to `/` so a reload lands on the bare desktop.

use storefront_host::{LocationSnapshot, RouteClassifier};

use crate::model::{AppId, DEFAULT_WINDOW_TITLE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeepLink {
    /// `?open=` address, opened like any generic URL.
    OpenAddress(String),
    /// `?osapp=` app id.
    LaunchApp(AppId),
    /// The non-root page the visitor landed on.
    OpenCurrentPage { address: String, title: String },
}

/// Resolves the deep link encoded in the boot location, if any.
pub fn resolve(location: &LocationSnapshot, routes: &dyn RouteClassifier) -> Option<DeepLink> {
    if let Some(open) = location.query_param("open").filter(|v| !v.is_empty()) {
        return Some(DeepLink::OpenAddress(open.to_string()));
    }
    if let Some(app) = location.query_param("osapp").filter(|v| !v.is_empty()) {
        return Some(DeepLink::LaunchApp(AppId::new(app)));
    }
    if location.path == "/" || location.path == "/index" || location.path.is_empty() {
        return None;
    }

    let address = format!("{}{}{}", location.path, location.search, location.hash);
    if routes.is_protected(&address) {
        return None;
    }
    let title = location.document_title.trim();
    Some(DeepLink::OpenCurrentPage {
        title: if title.is_empty() {
            DEFAULT_WINDOW_TITLE.to_string()
        } else {
            title.to_string()
        },
        address,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use storefront_host::ProtectedRoutePolicy;

    use super::*;

    fn routes() -> ProtectedRoutePolicy {
        ProtectedRoutePolicy::new("https://shop.example.com")
    }

    fn at(path: &str, query: &[(&str, &str)]) -> LocationSnapshot {
        let search = if query.is_empty() {
            String::new()
        } else {
            let pairs: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
            format!("?{}", pairs.join("&"))
        };
        LocationSnapshot {
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            search,
            hash: String::new(),
            document_title: String::new(),
        }
    }

    #[test]
    fn open_parameter_wins_over_osapp() {
        let location = at("/", &[("osapp", "cart"), ("open", "/products/mug")]);
        assert_eq!(
            resolve(&location, &routes()),
            Some(DeepLink::OpenAddress("/products/mug".to_string()))
        );
    }

    #[test]
    fn osapp_launches_the_named_app() {
        let location = at("/", &[("osapp", "cart")]);
        assert_eq!(
            resolve(&location, &routes()),
            Some(DeepLink::LaunchApp(AppId::from("cart")))
        );
    }

    #[test]
    fn root_and_index_have_no_deep_link() {
        assert_eq!(resolve(&at("/", &[]), &routes()), None);
        assert_eq!(resolve(&at("/index", &[]), &routes()), None);
        assert_eq!(resolve(&at("/", &[("open", "")]), &routes()), None);
    }

    #[test]
    fn landing_pages_open_with_query_and_title() {
        let mut location = at("/products/mug", &[("variant", "2")]);
        location.hash = "#reviews".to_string();
        location.document_title = "Enamel Mug".to_string();

        assert_eq!(
            resolve(&location, &routes()),
            Some(DeepLink::OpenCurrentPage {
                address: "/products/mug?variant=2#reviews".to_string(),
                title: "Enamel Mug".to_string(),
            })
        );
    }

    #[test]
    fn protected_landing_pages_are_left_alone() {
        assert_eq!(resolve(&at("/account/login", &[]), &routes()), None);
        assert_eq!(resolve(&at("/cart", &[]), &routes()), None);
    }
}

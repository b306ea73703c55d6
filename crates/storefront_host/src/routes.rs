//! Protected-route classification for addresses the shell is asked to open.
//!
//! Storefront account, order, checkout and cart pages refuse to be embedded, and cross-origin
//! pages cannot be fetched into a window at all. Both must leave the window system and navigate
//! the whole page.

/// Same-origin path prefixes that always navigate the full page.
pub const PROTECTED_PATH_PREFIXES: [&str; 5] =
    ["/account", "/orders", "/checkout", "/cart/checkout", "/cart"];

/// Where an address must be opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDisposition {
    /// Same-origin and not protected: open inside a shell window at this origin-relative address.
    Window(String),
    /// Cross-origin or protected: navigate the whole page to this address.
    FullPage(String),
}

/// Classifies candidate addresses before the shell creates a window for them.
pub trait RouteClassifier {
    /// Returns where `address` must be opened.
    fn classify(&self, address: &str) -> RouteDisposition;

    /// Returns whether `address` must bypass the window system.
    fn is_protected(&self, address: &str) -> bool {
        matches!(self.classify(address), RouteDisposition::FullPage(_))
    }
}

/// Default classifier: cross-origin addresses and [`PROTECTED_PATH_PREFIXES`] are protected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedRoutePolicy {
    host: String,
    prefixes: Vec<String>,
}

impl ProtectedRoutePolicy {
    /// Builds the policy for a storefront served from `origin` (for example
    /// `https://shop.example.com`). A bare host is accepted too.
    pub fn new(origin: &str) -> Self {
        let host = split_absolute(origin)
            .map(|(authority, _)| authority)
            .unwrap_or(origin)
            .trim_end_matches('/')
            .to_ascii_lowercase();
        Self {
            host,
            prefixes: PROTECTED_PATH_PREFIXES
                .iter()
                .map(|prefix| prefix.to_string())
                .collect(),
        }
    }

    /// Adds another protected same-origin path prefix.
    pub fn with_protected_prefix(mut self, prefix: &str) -> Self {
        self.prefixes.push(prefix.to_string());
        self
    }

    /// Returns whether `address` resolves to this storefront's origin.
    pub fn is_internal(&self, address: &str) -> bool {
        self.origin_relative(address.trim()).is_some()
    }

    fn origin_relative(&self, address: &str) -> Option<String> {
        if let Some(rest) = address.strip_prefix("//") {
            let (authority, tail) = split_authority(rest);
            return (authority.eq_ignore_ascii_case(&self.host)).then(|| rooted(tail));
        }
        if let Some((authority, tail)) = split_absolute(address) {
            return (authority.eq_ignore_ascii_case(&self.host)).then(|| rooted(tail));
        }
        if has_scheme(address) {
            // mailto:, tel:, javascript: and friends have no storefront origin.
            return None;
        }
        Some(rooted(address))
    }

    fn is_protected_path(&self, relative: &str) -> bool {
        let path = relative
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        self.prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }
}

impl RouteClassifier for ProtectedRoutePolicy {
    fn classify(&self, address: &str) -> RouteDisposition {
        let trimmed = address.trim();
        match self.origin_relative(trimmed) {
            Some(relative) if !self.is_protected_path(&relative) => {
                RouteDisposition::Window(relative)
            }
            _ => RouteDisposition::FullPage(trimmed.to_string()),
        }
    }
}

fn split_absolute(address: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = address.split_once("://")?;
    if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c))
    {
        return None;
    }
    Some(split_authority(rest))
}

fn split_authority(rest: &str) -> (&str, &str) {
    match rest.find(['/', '?', '#']) {
        Some(idx) => (&rest[..idx], &rest[idx..]),
        None => (rest, ""),
    }
}

fn has_scheme(address: &str) -> bool {
    match address.split_once(':') {
        Some((scheme, _)) => {
            !scheme.is_empty()
                && !scheme.contains(['/', '?', '#'])
                && scheme.chars().all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c))
        }
        None => false,
    }
}

fn rooted(tail: &str) -> String {
    if tail.is_empty() {
        "/".to_string()
    } else if tail.starts_with('/') {
        tail.to_string()
    } else {
        format!("/{tail}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn policy() -> ProtectedRoutePolicy {
        ProtectedRoutePolicy::new("https://shop.example.com")
    }

    #[test]
    fn same_origin_catalog_pages_open_in_windows() {
        let policy = policy();
        let cases = [
            ("/products/mug", "/products/mug"),
            ("collections/all?page=2", "/collections/all?page=2"),
            ("https://shop.example.com/search?q=tee", "/search?q=tee"),
            ("//SHOP.example.com/pages/contact", "/pages/contact"),
            ("https://shop.example.com", "/"),
        ];
        for (input, expected) in cases {
            assert_eq!(
                policy.classify(input),
                RouteDisposition::Window(expected.to_string()),
                "input={input:?}"
            );
        }
    }

    #[test]
    fn protected_paths_and_foreign_hosts_navigate_full_page() {
        let policy = policy();
        for input in [
            "/account",
            "/account/login",
            "/orders/1001",
            "/checkout",
            "/cart",
            "/cart/checkout?step=2",
            "/CART",
            "/checkouts/cn/abc123",
            "/accounts/recover",
            "/orders-status",
            "https://shop.app/track",
            "//accounts.example.net/login",
            "mailto:hello@example.com",
        ] {
            assert!(policy.is_protected(input), "input={input:?}");
        }
    }

    #[test]
    fn extra_prefixes_extend_the_fixed_list() {
        let policy = policy().with_protected_prefix("/apps/downloads");
        assert!(policy.is_protected("/apps/downloads/42"));
        assert!(!policy.is_protected("/apps/reviews"));
    }

    #[test]
    fn internal_check_ignores_path_protection() {
        let policy = policy();
        assert!(policy.is_internal("/cart"));
        assert!(!policy.is_internal("https://elsewhere.example.org/"));
        assert!(!policy.is_internal("tel:+15550100"));
    }
}

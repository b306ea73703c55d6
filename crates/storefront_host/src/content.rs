//! Window content loading contracts.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use thiserror::Error;

/// Object-safe boxed future used by [`ContentLoader`].
pub type ContentLoaderFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Markup shown in a window body when its content could not be loaded.
pub const CONTENT_FALLBACK_MESSAGE: &str = "Couldn\u{2019}t load content.";

/// Failures while fetching a window content fragment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentLoadError {
    /// No fetch transport exists on this host.
    #[error("content loading unavailable on this host")]
    Unavailable,
    /// The request could not be sent or the connection failed.
    #[error("content request failed: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("content request returned HTTP {0}")]
    Status(u16),
    /// The response body could not be read as text.
    #[error("content body unreadable: {0}")]
    Body(String),
}

/// Host service that fetches the HTML fragment rendered inside a content window.
pub trait ContentLoader {
    /// Fetches the fragment for an origin-relative address.
    fn load_fragment<'a>(
        &'a self,
        address: &'a str,
    ) -> ContentLoaderFuture<'a, Result<String, ContentLoadError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Loader for hosts without a fetch transport; every load fails with
/// [`ContentLoadError::Unavailable`].
pub struct NoopContentLoader;

impl ContentLoader for NoopContentLoader {
    fn load_fragment<'a>(
        &'a self,
        _address: &'a str,
    ) -> ContentLoaderFuture<'a, Result<String, ContentLoadError>> {
        Box::pin(async { Err(ContentLoadError::Unavailable) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory loader serving fixed fragments by exact address; unknown addresses answer 404.
pub struct MemoryContentLoader {
    pages: Rc<RefCell<HashMap<String, String>>>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl MemoryContentLoader {
    /// Registers `html` as the fragment served for `address`.
    pub fn insert(&self, address: &str, html: &str) {
        self.pages
            .borrow_mut()
            .insert(address.to_string(), html.to_string());
    }

    /// Returns every address requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl ContentLoader for MemoryContentLoader {
    fn load_fragment<'a>(
        &'a self,
        address: &'a str,
    ) -> ContentLoaderFuture<'a, Result<String, ContentLoadError>> {
        Box::pin(async move {
            self.requests.borrow_mut().push(address.to_string());
            self.pages
                .borrow()
                .get(address)
                .cloned()
                .ok_or(ContentLoadError::Status(404))
        })
    }
}

/// Appends `view=window` to an origin-relative address unless a `view` parameter is present.
///
/// Storefront templates use the parameter to render a chrome-less fragment.
pub fn window_view_url(address: &str) -> String {
    let (without_fragment, fragment) = match address.split_once('#') {
        Some((head, tail)) => (head, Some(tail)),
        None => (address, None),
    };
    let (path, query) = match without_fragment.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (without_fragment, None),
    };

    let has_view = query
        .map(|q| {
            q.split('&')
                .any(|pair| pair.split('=').next() == Some("view"))
        })
        .unwrap_or(false);

    let mut out = String::from(path);
    match query {
        Some(q) if !q.is_empty() => {
            out.push('?');
            out.push_str(q);
            if !has_view {
                out.push_str("&view=window");
            }
        }
        _ => out.push_str("?view=window"),
    }
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

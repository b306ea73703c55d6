//! `fetch`-backed window content loader.

use storefront_host::{ContentLoadError, ContentLoader, ContentLoaderFuture};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Loads same-origin fragments with `fetch` (credentials included, non-2xx treated as failure).
pub struct WebContentLoader;

impl ContentLoader for WebContentLoader {
    fn load_fragment<'a>(
        &'a self,
        address: &'a str,
    ) -> ContentLoaderFuture<'a, Result<String, ContentLoadError>> {
        Box::pin(async move { bridge::fetch_text(address).await })
    }
}

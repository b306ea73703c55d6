//! Browser (`wasm32`) implementations of [`storefront_host`] service contracts.
//!
//! Every adapter compiles on native targets too; there the bridge answers with inert values so
//! the desktop runtime and its tests build without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the service bundle factory.
pub mod adapters;
mod bridge;
pub mod content;
pub mod environment;
pub mod navigation;
pub mod storage;

pub use adapters::{build_host_services, host_strategy_name, selected_host_strategy};
pub use content::WebContentLoader;
pub use environment::WebDisplayEnvironment;
pub use navigation::WebNavigationService;
pub use storage::local_prefs::WebPrefsStore;

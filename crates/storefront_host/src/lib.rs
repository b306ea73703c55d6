//! Typed host-service contracts shared by the storefront desktop runtime and its browser adapters.
//!
//! The desktop engine never talks to the browser directly. Content fetching, full-page
//! navigation, protected-route classification, display queries and preference storage all cross
//! this boundary as `Rc<dyn Trait>` services bundled in [`HostServices`]. Concrete browser wiring
//! lives in `storefront_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod content;
pub mod environment;
pub mod host;
pub mod navigation;
pub mod routes;
pub mod storage;

pub use content::{
    window_view_url, ContentLoadError, ContentLoader, ContentLoaderFuture, MemoryContentLoader,
    NoopContentLoader, CONTENT_FALLBACK_MESSAGE,
};
pub use environment::{DisplayEnvironment, FixedDisplayEnvironment, Unsubscribe, ViewportSize};
pub use host::{HostServices, HostStrategy};
pub use navigation::{
    LocationSnapshot, NavigationService, NoopNavigationService, RecordingNavigation,
};
pub use routes::{
    ProtectedRoutePolicy, RouteClassifier, RouteDisposition, PROTECTED_PATH_PREFIXES,
};
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsError, PrefsStore,
    PrefsStoreFuture,
};
pub use storage::settings::{
    load_settings_with, save_settings_with, ReduceMotion, ShellSettings, SETTINGS_KEY,
    UI_SCALE_DEFAULT, UI_SCALE_MAX, UI_SCALE_MIN,
};

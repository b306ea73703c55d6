//! Storefront desktop shell: a window manager for browsing a storefront inside draggable,
//! stackable windows with a taskbar.
//!
//! The engine modules (`registry`, `window_manager`, `lifecycle`, `launcher`, `reducer`) are pure
//! functions over [`DesktopState`]. Side effects leave the reducer as [`RuntimeEffect`] values and
//! are executed by the Leptos runtime installed by [`DesktopProvider`].

pub mod apps;
pub mod cleanup;
pub mod components;
pub mod deep_link;
pub mod drag;
mod effect_executor;
pub mod host;
pub mod launcher;
pub mod lifecycle;
pub mod links;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod registry;
mod runtime_context;
pub mod surface;
pub mod taskbar;
pub mod transitions;
pub mod window_manager;

pub use apps::{AppDefinition, AppRegistry};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, DesktopEnv, RuntimeEffect};

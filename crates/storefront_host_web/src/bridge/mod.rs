//! Browser interop for the web adapters, with an inert fallback for native targets.
//!
//! Adapters call the functions re-exported here and never touch `web_sys` directly, so the
//! `cfg(target_arch)` split lives in exactly one place.

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub(crate) use non_wasm::*;
#[cfg(target_arch = "wasm32")]
pub(crate) use wasm::*;

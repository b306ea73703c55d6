//! Binary entrypoint for the browser-hosted storefront desktop.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    storefront_site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `storefront_site_app` for wasm32 with the `csr` feature (for example with `trunk serve`)."
    );
}

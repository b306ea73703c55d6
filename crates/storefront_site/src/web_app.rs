use leptos::*;
use leptos_meta::*;
use storefront_desktop::{DesktopProvider, DesktopShell};
use storefront_host_web::build_host_services;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Storefront OS" />
        <Meta name="description" content="Browse the storefront in a desktop-style window shell." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let host_services = build_host_services();
    logging::log!("storefront desktop host: {}", host_services.host_strategy.as_str());

    view! {
        <DesktopProvider host_services>
            <DesktopShell />
        </DesktopProvider>
    }
}

use super::*;
use crate::apps::{AppDefinition, StartMenuNode};
use storefront_host::{ReduceMotion, UI_SCALE_MAX, UI_SCALE_MIN};

const UI_SCALE_STEP: u16 = 5;

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let entries = runtime.env.with_value(|env| env.apps.start_menu());

    view! {
        <Show when=move || state.with(|s| s.start_menu_open) fallback=|| ()>
            <nav
                id="storefront-start-menu"
                class="start-menu"
                aria-label="Start menu"
                on:mousedown=move |ev| ev.stop_propagation()
            >
                <ul class="start-menu-apps" role="menu">
                    {menu_entries(entries.clone())}
                </ul>
                <ShellSettingsPanel />
            </nav>
        </Show>
    }
}

fn menu_entries(entries: Vec<StartMenuNode>) -> View {
    entries
        .into_iter()
        .map(|entry| match entry {
            StartMenuNode::App(app) => view! { <StartMenuApp app /> }.into_view(),
            StartMenuNode::Group { label, children } => {
                view! { <StartMenuFlyout label entries=children /> }.into_view()
            }
        })
        .collect_view()
}

#[component]
fn StartMenuApp(app: AppDefinition) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let app_id = app.app_id.clone();

    view! {
        <li role="none">
            <button
                type="button"
                role="menuitem"
                class="start-menu-item"
                on:click=move |_| {
                    runtime.dispatch_action(DesktopAction::LaunchApp {
                        app_id: app_id.clone(),
                        context: LaunchContext::default(),
                    });
                }
            >
                <span class="start-menu-icon" aria-hidden="true">
                    {app.icon}
                </span>
                <span>{app.label}</span>
            </button>
        </li>
    }
}

/// Group row whose nested entries open on hover or focus. Closing a flyout unmounts its
/// descendants, so nested flyouts reopen closed.
#[component]
fn StartMenuFlyout(label: String, entries: Vec<StartMenuNode>) -> impl IntoView {
    let open = create_rw_signal(false);

    view! {
        <li
            role="none"
            class="start-menu-item start-menu-item--has-flyout"
            on:mouseenter=move |_| open.set(true)
            on:mouseleave=move |_| open.set(false)
        >
            <button
                type="button"
                role="menuitem"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:focus=move |_| open.set(true)
                on:click=move |_| open.update(|open| *open = !*open)
                on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                    "ArrowRight" => {
                        ev.prevent_default();
                        open.set(true);
                    }
                    "ArrowLeft" => {
                        ev.prevent_default();
                        open.set(false);
                    }
                    _ => {}
                }
            >
                <span>{label.clone()}</span>
                <span class="start-menu-chevron" aria-hidden="true">"\u{25b8}"</span>
            </button>
            <Show when=move || open.get() fallback=|| ()>
                <ul class="start-menu-flyout" role="menu" aria-label=label.clone()>
                    {menu_entries(entries.clone())}
                </ul>
            </Show>
        </li>
    }
    .into_view()
}

#[component]
fn ShellSettingsPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let settings = create_memo(move |_| state.with(|s| s.settings));
    let status = create_memo(move |_| state.with(|s| s.settings_status.clone()));

    let on_scale = move |ev: web_sys::Event| {
        if let Ok(scale) = event_target_value(&ev).parse::<u16>() {
            runtime.dispatch_action(DesktopAction::SetUiScale { scale });
        }
    };
    let on_motion = move |ev: web_sys::Event| {
        if let Some(mode) = ReduceMotion::from_token(&event_target_value(&ev)) {
            runtime.dispatch_action(DesktopAction::SetReduceMotion { mode });
        }
    };

    view! {
        <section class="start-menu-settings" aria-label="Display settings">
            <label class="settings-row">
                <span>"UI scale"</span>
                <input
                    type="range"
                    min=UI_SCALE_MIN
                    max=UI_SCALE_MAX
                    step=UI_SCALE_STEP
                    prop:value=move || settings.get().ui_scale.to_string()
                    on:change=on_scale
                />
                <output>{move || format!("{}%", settings.get().ui_scale)}</output>
            </label>
            <label class="settings-row">
                <span>"Reduce motion"</span>
                <select on:change=on_motion prop:value=move || settings.get().reduce_motion.as_str()>
                    {[ReduceMotion::System, ReduceMotion::On, ReduceMotion::Off]
                        .into_iter()
                        .map(|mode| {
                            view! {
                                <option
                                    value=mode.as_str()
                                    selected=move || settings.get().reduce_motion == mode
                                >
                                    {reduce_motion_label(mode)}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <Show when=move || status.get().is_some() fallback=|| ()>
                <p class="settings-status" role="status">
                    {move || status.get().unwrap_or_default()}
                </p>
            </Show>
        </section>
    }
}

fn reduce_motion_label(mode: ReduceMotion) -> &'static str {
    match mode {
        ReduceMotion::System => "Match system",
        ReduceMotion::On => "On",
        ReduceMotion::Off => "Off",
    }
}

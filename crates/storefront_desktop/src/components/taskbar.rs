use super::*;
use crate::{
    components::surfaces::taskbar_entry_dom_id,
    taskbar::{self, is_activation_key, TaskbarItem},
};

const CLOCK_REFRESH: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ClockSnapshot {
    hour: u32,
    minute: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }

    /// `HH:MM`, 24-hour.
    pub(super) fn label(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let items = create_memo(move |_| state.with(taskbar::items));
    let clock_now = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) =
        set_interval_with_handle(move || clock_now.set(ClockSnapshot::now()), CLOCK_REFRESH)
    {
        on_cleanup(move || interval.clear());
    }

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Taskbar"
            style=format!("height:{}px;", DEFAULT_TASKBAR_HEIGHT)
        >
            <button
                type="button"
                class="taskbar-start"
                aria-haspopup="menu"
                aria-controls="storefront-start-menu"
                aria-expanded=move || state.with(|s| s.start_menu_open).to_string()
                on:mousedown=move |ev| ev.stop_propagation()
                on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleStartMenu)
            >
                "Start"
            </button>
            <div class="taskbar-windows" role="tablist" aria-label="Open windows">
                <For each=move || items.get() key=|item| item.window_id.0 let:item>
                    <TaskbarButton window_id=item.window_id items />
                </For>
            </div>
            <div class="taskbar-clock" aria-live="off">
                {move || clock_now.get().label()}
            </div>
        </footer>
    }
}

#[component]
fn TaskbarButton(window_id: WindowId, items: Memo<Vec<TaskbarItem>>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let item = Signal::derive(move || {
        items.with(|items| items.iter().find(|item| item.window_id == window_id).cloned())
    });
    let selected = move || item.with(|item| item.as_ref().map(|i| i.selected).unwrap_or(false));
    let minimized = move || item.with(|item| item.as_ref().map(|i| i.minimized).unwrap_or(false));
    let activate = move || runtime.dispatch_action(DesktopAction::ActivateTaskbarEntry { window_id });

    view! {
        <button
            type="button"
            role="tab"
            id=taskbar_entry_dom_id(window_id)
            class="taskbar-entry"
            class:is-selected=selected
            class:is-minimized=minimized
            aria-selected=move || selected().to_string()
            on:click=move |_| activate()
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    activate();
                }
            }
        >
            {move || item.with(|item| item.as_ref().map(|i| i.title.clone()).unwrap_or_default())}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clock_label_is_zero_padded_24_hour() {
        assert_eq!(ClockSnapshot { hour: 7, minute: 5 }.label(), "07:05");
        assert_eq!(ClockSnapshot { hour: 23, minute: 59 }.label(), "23:59");
    }
}

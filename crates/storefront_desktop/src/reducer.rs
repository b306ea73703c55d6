//! Reducer actions, side-effect intents, and transition logic for the desktop shell.

use std::rc::Rc;

use storefront_host::{
    ContentLoadError, ProtectedRoutePolicy, ReduceMotion, RouteClassifier, ShellSettings,
    UI_SCALE_MAX, UI_SCALE_MIN,
};

use crate::{
    apps::AppRegistry,
    deep_link::DeepLink,
    drag::{self, DragOrigin},
    launcher::{self, LaunchOutcome},
    lifecycle,
    model::{
        AppId, DesktopState, DesktopViewport, DragSession, InteractionState, LaunchContext,
        OpenWindowRequest, PointerPosition, WindowContent, WindowId, DEFAULT_WINDOW_TITLE,
    },
    registry,
    taskbar::{self, TaskbarCommand},
    transitions::TransitionTicket,
    window_manager,
};

/// Read-only collaborators the reducer consults: the app registry and route classifier.
#[derive(Clone)]
pub struct DesktopEnv {
    pub apps: AppRegistry,
    pub routes: Rc<dyn RouteClassifier>,
}

impl DesktopEnv {
    pub fn new(apps: AppRegistry, routes: Rc<dyn RouteClassifier>) -> Self {
        Self { apps, routes }
    }

    /// Built-in apps with the default protected-route policy for `origin`.
    pub fn builtin(origin: &str) -> Self {
        Self::new(
            AppRegistry::builtin(),
            Rc::new(ProtectedRoutePolicy::new(origin)),
        )
    }
}

impl std::fmt::Debug for DesktopEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesktopEnv")
            .field("apps", &self.apps)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Launch a registered app, or open a generic window for unknown ids.
    LaunchApp {
        app_id: AppId,
        context: LaunchContext,
    },
    /// Open an address, consulting the protected-route classifier.
    OpenUrl {
        address: String,
        title: Option<String>,
    },
    /// Open a window without route classification.
    OpenWindow(OpenWindowRequest),
    FocusWindow {
        window_id: WindowId,
    },
    MinimizeWindow {
        window_id: WindowId,
    },
    /// Bring a minimized window back.
    RestoreWindow {
        window_id: WindowId,
    },
    CloseWindow {
        window_id: WindowId,
    },
    MaximizeWindow {
        window_id: WindowId,
    },
    /// Leave maximized and reapply the pre-maximize geometry.
    RestoreWindowSize {
        window_id: WindowId,
    },
    /// Maximize control and title-bar double activation.
    ToggleMaximize {
        window_id: WindowId,
    },
    /// Click or keyboard activation of a taskbar entry.
    ActivateTaskbarEntry {
        window_id: WindowId,
    },
    BeginDrag {
        window_id: WindowId,
        pointer: PointerPosition,
        origin: DragOrigin,
    },
    UpdateDrag {
        pointer: PointerPosition,
    },
    EndDrag,
    /// A scheduled transition job fired.
    TransitionElapsed {
        ticket: TransitionTicket,
    },
    /// A content fetch settled.
    ContentLoaded {
        window_id: WindowId,
        result: Result<String, ContentLoadError>,
    },
    SetViewport {
        width: i32,
        height: i32,
    },
    ToggleStartMenu,
    CloseStartMenu,
    /// Settings read at boot, with a status line when the store failed.
    HydrateSettings {
        settings: ShellSettings,
        status: Option<String>,
    },
    SetUiScale {
        scale: u16,
    },
    SetReduceMotion {
        mode: ReduceMotion,
    },
    SetSystemReducedMotion {
        reduced: bool,
    },
    SettingsPersistFailed {
        message: String,
    },
    ApplyDeepLink(DeepLink),
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Dispatch [`DesktopAction::TransitionElapsed`] after `delay_ms`.
    ScheduleTransition {
        ticket: TransitionTicket,
        delay_ms: u32,
    },
    /// Fetch the fragment for a window's origin-relative address.
    LoadContent { window_id: WindowId, address: String },
    /// Leave the shell for a protected or external address.
    NavigateFullPage(String),
    /// Replace the visible address with `/`.
    ResetAddress,
    PersistSettings(ShellSettings),
    /// Run and drop the cleanup hooks registered for a closing window.
    RunCleanup(WindowId),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Actions that reference missing, minimized or closing windows where that makes no sense are
/// silent no-ops and return no effects.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    env: &DesktopEnv,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::LaunchApp { app_id, context } => {
            let LaunchOutcome {
                effects: launched, ..
            } = launcher::launch_app(state, &env.apps, env.routes.as_ref(), &app_id, &context);
            effects.extend(launched);
        }
        DesktopAction::OpenUrl { address, title } => {
            let outcome =
                launcher::open_url(state, env.routes.as_ref(), &address, title.as_deref());
            effects.extend(outcome.effects);
        }
        DesktopAction::OpenWindow(request) => {
            state.start_menu_open = false;
            lifecycle::open_window(state, request, &mut effects);
        }
        DesktopAction::FocusWindow { window_id } => {
            window_manager::focus(state, window_id);
        }
        DesktopAction::MinimizeWindow { window_id } => {
            lifecycle::minimize(state, window_id, &mut effects);
        }
        DesktopAction::RestoreWindow { window_id } => {
            lifecycle::restore(state, window_id, &mut effects);
        }
        DesktopAction::CloseWindow { window_id } => {
            if lifecycle::close(state, window_id, &mut effects) {
                end_drag_of(interaction, window_id);
            }
        }
        DesktopAction::MaximizeWindow { window_id } => {
            lifecycle::maximize(state, window_id);
        }
        DesktopAction::RestoreWindowSize { window_id } => {
            lifecycle::restore_size(state, window_id);
        }
        DesktopAction::ToggleMaximize { window_id } => {
            lifecycle::toggle_maximize(state, window_id);
        }
        DesktopAction::ActivateTaskbarEntry { window_id } => {
            match taskbar::resolve_click(state, window_id) {
                Some(TaskbarCommand::Restore) => {
                    lifecycle::restore(state, window_id, &mut effects);
                }
                Some(TaskbarCommand::Minimize) => {
                    lifecycle::minimize(state, window_id, &mut effects);
                }
                Some(TaskbarCommand::Focus) => {
                    window_manager::focus(state, window_id);
                }
                None => {}
            }
        }
        DesktopAction::BeginDrag {
            window_id,
            pointer,
            origin,
        } => begin_drag(state, interaction, window_id, pointer, origin),
        DesktopAction::UpdateDrag { pointer } => update_drag(state, interaction, pointer),
        DesktopAction::EndDrag => {
            interaction.dragging = None;
        }
        DesktopAction::TransitionElapsed { ticket } => {
            lifecycle::complete_transition(state, ticket);
        }
        DesktopAction::ContentLoaded { window_id, result } => {
            let content = match result {
                Ok(html) => WindowContent::Ready(html),
                Err(_) => WindowContent::Failed,
            };
            lifecycle::apply_content(state, window_id, content);
        }
        DesktopAction::SetViewport { width, height } => {
            state.viewport = DesktopViewport {
                width,
                height,
                ..state.viewport
            };
            lifecycle::refit_maximized(state);
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::HydrateSettings { settings, status } => {
            state.settings = settings.normalized();
            state.settings_status = status;
        }
        DesktopAction::SetUiScale { scale } => {
            let scale = scale.clamp(UI_SCALE_MIN, UI_SCALE_MAX);
            if state.settings.ui_scale != scale {
                state.settings.ui_scale = scale;
                effects.push(RuntimeEffect::PersistSettings(state.settings));
            }
        }
        DesktopAction::SetReduceMotion { mode } => {
            if state.settings.reduce_motion != mode {
                state.settings.reduce_motion = mode;
                effects.push(RuntimeEffect::PersistSettings(state.settings));
            }
        }
        DesktopAction::SetSystemReducedMotion { reduced } => {
            state.system_reduced_motion = reduced;
        }
        DesktopAction::SettingsPersistFailed { message } => {
            state.settings_status = Some(message);
        }
        DesktopAction::ApplyDeepLink(link) => apply_deep_link(state, env, link, &mut effects),
    }
    effects
}

fn apply_deep_link(
    state: &mut DesktopState,
    env: &DesktopEnv,
    link: DeepLink,
    effects: &mut Vec<RuntimeEffect>,
) {
    match link {
        DeepLink::OpenAddress(address) => {
            let outcome = launcher::open_url(
                state,
                env.routes.as_ref(),
                &address,
                Some(DEFAULT_WINDOW_TITLE),
            );
            effects.extend(outcome.effects);
            effects.push(RuntimeEffect::ResetAddress);
        }
        DeepLink::LaunchApp(app_id) => {
            let outcome = launcher::launch_app(
                state,
                &env.apps,
                env.routes.as_ref(),
                &app_id,
                &LaunchContext::default(),
            );
            effects.extend(outcome.effects);
            effects.push(RuntimeEffect::ResetAddress);
        }
        DeepLink::OpenCurrentPage { address, title } => {
            effects.push(RuntimeEffect::ResetAddress);
            let outcome = launcher::open_url(state, env.routes.as_ref(), &address, Some(&title));
            effects.extend(outcome.effects);
        }
    }
}

fn begin_drag(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: WindowId,
    pointer: PointerPosition,
    origin: DragOrigin,
) {
    if !origin.starts_drag() {
        return;
    }
    let Some(window) = registry::get(state, window_id) else {
        return;
    };
    if window.is_minimized() || window.is_closing() {
        return;
    }
    let session = DragSession {
        window_id,
        pointer_start: pointer,
        rect_start: window.rect,
        peel_pending: window.maximized,
    };
    window_manager::focus(state, window_id);
    interaction.dragging = Some(session);
}

fn update_drag(state: &mut DesktopState, interaction: &mut InteractionState, pointer: PointerPosition) {
    let Some(mut session) = interaction.dragging.clone() else {
        return;
    };
    let viewport = state.viewport;
    let Some(window) = registry::get_mut(state, session.window_id)
        .filter(|window| !window.is_minimized() && !window.is_closing())
    else {
        interaction.dragging = None;
        return;
    };
    if session.peel_pending {
        if window.maximized {
            let restored = window.restore_snapshot.take().unwrap_or(window.rect);
            window.rect = drag::clamp_to_workspace(
                drag::peel_off(window.rect, restored, session.pointer_start),
                viewport,
            );
            window.maximized = false;
        }
        session.rect_start = window.rect;
        session.peel_pending = false;
    }
    window.rect = drag::dragged_rect(session.rect_start, session.pointer_start, pointer, viewport);
    interaction.dragging = Some(session);
}

fn end_drag_of(interaction: &mut InteractionState, window_id: WindowId) {
    if interaction
        .dragging
        .as_ref()
        .map(|session| session.window_id == window_id)
        .unwrap_or(false)
    {
        interaction.dragging = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{Presentation, WindowRect, WindowState},
        transitions::TransitionKind,
    };

    struct Harness {
        state: DesktopState,
        interaction: InteractionState,
        env: DesktopEnv,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                state: DesktopState::default(),
                interaction: InteractionState::default(),
                env: DesktopEnv::builtin("https://shop.example.com"),
            }
        }

        fn dispatch(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
            let effects =
                reduce_desktop(&mut self.state, &mut self.interaction, &self.env, action);
            assert!(
                self.state.windows.iter().filter(|w| w.is_active()).count() <= 1,
                "more than one active window"
            );
            effects
        }

        fn open(&mut self, address: &str) -> WindowId {
            self.dispatch(DesktopAction::OpenUrl {
                address: address.to_string(),
                title: None,
            });
            self.state.windows.last().expect("window").id
        }

        fn window(&self, id: WindowId) -> &crate::model::WindowRecord {
            registry::get(&self.state, id).expect("window exists")
        }

        /// Fires every scheduled transition in `effects`, in order.
        fn fire(&mut self, effects: Vec<RuntimeEffect>) {
            for effect in effects {
                if let RuntimeEffect::ScheduleTransition { ticket, .. } = effect {
                    self.dispatch(DesktopAction::TransitionElapsed { ticket });
                }
            }
        }

        fn tickets(effects: &[RuntimeEffect]) -> Vec<TransitionTicket> {
            effects
                .iter()
                .filter_map(|effect| match effect {
                    RuntimeEffect::ScheduleTransition { ticket, .. } => Some(*ticket),
                    _ => None,
                })
                .collect()
        }
    }

    #[test]
    fn scenario_a_new_window_stacks_above_and_takes_focus() {
        let mut h = Harness::new();
        let w1 = h.open("/products/mug");
        let n = h.window(w1).stacking;

        let w2 = h.open("/products/tee");
        assert_eq!(h.window(w2).stacking, n + 1);
        assert_eq!(h.window(w2).state, WindowState::Active);
        assert_eq!(h.window(w1).state, WindowState::Inactive);
    }

    #[test]
    fn scenario_b_minimize_hands_focus_back_and_deselects_entry() {
        let mut h = Harness::new();
        let w1 = h.open("/products/mug");
        let w2 = h.open("/products/tee");

        h.dispatch(DesktopAction::MinimizeWindow { window_id: w2 });
        assert_eq!(h.window(w1).state, WindowState::Active);
        let entry = taskbar::items(&h.state)
            .into_iter()
            .find(|item| item.window_id == w2)
            .expect("entry");
        assert!(!entry.selected);
        assert!(entry.minimized);
    }

    #[test]
    fn scenario_c_single_instance_launch_twice_returns_same_window() {
        let mut h = Harness::new();
        let launch = DesktopAction::LaunchApp {
            app_id: AppId::from("compressor"),
            context: LaunchContext::default(),
        };
        h.dispatch(launch.clone());
        let first = h.state.active_window_id();
        h.dispatch(launch);

        assert_eq!(h.state.active_window_id(), first);
        assert_eq!(h.state.windows.len(), 1);
        assert_eq!(h.state.taskbar.len(), 1);
    }

    #[test]
    fn scenario_d_dragging_a_maximized_window_peels_it_off() {
        let mut h = Harness::new();
        let id = h.open("/collections/all");
        h.dispatch(DesktopAction::MaximizeWindow { window_id: id });
        let filled = h.state.viewport.work_area();
        assert_eq!(h.window(id).rect, filled);

        h.dispatch(DesktopAction::BeginDrag {
            window_id: id,
            pointer: PointerPosition { x: 640, y: 10 },
            origin: DragOrigin::TitleBar,
        });
        h.dispatch(DesktopAction::UpdateDrag {
            pointer: PointerPosition { x: 700, y: 60 },
        });

        let window = h.window(id);
        assert!(!window.maximized);
        assert_ne!(window.rect, filled);
        assert_eq!(window.restore_snapshot, None);
        assert_eq!(window.rect, WindowRect { x: 380, y: 50, w: 640, h: 460 });
    }

    #[test]
    fn double_click_on_a_maximized_title_bar_restores_the_window() {
        let mut h = Harness::new();
        let id = h.open("/collections/all");
        let before = h.window(id).rect;
        h.dispatch(DesktopAction::MaximizeWindow { window_id: id });

        for _ in 0..2 {
            h.dispatch(DesktopAction::BeginDrag {
                window_id: id,
                pointer: PointerPosition { x: 640, y: 10 },
                origin: DragOrigin::TitleBar,
            });
            h.dispatch(DesktopAction::EndDrag);
        }
        assert!(h.window(id).maximized);
        assert_eq!(h.window(id).restore_snapshot, Some(before));

        h.dispatch(DesktopAction::ToggleMaximize { window_id: id });
        assert!(!h.window(id).maximized);
        assert_eq!(h.window(id).rect, before);
        assert_eq!(h.window(id).restore_snapshot, None);
    }

    #[test]
    fn scenario_e_closing_the_only_window_twice() {
        let mut h = Harness::new();
        let id = h.open("/pages/notes");

        let effects = h.dispatch(DesktopAction::CloseWindow { window_id: id });
        assert_eq!(h.state.active_window_id(), None);
        assert!(effects.contains(&RuntimeEffect::RunCleanup(id)));

        let again = h.dispatch(DesktopAction::CloseWindow { window_id: id });
        assert!(again.is_empty());

        h.fire(effects);
        assert!(h.state.windows.is_empty());
        assert!(h.state.taskbar.is_empty());
        assert!(h
            .dispatch(DesktopAction::CloseWindow { window_id: id })
            .is_empty());
    }

    #[test]
    fn closing_twice_equals_closing_once() {
        let mut once = Harness::new();
        let mut twice = Harness::new();
        for h in [&mut once, &mut twice] {
            h.open("/a");
            h.open("/b");
        }
        let target = WindowId(2);

        let effects = once.dispatch(DesktopAction::CloseWindow { window_id: target });
        once.fire(effects);
        let first = twice.dispatch(DesktopAction::CloseWindow { window_id: target });
        let second = twice.dispatch(DesktopAction::CloseWindow { window_id: target });
        twice.fire(first);
        twice.fire(second);

        assert_eq!(once.state, twice.state);
        assert_eq!(once.state.active_window_id(), Some(WindowId(1)));
    }

    #[test]
    fn maximize_then_restore_returns_exact_geometry() {
        let mut h = Harness::new();
        let id = h.open("/search");
        let before = h.window(id).rect;

        h.dispatch(DesktopAction::ToggleMaximize { window_id: id });
        assert!(h.window(id).maximized);
        assert_eq!(h.window(id).restore_snapshot, Some(before));

        h.dispatch(DesktopAction::MaximizeWindow { window_id: id });
        assert_eq!(h.window(id).restore_snapshot, Some(before));

        h.dispatch(DesktopAction::ToggleMaximize { window_id: id });
        assert_eq!(h.window(id).rect, before);
        assert_eq!(h.window(id).restore_snapshot, None);
        assert!(!h.window(id).maximized);
    }

    #[test]
    fn restore_size_without_maximize_is_a_noop() {
        let mut h = Harness::new();
        let id = h.open("/search");
        let before = h.state.clone();

        h.dispatch(DesktopAction::RestoreWindowSize { window_id: id });
        assert_eq!(h.state, before);
    }

    #[test]
    fn minimize_then_restore_before_the_job_fires_ends_visible_and_active() {
        let mut h = Harness::new();
        let id = h.open("/products/mug");

        let minimized = h.dispatch(DesktopAction::MinimizeWindow { window_id: id });
        let restored = h.dispatch(DesktopAction::RestoreWindow { window_id: id });
        // Late minimize completion must not hide the restored window.
        h.fire(minimized);
        assert_eq!(h.window(id).presentation, Presentation::Restoring);
        h.fire(restored);

        assert_eq!(h.window(id).state, WindowState::Active);
        assert_eq!(h.window(id).presentation, Presentation::Shown);
    }

    #[test]
    fn taskbar_clicks_cycle_minimize_restore_and_focus() {
        let mut h = Harness::new();
        let a = h.open("/a");
        let b = h.open("/b");

        h.dispatch(DesktopAction::ActivateTaskbarEntry { window_id: a });
        assert_eq!(h.state.active_window_id(), Some(a));
        h.dispatch(DesktopAction::ActivateTaskbarEntry { window_id: a });
        assert_eq!(h.window(a).state, WindowState::Minimized);
        assert_eq!(h.state.active_window_id(), Some(b));
        h.dispatch(DesktopAction::ActivateTaskbarEntry { window_id: a });
        assert_eq!(h.state.active_window_id(), Some(a));
    }

    #[test]
    fn operations_on_missing_windows_are_silent_noops() {
        let mut h = Harness::new();
        h.open("/a");
        let before = h.state.clone();
        let ghost = WindowId(404);

        for action in [
            DesktopAction::FocusWindow { window_id: ghost },
            DesktopAction::MinimizeWindow { window_id: ghost },
            DesktopAction::RestoreWindow { window_id: ghost },
            DesktopAction::CloseWindow { window_id: ghost },
            DesktopAction::MaximizeWindow { window_id: ghost },
            DesktopAction::ActivateTaskbarEntry { window_id: ghost },
            DesktopAction::BeginDrag {
                window_id: ghost,
                pointer: PointerPosition { x: 1, y: 1 },
                origin: DragOrigin::TitleBar,
            },
        ] {
            assert!(h.dispatch(action).is_empty());
        }
        assert_eq!(h.state, before);
        assert_eq!(h.interaction, InteractionState::default());
    }

    #[test]
    fn drags_only_start_from_the_title_bar_and_stay_in_the_workspace() {
        let mut h = Harness::new();
        let id = h.open("/a");
        h.dispatch(DesktopAction::BeginDrag {
            window_id: id,
            pointer: PointerPosition { x: 100, y: 80 },
            origin: DragOrigin::ControlButton,
        });
        assert!(h.interaction.dragging.is_none());

        h.dispatch(DesktopAction::BeginDrag {
            window_id: id,
            pointer: PointerPosition { x: 100, y: 80 },
            origin: DragOrigin::TitleBar,
        });
        h.dispatch(DesktopAction::UpdateDrag {
            pointer: PointerPosition { x: 5000, y: 5000 },
        });
        let viewport = h.state.viewport;
        let rect = h.window(id).rect;
        assert_eq!(rect.x + rect.w, viewport.width);
        assert_eq!(rect.y + rect.h, viewport.work_height());

        h.dispatch(DesktopAction::EndDrag);
        assert!(h.interaction.dragging.is_none());
    }

    #[test]
    fn drag_session_ends_when_its_window_closes() {
        let mut h = Harness::new();
        let id = h.open("/a");
        h.dispatch(DesktopAction::BeginDrag {
            window_id: id,
            pointer: PointerPosition { x: 100, y: 80 },
            origin: DragOrigin::TitleBar,
        });
        h.dispatch(DesktopAction::CloseWindow { window_id: id });
        assert!(h.interaction.dragging.is_none());
    }

    #[test]
    fn transitions_use_zero_delay_under_reduced_motion() {
        let mut h = Harness::new();
        h.dispatch(DesktopAction::SetReduceMotion {
            mode: ReduceMotion::On,
        });
        let effects = h.dispatch(DesktopAction::OpenUrl {
            address: "/a".to_string(),
            title: None,
        });
        let delays: Vec<_> = effects
            .iter()
            .filter_map(|effect| match effect {
                RuntimeEffect::ScheduleTransition { delay_ms, .. } => Some(*delay_ms),
                _ => None,
            })
            .collect();
        assert_eq!(delays, vec![0]);
        let tickets = Harness::tickets(&effects);
        assert_eq!(tickets[0].kind, TransitionKind::Open);
    }

    #[test]
    fn content_results_fill_or_fail_the_window_body() {
        let mut h = Harness::new();
        let ok = h.open("/a");
        let bad = h.open("/b");

        h.dispatch(DesktopAction::ContentLoaded {
            window_id: ok,
            result: Ok("<p>a</p>".to_string()),
        });
        h.dispatch(DesktopAction::ContentLoaded {
            window_id: bad,
            result: Err(ContentLoadError::Status(500)),
        });
        assert_eq!(h.window(ok).content, WindowContent::Ready("<p>a</p>".to_string()));
        assert_eq!(h.window(bad).content, WindowContent::Failed);
    }

    #[test]
    fn viewport_resize_refits_maximized_windows_only() {
        let mut h = Harness::new();
        let maximized = h.open("/a");
        let floating = h.open("/b");
        let floating_rect = h.window(floating).rect;
        h.dispatch(DesktopAction::MaximizeWindow {
            window_id: maximized,
        });

        h.dispatch(DesktopAction::SetViewport {
            width: 900,
            height: 600,
        });
        assert_eq!(h.window(maximized).rect, h.state.viewport.work_area());
        assert_eq!(h.window(maximized).rect.w, 900);
        assert_eq!(h.window(floating).rect, floating_rect);
    }

    #[test]
    fn settings_changes_persist_clamped_values() {
        let mut h = Harness::new();
        let effects = h.dispatch(DesktopAction::SetUiScale { scale: 150 });
        assert_eq!(h.state.settings.ui_scale, 120);
        assert_eq!(
            effects,
            vec![RuntimeEffect::PersistSettings(h.state.settings)]
        );
        assert!(h
            .dispatch(DesktopAction::SetUiScale { scale: 130 })
            .is_empty());

        h.dispatch(DesktopAction::SettingsPersistFailed {
            message: "saved for this session only".to_string(),
        });
        assert_eq!(
            h.state.settings_status.as_deref(),
            Some("saved for this session only")
        );
    }

    #[test]
    fn deep_links_launch_then_reset_the_address() {
        let mut h = Harness::new();
        let effects = h.dispatch(DesktopAction::ApplyDeepLink(DeepLink::LaunchApp(
            AppId::from("cart"),
        )));
        assert_eq!(effects.last(), Some(&RuntimeEffect::ResetAddress));
        assert_eq!(h.state.windows.len(), 1);

        let effects = h.dispatch(DesktopAction::ApplyDeepLink(DeepLink::OpenAddress(
            "/checkout".to_string(),
        )));
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::NavigateFullPage("/checkout".to_string()),
                RuntimeEffect::ResetAddress,
            ]
        );
    }

    #[test]
    fn launching_closes_the_start_menu() {
        let mut h = Harness::new();
        h.dispatch(DesktopAction::ToggleStartMenu);
        assert!(h.state.start_menu_open);
        h.dispatch(DesktopAction::LaunchApp {
            app_id: AppId::from("vault"),
            context: LaunchContext::default(),
        });
        assert!(!h.state.start_menu_open);
    }
}

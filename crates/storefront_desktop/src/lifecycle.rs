//! Window lifecycle transitions: open, minimize, restore, close, maximize.
//!
//! Logical state changes as soon as a transition starts so registry invariants hold between input
//! events. The visual [`Presentation`] advances later, when the scheduled job for the transition
//! reports back through [`complete_transition`] with a still-current ticket.

use crate::{
    model::{
        DesktopState, OpenWindowRequest, Presentation, WindowContent, WindowId, WindowSource,
        WindowState,
    },
    reducer::RuntimeEffect,
    registry, taskbar,
    transitions::{TransitionKind, TransitionTicket},
    window_manager,
};

fn schedule(
    state: &mut DesktopState,
    window_id: WindowId,
    kind: TransitionKind,
    effects: &mut Vec<RuntimeEffect>,
) {
    let ticket = state.transitions.begin(window_id, kind);
    effects.push(RuntimeEffect::ScheduleTransition {
        ticket,
        delay_ms: kind.delay_ms(state.reduced_motion()),
    });
}

/// Creates, binds and focuses a window, then schedules its open transition and content load.
pub fn open_window(
    state: &mut DesktopState,
    request: OpenWindowRequest,
    effects: &mut Vec<RuntimeEffect>,
) -> WindowId {
    let load = match &request.source {
        WindowSource::Url(address) => Some(address.clone()),
        _ => None,
    };
    let window_id = registry::create(state, request);
    let title = registry::get(state, window_id)
        .map(|w| w.title.clone())
        .unwrap_or_default();
    taskbar::bind(state, window_id, &title);
    window_manager::focus(state, window_id);
    schedule(state, window_id, TransitionKind::Open, effects);
    if let Some(address) = load {
        effects.push(RuntimeEffect::LoadContent { window_id, address });
    }
    window_id
}

/// Hides a visible window and hands focus to the next visible one.
pub fn minimize(
    state: &mut DesktopState,
    window_id: WindowId,
    effects: &mut Vec<RuntimeEffect>,
) -> bool {
    let Some(window) = registry::get_mut(state, window_id) else {
        return false;
    };
    if window.is_minimized() || window.is_closing() {
        return false;
    }
    let was_active = window.is_active();
    window.state = WindowState::Minimized;
    window.presentation = Presentation::Minimizing;
    if was_active {
        window_manager::focus_most_recent_visible(state, Some(window_id));
    }
    schedule(state, window_id, TransitionKind::Minimize, effects);
    true
}

/// Brings a minimized window back and focuses it.
pub fn restore(
    state: &mut DesktopState,
    window_id: WindowId,
    effects: &mut Vec<RuntimeEffect>,
) -> bool {
    let Some(window) = registry::get_mut(state, window_id) else {
        return false;
    };
    if !window.is_minimized() || window.is_closing() {
        return false;
    }
    window.state = WindowState::Inactive;
    window.presentation = Presentation::Restoring;
    window_manager::focus(state, window_id);
    schedule(state, window_id, TransitionKind::Restore, effects);
    true
}

/// Starts closing a window. The record is removed when the close transition completes.
///
/// Closing an already closing or unknown window is a no-op.
pub fn close(state: &mut DesktopState, window_id: WindowId, effects: &mut Vec<RuntimeEffect>) -> bool {
    let Some(window) = registry::get_mut(state, window_id) else {
        return false;
    };
    if window.is_closing() {
        return false;
    }
    window.presentation = Presentation::Closing;
    effects.push(RuntimeEffect::RunCleanup(window_id));
    window_manager::deactivate(state, window_id);
    window_manager::focus_most_recent_visible(state, Some(window_id));
    schedule(state, window_id, TransitionKind::Close, effects);
    true
}

/// Fills the work area, remembering the previous geometry. Already maximized is a no-op.
pub fn maximize(state: &mut DesktopState, window_id: WindowId) -> bool {
    let work_area = state.viewport.work_area();
    let Some(window) = registry::get_mut(state, window_id) else {
        return false;
    };
    if window.is_minimized() || window.is_closing() || window.maximized {
        return false;
    }
    window.restore_snapshot = Some(window.rect);
    window.rect = work_area;
    window.maximized = true;
    window_manager::focus(state, window_id);
    true
}

/// Leaves maximized, reapplying and clearing the snapshot.
pub fn restore_size(state: &mut DesktopState, window_id: WindowId) -> bool {
    let Some(window) = registry::get_mut(state, window_id) else {
        return false;
    };
    if !window.maximized || window.is_closing() {
        return false;
    }
    if let Some(snapshot) = window.restore_snapshot.take() {
        window.rect = snapshot;
    }
    window.maximized = false;
    true
}

pub fn toggle_maximize(state: &mut DesktopState, window_id: WindowId) -> bool {
    let maximized = registry::get(state, window_id)
        .map(|w| w.maximized)
        .unwrap_or(false);
    if maximized {
        restore_size(state, window_id)
    } else {
        maximize(state, window_id)
    }
}

/// Refits maximized windows after the viewport changes.
pub fn refit_maximized(state: &mut DesktopState) {
    let work_area = state.viewport.work_area();
    for window in state.windows.iter_mut().filter(|w| w.maximized) {
        window.rect = work_area;
    }
}

/// Applies the terminal mutation of a transition job if its ticket is still current.
pub fn complete_transition(state: &mut DesktopState, ticket: TransitionTicket) -> bool {
    if !state.transitions.is_current(&ticket) {
        return false;
    }
    let window_id = ticket.window_id;
    if ticket.kind == TransitionKind::Close {
        registry::remove(state, window_id);
        taskbar::unbind(state, window_id);
        state.transitions.forget(window_id);
        return true;
    }
    let Some(window) = registry::get_mut(state, window_id) else {
        state.transitions.forget(window_id);
        return false;
    };
    window.presentation = match ticket.kind {
        TransitionKind::Open | TransitionKind::Restore => Presentation::Shown,
        TransitionKind::Minimize => Presentation::Hidden,
        TransitionKind::Close => Presentation::Closing,
    };
    true
}

/// Replaces the content area once a fetch settles. Closing or missing windows ignore it.
pub fn apply_content(state: &mut DesktopState, window_id: WindowId, content: WindowContent) -> bool {
    match registry::get_mut(state, window_id) {
        Some(window) if !window.is_closing() => {
            window.content = content;
            true
        }
        _ => false,
    }
}

//! Z-order and focus helpers shared by the reducer and launcher.

use crate::{
    model::{DesktopState, WindowId, WindowState},
    registry,
};

/// Raises `window_id` and makes it the single active window.
///
/// Unknown, minimized and closing windows are ignored. Focusing the window that is already active
/// and top-most leaves the stacking counter untouched. Returns `true` when the window ends active.
pub fn focus(state: &mut DesktopState, window_id: WindowId) -> bool {
    let Some(target) = registry::get(state, window_id) else {
        return false;
    };
    if target.is_minimized() || target.is_closing() {
        return false;
    }

    let top = state.windows.iter().map(|w| w.stacking).max().unwrap_or(0);
    let already_top = target.is_active() && target.stacking == top && target.stacking > 0;
    if already_top {
        return true;
    }

    state.stack_counter = state.stack_counter.saturating_add(1);
    let stacking = state.stack_counter;
    for window in &mut state.windows {
        if window.id == window_id {
            window.stacking = stacking;
            window.state = WindowState::Active;
        } else if window.state == WindowState::Active {
            window.state = WindowState::Inactive;
        }
    }
    true
}

/// Focuses the highest-stacked window that is visible, live and not `exclude`.
///
/// When nothing qualifies no window stays active.
pub fn focus_most_recent_visible(
    state: &mut DesktopState,
    exclude: Option<WindowId>,
) -> Option<WindowId> {
    let candidate = state
        .windows
        .iter()
        .filter(|w| !w.is_minimized() && !w.is_closing() && Some(w.id) != exclude)
        .max_by_key(|w| w.stacking)
        .map(|w| w.id);

    match candidate {
        Some(window_id) => {
            focus(state, window_id);
            Some(window_id)
        }
        None => {
            deactivate_all(state);
            None
        }
    }
}

pub fn deactivate(state: &mut DesktopState, window_id: WindowId) {
    if let Some(window) = registry::get_mut(state, window_id) {
        if window.state == WindowState::Active {
            window.state = WindowState::Inactive;
        }
    }
}

fn deactivate_all(state: &mut DesktopState) {
    for window in &mut state.windows {
        if window.state == WindowState::Active {
            window.state = WindowState::Inactive;
        }
    }
}

//! Taskbar entries bound 1:1 to live windows.

use crate::{
    model::{DesktopState, TaskbarEntry, WindowId},
    registry,
};

/// What a click on a taskbar entry does to its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskbarCommand {
    Restore,
    Minimize,
    Focus,
}

/// Render model for one taskbar button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarItem {
    pub window_id: WindowId,
    pub title: String,
    pub selected: bool,
    pub minimized: bool,
}

/// Appends the entry for a newly created window.
pub fn bind(state: &mut DesktopState, window_id: WindowId, title: &str) {
    if state.taskbar.iter().any(|entry| entry.window_id == window_id) {
        return;
    }
    state.taskbar.push(TaskbarEntry {
        window_id,
        title: title.to_string(),
    });
}

pub fn unbind(state: &mut DesktopState, window_id: WindowId) {
    state.taskbar.retain(|entry| entry.window_id != window_id);
}

/// Resolves a click: minimized restores, active minimizes, anything else focuses.
///
/// Returns `None` for windows that are gone or closing.
pub fn resolve_click(state: &DesktopState, window_id: WindowId) -> Option<TaskbarCommand> {
    let window = registry::get(state, window_id)?;
    if window.is_closing() {
        return None;
    }
    Some(if window.is_minimized() {
        TaskbarCommand::Restore
    } else if window.is_active() {
        TaskbarCommand::Minimize
    } else {
        TaskbarCommand::Focus
    })
}

/// Entries in creation order; an entry is selected exactly when its window is active.
///
/// Entries of closing windows are hidden while the close transition plays.
pub fn items(state: &DesktopState) -> Vec<TaskbarItem> {
    state
        .taskbar
        .iter()
        .filter_map(|entry| {
            let window = registry::get(state, entry.window_id)?;
            if window.is_closing() {
                return None;
            }
            Some(TaskbarItem {
                window_id: entry.window_id,
                title: entry.title.clone(),
                selected: window.is_active(),
                minimized: window.is_minimized(),
            })
        })
        .collect()
}

/// Keys that activate a focused taskbar entry like a click.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{OpenWindowRequest, WindowState},
        window_manager,
    };

    fn bound_window(state: &mut DesktopState, title: &str) -> WindowId {
        let id = registry::create(state, OpenWindowRequest::url(title, "/"));
        bind(state, id, title);
        window_manager::focus(state, id);
        id
    }

    #[test]
    fn entries_keep_creation_order_and_bind_once() {
        let mut state = DesktopState::default();
        let a = bound_window(&mut state, "A");
        let b = bound_window(&mut state, "B");
        bind(&mut state, a, "A");
        window_manager::focus(&mut state, a);

        let ids: Vec<_> = items(&state).iter().map(|item| item.window_id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn click_resolution_follows_window_state() {
        let mut state = DesktopState::default();
        let a = bound_window(&mut state, "A");
        let b = bound_window(&mut state, "B");

        assert_eq!(resolve_click(&state, b), Some(TaskbarCommand::Minimize));
        assert_eq!(resolve_click(&state, a), Some(TaskbarCommand::Focus));
        registry::get_mut(&mut state, a).expect("a").state = WindowState::Minimized;
        assert_eq!(resolve_click(&state, a), Some(TaskbarCommand::Restore));
        assert_eq!(resolve_click(&state, WindowId(9)), None);
    }

    #[test]
    fn only_the_active_window_entry_is_selected() {
        let mut state = DesktopState::default();
        let a = bound_window(&mut state, "A");
        let b = bound_window(&mut state, "B");

        let selected: Vec<_> = items(&state)
            .into_iter()
            .map(|item| (item.window_id, item.selected))
            .collect();
        assert_eq!(selected, vec![(a, false), (b, true)]);

        unbind(&mut state, b);
        assert_eq!(items(&state).len(), 1);
    }

    #[test]
    fn closing_windows_drop_out_of_the_rendered_entries() {
        let mut state = DesktopState::default();
        let a = bound_window(&mut state, "A");
        registry::get_mut(&mut state, a).expect("a").presentation =
            crate::model::Presentation::Closing;

        assert!(items(&state).is_empty());
        assert_eq!(state.taskbar.len(), 1);
    }

    #[test]
    fn enter_and_space_activate_entries() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
    }
}

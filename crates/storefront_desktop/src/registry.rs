//! Window registry operations over [`DesktopState::windows`].

use crate::model::{
    AppId, DesktopState, OpenWindowRequest, Presentation, WindowContent, WindowId, WindowRecord,
    WindowRect, WindowSource, WindowState, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_TITLE,
    DEFAULT_WINDOW_WIDTH, MAX_TITLE_CHARS,
};

const CASCADE_SLOTS: u32 = 7;

/// Trims a title, caps it at 80 characters and substitutes `"Window"` when empty.
pub fn normalize_title(raw: Option<&str>) -> String {
    let trimmed: String = raw
        .unwrap_or_default()
        .trim()
        .chars()
        .take(MAX_TITLE_CHARS)
        .collect();
    if trimmed.is_empty() {
        DEFAULT_WINDOW_TITLE.to_string()
    } else {
        trimmed
    }
}

/// Staggered position for the `seq`-th created window.
pub fn cascade_rect(seq: u32) -> WindowRect {
    let slot = (seq % CASCADE_SLOTS) as i32;
    WindowRect {
        x: 46 + slot * 18,
        y: 52 + slot * 16,
        w: DEFAULT_WINDOW_WIDTH,
        h: DEFAULT_WINDOW_HEIGHT,
    }
}

/// Inserts a new, not yet focused window and returns its id.
///
/// Ids are never reused. Callers bind the taskbar entry and focus the window.
pub fn create(state: &mut DesktopState, request: OpenWindowRequest) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    state.cascade_seq = state.cascade_seq.wrapping_add(1);

    let (source_url, content) = match request.source {
        WindowSource::Url(address) => (Some(address), WindowContent::Loading),
        WindowSource::Inline(html) => (None, WindowContent::Ready(html)),
        WindowSource::Empty => (None, WindowContent::Ready(String::new())),
    };

    state.windows.push(WindowRecord {
        id,
        app_id: request.app_id,
        title: normalize_title(request.title.as_deref()),
        rect: cascade_rect(state.cascade_seq),
        restore_snapshot: None,
        stacking: 0,
        state: WindowState::Inactive,
        maximized: false,
        presentation: Presentation::Opening,
        source_url,
        content,
    });
    id
}

pub fn get(state: &DesktopState, window_id: WindowId) -> Option<&WindowRecord> {
    state.windows.iter().find(|w| w.id == window_id)
}

pub fn get_mut(state: &mut DesktopState, window_id: WindowId) -> Option<&mut WindowRecord> {
    state.windows.iter_mut().find(|w| w.id == window_id)
}

/// Removes a window record. Unknown ids are a no-op.
pub fn remove(state: &mut DesktopState, window_id: WindowId) -> Option<WindowRecord> {
    let index = state.windows.iter().position(|w| w.id == window_id)?;
    Some(state.windows.remove(index))
}

/// First live window tagged with `app_id`, in creation order. Closing windows are skipped.
pub fn find_by_app_id(state: &DesktopState, app_id: &AppId) -> Option<WindowId> {
    state
        .windows
        .iter()
        .find(|w| !w.is_closing() && w.app_id.as_ref() == Some(app_id))
        .map(|w| w.id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn titles_are_trimmed_capped_and_defaulted() {
        assert_eq!(normalize_title(Some("  Cart  ")), "Cart");
        assert_eq!(normalize_title(Some("   ")), "Window");
        assert_eq!(normalize_title(None), "Window");
        let long = "x".repeat(120);
        assert_eq!(normalize_title(Some(&long)).chars().count(), 80);
    }

    #[test]
    fn cascade_wraps_after_seven_slots() {
        assert_eq!(cascade_rect(1), WindowRect { x: 64, y: 68, w: 640, h: 460 });
        assert_eq!(cascade_rect(7), cascade_rect(0));
        assert_eq!(cascade_rect(8), cascade_rect(1));
    }

    #[test]
    fn ids_are_never_reused_after_removal() {
        let mut state = DesktopState::default();
        let first = create(&mut state, OpenWindowRequest::url("A", "/a"));
        assert!(remove(&mut state, first).is_some());
        let second = create(&mut state, OpenWindowRequest::url("B", "/b"));

        assert_ne!(first, second);
        assert_eq!(second, WindowId(2));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut state = DesktopState::default();
        let id = create(&mut state, OpenWindowRequest::inline("Tools", "<p>hi</p>"));
        assert!(remove(&mut state, id).is_some());
        assert!(remove(&mut state, id).is_none());
        assert!(remove(&mut state, WindowId(99)).is_none());
    }

    #[test]
    fn find_by_app_id_returns_first_live_match() {
        let mut state = DesktopState::default();
        let app = AppId::from("cart");
        let first = create(
            &mut state,
            OpenWindowRequest::url("Cart", "/cart").with_app_id(app.clone()),
        );
        let second = create(
            &mut state,
            OpenWindowRequest::url("Cart", "/cart").with_app_id(app.clone()),
        );

        assert_eq!(find_by_app_id(&state, &app), Some(first));
        get_mut(&mut state, first).expect("window").presentation = Presentation::Closing;
        assert_eq!(find_by_app_id(&state, &app), Some(second));
        assert_eq!(find_by_app_id(&state, &AppId::from("search")), None);
    }

    #[test]
    fn url_windows_start_loading_and_inline_windows_start_ready() {
        let mut state = DesktopState::default();
        let url = create(&mut state, OpenWindowRequest::url("Cart", "/cart"));
        let inline = create(&mut state, OpenWindowRequest::inline("Tools", "<p>t</p>"));

        let url = get(&state, url).expect("url window");
        assert_eq!(url.content, WindowContent::Loading);
        assert_eq!(url.source_url.as_deref(), Some("/cart"));
        assert_eq!(
            get(&state, inline).expect("inline window").content,
            WindowContent::Ready("<p>t</p>".to_string())
        );
    }
}

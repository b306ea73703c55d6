//! Pointer-drag geometry: title-bar origin check, peel-off from maximized, workspace clamping.

use crate::model::{DesktopViewport, PointerPosition, WindowRect};

/// Part of a window chrome a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOrigin {
    TitleBar,
    ControlButton,
    Body,
}

impl DragOrigin {
    pub const fn starts_drag(self) -> bool {
        matches!(self, Self::TitleBar)
    }
}

/// Keeps a window fully inside the viewport and above the taskbar.
pub fn clamp_to_workspace(rect: WindowRect, viewport: DesktopViewport) -> WindowRect {
    let max_x = (viewport.width - rect.w).max(0);
    let max_y = (viewport.work_height() - rect.h).max(0);
    WindowRect {
        x: rect.x.clamp(0, max_x),
        y: rect.y.clamp(0, max_y),
        ..rect
    }
}

/// Geometry for a maximized window restored under the pointer at drag start.
///
/// The pointer keeps the same horizontal fraction of the title bar and the same vertical offset.
pub fn peel_off(maximized: WindowRect, restored: WindowRect, pointer: PointerPosition) -> WindowRect {
    let fraction = if maximized.w > 0 {
        f64::from(pointer.x - maximized.x) / f64::from(maximized.w)
    } else {
        0.5
    };
    let offset_y = pointer.y - maximized.y;
    WindowRect {
        x: pointer.x - (fraction * f64::from(restored.w)).round() as i32,
        y: pointer.y - offset_y,
        w: restored.w,
        h: restored.h,
    }
}

/// Position for the current pointer relative to the drag start, clamped to the workspace.
pub fn dragged_rect(
    rect_start: WindowRect,
    pointer_start: PointerPosition,
    pointer: PointerPosition,
    viewport: DesktopViewport,
) -> WindowRect {
    clamp_to_workspace(
        rect_start.offset(pointer.x - pointer_start.x, pointer.y - pointer_start.y),
        viewport,
    )
}

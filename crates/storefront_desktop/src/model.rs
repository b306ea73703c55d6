use serde::{Deserialize, Serialize};
use storefront_host::{ShellSettings, ViewportSize};

use crate::transitions::TransitionScheduler;

pub const DEFAULT_WINDOW_WIDTH: i32 = 640;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 460;
pub const DEFAULT_TASKBAR_HEIGHT: i32 = 44;
/// Stacking value the first focused window is raised above.
pub const STACKING_BASE: u32 = 2000;
pub const MAX_TITLE_CHARS: usize = 80;
pub const DEFAULT_WINDOW_TITLE: &str = "Window";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

/// Application identifier used for launches and single-instance lookups.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AppId(String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AppId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn center(self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

/// Logical window state. Maximized is tracked separately on [`WindowRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowState {
    Active,
    Inactive,
    Minimized,
}

/// Visual stage of a window, advanced only by transition completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Presentation {
    Opening,
    Shown,
    Minimizing,
    Hidden,
    Restoring,
    Closing,
}

impl Presentation {
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Opening => "is-opening",
            Self::Shown => "is-shown",
            Self::Minimizing => "is-minimizing",
            Self::Hidden => "is-hidden",
            Self::Restoring => "is-restoring",
            Self::Closing => "is-closing",
        }
    }
}

/// Markup shown in a window's content area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowContent {
    Loading,
    Ready(String),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: Option<AppId>,
    pub title: String,
    pub rect: WindowRect,
    pub restore_snapshot: Option<WindowRect>,
    pub stacking: u32,
    pub state: WindowState,
    pub maximized: bool,
    pub presentation: Presentation,
    pub source_url: Option<String>,
    pub content: WindowContent,
}

impl WindowRecord {
    pub fn is_active(&self) -> bool {
        self.state == WindowState::Active
    }

    pub fn is_minimized(&self) -> bool {
        self.state == WindowState::Minimized
    }

    /// True once the close transition has started; the record lingers until it completes.
    pub fn is_closing(&self) -> bool {
        self.presentation == Presentation::Closing
    }
}

/// Taskbar button bound to one live window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskbarEntry {
    pub window_id: WindowId,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopViewport {
    pub width: i32,
    pub height: i32,
    pub taskbar_height: i32,
}

impl DesktopViewport {
    pub fn from_size(size: ViewportSize) -> Self {
        Self {
            width: size.width,
            height: size.height,
            taskbar_height: DEFAULT_TASKBAR_HEIGHT,
        }
    }

    /// Height available to windows above the taskbar.
    pub fn work_height(self) -> i32 {
        (self.height - self.taskbar_height).max(0)
    }

    /// Rectangle a maximized window fills.
    pub fn work_area(self) -> WindowRect {
        WindowRect {
            x: 0,
            y: 0,
            w: self.width.max(0),
            h: self.work_height(),
        }
    }
}

impl Default for DesktopViewport {
    fn default() -> Self {
        Self::from_size(ViewportSize::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopState {
    pub next_window_id: u64,
    pub cascade_seq: u32,
    pub stack_counter: u32,
    pub windows: Vec<WindowRecord>,
    pub taskbar: Vec<TaskbarEntry>,
    pub transitions: TransitionScheduler,
    pub viewport: DesktopViewport,
    pub start_menu_open: bool,
    pub settings: ShellSettings,
    /// Status line shown when settings cannot be loaded or saved.
    pub settings_status: Option<String>,
    pub system_reduced_motion: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            cascade_seq: 0,
            stack_counter: STACKING_BASE,
            windows: Vec::new(),
            taskbar: Vec::new(),
            transitions: TransitionScheduler::default(),
            viewport: DesktopViewport::default(),
            start_menu_open: false,
            settings: ShellSettings::default(),
            settings_status: None,
            system_reduced_motion: false,
        }
    }
}

impl DesktopState {
    pub fn active_window_id(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_active()).map(|w| w.id)
    }

    /// Whether transitions should run at zero duration.
    pub fn reduced_motion(&self) -> bool {
        self.settings
            .reduce_motion
            .resolve(self.system_reduced_motion)
    }
}

/// Where a window's content comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowSource {
    /// Origin-relative address fetched after creation.
    Url(String),
    /// Markup rendered immediately.
    Inline(String),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub title: Option<String>,
    pub app_id: Option<AppId>,
    pub source: WindowSource,
}

impl OpenWindowRequest {
    pub fn url(title: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            app_id: None,
            source: WindowSource::Url(address.into()),
        }
    }

    pub fn inline(title: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            app_id: None,
            source: WindowSource::Inline(html.into()),
        }
    }

    pub fn with_app_id(mut self, app_id: AppId) -> Self {
        self.app_id = Some(app_id);
        self
    }
}

/// Optional launch overrides (`{ url?, title? }`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LaunchContext {
    pub url: Option<String>,
    pub title: Option<String>,
}

impl LaunchContext {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            title: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
    /// The window was maximized at pointer-down; it leaves maximized on the first move.
    pub peel_pending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}

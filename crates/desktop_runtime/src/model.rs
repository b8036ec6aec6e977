//! Window records, the static window registry, and desktop state.

use serde::{Deserialize, Serialize};

/// Preferred window width before viewport clamping.
pub const DEFAULT_WINDOW_WIDTH: i32 = 780;
/// Preferred window height before viewport clamping.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 500;
/// Horizontal margin reserved when clamping the default width to the viewport.
pub const VIEWPORT_MARGIN_X: i32 = 100;
/// Vertical margin reserved when clamping the default height to the viewport.
pub const VIEWPORT_MARGIN_Y: i32 = 140;
/// Cascade origin for the first registered window.
pub const CASCADE_ORIGIN_X: i32 = 80;
/// Cascade origin for the first registered window.
pub const CASCADE_ORIGIN_Y: i32 = 60;
/// Per-window cascade step applied at registration.
pub const CASCADE_STEP: i32 = 30;
/// Right-edge margin windows keep clear of the viewport boundary.
pub const EDGE_MARGIN_X: i32 = 20;
/// Bottom-edge margin windows keep clear of the viewport boundary (dock area).
pub const EDGE_MARGIN_Y: i32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Pixel-space window geometry.
pub struct WindowRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Desktop viewport dimensions used to derive registration geometry.
pub struct Viewport {
    /// Viewport width in pixels.
    pub width: i32,
    /// Viewport height in pixels.
    pub height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Static registry entry describing a window known to the shell.
///
/// Windows are registered once at startup and never created or destroyed at
/// runtime; only the mutable fields of their [`WindowRecord`] change.
pub struct WindowDef {
    /// Stable window id.
    pub id: String,
    /// User-facing title.
    pub title: String,
    /// Icon identifier resolved by the presentation layer.
    pub icon_id: String,
    /// Whether the window starts open.
    pub open: bool,
}

impl WindowDef {
    /// Creates a registry entry that starts closed.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        icon_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon_id: icon_id.into(),
            open: false,
        }
    }

    /// Marks the entry as the initially open window.
    pub fn initially_open(mut self) -> Self {
        self.open = true;
        self
    }
}

/// Canonical window registry for the Finder desktop shell.
///
/// The Finder window is the primary window and starts open; everything else
/// starts closed.
pub fn default_registry() -> Vec<WindowDef> {
    vec![
        WindowDef::new("finder", "Finder", "folder").initially_open(),
        WindowDef::new("trash", "Trash", "trash"),
        WindowDef::new("notes", "Notes", "file-text"),
        WindowDef::new("settings", "Settings", "settings"),
        WindowDef::new("terminal", "Terminal", "terminal"),
        WindowDef::new("browser", "Browser", "globe"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Mutable state for one registered window.
pub struct WindowRecord {
    /// Stable id assigned at registration.
    pub id: String,
    /// User-facing title.
    pub title: String,
    /// Icon identifier resolved by the presentation layer.
    pub icon_id: String,
    /// Whether the window is open; `minimized`/`maximized` are meaningful
    /// only while this is `true`.
    pub is_open: bool,
    /// Whether the window is minimized.
    pub minimized: bool,
    /// Whether the window is maximized.
    pub maximized: bool,
    /// Window geometry; preserved across close/reopen.
    pub rect: WindowRect,
    /// Stacking rank. Relative order only, not contiguous.
    pub z_index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Window-manager state: the window set plus the z allocation counter.
pub struct DesktopState {
    /// Next z value to hand out. Strictly increasing for the lifetime of the
    /// state; never reset per window.
    pub next_z: u32,
    /// All registered windows.
    pub windows: Vec<WindowRecord>,
}

impl DesktopState {
    /// Seeds window records from a static registry, assigning cascading
    /// non-overlapping positions derived from the viewport and window index.
    pub fn register(defs: Vec<WindowDef>, viewport: Viewport) -> Self {
        let w = DEFAULT_WINDOW_WIDTH.min(viewport.width - VIEWPORT_MARGIN_X);
        let h = DEFAULT_WINDOW_HEIGHT.min(viewport.height - VIEWPORT_MARGIN_Y);

        let mut state = Self {
            next_z: 1,
            windows: Vec::with_capacity(defs.len()),
        };
        for (i, def) in defs.into_iter().enumerate() {
            let offset = CASCADE_STEP * i as i32;
            let rect = WindowRect {
                x: (CASCADE_ORIGIN_X + offset).min(viewport.width - w - EDGE_MARGIN_X),
                y: (CASCADE_ORIGIN_Y + offset).min(viewport.height - h - EDGE_MARGIN_Y),
                w,
                h,
            };
            let z_index = state.alloc_z();
            state.windows.push(WindowRecord {
                id: def.id,
                title: def.title,
                icon_id: def.icon_id,
                is_open: def.open,
                minimized: false,
                maximized: false,
                rect,
                z_index,
            });
        }
        state
    }

    /// Returns the window with `id`, if registered.
    pub fn window(&self, id: &str) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Returns the ids of open windows, front-most last.
    pub fn open_window_ids(&self) -> Vec<&str> {
        let mut open: Vec<&WindowRecord> = self.windows.iter().filter(|w| w.is_open).collect();
        open.sort_by_key(|w| w.z_index);
        open.into_iter().map(|w| w.id.as_str()).collect()
    }

    /// Consumes and returns the next z value.
    pub(crate) fn alloc_z(&mut self) -> u32 {
        let z = self.next_z;
        self.next_z = self.next_z.saturating_add(1);
        z
    }
}

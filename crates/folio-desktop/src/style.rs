//! Fixed chrome metrics and CRT overlay flags
//!
//! The shell reasons about these for hit testing and layout; the host uses
//! the same numbers to draw the chrome so the two can never disagree.

use serde::Serialize;

/// CRT screen treatment toggles for the host renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CrtOverlay {
    pub scanlines: bool,
    pub rgb_shift: bool,
    pub vignette: bool,
    pub glow: bool,
}

/// Window and desktop chrome metrics, in screen pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FrameStyle {
    /// Draggable title bar height
    pub title_bar_height: f32,
    /// Square side of the minimize/maximize/close buttons
    pub button_size: f32,
    /// Gap between title-bar buttons
    pub button_gap: f32,
    /// Inset from the title bar's right edge to the close button
    pub button_inset: f32,
    /// File/Edit/View/Help strip height
    pub menu_bar_height: f32,
    /// Bottom status strip height
    pub status_bar_height: f32,
    /// Taskbar height; the work area excludes it
    pub taskbar_height: f32,
    /// Start menu width
    pub start_menu_width: f32,
    /// Desktop icon cell width
    pub icon_cell: f32,
    pub crt: CrtOverlay,
}

/// The single chrome style used everywhere
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 28.0,
    button_size: 21.0,
    button_gap: 2.0,
    button_inset: 2.0,
    menu_bar_height: 22.0,
    status_bar_height: 22.0,
    taskbar_height: 40.0,
    start_menu_width: 200.0,
    icon_cell: 70.0,
    crt: CrtOverlay {
        scanlines: true,
        rgb_shift: true,
        vignette: true,
        glow: true,
    },
};

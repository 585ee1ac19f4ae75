//! Pointer routing and the drag state machine
//!
//! The router holds at most one drag at a time. The shell decides *what* a
//! pointer-down means (button, title bar, content); the router only carries
//! the resulting drag across subsequent move events.

use folio_content::PanelKind;
use folio_math::Vec2;

/// A drag in progress
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    /// A window being moved by its title bar
    MoveWindow {
        kind: PanelKind,
        /// Pointer offset from the window's top-left at grab time
        grab_offset: Vec2,
    },
}

/// Whether an input event was consumed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    Handled,
    Unhandled,
}

/// Tracks the active drag
#[derive(Clone, Debug, Default)]
pub struct InputRouter {
    drag: Option<DragState>,
}

impl InputRouter {
    /// Create a router with no drag active
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin moving a window
    pub fn start_window_move(&mut self, kind: PanelKind, grab_offset: Vec2) {
        self.drag = Some(DragState::MoveWindow { kind, grab_offset });
    }

    /// The active drag, if any
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// End the active drag
    pub fn end_drag(&mut self) {
        self.drag = None;
    }
}

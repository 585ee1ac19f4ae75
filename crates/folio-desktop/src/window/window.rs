//! One open window

use serde::Serialize;

use folio_content::PanelKind;
use folio_math::{Rect, Size, Vec2};

/// In-memory descriptor of one open desktop window
///
/// Identity is the panel kind: the manager never holds two records with the
/// same kind. The z-index comes from a shared monotonic counter, so stacking
/// order is strictly by recency of focus.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WindowRecord {
    pub kind: PanelKind,
    pub title: String,
    pub position: Vec2,
    pub size: Size,
    pub z_index: u32,
    pub minimized: bool,
    pub maximized: bool,
}

impl WindowRecord {
    /// The window's own frame, ignoring maximization
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// The frame the window actually occupies on screen
    ///
    /// Maximized windows fill the work area; their stored position and size
    /// are untouched so restoring puts them back where they were.
    pub fn effective_rect(&self, work_area: Rect) -> Rect {
        if self.maximized {
            work_area
        } else {
            self.rect()
        }
    }
}

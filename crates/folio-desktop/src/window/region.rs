//! Window chrome hit testing

use folio_math::{Rect, Vec2};

use crate::style::FrameStyle;

/// Parts of a window a pointer can land on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// The draggable strip at the top
    TitleBar,
    MinimizeButton,
    MaximizeButton,
    CloseButton,
    /// Everything below the title bar
    Content,
}

impl WindowRegion {
    /// Classify a point against a window frame; `None` when outside
    ///
    /// Button order in the title bar, left to right: minimize, maximize,
    /// close, with close flush against the right edge.
    pub fn locate(frame: Rect, point: Vec2, style: &FrameStyle) -> Option<WindowRegion> {
        if !frame.contains(point) {
            return None;
        }

        if point.y >= frame.y + style.title_bar_height {
            return Some(WindowRegion::Content);
        }

        let close_left = frame.x + frame.width - style.button_inset - style.button_size;
        let maximize_left = close_left - style.button_gap - style.button_size;
        let minimize_left = maximize_left - style.button_gap - style.button_size;

        if point.x >= close_left {
            Some(WindowRegion::CloseButton)
        } else if point.x >= maximize_left {
            Some(WindowRegion::MaximizeButton)
        } else if point.x >= minimize_left {
            Some(WindowRegion::MinimizeButton)
        } else {
            Some(WindowRegion::TitleBar)
        }
    }
}

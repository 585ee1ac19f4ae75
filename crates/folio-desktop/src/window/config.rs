//! Per-panel window geometry

use folio_content::PanelKind;
use folio_math::{Rect, Size, Vec2};

use crate::style::FRAME_STYLE;

/// Geometry for a window about to open
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub size: Size,
    /// Fixed position, or `None` to cascade from recently opened windows
    pub position: Option<Vec2>,
}

impl WindowConfig {
    /// The configuration for a panel on a given screen
    ///
    /// Resume panels have fixed sizes and cascade; the browser takes 85% of
    /// the work area and opens centered in it.
    pub fn for_panel(kind: PanelKind, screen: Size) -> Self {
        let title = kind.title().to_string();
        match kind {
            PanelKind::Browser => {
                let work = work_area(screen);
                let size = Size::new(
                    (work.width * 0.85).floor(),
                    (work.height * 0.85).floor(),
                );
                let position = Vec2::new(
                    ((work.width - size.width) / 2.0).round(),
                    ((work.height - size.height) / 2.0).round(),
                );
                Self {
                    title,
                    size,
                    position: Some(position),
                }
            }
            PanelKind::About => Self {
                title,
                size: Size::new(450.0, 400.0),
                position: None,
            },
            PanelKind::Projects => Self {
                title,
                size: Size::new(550.0, 450.0),
                position: None,
            },
            PanelKind::Experience => Self {
                title,
                size: Size::new(500.0, 420.0),
                position: None,
            },
            PanelKind::Contact => Self {
                title,
                size: Size::new(400.0, 380.0),
                position: None,
            },
        }
    }
}

/// The screen minus the taskbar
pub fn work_area(screen: Size) -> Rect {
    Rect::new(
        0.0,
        0.0,
        screen.width,
        (screen.height - FRAME_STYLE.taskbar_height).max(0.0),
    )
}

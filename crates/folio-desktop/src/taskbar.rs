//! Taskbar entries and the start menu

use serde::Serialize;

use folio_content::PanelKind;

use crate::window::WindowManager;

/// One taskbar button
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TaskbarEntry {
    pub kind: PanelKind,
    pub title: String,
    pub minimized: bool,
    /// Focused and visible; the taskbar renders it pressed-in
    pub active: bool,
}

/// Build the taskbar button list, in window-open order
pub fn taskbar_entries(windows: &WindowManager) -> Vec<TaskbarEntry> {
    let focused = windows.focused();
    windows
        .all_windows()
        .iter()
        .map(|w| TaskbarEntry {
            kind: w.kind,
            title: w.title.clone(),
            minimized: w.minimized,
            active: focused == Some(w.kind) && !w.minimized,
        })
        .collect()
}

/// What a start menu row activates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StartMenuItem {
    Panel(PanelKind),
    Shutdown,
}

/// One start menu row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StartMenuEntry {
    pub item: StartMenuItem,
    pub label: &'static str,
    pub glyph: &'static str,
}

/// The start menu rows, top to bottom (hosts draw a divider before Shut Down)
pub fn start_menu() -> &'static [StartMenuEntry] {
    &[
        StartMenuEntry {
            item: StartMenuItem::Panel(PanelKind::About),
            label: "About Me",
            glyph: "📁",
        },
        StartMenuEntry {
            item: StartMenuItem::Panel(PanelKind::Projects),
            label: "Projects",
            glyph: "💾",
        },
        StartMenuEntry {
            item: StartMenuItem::Panel(PanelKind::Experience),
            label: "Experience",
            glyph: "📋",
        },
        StartMenuEntry {
            item: StartMenuItem::Panel(PanelKind::Contact),
            label: "Contact",
            glyph: "📧",
        },
        StartMenuEntry {
            item: StartMenuItem::Shutdown,
            label: "Shut Down...",
            glyph: "🔌",
        },
    ]
}

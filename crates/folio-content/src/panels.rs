//! Registry of openable desktop windows

use serde::{Deserialize, Serialize};

/// The fixed set of windows the desktop shell can open
///
/// Each kind identifies at most one open window at a time; opening an
/// already-open panel refocuses it instead of duplicating it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    /// The retro browser with the full portfolio site
    Browser,
    /// The About Me summary card
    About,
    /// The project explorer grid
    Projects,
    /// Work history and education
    Experience,
    /// Contact details
    Contact,
}

impl PanelKind {
    /// All panels, in menu order
    pub fn all() -> &'static [PanelKind] {
        &[
            PanelKind::Browser,
            PanelKind::About,
            PanelKind::Projects,
            PanelKind::Experience,
            PanelKind::Contact,
        ]
    }

    /// Window title bar text
    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::Browser => "Aakash Yadav - Portfolio",
            PanelKind::About => "About Me",
            PanelKind::Projects => "My Projects",
            PanelKind::Experience => "Work Experience",
            PanelKind::Contact => "Contact",
        }
    }

    /// Stable string ID
    pub fn id(&self) -> &'static str {
        match self {
            PanelKind::Browser => "browser",
            PanelKind::About => "about",
            PanelKind::Projects => "projects",
            PanelKind::Experience => "experience",
            PanelKind::Contact => "contact",
        }
    }

    /// Parse from a string ID
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "browser" => Some(PanelKind::Browser),
            "about" => Some(PanelKind::About),
            "projects" => Some(PanelKind::Projects),
            "experience" => Some(PanelKind::Experience),
            "contact" => Some(PanelKind::Contact),
            _ => None,
        }
    }
}

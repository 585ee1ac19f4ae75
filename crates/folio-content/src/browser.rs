//! Page model for the simulated retro browser window

use serde::{Deserialize, Serialize};

/// Pages reachable inside the browser panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserPage {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Contact,
}

impl BrowserPage {
    /// Pages shown in the navigation bar, in order (Home is implicit)
    pub fn nav() -> &'static [BrowserPage] {
        &[
            BrowserPage::About,
            BrowserPage::Experience,
            BrowserPage::Projects,
            BrowserPage::Contact,
        ]
    }

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            BrowserPage::Home => "HOME",
            BrowserPage::About => "ABOUT",
            BrowserPage::Experience => "EXPERIENCE",
            BrowserPage::Projects => "PROJECTS",
            BrowserPage::Contact => "CONTACT",
        }
    }

    /// Stable string ID
    pub fn id(&self) -> &'static str {
        match self {
            BrowserPage::Home => "home",
            BrowserPage::About => "about",
            BrowserPage::Experience => "experience",
            BrowserPage::Projects => "projects",
            BrowserPage::Contact => "contact",
        }
    }

    /// Parse from a string ID
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "home" => Some(BrowserPage::Home),
            "about" => Some(BrowserPage::About),
            "experience" => Some(BrowserPage::Experience),
            "projects" => Some(BrowserPage::Projects),
            "contact" => Some(BrowserPage::Contact),
            _ => None,
        }
    }

    /// The simulated address bar URL for this page
    pub fn url(&self) -> String {
        match self {
            BrowserPage::Home => "https://aakashyadav.dev/".to_string(),
            page => format!("https://aakashyadav.dev/{}", page.id()),
        }
    }
}

/// Navigation state of one browser window
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserState {
    page: BrowserPage,
}

impl BrowserState {
    /// Start on the home page
    pub fn new() -> Self {
        Self::default()
    }

    /// The current page
    pub fn page(&self) -> BrowserPage {
        self.page
    }

    /// Navigate to a page
    pub fn navigate(&mut self, page: BrowserPage) {
        self.page = page;
    }

    /// The Back button returns to home
    pub fn back_to_home(&mut self) {
        self.page = BrowserPage::Home;
    }
}

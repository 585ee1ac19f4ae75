//! Resume content and panel registry for Folio OS
//!
//! Everything the desktop shell can display lives here as plain static data:
//! the profile, projects, and work history shown inside the resume windows,
//! plus [`PanelKind`], the registry of openable windows, and [`BrowserPage`],
//! the page model of the simulated retro browser.
//!
//! This crate holds no behavior beyond browser navigation; hosts render the
//! records however they like.

mod browser;
mod experience;
mod panels;
mod profile;
mod projects;

pub use browser::{BrowserPage, BrowserState};
pub use experience::{Award, Education, Role, RoleProject};
pub use panels::PanelKind;
pub use profile::{Profile, SkillGroup};
pub use projects::Project;

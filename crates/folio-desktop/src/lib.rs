//! Retro desktop shell for Folio OS
//!
//! This crate provides the simulated operating-system half of the portfolio:
//! - Window management (open, close, minimize, maximize, focus, z-order)
//! - Title-bar dragging with hit-tested window chrome
//! - The BIOS-style boot sequence shown before the desktop comes up
//! - Desktop icons, the taskbar, and the start menu
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`window`]: window records, per-panel geometry, the manager, hit regions
//! - [`input`]: pointer routing and the drag state machine
//! - [`boot`]: the scripted boot-message reveal
//! - [`icons`] / [`taskbar`]: desktop chrome models
//! - [`shell`]: the engine coordinating all of the above
//!
//! ## Example
//!
//! ```rust
//! use folio_content::PanelKind;
//! use folio_desktop::DesktopShell;
//!
//! let mut shell = DesktopShell::new();
//! shell.init(800.0, 600.0, 0.0);
//! # let _ = shell.tick(5000.0);
//! shell.open_panel(PanelKind::About);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust core**: all state management is plain Rust, testable
//!    without a browser
//! 2. **Injected time**: the boot sequence and every timed behavior take a
//!    host `now_ms` for deterministic testing
//! 3. **One record per panel**: opening an open panel refocuses it; window
//!    identity is the panel kind itself

pub mod boot;
pub mod icons;
pub mod input;
pub mod taskbar;
pub mod window;

mod error;
mod shell;
mod style;

pub use boot::{BootEvent, BootSequence};
pub use error::{ShellError, ShellResult};
pub use icons::{desktop_icons, DesktopIcon, IconAction};
pub use input::{DragState, InputResult, InputRouter};
pub use shell::{
    BootView, DesktopShell, IconView, ShellEvent, ShellFrame, Stage, WindowView,
};
pub use style::{CrtOverlay, FrameStyle, FRAME_STYLE};
pub use taskbar::{start_menu, StartMenuEntry, StartMenuItem, TaskbarEntry};
pub use window::{WindowConfig, WindowManager, WindowRecord, WindowRegion};

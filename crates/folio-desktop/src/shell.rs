//! Desktop shell engine coordinating all components
//!
//! This is the main entry point for desktop operations, managing:
//! - Boot stage (BIOS lines, then the live desktop)
//! - Window manager (window CRUD, focus, z-order)
//! - Input router (title-bar drag state machine)
//! - Desktop chrome state (icon selection, start menu, browser navigation)
//!
//! Hosts call the pointer/taskbar/icon methods from their event handlers and
//! render [`ShellFrame`] snapshots; all mutation happens here.

use serde::Serialize;
use tracing::debug;

use folio_content::{BrowserPage, BrowserState, PanelKind};
use folio_math::{Rect, Size, Vec2};

use crate::boot::{BootEvent, BootSequence};
use crate::error::ShellResult;
use crate::icons::{desktop_icons, IconAction};
use crate::input::{DragState, InputResult, InputRouter};
use crate::style::{CrtOverlay, FRAME_STYLE};
use crate::taskbar::{taskbar_entries, StartMenuItem, TaskbarEntry};
use crate::window::{work_area, WindowManager, WindowRegion};

/// Desktop wallpaper asset path
pub const WALLPAPER: &str = "images/desktop-wallpaper-bliss.jpg";

/// Which screen the shell is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// BIOS lines rolling
    #[default]
    Booting,
    /// The live desktop
    Desktop,
}

/// Milestones from the shell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellEvent {
    /// Boot finished; the desktop is live
    BootFinished,
}

/// The simulated retro OS
#[derive(Clone, Debug, Default)]
pub struct DesktopShell {
    stage: Stage,
    screen: Size,
    boot: BootSequence,
    windows: WindowManager,
    input: InputRouter,
    start_menu_open: bool,
    selected_icon: Option<usize>,
    browser: BrowserState,
    initialized: bool,
}

impl DesktopShell {
    /// Create a shell that has not booted yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Power on with screen dimensions; starts the boot sequence. Idempotent.
    pub fn init(&mut self, width: f32, height: f32, now_ms: f64) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.screen = Size::new(width, height);
        self.boot.start(now_ms);
        debug!(width, height, "shell init");
    }

    /// Update screen dimensions (maximized windows follow automatically)
    pub fn resize(&mut self, width: f32, height: f32) {
        self.screen = Size::new(width, height);
    }

    /// Advance the boot sequence; on completion the browser opens centered
    pub fn tick(&mut self, now_ms: f64) -> Vec<ShellEvent> {
        let mut events = Vec::new();
        if self.stage == Stage::Booting {
            if let Some(BootEvent::Complete) = self.boot.tick(now_ms) {
                self.stage = Stage::Desktop;
                self.windows.open(PanelKind::Browser, self.screen);
                debug!("desktop live");
                events.push(ShellEvent::BootFinished);
            }
        }
        events
    }

    // =========================================================================
    // Window operations
    // =========================================================================

    /// Open a panel (closes the start menu)
    pub fn open_panel(&mut self, kind: PanelKind) {
        self.windows.open(kind, self.screen);
        self.start_menu_open = false;
    }

    /// Close a panel's window
    pub fn close_panel(&mut self, kind: PanelKind) -> ShellResult<()> {
        self.windows.close(kind)
    }

    /// Minimize a panel's window
    pub fn minimize_panel(&mut self, kind: PanelKind) -> ShellResult<()> {
        self.windows.minimize(kind)
    }

    /// Toggle a panel's window between maximized and restored
    pub fn toggle_maximize_panel(&mut self, kind: PanelKind) -> ShellResult<()> {
        self.windows.toggle_maximize(kind)
    }

    /// Focus a panel's window
    pub fn focus_panel(&mut self, kind: PanelKind) -> ShellResult<()> {
        self.windows.focus(kind)
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Handle pointer down in desktop coordinates
    pub fn pointer_down(&mut self, x: f32, y: f32) -> InputResult {
        if self.stage != Stage::Desktop {
            return InputResult::Unhandled;
        }

        // An open start menu swallows the click as its dismissal
        if self.start_menu_open {
            self.start_menu_open = false;
            return InputResult::Handled;
        }

        let point = Vec2::new(x, y);
        let work = work_area(self.screen);

        // Topmost window first
        let hit = self
            .windows
            .windows_by_z()
            .into_iter()
            .rev()
            .filter(|w| !w.minimized)
            .find_map(|w| {
                WindowRegion::locate(w.effective_rect(work), point, &FRAME_STYLE)
                    .map(|region| (w.kind, w.maximized, w.effective_rect(work), region))
            });

        let Some((kind, maximized, rect, region)) = hit else {
            // Desktop background: drop any icon selection
            self.selected_icon = None;
            return InputResult::Unhandled;
        };

        match region {
            WindowRegion::CloseButton => {
                let _ = self.windows.close(kind);
            }
            WindowRegion::MinimizeButton => {
                let _ = self.windows.minimize(kind);
            }
            WindowRegion::MaximizeButton => {
                let _ = self.windows.toggle_maximize(kind);
            }
            WindowRegion::TitleBar => {
                let _ = self.windows.focus(kind);
                if !maximized {
                    self.input
                        .start_window_move(kind, point - rect.position());
                }
            }
            WindowRegion::Content => {
                let _ = self.windows.focus(kind);
            }
        }
        InputResult::Handled
    }

    /// Handle pointer move; applies any active drag
    pub fn pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let Some(DragState::MoveWindow { kind, grab_offset }) = self.input.drag_state().copied()
        else {
            return InputResult::Unhandled;
        };

        let _ = self
            .windows
            .move_to(kind, Vec2::new(x, y) - grab_offset);
        InputResult::Handled
    }

    /// Handle pointer up; ends any active drag
    pub fn pointer_up(&mut self) -> InputResult {
        if self.input.is_dragging() {
            self.input.end_drag();
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    // =========================================================================
    // Desktop chrome
    // =========================================================================

    /// Single click selects (or toggles) an icon
    pub fn icon_click(&mut self, index: usize) {
        if index >= desktop_icons().len() {
            return;
        }
        self.selected_icon = if self.selected_icon == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Double click activates an icon
    pub fn icon_double_click(&mut self, index: usize) {
        let Some(icon) = desktop_icons().get(index) else {
            return;
        };
        if let IconAction::Open(kind) = icon.action {
            self.open_panel(kind);
        }
    }

    /// Taskbar button click: restore, minimize, or focus
    pub fn taskbar_click(&mut self, kind: PanelKind) {
        let Some(window) = self.windows.get(kind) else {
            return;
        };

        if window.minimized {
            self.windows.open(kind, self.screen);
        } else if self.windows.focused() == Some(kind) {
            let _ = self.windows.minimize(kind);
        } else {
            let _ = self.windows.focus(kind);
        }
    }

    /// Toggle the start menu
    pub fn start_toggle(&mut self) {
        self.start_menu_open = !self.start_menu_open;
    }

    /// Activate a start menu row
    pub fn start_menu_select(&mut self, item: StartMenuItem) {
        match item {
            StartMenuItem::Panel(kind) => self.open_panel(kind),
            // Shut Down only dismisses the menu; the machine is imaginary
            StartMenuItem::Shutdown => self.start_menu_open = false,
        }
    }

    // =========================================================================
    // Browser navigation
    // =========================================================================

    /// The page the browser panel is showing
    pub fn browser_page(&self) -> BrowserPage {
        self.browser.page()
    }

    /// Navigate the browser panel
    pub fn browser_navigate(&mut self, page: BrowserPage) {
        self.browser.navigate(page);
    }

    /// The browser's Back button
    pub fn browser_back(&mut self) {
        self.browser.back_to_home();
    }

    // =========================================================================
    // Render state
    // =========================================================================

    /// Snapshot everything the host needs to draw this frame
    pub fn frame(&self) -> ShellFrame {
        let work = work_area(self.screen);
        let focused = self.windows.focused();

        ShellFrame {
            stage: self.stage,
            boot: match self.stage {
                Stage::Booting => Some(BootView {
                    lines: self.boot.lines(),
                    progress: self.boot.progress(),
                }),
                Stage::Desktop => None,
            },
            wallpaper: WALLPAPER,
            work_area: work,
            icons: desktop_icons()
                .iter()
                .enumerate()
                .map(|(i, icon)| IconView {
                    label: icon.label,
                    image: icon.image,
                    selected: self.selected_icon == Some(i),
                })
                .collect(),
            windows: self
                .windows
                .windows_by_z()
                .into_iter()
                .map(|w| WindowView {
                    kind: w.kind,
                    title: w.title.clone(),
                    rect: w.effective_rect(work),
                    z_index: w.z_index,
                    minimized: w.minimized,
                    maximized: w.maximized,
                    focused: focused == Some(w.kind),
                })
                .collect(),
            taskbar: taskbar_entries(&self.windows),
            start_menu_open: self.start_menu_open,
            browser_page: self.browser.page(),
            browser_url: self.browser.page().url(),
            crt: FRAME_STYLE.crt,
        }
    }

    /// The window manager, for assertions and advanced hosts
    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    /// The current stage
    pub fn stage(&self) -> Stage {
        self.stage
    }
}

/// Boot screen render state
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BootView {
    pub lines: Vec<&'static str>,
    pub progress: f32,
}

/// One icon's render state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IconView {
    pub label: &'static str,
    pub image: &'static str,
    pub selected: bool,
}

/// One window's render state, with its effective on-screen rect
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WindowView {
    pub kind: PanelKind,
    pub title: String,
    pub rect: Rect,
    pub z_index: u32,
    pub minimized: bool,
    pub maximized: bool,
    pub focused: bool,
}

/// Everything the host needs to draw the shell
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShellFrame {
    pub stage: Stage,
    pub boot: Option<BootView>,
    pub wallpaper: &'static str,
    pub work_area: Rect,
    pub icons: Vec<IconView>,
    /// Bottom-to-top by z; minimized windows ride along flagged
    pub windows: Vec<WindowView>,
    pub taskbar: Vec<TaskbarEntry>,
    pub start_menu_open: bool,
    pub browser_page: BrowserPage,
    pub browser_url: String,
    pub crt: CrtOverlay,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A shell booted straight through to the live desktop
    fn live_shell() -> DesktopShell {
        let mut shell = DesktopShell::new();
        shell.init(800.0, 600.0, 0.0);
        let events = shell.tick(10_000.0);
        assert_eq!(events, vec![ShellEvent::BootFinished]);
        shell
    }

    #[test]
    fn test_boot_then_browser_auto_opens() {
        let shell = live_shell();
        assert_eq!(shell.stage(), Stage::Desktop);
        assert!(shell.windows().is_open(PanelKind::Browser));
        assert_eq!(shell.windows().focused(), Some(PanelKind::Browser));
    }

    #[test]
    fn test_boot_frame_shows_lines() {
        let mut shell = DesktopShell::new();
        shell.init(800.0, 600.0, 0.0);
        shell.tick(350.0);

        let frame = shell.frame();
        assert_eq!(frame.stage, Stage::Booting);
        let boot = frame.boot.unwrap();
        assert_eq!(boot.lines.len(), 4);
        assert!(boot.progress > 0.0);
    }

    #[test]
    fn test_pointer_ignored_while_booting() {
        let mut shell = DesktopShell::new();
        shell.init(800.0, 600.0, 0.0);
        assert_eq!(shell.pointer_down(10.0, 10.0), InputResult::Unhandled);
    }

    #[test]
    fn test_title_bar_drag_moves_window() {
        let mut shell = live_shell();
        shell.open_panel(PanelKind::About);
        let start = shell.windows().get(PanelKind::About).unwrap().position;

        // Grab the title bar 10px into the window
        assert_eq!(
            shell.pointer_down(start.x + 10.0, start.y + 10.0),
            InputResult::Handled
        );
        shell.pointer_move(start.x + 110.0, start.y + 60.0);
        shell.pointer_up();

        let moved = shell.windows().get(PanelKind::About).unwrap().position;
        assert_eq!(moved, start + Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_close_button_closes_topmost() {
        let mut shell = live_shell();
        shell.open_panel(PanelKind::About);
        let rect = shell
            .windows()
            .get(PanelKind::About)
            .unwrap()
            .rect();

        // Click inside the close button
        let x = rect.x + rect.width - FRAME_STYLE.button_inset - 1.0;
        let y = rect.y + 10.0;
        assert_eq!(shell.pointer_down(x, y), InputResult::Handled);
        assert!(!shell.windows().is_open(PanelKind::About));
    }

    #[test]
    fn test_content_click_focuses() {
        let mut shell = live_shell();
        shell.open_panel(PanelKind::About);
        shell.open_panel(PanelKind::Contact);
        assert_eq!(shell.windows().focused(), Some(PanelKind::Contact));

        // About cascades to (80, 60); click its content strip left of
        // Contact at (110, 90)
        shell.pointer_down(95.0, 100.0);
        assert_eq!(shell.windows().focused(), Some(PanelKind::About));
    }

    #[test]
    fn test_maximized_window_not_draggable() {
        let mut shell = live_shell();
        shell.open_panel(PanelKind::About);
        shell.toggle_maximize_panel(PanelKind::About).unwrap();

        shell.pointer_down(300.0, 10.0);
        assert_eq!(shell.pointer_move(400.0, 50.0), InputResult::Unhandled);
    }

    #[test]
    fn test_taskbar_click_cycle() {
        let mut shell = live_shell();
        shell.open_panel(PanelKind::About);

        // Active → minimize
        shell.taskbar_click(PanelKind::About);
        assert!(shell.windows().get(PanelKind::About).unwrap().minimized);

        // Minimized → restore + focus
        shell.taskbar_click(PanelKind::About);
        let w = shell.windows().get(PanelKind::About).unwrap();
        assert!(!w.minimized);
        assert_eq!(shell.windows().focused(), Some(PanelKind::About));

        // Unfocused → focus
        shell.open_panel(PanelKind::Contact);
        shell.taskbar_click(PanelKind::About);
        assert_eq!(shell.windows().focused(), Some(PanelKind::About));
    }

    #[test]
    fn test_start_menu_open_close_and_select() {
        let mut shell = live_shell();

        shell.start_toggle();
        assert!(shell.frame().start_menu_open);

        // Any click dismisses the menu without touching windows
        let count = shell.windows().count();
        assert_eq!(shell.pointer_down(400.0, 300.0), InputResult::Handled);
        assert!(!shell.frame().start_menu_open);
        assert_eq!(shell.windows().count(), count);

        shell.start_toggle();
        shell.start_menu_select(StartMenuItem::Panel(PanelKind::Projects));
        assert!(shell.windows().is_open(PanelKind::Projects));
        assert!(!shell.frame().start_menu_open);

        shell.start_toggle();
        shell.start_menu_select(StartMenuItem::Shutdown);
        assert!(!shell.frame().start_menu_open);
    }

    #[test]
    fn test_icon_select_and_activate() {
        let mut shell = live_shell();

        shell.icon_click(1);
        assert!(shell.frame().icons[1].selected);

        // Background click (clear of the browser window) drops the selection
        shell.pointer_down(780.0, 550.0);
        assert!(!shell.frame().icons[1].selected);

        // Double-click opens About Me
        shell.icon_double_click(1);
        assert!(shell.windows().is_open(PanelKind::About));

        // The recycle bin does nothing
        let count = shell.windows().count();
        shell.icon_double_click(5);
        assert_eq!(shell.windows().count(), count);
    }

    #[test]
    fn test_browser_navigation_reflected_in_frame() {
        let mut shell = live_shell();
        assert_eq!(shell.frame().browser_url, "https://aakashyadav.dev/");

        shell.browser_navigate(BrowserPage::Projects);
        assert_eq!(
            shell.frame().browser_url,
            "https://aakashyadav.dev/projects"
        );

        shell.browser_back();
        assert_eq!(shell.browser_page(), BrowserPage::Home);
    }

    #[test]
    fn test_frame_serializes() {
        let shell = live_shell();
        let json = serde_json::to_string(&shell.frame()).unwrap();
        assert!(json.contains("\"stage\":\"desktop\""));
        assert!(json.contains("wallpaper"));
    }
}

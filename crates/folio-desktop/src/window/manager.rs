//! Window lifecycle, focus, and z-order

use tracing::debug;

use folio_content::PanelKind;
use folio_math::{Size, Vec2};

use crate::error::{ShellError, ShellResult};
use crate::window::config::WindowConfig;
use crate::window::window::WindowRecord;

/// Where cascading windows start
const CASCADE_ORIGIN: Vec2 = Vec2::new(50.0, 30.0);

/// Diagonal offset between cascaded windows
const CASCADE_STEP: f32 = 30.0;

/// Cascade wraps after this many open windows
const CASCADE_WRAP: usize = 5;

/// The in-memory list of open windows
///
/// Invariants:
/// - at most one record per [`PanelKind`]
/// - the focused window (if any) holds the maximum z-index
/// - the z counter only ever grows, so stacking is strictly by recency
#[derive(Clone, Debug, Default)]
pub struct WindowManager {
    windows: Vec<WindowRecord>,
    focused: Option<PanelKind>,
    next_z: u32,
}

impl WindowManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            focused: None,
            next_z: 1,
        }
    }

    /// Open a panel's window, or refocus it if it is already open
    ///
    /// Re-opening clears minimization, so a taskbar-hidden window comes back.
    pub fn open(&mut self, kind: PanelKind, screen: Size) {
        if self.get(kind).is_some() {
            if let Some(w) = self.get_mut(kind) {
                w.minimized = false;
            }
            let _ = self.focus(kind);
            return;
        }

        let config = WindowConfig::for_panel(kind, screen);
        let position = config.position.unwrap_or_else(|| {
            let offset = (self.windows.len() % CASCADE_WRAP) as f32 * CASCADE_STEP;
            CASCADE_ORIGIN + Vec2::new(offset, offset)
        });

        debug!(panel = kind.id(), "open window");
        self.windows.push(WindowRecord {
            kind,
            title: config.title,
            position,
            size: config.size,
            z_index: self.next_z,
            minimized: false,
            maximized: false,
        });
        self.next_z += 1;
        self.focused = Some(kind);
    }

    /// Close a panel's window, removing exactly that record
    pub fn close(&mut self, kind: PanelKind) -> ShellResult<()> {
        let idx = self
            .windows
            .iter()
            .position(|w| w.kind == kind)
            .ok_or(ShellError::WindowNotFound(kind))?;

        debug!(panel = kind.id(), "close window");
        self.windows.remove(idx);
        self.focused = None;
        Ok(())
    }

    /// Minimize a window to the taskbar
    pub fn minimize(&mut self, kind: PanelKind) -> ShellResult<()> {
        let w = self
            .get_mut(kind)
            .ok_or(ShellError::WindowNotFound(kind))?;
        w.minimized = true;
        self.focused = None;
        Ok(())
    }

    /// Flip a window between maximized and restored
    pub fn toggle_maximize(&mut self, kind: PanelKind) -> ShellResult<()> {
        let w = self
            .get_mut(kind)
            .ok_or(ShellError::WindowNotFound(kind))?;
        w.maximized = !w.maximized;
        Ok(())
    }

    /// Bring a window to the top of the stack
    pub fn focus(&mut self, kind: PanelKind) -> ShellResult<()> {
        let next_z = self.next_z;
        let w = self
            .get_mut(kind)
            .ok_or(ShellError::WindowNotFound(kind))?;
        w.z_index = next_z;
        self.next_z += 1;
        self.focused = Some(kind);
        Ok(())
    }

    /// Move a window (drag target); y is clamped so the title bar stays
    /// reachable
    pub fn move_to(&mut self, kind: PanelKind, position: Vec2) -> ShellResult<()> {
        let w = self
            .get_mut(kind)
            .ok_or(ShellError::WindowNotFound(kind))?;
        w.position = Vec2::new(position.x, position.y.max(0.0));
        Ok(())
    }

    /// Look up a window
    pub fn get(&self, kind: PanelKind) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.kind == kind)
    }

    fn get_mut(&mut self, kind: PanelKind) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.kind == kind)
    }

    /// Whether a panel has an open window (minimized counts as open)
    pub fn is_open(&self, kind: PanelKind) -> bool {
        self.get(kind).is_some()
    }

    /// The focused panel, if any
    pub fn focused(&self) -> Option<PanelKind> {
        self.focused
    }

    /// All windows sorted bottom-to-top by z-index
    pub fn windows_by_z(&self) -> Vec<&WindowRecord> {
        let mut sorted: Vec<&WindowRecord> = self.windows.iter().collect();
        sorted.sort_by_key(|w| w.z_index);
        sorted
    }

    /// All windows in insertion order
    pub fn all_windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Number of open windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Size = Size::new(800.0, 600.0);

    #[test]
    fn test_open_twice_does_not_duplicate() {
        let mut wm = WindowManager::new();

        wm.open(PanelKind::About, SCREEN);
        wm.open(PanelKind::About, SCREEN);

        assert_eq!(wm.count(), 1);
    }

    #[test]
    fn test_open_restores_minimized() {
        let mut wm = WindowManager::new();
        wm.open(PanelKind::About, SCREEN);
        wm.minimize(PanelKind::About).unwrap();
        assert_eq!(wm.focused(), None);

        wm.open(PanelKind::About, SCREEN);
        let w = wm.get(PanelKind::About).unwrap();
        assert!(!w.minimized);
        assert_eq!(wm.focused(), Some(PanelKind::About));
    }

    #[test]
    fn test_close_removes_exactly_that_record() {
        let mut wm = WindowManager::new();
        wm.open(PanelKind::About, SCREEN);
        wm.open(PanelKind::Projects, SCREEN);

        wm.close(PanelKind::About).unwrap();

        assert!(!wm.is_open(PanelKind::About));
        assert!(wm.is_open(PanelKind::Projects));
        assert_eq!(wm.close(PanelKind::About), Err(ShellError::WindowNotFound(PanelKind::About)));
    }

    #[test]
    fn test_focus_takes_max_z() {
        let mut wm = WindowManager::new();
        wm.open(PanelKind::About, SCREEN);
        wm.open(PanelKind::Projects, SCREEN);
        wm.open(PanelKind::Contact, SCREEN);

        wm.focus(PanelKind::About).unwrap();

        let about_z = wm.get(PanelKind::About).unwrap().z_index;
        for w in wm.all_windows() {
            if w.kind != PanelKind::About {
                assert!(w.z_index < about_z);
            }
        }
        assert_eq!(wm.windows_by_z().last().unwrap().kind, PanelKind::About);
    }

    #[test]
    fn test_z_counter_never_reused() {
        let mut wm = WindowManager::new();
        wm.open(PanelKind::About, SCREEN);
        let first_z = wm.get(PanelKind::About).unwrap().z_index;
        wm.close(PanelKind::About).unwrap();

        wm.open(PanelKind::About, SCREEN);
        assert!(wm.get(PanelKind::About).unwrap().z_index > first_z);
    }

    #[test]
    fn test_cascade_positions() {
        let mut wm = WindowManager::new();
        wm.open(PanelKind::About, SCREEN);
        wm.open(PanelKind::Projects, SCREEN);

        assert_eq!(
            wm.get(PanelKind::About).unwrap().position,
            Vec2::new(50.0, 30.0)
        );
        assert_eq!(
            wm.get(PanelKind::Projects).unwrap().position,
            Vec2::new(80.0, 60.0)
        );
    }

    #[test]
    fn test_move_clamps_y() {
        let mut wm = WindowManager::new();
        wm.open(PanelKind::About, SCREEN);

        wm.move_to(PanelKind::About, Vec2::new(-20.0, -50.0)).unwrap();
        let w = wm.get(PanelKind::About).unwrap();
        assert_eq!(w.position, Vec2::new(-20.0, 0.0));
    }

    #[test]
    fn test_ops_on_missing_window_fail() {
        let mut wm = WindowManager::new();
        let missing = PanelKind::Projects;

        assert!(wm.minimize(missing).is_err());
        assert!(wm.toggle_maximize(missing).is_err());
        assert!(wm.focus(missing).is_err());
        assert!(wm.move_to(missing, Vec2::ZERO).is_err());
    }
}

//! The pre-scene loading gate
//!
//! A black BIOS screen rolls scripted lines while the host's loader pulls
//! down the 3D assets. Three conditions open the gate, in any order: the
//! text finishes, the assets finish, and the visitor clicks. The click
//! doubles as the browser's user-gesture requirement for audio, so it is
//! never skipped.

use serde::Serialize;
use tracing::debug;

use folio_desktop::boot::BootMessage;

/// The loading screen script
pub const LOADING_SCRIPT: &[BootMessage] = &[
    BootMessage { text: "AAKASH PORTFOLIO BIOS v2.0", delay_ms: 0.0 },
    BootMessage { text: "Copyright (C) 2024 Aakash Yadav", delay_ms: 200.0 },
    BootMessage { text: "", delay_ms: 300.0 },
    BootMessage { text: "Initializing AI Systems...", delay_ms: 400.0 },
    BootMessage { text: "Loading Neural Networks... OK", delay_ms: 700.0 },
    BootMessage { text: "Calibrating LLM Models... OK", delay_ms: 1000.0 },
    BootMessage { text: "Connecting to Cloud Services... OK", delay_ms: 1300.0 },
    BootMessage { text: "", delay_ms: 1400.0 },
    BootMessage { text: "Starting Portfolio Environment...", delay_ms: 1600.0 },
];

/// Beat after the last line before the text counts as finished
const TEXT_COMPLETE_HOLD_MS: f64 = 500.0;

/// Fired once when all three gate conditions are met
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum LoadingEvent {
    Complete,
}

/// The hint line under the progress bar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingPrompt {
    /// Boot text still rolling: a quiet "click to enable sound" hint
    SoundHint,
    /// Text done, assets still coming in
    PreparingAssets,
    /// Everything ready; waiting on the visitor
    ClickToEnter,
    /// Clicked; the gate opens on the next tick that finds assets ready
    None,
}

/// Render state for the loading screen
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoadingView {
    pub lines: Vec<&'static str>,
    /// Asset progress percentage for the bar
    pub progress: f32,
    pub prompt: LoadingPrompt,
    /// The visitor has clicked, unlocking audio
    pub sound_enabled: bool,
}

/// The gate's state machine
#[derive(Clone, Debug, Default)]
pub struct LoadingScreen {
    started_at_ms: Option<f64>,
    revealed: usize,
    text_complete: bool,
    clicked: bool,
    complete_fired: bool,
}

impl LoadingScreen {
    /// Create an unstarted gate
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the text rolling. Idempotent.
    pub fn begin(&mut self, now_ms: f64) {
        if self.started_at_ms.is_none() {
            debug!("loading screen start");
            self.started_at_ms = Some(now_ms);
        }
    }

    /// Record the visitor's click
    pub fn click(&mut self) {
        self.clicked = true;
    }

    /// Advance the text and test the gate
    ///
    /// `assets_ready` comes from the asset tracker. Fires
    /// [`LoadingEvent::Complete`] exactly once, on the first tick where the
    /// text is done, the assets are in, and the visitor has clicked.
    pub fn tick(&mut self, now_ms: f64, assets_ready: bool) -> Option<LoadingEvent> {
        let started_at = self.started_at_ms?;
        let elapsed = now_ms - started_at;

        while self.revealed < LOADING_SCRIPT.len()
            && LOADING_SCRIPT[self.revealed].delay_ms <= elapsed
        {
            self.revealed += 1;
        }

        if !self.text_complete {
            let last_delay = LOADING_SCRIPT.last().map(|m| m.delay_ms).unwrap_or(0.0);
            if self.revealed == LOADING_SCRIPT.len()
                && elapsed >= last_delay + TEXT_COMPLETE_HOLD_MS
            {
                self.text_complete = true;
            }
        }

        if !self.complete_fired && self.text_complete && assets_ready && self.clicked {
            self.complete_fired = true;
            debug!("loading gate open");
            return Some(LoadingEvent::Complete);
        }
        None
    }

    /// The lines revealed so far
    pub fn lines(&self) -> Vec<&'static str> {
        LOADING_SCRIPT[..self.revealed].iter().map(|m| m.text).collect()
    }

    /// Whether the boot text has finished
    pub fn text_complete(&self) -> bool {
        self.text_complete
    }

    /// Whether the visitor has clicked
    pub fn clicked(&self) -> bool {
        self.clicked
    }

    /// Whether the gate has opened
    pub fn is_complete(&self) -> bool {
        self.complete_fired
    }

    /// The hint to show under the progress bar
    pub fn prompt(&self, assets_ready: bool) -> LoadingPrompt {
        if self.text_complete && assets_ready && !self.clicked {
            LoadingPrompt::ClickToEnter
        } else if self.text_complete && !assets_ready {
            LoadingPrompt::PreparingAssets
        } else if !self.text_complete && !self.clicked {
            LoadingPrompt::SoundHint
        } else {
            LoadingPrompt::None
        }
    }

    /// Assemble render state
    pub fn view(&self, asset_progress: f32, assets_ready: bool) -> LoadingView {
        LoadingView {
            lines: self.lines(),
            progress: asset_progress,
            prompt: self.prompt(assets_ready),
            sound_enabled: self.clicked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Roll the full script plus the completion hold
    fn finish_text(screen: &mut LoadingScreen) -> f64 {
        screen.begin(0.0);
        let done_at = 1600.0 + TEXT_COMPLETE_HOLD_MS;
        screen.tick(done_at, false);
        assert!(screen.text_complete());
        done_at
    }

    #[test]
    fn test_lines_roll_on_schedule() {
        let mut screen = LoadingScreen::new();
        screen.begin(0.0);

        screen.tick(0.0, false);
        assert_eq!(screen.lines(), vec!["AAKASH PORTFOLIO BIOS v2.0"]);

        screen.tick(450.0, false);
        assert_eq!(screen.lines().len(), 4);

        screen.tick(1600.0, false);
        assert_eq!(screen.lines().len(), LOADING_SCRIPT.len());
        assert!(!screen.text_complete());
    }

    #[test]
    fn test_gate_needs_all_three_conditions() {
        let mut screen = LoadingScreen::new();
        let done_at = finish_text(&mut screen);

        // Text done, assets done, no click yet
        assert_eq!(screen.tick(done_at + 10.0, true), None);
        assert_eq!(screen.prompt(true), LoadingPrompt::ClickToEnter);

        // Click opens the gate on the next tick
        screen.click();
        assert_eq!(
            screen.tick(done_at + 20.0, true),
            Some(LoadingEvent::Complete)
        );
        assert!(screen.is_complete());

        // Only once
        assert_eq!(screen.tick(done_at + 30.0, true), None);
    }

    #[test]
    fn test_click_before_ready_waits() {
        let mut screen = LoadingScreen::new();
        screen.begin(0.0);
        screen.click();

        assert_eq!(screen.tick(500.0, false), None);
        let done_at = 1600.0 + TEXT_COMPLETE_HOLD_MS;
        assert_eq!(screen.tick(done_at, false), None);

        // Assets arrive last; the gate opens immediately
        assert_eq!(screen.tick(done_at + 50.0, true), Some(LoadingEvent::Complete));
    }

    #[test]
    fn test_prompts_follow_state() {
        let mut screen = LoadingScreen::new();
        screen.begin(0.0);
        screen.tick(100.0, false);
        assert_eq!(screen.prompt(false), LoadingPrompt::SoundHint);

        let done_at = finish_text(&mut screen);
        assert_eq!(screen.prompt(false), LoadingPrompt::PreparingAssets);

        screen.click();
        screen.tick(done_at + 10.0, false);
        assert_eq!(screen.prompt(false), LoadingPrompt::None);
    }

    #[test]
    fn test_view_carries_progress_and_sound_flag() {
        let mut screen = LoadingScreen::new();
        screen.begin(0.0);
        screen.tick(100.0, false);

        let view = screen.view(37.5, false);
        assert_eq!(view.progress, 37.5);
        assert!(!view.sound_enabled);

        screen.click();
        assert!(screen.view(37.5, false).sound_enabled);
    }
}

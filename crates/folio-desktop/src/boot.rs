//! The BIOS-style boot sequence
//!
//! A fixed script of lines revealed on a timetable, with a progress bar that
//! tracks how many have appeared. The sequence completes a beat after the
//! last line so the finished screen is readable for a moment.

use serde::Serialize;
use tracing::debug;

/// One scripted boot line
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BootMessage {
    pub text: &'static str,
    /// Reveal time, milliseconds after the sequence starts
    pub delay_ms: f64,
}

/// The portfolio BIOS script
pub const BOOT_SCRIPT: &[BootMessage] = &[
    BootMessage { text: "AAKASH BIOS (C) 2025 Aakash Yadav", delay_ms: 0.0 },
    BootMessage { text: "AI PORTFOLIO SYSTEM v2.0", delay_ms: 100.0 },
    BootMessage { text: "", delay_ms: 200.0 },
    BootMessage { text: "CPU: AI Engineer Brain @ 4.0GHz", delay_ms: 300.0 },
    BootMessage { text: "Memory Test: 4 Years Experience... OK", delay_ms: 500.0 },
    BootMessage { text: "Loading Skills: LLM, NLP, ML, Cloud... OK", delay_ms: 700.0 },
    BootMessage { text: "", delay_ms: 800.0 },
    BootMessage { text: "Detecting Projects... 5 Found", delay_ms: 900.0 },
    BootMessage { text: "Detecting Certifications... Loaded", delay_ms: 1000.0 },
    BootMessage { text: "Connecting to Innovation Engine... Ready", delay_ms: 1100.0 },
    BootMessage { text: "", delay_ms: 1200.0 },
    BootMessage { text: "Loading Aakash's Portfolio...", delay_ms: 1400.0 },
    BootMessage { text: "", delay_ms: 1600.0 },
    BootMessage { text: "Starting Desktop Environment...", delay_ms: 1800.0 },
];

/// Hold on the finished screen before completing
const COMPLETE_HOLD_MS: f64 = 800.0;

/// Fired once when the sequence is done
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BootEvent {
    Complete,
}

/// Scripted line reveal over an injected clock
#[derive(Clone, Debug, Default)]
pub struct BootSequence {
    started_at_ms: Option<f64>,
    revealed: usize,
    complete_fired: bool,
}

impl BootSequence {
    /// Create an unstarted sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock. Idempotent.
    pub fn start(&mut self, now_ms: f64) {
        if self.started_at_ms.is_none() {
            debug!("boot sequence start");
            self.started_at_ms = Some(now_ms);
        }
    }

    /// Reveal any lines that are due; fires [`BootEvent::Complete`] once
    pub fn tick(&mut self, now_ms: f64) -> Option<BootEvent> {
        let started_at = self.started_at_ms?;
        let elapsed = now_ms - started_at;

        while self.revealed < BOOT_SCRIPT.len()
            && BOOT_SCRIPT[self.revealed].delay_ms <= elapsed
        {
            self.revealed += 1;
        }

        let last_delay = match BOOT_SCRIPT.last() {
            Some(last) => last.delay_ms,
            None => return None,
        };
        if !self.complete_fired
            && self.revealed == BOOT_SCRIPT.len()
            && elapsed >= last_delay + COMPLETE_HOLD_MS
        {
            self.complete_fired = true;
            debug!("boot sequence complete");
            return Some(BootEvent::Complete);
        }
        None
    }

    /// The lines revealed so far, in order
    pub fn lines(&self) -> Vec<&'static str> {
        BOOT_SCRIPT[..self.revealed].iter().map(|m| m.text).collect()
    }

    /// Progress percentage in [0, 100]
    pub fn progress(&self) -> f32 {
        if BOOT_SCRIPT.is_empty() {
            return 100.0;
        }
        self.revealed as f32 / BOOT_SCRIPT.len() as f32 * 100.0
    }

    /// Whether the sequence has finished
    pub fn is_complete(&self) -> bool {
        self.complete_fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_before_start() {
        let mut boot = BootSequence::new();
        assert_eq!(boot.tick(10_000.0), None);
        assert!(boot.lines().is_empty());
        assert_eq!(boot.progress(), 0.0);
    }

    #[test]
    fn test_lines_reveal_on_schedule() {
        let mut boot = BootSequence::new();
        boot.start(1000.0);

        boot.tick(1000.0);
        assert_eq!(boot.lines(), vec!["AAKASH BIOS (C) 2025 Aakash Yadav"]);

        boot.tick(1000.0 + 250.0);
        assert_eq!(boot.lines().len(), 3);

        boot.tick(1000.0 + 1800.0);
        assert_eq!(boot.lines().len(), BOOT_SCRIPT.len());
        assert_eq!(boot.progress(), 100.0);
    }

    #[test]
    fn test_stale_clock_reveals_nothing() {
        let mut boot = BootSequence::new();
        boot.start(5000.0);

        boot.tick(4000.0);
        assert!(boot.lines().is_empty());
    }

    #[test]
    fn test_complete_fires_once_after_hold() {
        let mut boot = BootSequence::new();
        boot.start(0.0);

        assert_eq!(boot.tick(1800.0), None);
        assert_eq!(boot.tick(2599.0), None);
        assert_eq!(boot.tick(2600.0), Some(BootEvent::Complete));
        assert!(boot.is_complete());
        assert_eq!(boot.tick(3000.0), None);
    }

    #[test]
    fn test_start_idempotent() {
        let mut boot = BootSequence::new();
        boot.start(0.0);
        boot.tick(500.0);
        let revealed = boot.lines().len();

        boot.start(10_000.0);
        boot.tick(500.0);
        assert_eq!(boot.lines().len(), revealed);
    }
}

//! The frame-driven scene coordinator
//!
//! The composer assembles the animator, camera rig, asset tracker, audio
//! mixer, and stage descriptors into one unit and runs the scripted hero
//! sequence: start signal → walk + slow camera approach → seated → monitor
//! zoom → startup chime and boot splash → retro desktop. The dance break and
//! the reset-view shortcut hang off the same unit.
//!
//! All cross-cutting reactions (camera follows animator, audio follows
//! camera) are wired here; the sub-modules never talk to each other.

use serde::Serialize;
use tracing::debug;

use crate::animator::{AnimatorEvent, CharacterAnimator};
use crate::audio::{AudioCommand, AudioCue, AudioMixer};
use crate::camera::{CameraEvent, CameraRig, DeviceClass, ViewTarget, APPROACH_STEP};
use crate::loading::{AssetTracker, LoadEvent};
use crate::stage::StageSettings;

/// How long the boot splash holds before the desktop appears
pub const BOOT_SPLASH_MS: f64 = 2000.0;

/// Pause between the desktop appearing and the monitor going fullscreen
pub const FULLSCREEN_DELAY_MS: f64 = 100.0;

/// What the monitor surface is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "state")]
pub enum MonitorOverlay {
    /// Plain 3D monitor, no overlay
    #[default]
    Hidden,
    /// The animated boot splash
    BootSplash,
    /// The retro desktop; once `fullscreen`, it covers the whole viewport
    Desktop { fullscreen: bool },
}

/// Milestones the host (and the app layer) react to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneEvent {
    /// The character sat down and started typing
    Seated,
    /// The camera finished its first zoom onto the monitor
    ZoomComplete,
    /// The boot splash finished; the desktop shell should come up
    DesktopRevealed,
    /// The dance camera settled on the dancer
    DanceViewReady,
}

/// The assembled scene
pub struct SceneComposer {
    animator: CharacterAnimator,
    camera: CameraRig,
    assets: AssetTracker,
    audio: AudioMixer,
    stage: StageSettings,
    overlay: MonitorOverlay,
    splash_deadline_ms: Option<f64>,
    fullscreen_at_ms: Option<f64>,
    began: bool,
    zoom_completed: bool,
    dancing: bool,
}

impl SceneComposer {
    /// Build the scene for a device class, camera on the overview shot
    pub fn new(device: DeviceClass) -> Self {
        Self {
            animator: CharacterAnimator::new(),
            camera: CameraRig::new(device),
            assets: AssetTracker::new(),
            audio: AudioMixer::new(),
            stage: StageSettings::standard(),
            overlay: MonitorOverlay::Hidden,
            splash_deadline_ms: None,
            fullscreen_at_ms: None,
            began: false,
            zoom_completed: false,
            dancing: false,
        }
    }

    /// The start signal: character walks, camera eases in, ambience plays
    ///
    /// Idempotent; the chime is preloaded here so it can fire without a
    /// network stall when the zoom lands.
    pub fn begin(&mut self, _now_ms: f64) {
        if self.began {
            return;
        }
        self.began = true;
        debug!("scene start");

        self.animator.start();
        self.camera
            .fly_to_with_step(ViewTarget::Approach, APPROACH_STEP);
        self.audio.play(AudioCue::OfficeLoop);
        self.audio.preload(AudioCue::SystemChime);
    }

    /// Advance one rendered frame
    pub fn tick(&mut self, now_ms: f64, dt_secs: f32) -> Vec<SceneEvent> {
        let mut events = Vec::new();

        for ev in self.animator.update(now_ms, dt_secs) {
            match ev {
                AnimatorEvent::Seated => {
                    self.camera.fly_to(ViewTarget::Monitor);
                    events.push(SceneEvent::Seated);
                }
                AnimatorEvent::DanceReady => {}
            }
        }

        if let Some(ev) = self.camera.tick() {
            match ev {
                CameraEvent::MonitorReached => {
                    // Only the first arrival boots the monitor; returning
                    // from a dance break lands silently.
                    if !self.zoom_completed {
                        self.zoom_completed = true;
                        self.audio.stop(AudioCue::OfficeLoop);
                        self.audio.play(AudioCue::SystemChime);
                        self.overlay = MonitorOverlay::BootSplash;
                        self.splash_deadline_ms = Some(now_ms + BOOT_SPLASH_MS);
                        debug!("monitor zoom complete");
                        events.push(SceneEvent::ZoomComplete);
                    }
                }
                CameraEvent::DanceViewReached => {
                    events.push(SceneEvent::DanceViewReady);
                }
            }
        }

        if self.overlay == MonitorOverlay::BootSplash
            && self.splash_deadline_ms.is_some_and(|at| now_ms >= at)
        {
            self.splash_deadline_ms = None;
            self.audio.stop(AudioCue::SystemChime);
            self.overlay = MonitorOverlay::Desktop { fullscreen: false };
            self.fullscreen_at_ms = Some(now_ms + FULLSCREEN_DELAY_MS);
            debug!("desktop revealed");
            events.push(SceneEvent::DesktopRevealed);
        }

        if self.overlay == (MonitorOverlay::Desktop { fullscreen: false })
            && self.fullscreen_at_ms.is_some_and(|at| now_ms >= at)
        {
            self.fullscreen_at_ms = None;
            self.overlay = MonitorOverlay::Desktop { fullscreen: true };
        }

        events
    }

    /// Toggle the dance break
    ///
    /// Ignored until the first monitor zoom has completed; until then there
    /// is nothing on screen offering the toggle.
    pub fn set_dancing(&mut self, dancing: bool) {
        if !self.zoom_completed || dancing == self.dancing {
            return;
        }
        self.dancing = dancing;
        self.animator.set_dancing(dancing);

        if dancing {
            self.camera.fly_to(ViewTarget::Dance);
            self.audio.play(AudioCue::DanceLoop);
        } else {
            self.camera.fly_to(ViewTarget::Monitor);
            self.audio.stop(AudioCue::DanceLoop);
        }
    }

    /// "Boss is watching": snap the view back toward the monitor
    pub fn reset_view(&mut self) {
        if self.zoom_completed && !self.dancing {
            self.camera.fly_to(ViewTarget::Monitor);
        }
    }

    /// Record an asset-loader progress report
    pub fn report_assets(&mut self, progress: f32, active: bool) {
        self.assets.report(progress, active);
    }

    /// Whether all assets are in
    pub fn assets_ready(&self) -> bool {
        self.assets.is_ready()
    }

    /// Fires [`LoadEvent::Ready`] once when loading finishes
    pub fn poll_assets(&mut self) -> Option<LoadEvent> {
        self.assets.poll()
    }

    /// Asset progress percentage for the loading bar
    pub fn asset_progress(&self) -> f32 {
        self.assets.progress()
    }

    /// Drain queued audio commands for the host
    pub fn take_audio_commands(&mut self) -> Vec<AudioCommand> {
        self.audio.take_commands()
    }

    /// Release owned resources; stops all audio
    pub fn shutdown(&mut self) {
        self.audio.stop_all();
    }

    /// The character animator
    pub fn animator(&self) -> &CharacterAnimator {
        &self.animator
    }

    /// The camera rig
    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    /// Static stage descriptors
    pub fn stage(&self) -> &StageSettings {
        &self.stage
    }

    /// What the monitor is showing
    pub fn overlay(&self) -> MonitorOverlay {
        self.overlay
    }

    /// The name/time plate shows only while the monitor is bare
    pub fn name_plate_visible(&self) -> bool {
        self.overlay == MonitorOverlay::Hidden
    }

    /// Whether the dance break toggle is available
    pub fn dance_available(&self) -> bool {
        self.zoom_completed
    }

    /// Whether a dance break is active
    pub fn is_dancing(&self) -> bool {
        self.dancing
    }

    /// Whether the start signal was given
    pub fn began(&self) -> bool {
        self.began
    }
}

//! The application state machine
//!
//! [`PortfolioApp`] owns the loading gate, the scene composer, and the
//! desktop shell, and advances whichever of them the current stage needs.
//! Hosts drive it with a clock and input events and render the returned
//! [`FrameState`] snapshots; nothing here touches the DOM, GPU, or audio
//! devices directly.

use serde::Serialize;
use tracing::debug;

use folio_content::{Award, Education, Profile, Project, Role};
use folio_desktop::{DesktopShell, InputResult, ShellFrame};
use folio_math::{Size, Vec3};
use folio_scene::{
    AnimationPhase, AssetCatalog, AssetEntry, AudioCommand, ClipPlayback, DeviceClass,
    LoadEvent, MonitorOverlay, SceneComposer, SceneEvent, StageSettings,
};

use crate::loading::{LoadingEvent, LoadingScreen, LoadingView};

/// Delay between the loading gate opening and the character starting to walk
pub const START_DELAY_MS: f64 = 300.0;

/// Which layer of the experience is live
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppStage {
    /// The loading gate
    #[default]
    Loading,
    /// The 3D scene (which itself reveals the desktop shell)
    Scene,
}

/// The character's render state
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CharacterView {
    pub position: Vec3,
    pub heading: f32,
    pub scale: f32,
    pub visible: bool,
    pub phase: AnimationPhase,
    pub clip: ClipPlayback,
}

/// The camera's render state
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CameraView {
    pub position: Vec3,
    pub look_at: Vec3,
    /// Hosts disable their orbit controls while a flight is in progress
    pub animating: bool,
}

/// Which overlay buttons to offer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SceneButtons {
    /// "Boss is watching": reset the view to the monitor
    pub reset: bool,
    /// "Dance break!"
    pub dance: bool,
    /// "Back to work"
    pub back_to_work: bool,
}

/// Scene-layer render state
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneView {
    pub character: CharacterView,
    pub camera: CameraView,
    pub overlay: MonitorOverlay,
    pub name_plate_visible: bool,
    pub buttons: SceneButtons,
}

/// The static data a host fetches once at startup
#[derive(Clone, Debug, Serialize)]
pub struct ContentBundle {
    pub profile: Profile,
    pub projects: &'static [Project],
    pub roles: &'static [Role],
    pub education: &'static [Education],
    pub awards: &'static [Award],
    pub stage: StageSettings,
    pub assets: Vec<AssetEntry>,
}

impl ContentBundle {
    /// Assemble the canonical bundle
    pub fn standard() -> Self {
        Self {
            profile: Profile::standard(),
            projects: Project::all(),
            roles: Role::all(),
            education: Education::all(),
            awards: Award::all(),
            stage: StageSettings::standard(),
            assets: AssetCatalog::manifest(),
        }
    }
}

/// One frame's complete render state
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameState {
    pub stage: AppStage,
    pub loading: Option<LoadingView>,
    pub scene: Option<SceneView>,
    /// Present once the monitor desktop is live
    pub shell: Option<ShellFrame>,
    /// Audio commands to apply this frame, in order
    pub audio: Vec<AudioCommand>,
}

/// The portfolio engine
pub struct PortfolioApp {
    stage: AppStage,
    screen: Size,
    loading: LoadingScreen,
    composer: SceneComposer,
    shell: DesktopShell,
    scene_begin_at_ms: Option<f64>,
    desktop_live: bool,
}

impl PortfolioApp {
    /// Create the engine for a viewport and device class
    pub fn new(width: f32, height: f32, device: DeviceClass) -> Self {
        Self {
            stage: AppStage::Loading,
            screen: Size::new(width, height),
            loading: LoadingScreen::new(),
            composer: SceneComposer::new(device),
            shell: DesktopShell::new(),
            scene_begin_at_ms: None,
            desktop_live: false,
        }
    }

    /// Record an asset-loader progress report
    pub fn report_asset_progress(&mut self, progress: f32, active: bool) {
        self.composer.report_assets(progress, active);
    }

    /// A click anywhere; during loading this is the gate's user gesture
    pub fn click(&mut self, _now_ms: f64) {
        if self.stage == AppStage::Loading {
            self.loading.click();
        }
    }

    /// Pointer down in desktop-shell coordinates
    pub fn pointer_down(&mut self, x: f32, y: f32) -> InputResult {
        if self.desktop_live {
            self.shell.pointer_down(x, y)
        } else {
            InputResult::Unhandled
        }
    }

    /// Pointer move in desktop-shell coordinates
    pub fn pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        if self.desktop_live {
            self.shell.pointer_move(x, y)
        } else {
            InputResult::Unhandled
        }
    }

    /// Pointer released
    pub fn pointer_up(&mut self) -> InputResult {
        if self.desktop_live {
            self.shell.pointer_up()
        } else {
            InputResult::Unhandled
        }
    }

    /// Flip the dance break on or off
    pub fn toggle_dance(&mut self) {
        let dancing = self.composer.is_dancing();
        self.composer.set_dancing(!dancing);
    }

    /// "Boss is watching": snap the camera back to the monitor
    pub fn reset_view(&mut self) {
        self.composer.reset_view();
    }

    /// Viewport resize
    pub fn resize(&mut self, width: f32, height: f32) {
        self.screen = Size::new(width, height);
        self.shell.resize(width, height);
    }

    /// Advance one frame and snapshot render state
    pub fn tick(&mut self, now_ms: f64, dt_secs: f32) -> FrameState {
        if self.stage == AppStage::Loading {
            self.loading.begin(now_ms);
            if let Some(LoadEvent::Ready) = self.composer.poll_assets() {
                debug!("assets ready");
            }
            let ready = self.composer.assets_ready();
            if let Some(LoadingEvent::Complete) = self.loading.tick(now_ms, ready) {
                self.stage = AppStage::Scene;
                self.scene_begin_at_ms = Some(now_ms + START_DELAY_MS);
                debug!("entering scene");
            }
        }

        if self.stage == AppStage::Scene {
            if self.scene_begin_at_ms.is_some_and(|at| now_ms >= at) {
                self.scene_begin_at_ms = None;
                self.composer.begin(now_ms);
            }

            for event in self.composer.tick(now_ms, dt_secs) {
                if event == SceneEvent::DesktopRevealed {
                    self.shell
                        .init(self.screen.width, self.screen.height, now_ms);
                    self.desktop_live = true;
                }
            }

            if self.desktop_live {
                self.shell.tick(now_ms);
            }
        }

        self.frame_state()
    }

    fn frame_state(&mut self) -> FrameState {
        let loading = match self.stage {
            AppStage::Loading => Some(self.loading.view(
                self.composer.asset_progress(),
                self.composer.assets_ready(),
            )),
            AppStage::Scene => None,
        };

        let scene = match self.stage {
            AppStage::Loading => None,
            AppStage::Scene => {
                let animator = self.composer.animator();
                let camera = self.composer.camera();
                Some(SceneView {
                    character: CharacterView {
                        position: animator.position(),
                        heading: animator.heading(),
                        scale: animator.scale(),
                        visible: animator.visible(),
                        phase: animator.phase(),
                        clip: animator.active_clip(),
                    },
                    camera: CameraView {
                        position: camera.position(),
                        look_at: camera.look_at(),
                        animating: camera.is_animating(),
                    },
                    overlay: self.composer.overlay(),
                    name_plate_visible: self.composer.name_plate_visible(),
                    buttons: SceneButtons {
                        reset: self.composer.dance_available() && !self.composer.is_dancing(),
                        dance: self.composer.dance_available() && !self.composer.is_dancing(),
                        back_to_work: self.composer.is_dancing(),
                    },
                })
            }
        };

        FrameState {
            stage: self.stage,
            loading,
            scene,
            shell: if self.desktop_live {
                Some(self.shell.frame())
            } else {
                None
            },
            audio: self.composer.take_audio_commands(),
        }
    }

    /// Release owned resources; returns the final audio commands (stops)
    pub fn shutdown(&mut self) -> Vec<AudioCommand> {
        self.composer.shutdown();
        self.composer.take_audio_commands()
    }

    /// The static content, stage descriptors, and asset manifest
    pub fn content(&self) -> ContentBundle {
        ContentBundle::standard()
    }

    /// The current stage
    pub fn stage(&self) -> AppStage {
        self.stage
    }

    /// The scene composer, for assertions and advanced hosts
    pub fn composer(&self) -> &SceneComposer {
        &self.composer
    }

    /// The desktop shell, for assertions and advanced hosts
    pub fn shell(&self) -> &DesktopShell {
        &self.shell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_starts_in_loading() {
        let mut app = PortfolioApp::new(800.0, 600.0, DeviceClass::Desktop);
        let frame = app.tick(0.0, DT);

        assert_eq!(frame.stage, AppStage::Loading);
        assert!(frame.loading.is_some());
        assert!(frame.scene.is_none());
        assert!(frame.shell.is_none());
    }

    #[test]
    fn test_gate_opens_then_walk_starts_after_delay() {
        let mut app = PortfolioApp::new(800.0, 600.0, DeviceClass::Desktop);
        app.tick(0.0, DT); // first tick starts the loading script
        app.report_asset_progress(100.0, false);
        app.click(0.0);

        // Roll the loading text past its completion hold
        let frame = app.tick(2200.0, DT);
        assert_eq!(frame.stage, AppStage::Scene);
        assert!(!app.composer().began());

        // The walk starts only after the settle delay
        app.tick(2200.0 + START_DELAY_MS - 10.0, DT);
        assert!(!app.composer().began());
        let frame = app.tick(2200.0 + START_DELAY_MS, DT);
        assert!(app.composer().began());
        assert_eq!(
            frame.scene.unwrap().character.phase,
            AnimationPhase::Walking
        );
    }

    #[test]
    fn test_pointer_ignored_until_desktop_live() {
        let mut app = PortfolioApp::new(800.0, 600.0, DeviceClass::Desktop);
        assert_eq!(app.pointer_down(10.0, 10.0), InputResult::Unhandled);
    }

    #[test]
    fn test_content_bundle_is_complete() {
        let app = PortfolioApp::new(800.0, 600.0, DeviceClass::Desktop);
        let bundle = app.content();

        assert_eq!(bundle.projects.len(), 5);
        assert_eq!(bundle.roles.len(), 2);
        assert!(!bundle.assets.is_empty());

        let json = serde_json::to_string(&bundle).unwrap();
        assert!(json.contains("Aakash Yadav"));
    }
}

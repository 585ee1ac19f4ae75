//! Per-frame character movement and phase switching
//!
//! The animator owns the character's transform and advances it every rendered
//! frame: linear motion at a fixed speed toward the active target point, with
//! the heading following the remaining displacement. Phase changes happen when
//! the character comes within a small threshold of its target, plus one timed
//! transition (the pause while the sit-down clip plays out).

use serde::Serialize;
use tracing::debug;

use folio_math::Vec3;

use crate::clip::ClipPlayback;
use crate::phase::AnimationPhase;

/// Where the character first appears
pub const START_POSITION: Vec3 = Vec3::new(8.0, 0.0, 8.0);

/// The desk chair
pub const CHAIR_POSITION: Vec3 = Vec3::new(6.0, 0.0, 4.0);

/// The clear spot used for the dance break
pub const DANCE_POSITION: Vec3 = Vec3::new(8.0, 0.0, 7.0);

/// Walking speed toward the chair, units per second
pub const WALK_SPEED: f32 = 1.2;

/// Walking speed toward the dance spot, units per second
pub const DANCE_WALK_SPEED: f32 = 1.5;

/// Distance at which the character counts as arrived
pub const ARRIVAL_THRESHOLD: f32 = 0.1;

/// Pause while the sit-down clip plays before typing starts
pub const SEAT_PAUSE_MS: f64 = 2500.0;

/// Character mesh scale when visible
pub const CHARACTER_SCALE: f32 = 0.01;

/// Facing when seated at the desk
const SEATED_HEADING: f32 = -core::f32::consts::FRAC_PI_2;

/// Facing while dancing (toward the camera)
const DANCE_HEADING: f32 = 0.0;

/// One-shot notifications from phase transitions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimatorEvent {
    /// The character has settled in and started typing
    Seated,
    /// The character reached the dance spot and is dancing
    DanceReady,
}

/// The character's scripted behavior state
#[derive(Clone, Debug)]
pub struct CharacterAnimator {
    phase: AnimationPhase,
    position: Vec3,
    heading: f32,
    started: bool,
    dancing: bool,
    /// When the seat pause elapses and typing begins
    typing_deadline_ms: Option<f64>,
    seated_fired: bool,
    dance_ready_fired: bool,
}

impl Default for CharacterAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterAnimator {
    /// Create the animator at the start mark, off-stage
    pub fn new() -> Self {
        Self {
            phase: AnimationPhase::Idle,
            position: START_POSITION,
            heading: 0.0,
            started: false,
            dancing: false,
            typing_deadline_ms: None,
            seated_fired: false,
            dance_ready_fired: false,
        }
    }

    /// The start signal: begin walking to the chair. Idempotent.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        if self.phase == AnimationPhase::Idle {
            self.set_phase(AnimationPhase::Walking);
        }
    }

    /// Toggle the dance break
    ///
    /// Edge-triggered: turning it on while typing sends the character to the
    /// dance spot; turning it off while dancing walks them back to the chair
    /// and the sit/type cycle re-runs. In any other phase the toggle only
    /// records the desired state.
    pub fn set_dancing(&mut self, dancing: bool) {
        if dancing && !self.dancing && self.phase == AnimationPhase::Typing {
            self.dance_ready_fired = false;
            self.set_phase(AnimationPhase::WalkingToDance);
        } else if !dancing && self.dancing && self.phase == AnimationPhase::Dancing {
            self.seated_fired = false;
            self.set_phase(AnimationPhase::Walking);
        }
        self.dancing = dancing;
    }

    /// Advance one rendered frame
    ///
    /// `now_ms` is the host clock; `dt_secs` is the frame delta. Returns the
    /// events fired by any transition this frame, each at most once per
    /// transition cycle.
    pub fn update(&mut self, now_ms: f64, dt_secs: f32) -> Vec<AnimatorEvent> {
        let mut events = Vec::new();

        match self.phase {
            AnimationPhase::Walking => {
                if self.step_toward(CHAIR_POSITION, WALK_SPEED, dt_secs) {
                    self.position = CHAIR_POSITION;
                    self.heading = SEATED_HEADING;
                    self.typing_deadline_ms = Some(now_ms + SEAT_PAUSE_MS);
                    self.set_phase(AnimationPhase::Sitting);
                }
            }
            AnimationPhase::Sitting => {
                if self.typing_deadline_ms.is_some_and(|at| now_ms >= at) {
                    self.typing_deadline_ms = None;
                    self.set_phase(AnimationPhase::Typing);
                    if !self.seated_fired {
                        self.seated_fired = true;
                        events.push(AnimatorEvent::Seated);
                    }
                }
            }
            AnimationPhase::WalkingToDance => {
                if self.step_toward(DANCE_POSITION, DANCE_WALK_SPEED, dt_secs) {
                    self.position = DANCE_POSITION;
                    self.heading = DANCE_HEADING;
                    self.set_phase(AnimationPhase::Dancing);
                    if !self.dance_ready_fired {
                        self.dance_ready_fired = true;
                        events.push(AnimatorEvent::DanceReady);
                    }
                }
            }
            AnimationPhase::Idle | AnimationPhase::Typing | AnimationPhase::Dancing => {}
        }

        events
    }

    /// Move toward `target` at `speed`; true once within the arrival threshold
    fn step_toward(&mut self, target: Vec3, speed: f32, dt_secs: f32) -> bool {
        let distance = self.position.planar_distance(target);
        if distance <= ARRIVAL_THRESHOLD {
            return true;
        }

        self.heading = self.position.heading_to(target);
        let step = speed * dt_secs;
        self.position.x += (target.x - self.position.x) / distance * step;
        self.position.z += (target.z - self.position.z) / distance * step;
        false
    }

    fn set_phase(&mut self, phase: AnimationPhase) {
        debug!(from = self.phase.id(), to = phase.id(), "phase transition");
        self.phase = phase;
    }

    /// The current phase
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// World position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Facing angle around the y axis
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// The clip the current phase plays
    pub fn active_clip(&self) -> ClipPlayback {
        self.phase.clip()
    }

    /// Whether the character should be rendered (hidden until started)
    pub fn visible(&self) -> bool {
        self.started
    }

    /// Mesh scale: zero until the start signal
    pub fn scale(&self) -> f32 {
        if self.started {
            CHARACTER_SCALE
        } else {
            0.0
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The character never leaves the ground plane and never wanders
        /// outside the box spanned by its waypoints, whatever the frame
        /// deltas look like
        #[test]
        fn position_stays_on_stage(dts in prop::collection::vec(0.0f32..0.1, 1..400)) {
            let mut animator = CharacterAnimator::new();
            animator.start();

            let mut now = 0.0;
            for dt in dts {
                now += f64::from(dt) * 1000.0;
                animator.update(now, dt);

                let p = animator.position();
                prop_assert_eq!(p.y, 0.0);
                prop_assert!((5.0..=9.0).contains(&p.x), "x = {}", p.x);
                prop_assert!((3.0..=9.0).contains(&p.z), "z = {}", p.z);
                prop_assert!(animator.heading().is_finite());
            }
        }

        /// Walking monotonically closes the distance to the chair
        #[test]
        fn walking_never_retreats(dts in prop::collection::vec(0.001f32..0.05, 1..200)) {
            let mut animator = CharacterAnimator::new();
            animator.start();

            let mut now = 0.0;
            let mut last = animator.position().planar_distance(CHAIR_POSITION);
            for dt in dts {
                now += f64::from(dt) * 1000.0;
                animator.update(now, dt);
                if animator.phase() != AnimationPhase::Walking {
                    break;
                }
                let d = animator.position().planar_distance(CHAIR_POSITION);
                prop_assert!(d <= last + 0.001);
                last = d;
            }
        }
    }
}

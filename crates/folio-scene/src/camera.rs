//! Named viewpoints and eased camera flights
//!
//! The camera moves between a small fixed set of (position, look-at) pairs.
//! A flight holds one interpolation at a time; starting a new one overwrites
//! any in progress. Progress advances by a fixed step per rendered frame and
//! the eased factor is ease-out cubic, so flights land softly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use folio_math::easing::ease_out_cubic;
use folio_math::Vec3;

/// Per-frame progress step for normal flights
pub const FLIGHT_STEP: f32 = 0.02;

/// Per-frame progress step for the slow approach while the character walks
pub const APPROACH_STEP: f32 = 0.004;

/// Which viewpoint table to use
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    #[default]
    Desktop,
    /// Small screens pull the wide shots further back
    Mobile,
}

/// The fixed set of camera viewpoints
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewTarget {
    /// Wide establishing shot of the office
    Overview,
    /// Closer shot while the character approaches the chair
    Approach,
    /// Over the shoulder, filling the frame with the monitor
    Monitor,
    /// Watching the dance spot
    Dance,
}

impl ViewTarget {
    /// The (position, look-at) pair for this viewpoint
    pub fn pose(&self, device: DeviceClass) -> (Vec3, Vec3) {
        match (self, device) {
            (ViewTarget::Overview, DeviceClass::Desktop) => {
                (Vec3::new(12.0, 4.0, 11.0), Vec3::new(5.0, 0.5, 5.0))
            }
            (ViewTarget::Overview, DeviceClass::Mobile) => {
                (Vec3::new(16.0, 6.0, 14.0), Vec3::new(5.0, 0.5, 5.0))
            }
            (ViewTarget::Approach, DeviceClass::Desktop) => {
                (Vec3::new(8.0, 2.5, 8.0), Vec3::new(5.0, 1.0, 5.0))
            }
            (ViewTarget::Approach, DeviceClass::Mobile) => {
                (Vec3::new(12.0, 4.0, 12.0), Vec3::new(5.0, 1.0, 5.0))
            }
            (ViewTarget::Monitor, _) => {
                (Vec3::new(5.82, 1.15, 4.1), Vec3::new(4.0, 1.05, 4.1))
            }
            (ViewTarget::Dance, _) => (Vec3::new(10.0, 2.0, 10.0), Vec3::new(8.0, 1.0, 7.0)),
        }
    }
}

/// Fired when a flight lands on a target that has a completion action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CameraEvent {
    /// The camera settled on the monitor
    MonitorReached,
    /// The camera settled on the dance view
    DanceViewReached,
}

/// An in-progress interpolation toward a named target
#[derive(Clone, Copy, Debug)]
struct Flight {
    from_position: Vec3,
    from_look: Vec3,
    target: ViewTarget,
    progress: f32,
    step: f32,
}

/// The scene camera: a pose plus at most one active flight
#[derive(Clone, Debug)]
pub struct CameraRig {
    device: DeviceClass,
    position: Vec3,
    look_at: Vec3,
    flight: Option<Flight>,
}

impl CameraRig {
    /// Create the rig at the overview shot for the given device class
    pub fn new(device: DeviceClass) -> Self {
        let (position, look_at) = ViewTarget::Overview.pose(device);
        Self {
            device,
            position,
            look_at,
            flight: None,
        }
    }

    /// Start a flight to `target` at the normal step
    pub fn fly_to(&mut self, target: ViewTarget) {
        self.fly_to_with_step(target, FLIGHT_STEP);
    }

    /// Start a flight to `target` with an explicit per-frame step
    ///
    /// Overwrites any flight in progress; progress restarts at zero.
    pub fn fly_to_with_step(&mut self, target: ViewTarget, step: f32) {
        debug!(to = ?target, step, "camera flight");
        self.flight = Some(Flight {
            from_position: self.position,
            from_look: self.look_at,
            target,
            progress: 0.0,
            step,
        });
    }

    /// Advance the active flight one frame
    ///
    /// On completion the pose snaps exactly to the target pair and the
    /// matching event fires once; flights to targets without a completion
    /// action finish silently.
    pub fn tick(&mut self) -> Option<CameraEvent> {
        let mut flight = self.flight?;
        flight.progress += flight.step;

        let (to_position, to_look) = flight.target.pose(self.device);
        if flight.progress >= 1.0 {
            self.position = to_position;
            self.look_at = to_look;
            self.flight = None;
            return match flight.target {
                ViewTarget::Monitor => Some(CameraEvent::MonitorReached),
                ViewTarget::Dance => Some(CameraEvent::DanceViewReached),
                ViewTarget::Overview | ViewTarget::Approach => None,
            };
        }

        let t = ease_out_cubic(flight.progress);
        self.position = flight.from_position.lerp(to_position, t);
        self.look_at = flight.from_look.lerp(to_look, t);
        self.flight = Some(flight);
        None
    }

    /// Camera position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Look-at point
    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    /// Whether a flight is in progress (hosts disable orbit input meanwhile)
    pub fn is_animating(&self) -> bool {
        self.flight.is_some()
    }

    /// The device class this rig was built for
    pub fn device(&self) -> DeviceClass {
        self.device
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finish_flight(rig: &mut CameraRig, max_frames: usize) -> Vec<CameraEvent> {
        let mut events = Vec::new();
        for _ in 0..max_frames {
            if let Some(ev) = rig.tick() {
                events.push(ev);
            }
            if !rig.is_animating() {
                return events;
            }
        }
        panic!("flight never completed");
    }

    #[test]
    fn test_rig_starts_at_overview() {
        let rig = CameraRig::new(DeviceClass::Desktop);
        let (pos, look) = ViewTarget::Overview.pose(DeviceClass::Desktop);
        assert_eq!(rig.position(), pos);
        assert_eq!(rig.look_at(), look);
        assert!(!rig.is_animating());
    }

    #[test]
    fn test_mobile_overview_pulled_back() {
        let (desktop, _) = ViewTarget::Overview.pose(DeviceClass::Desktop);
        let (mobile, _) = ViewTarget::Overview.pose(DeviceClass::Mobile);
        assert!(mobile.length() > desktop.length());
    }

    #[test]
    fn test_flight_snaps_to_target_and_fires_once() {
        let mut rig = CameraRig::new(DeviceClass::Desktop);
        rig.fly_to(ViewTarget::Monitor);

        let events = finish_flight(&mut rig, 200);
        assert_eq!(events, vec![CameraEvent::MonitorReached]);

        let (pos, look) = ViewTarget::Monitor.pose(DeviceClass::Desktop);
        assert_eq!(rig.position(), pos);
        assert_eq!(rig.look_at(), look);

        // No flight, no further events
        assert_eq!(rig.tick(), None);
    }

    fn frames_to_land(rig: &mut CameraRig) -> usize {
        let mut frames = 0;
        while rig.is_animating() {
            rig.tick();
            frames += 1;
        }
        frames
    }

    #[test]
    fn test_normal_flight_takes_fifty_frames() {
        let mut rig = CameraRig::new(DeviceClass::Desktop);
        rig.fly_to(ViewTarget::Monitor);

        // 1 / FLIGHT_STEP frames, give or take f32 accumulation
        let frames = frames_to_land(&mut rig);
        assert!((50..=51).contains(&frames), "landed in {} frames", frames);
    }

    #[test]
    fn test_approach_flight_is_slow() {
        let mut rig = CameraRig::new(DeviceClass::Desktop);
        rig.fly_to_with_step(ViewTarget::Approach, APPROACH_STEP);

        let frames = frames_to_land(&mut rig);
        assert!((250..=252).contains(&frames), "landed in {} frames", frames);
    }

    #[test]
    fn test_new_flight_overwrites_in_progress() {
        let mut rig = CameraRig::new(DeviceClass::Desktop);
        rig.fly_to_with_step(ViewTarget::Approach, APPROACH_STEP);
        for _ in 0..10 {
            rig.tick();
        }

        // Mid-approach, the monitor flight takes over; no approach completion
        rig.fly_to(ViewTarget::Monitor);
        let events = finish_flight(&mut rig, 200);
        assert_eq!(events, vec![CameraEvent::MonitorReached]);
    }

    #[test]
    fn test_flight_moves_toward_target_each_frame() {
        let mut rig = CameraRig::new(DeviceClass::Desktop);
        let (target, _) = ViewTarget::Monitor.pose(DeviceClass::Desktop);
        rig.fly_to(ViewTarget::Monitor);

        let mut last = rig.position().distance(target);
        for _ in 0..49 {
            rig.tick();
            let d = rig.position().distance(target);
            assert!(d <= last + 0.001);
            last = d;
        }
    }

    #[test]
    fn test_silent_targets_fire_nothing() {
        let mut rig = CameraRig::new(DeviceClass::Desktop);
        rig.fly_to(ViewTarget::Approach);
        let events = finish_flight(&mut rig, 200);
        assert!(events.is_empty());

        rig.fly_to(ViewTarget::Overview);
        let events = finish_flight(&mut rig, 200);
        assert!(events.is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn target_strategy() -> impl Strategy<Value = ViewTarget> {
        prop::sample::select(vec![
            ViewTarget::Overview,
            ViewTarget::Approach,
            ViewTarget::Monitor,
            ViewTarget::Dance,
        ])
    }

    proptest! {
        /// Every flight lands exactly on its target pose, whatever the step
        #[test]
        fn flights_always_snap(target in target_strategy(), step in 0.002f32..0.5) {
            let mut rig = CameraRig::new(DeviceClass::Desktop);
            rig.fly_to_with_step(target, step);

            for _ in 0..1000 {
                rig.tick();
                if !rig.is_animating() {
                    break;
                }
            }

            prop_assert!(!rig.is_animating());
            let (pos, look) = target.pose(DeviceClass::Desktop);
            prop_assert_eq!(rig.position(), pos);
            prop_assert_eq!(rig.look_at(), look);
        }

        /// Retargeting mid-flight never produces a pose outside the hull of
        /// the viewpoints involved
        #[test]
        fn retargeting_stays_bounded(
            targets in prop::collection::vec(target_strategy(), 1..6),
            frames_between in 1usize..40,
        ) {
            let mut rig = CameraRig::new(DeviceClass::Desktop);
            for target in targets {
                rig.fly_to(target);
                for _ in 0..frames_between {
                    rig.tick();
                    let p = rig.position();
                    prop_assert!((4.0..=17.0).contains(&p.x));
                    prop_assert!((0.5..=7.0).contains(&p.y));
                    prop_assert!((3.0..=15.0).contains(&p.z));
                }
            }
        }
    }
}

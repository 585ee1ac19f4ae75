//! Character behavior phases
//!
//! The character runs a fixed scripted sequence. Transitions are driven by
//! proximity checks and external triggers, never by arbitrary jumps:
//!
//! ```text
//! idle -(start)-> walking -(reach chair)-> sitting -(2.5s)-> typing
//! typing -(dance on)-> walkingToDance -(reach spot)-> dancing
//! dancing -(dance off)-> walking -> sitting -> typing   (re-entrant)
//! ```

use serde::{Deserialize, Serialize};

use crate::clip::{ClipId, ClipPlayback};

/// A named stage in the character's scripted behavior sequence
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationPhase {
    /// Off-stage, before the start signal
    #[default]
    Idle,
    /// Walking toward the desk chair
    Walking,
    /// Settling into the chair (one-shot clip)
    Sitting,
    /// Typing at the keyboard
    Typing,
    /// Walking to the dance spot
    WalkingToDance,
    /// Dancing
    Dancing,
}

impl AnimationPhase {
    /// All phases
    pub fn all() -> &'static [AnimationPhase] {
        &[
            AnimationPhase::Idle,
            AnimationPhase::Walking,
            AnimationPhase::Sitting,
            AnimationPhase::Typing,
            AnimationPhase::WalkingToDance,
            AnimationPhase::Dancing,
        ]
    }

    /// Stable string ID
    pub fn id(&self) -> &'static str {
        match self {
            AnimationPhase::Idle => "idle",
            AnimationPhase::Walking => "walking",
            AnimationPhase::Sitting => "sitting",
            AnimationPhase::Typing => "typing",
            AnimationPhase::WalkingToDance => "walkingToDance",
            AnimationPhase::Dancing => "dancing",
        }
    }

    /// Parse from a string ID
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "idle" => Some(AnimationPhase::Idle),
            "walking" => Some(AnimationPhase::Walking),
            "sitting" => Some(AnimationPhase::Sitting),
            "typing" => Some(AnimationPhase::Typing),
            "walkingToDance" => Some(AnimationPhase::WalkingToDance),
            "dancing" => Some(AnimationPhase::Dancing),
            _ => None,
        }
    }

    /// The motion clip this phase plays
    ///
    /// Exactly one clip per phase. The sit-down clip is one-shot and clamps
    /// on its final frame; everything else loops.
    pub fn clip(&self) -> ClipPlayback {
        match self {
            AnimationPhase::Idle | AnimationPhase::Walking | AnimationPhase::WalkingToDance => {
                ClipPlayback::looping(ClipId::Walk)
            }
            AnimationPhase::Sitting => ClipPlayback::one_shot(ClipId::SitToType),
            AnimationPhase::Typing => ClipPlayback::looping(ClipId::Type),
            AnimationPhase::Dancing => ClipPlayback::looping(ClipId::Dance),
        }
    }

    /// Whether the character is moving across the floor in this phase
    pub fn is_locomotion(&self) -> bool {
        matches!(
            self,
            AnimationPhase::Walking | AnimationPhase::WalkingToDance
        )
    }
}

//! Motion clips and playback modes

use serde::{Deserialize, Serialize};

/// The motion clips the character can play
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipId {
    /// Walk cycle
    Walk,
    /// Sit-down-and-reach-for-keyboard, one shot
    SitToType,
    /// Typing loop
    Type,
    /// Dance loop
    Dance,
}

impl ClipId {
    /// All clips, in load order
    pub fn all() -> &'static [ClipId] {
        &[ClipId::Walk, ClipId::SitToType, ClipId::Type, ClipId::Dance]
    }

    /// Asset path the host loads this clip from
    pub fn path(&self) -> &'static str {
        match self {
            ClipId::Walk => "models/walking.fbx",
            ClipId::SitToType => "models/sit-to-type.fbx",
            ClipId::Type => "models/typing.fbx",
            ClipId::Dance => "models/hip-hop-dance.fbx",
        }
    }
}

/// How a clip should be played
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipPlayback {
    pub clip: ClipId,
    pub looping: bool,
    /// Non-looping clips hold their final frame instead of resetting
    pub clamp_when_finished: bool,
}

impl ClipPlayback {
    /// A clip that repeats indefinitely
    pub fn looping(clip: ClipId) -> Self {
        Self {
            clip,
            looping: true,
            clamp_when_finished: false,
        }
    }

    /// A clip that plays once and clamps on its last frame
    pub fn one_shot(clip: ClipId) -> Self {
        Self {
            clip,
            looping: false,
            clamp_when_finished: true,
        }
    }
}

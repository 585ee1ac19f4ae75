//! Audio cue mixer
//!
//! The core never touches audio devices. The mixer tracks which cues should
//! be playing and queues [`AudioCommand`]s for the host to apply against its
//! playback primitives each frame. Autoplay rejection and other playback
//! failures are the host's to swallow; the mixer keeps no error state.
//!
//! Cues are singly owned here: stopping a cue or shutting the mixer down is
//! the release point for the host-side audio element.

use serde::Serialize;

/// The audio cues the scene can request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioCue {
    /// Busy-office ambience while the character walks and types
    OfficeLoop,
    /// The startup chime when the monitor fills the frame
    SystemChime,
    /// The dance-break track
    DanceLoop,
}

impl AudioCue {
    /// All cues
    pub fn all() -> &'static [AudioCue] {
        &[AudioCue::OfficeLoop, AudioCue::SystemChime, AudioCue::DanceLoop]
    }

    /// Asset path the host loads this cue from
    pub fn path(&self) -> &'static str {
        match self {
            AudioCue::OfficeLoop => "audio/office-ambience-loop.mp3",
            AudioCue::SystemChime => "audio/system-startup-chime.mp3",
            AudioCue::DanceLoop => "audio/dance-loop.mp3",
        }
    }

    /// Playback volume in [0, 1]
    pub fn volume(&self) -> f32 {
        match self {
            AudioCue::OfficeLoop => 0.5,
            AudioCue::SystemChime => 1.0,
            AudioCue::DanceLoop => 0.7,
        }
    }

    /// Whether the cue loops until stopped
    pub fn looping(&self) -> bool {
        match self {
            AudioCue::OfficeLoop | AudioCue::DanceLoop => true,
            AudioCue::SystemChime => false,
        }
    }
}

/// An instruction for the host's audio layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "op", content = "cue")]
pub enum AudioCommand {
    /// Fetch and decode the cue so a later play starts instantly
    Preload(AudioCue),
    /// Start the cue from the beginning
    Play(AudioCue),
    /// Stop the cue and release its element
    Stop(AudioCue),
}

/// Tracks desired playback state and queues commands for the host
#[derive(Clone, Debug, Default)]
pub struct AudioMixer {
    playing: Vec<AudioCue>,
    queue: Vec<AudioCommand>,
}

impl AudioMixer {
    /// Create a silent mixer
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a preload
    pub fn preload(&mut self, cue: AudioCue) {
        self.queue.push(AudioCommand::Preload(cue));
    }

    /// Start a cue (no-op if it is already playing)
    pub fn play(&mut self, cue: AudioCue) {
        if !self.is_playing(cue) {
            self.playing.push(cue);
            self.queue.push(AudioCommand::Play(cue));
        }
    }

    /// Stop a cue (no-op if it is not playing)
    pub fn stop(&mut self, cue: AudioCue) {
        if let Some(idx) = self.playing.iter().position(|c| *c == cue) {
            self.playing.remove(idx);
            self.queue.push(AudioCommand::Stop(cue));
        }
    }

    /// Stop everything; the teardown path
    pub fn stop_all(&mut self) {
        for cue in core::mem::take(&mut self.playing) {
            self.queue.push(AudioCommand::Stop(cue));
        }
    }

    /// Whether a cue is currently meant to be playing
    pub fn is_playing(&self, cue: AudioCue) -> bool {
        self.playing.contains(&cue)
    }

    /// Drain the queued commands for the host to apply
    pub fn take_commands(&mut self) -> Vec<AudioCommand> {
        core::mem::take(&mut self.queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_queues_once() {
        let mut mixer = AudioMixer::new();

        mixer.play(AudioCue::OfficeLoop);
        mixer.play(AudioCue::OfficeLoop);

        assert_eq!(
            mixer.take_commands(),
            vec![AudioCommand::Play(AudioCue::OfficeLoop)]
        );
        assert!(mixer.is_playing(AudioCue::OfficeLoop));
    }

    #[test]
    fn test_stop_only_when_playing() {
        let mut mixer = AudioMixer::new();

        mixer.stop(AudioCue::DanceLoop);
        assert!(mixer.take_commands().is_empty());

        mixer.play(AudioCue::DanceLoop);
        mixer.take_commands();
        mixer.stop(AudioCue::DanceLoop);
        assert_eq!(
            mixer.take_commands(),
            vec![AudioCommand::Stop(AudioCue::DanceLoop)]
        );
    }

    #[test]
    fn test_stop_all_releases_everything() {
        let mut mixer = AudioMixer::new();
        mixer.play(AudioCue::OfficeLoop);
        mixer.play(AudioCue::DanceLoop);
        mixer.take_commands();

        mixer.stop_all();
        let commands = mixer.take_commands();
        assert_eq!(commands.len(), 2);
        assert!(commands.contains(&AudioCommand::Stop(AudioCue::OfficeLoop)));
        assert!(commands.contains(&AudioCommand::Stop(AudioCue::DanceLoop)));
        assert!(!mixer.is_playing(AudioCue::OfficeLoop));
    }

    #[test]
    fn test_cue_tables() {
        assert!(AudioCue::OfficeLoop.looping());
        assert!(!AudioCue::SystemChime.looping());
        for cue in AudioCue::all() {
            assert!((0.0..=1.0).contains(&cue.volume()));
            assert!(cue.path().ends_with(".mp3"));
        }
    }
}

//! The asset manifest the host preloads

use serde::Serialize;

use crate::audio::AudioCue;
use crate::clip::ClipId;

/// What kind of file an asset is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Scene geometry (GLB)
    Model,
    /// A character motion clip (FBX)
    MotionClip,
    /// A flat image
    Image,
    /// An audio cue
    Audio,
}

/// One file in the manifest
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AssetEntry {
    pub path: &'static str,
    pub kind: AssetKind,
}

/// The full set of files the experience needs
pub struct AssetCatalog;

impl AssetCatalog {
    /// The office scene geometry
    pub const OFFICE_MODEL: &'static str = "models/retro-office-pack.glb";

    /// The desktop wallpaper
    pub const WALLPAPER: &'static str = "images/desktop-wallpaper-bliss.jpg";

    /// The animated boot splash shown on the monitor
    pub const BOOT_SPLASH: &'static str = "images/boot-splash.gif";

    /// Everything to preload, motion clips and audio included
    pub fn manifest() -> Vec<AssetEntry> {
        let mut entries = vec![AssetEntry {
            path: Self::OFFICE_MODEL,
            kind: AssetKind::Model,
        }];
        entries.extend(ClipId::all().iter().map(|clip| AssetEntry {
            path: clip.path(),
            kind: AssetKind::MotionClip,
        }));
        entries.push(AssetEntry {
            path: Self::WALLPAPER,
            kind: AssetKind::Image,
        });
        entries.push(AssetEntry {
            path: Self::BOOT_SPLASH,
            kind: AssetKind::Image,
        });
        entries.extend(AudioCue::all().iter().map(|cue| AssetEntry {
            path: cue.path(),
            kind: AssetKind::Audio,
        }));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_covers_everything() {
        let manifest = AssetCatalog::manifest();

        // 1 model + 4 clips + 2 images + 3 audio cues
        assert_eq!(manifest.len(), 10);
        assert!(manifest
            .iter()
            .any(|e| e.kind == AssetKind::Model && e.path.ends_with(".glb")));
        assert_eq!(
            manifest
                .iter()
                .filter(|e| e.kind == AssetKind::MotionClip)
                .count(),
            4
        );
    }

    #[test]
    fn test_manifest_paths_unique() {
        let manifest = AssetCatalog::manifest();
        for (i, a) in manifest.iter().enumerate() {
            for b in &manifest[i + 1..] {
                assert_ne!(a.path, b.path);
            }
        }
    }
}

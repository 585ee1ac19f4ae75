//! Folio OS: the full portfolio experience
//!
//! This crate wires the pieces into one application:
//!
//! 1. **Loading gate** ([`LoadingScreen`]): BIOS lines roll while the host
//!    loads 3D assets; the experience starts only after the text finishes,
//!    the assets are in, *and* the visitor clicks (which also unlocks audio).
//! 2. **Hero scene** ([`folio_scene::SceneComposer`]): the character walks
//!    to the desk, sits, types; the camera zooms onto the monitor.
//! 3. **Retro desktop** ([`folio_desktop::DesktopShell`]): the monitor boots
//!    into a windowed resume the visitor can explore.
//!
//! [`PortfolioApp`] is the host-facing engine: feed it pointer events, asset
//! progress, and a clock; render the [`FrameState`] it returns each frame.
//! With the `wasm` feature, [`FolioEngine`] exports the same surface to a
//! browser host via `wasm-bindgen`.

mod app;
mod loading;

// WASM exports (only available with the "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::FolioEngine;

pub use app::{
    AppStage, CameraView, CharacterView, ContentBundle, FrameState, PortfolioApp, SceneButtons,
    SceneView,
};
pub use loading::{LoadingEvent, LoadingPrompt, LoadingScreen, LoadingView, LOADING_SCRIPT};

/// Delay between the loading gate opening and the character starting to walk
pub use app::START_DELAY_MS;

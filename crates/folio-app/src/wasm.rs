//! Browser host exports
//!
//! A thin `wasm-bindgen` layer over [`PortfolioApp`]. The JS host owns the
//! render loop, the asset loader, and the audio elements; it feeds events
//! and `performance.now()` in, and renders the JSON frame state that comes
//! back. Frame state crosses the boundary as a JSON string so the host-side
//! types stay decoupled from this crate.

use wasm_bindgen::prelude::*;

use folio_desktop::InputResult;
use folio_scene::DeviceClass;

use crate::app::PortfolioApp;

/// The portfolio engine handle exposed to JS
#[wasm_bindgen]
pub struct FolioEngine {
    app: PortfolioApp,
}

#[wasm_bindgen]
impl FolioEngine {
    /// Create the engine for a viewport
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, is_mobile: bool) -> FolioEngine {
        let device = if is_mobile {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        };
        web_sys::console::log_1(&"folio-os engine up".into());
        FolioEngine {
            app: PortfolioApp::new(width, height, device),
        }
    }

    /// Forward an asset-loader progress report
    #[wasm_bindgen(js_name = reportProgress)]
    pub fn report_progress(&mut self, progress: f32, active: bool) {
        self.app.report_asset_progress(progress, active);
    }

    /// Static content, stage descriptors, and the asset manifest, as JSON
    pub fn content(&self) -> String {
        serde_json::to_string(&self.app.content()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Advance one frame; returns the frame state as JSON
    pub fn tick(&mut self, now_ms: f64, dt_secs: f32) -> String {
        let frame = self.app.tick(now_ms, dt_secs);
        serde_json::to_string(&frame).unwrap_or_else(|_| "{}".to_string())
    }

    /// A click anywhere (the loading gate's user gesture)
    pub fn click(&mut self, now_ms: f64) {
        self.app.click(now_ms);
    }

    /// Pointer down in desktop-shell coordinates; true when consumed
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.app.pointer_down(x, y) == InputResult::Handled
    }

    /// Pointer move; true when a drag consumed it
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.app.pointer_move(x, y) == InputResult::Handled
    }

    /// Pointer released; true when a drag ended
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) -> bool {
        self.app.pointer_up() == InputResult::Handled
    }

    /// Flip the dance break
    #[wasm_bindgen(js_name = toggleDance)]
    pub fn toggle_dance(&mut self) {
        self.app.toggle_dance();
    }

    /// "Boss is watching"
    #[wasm_bindgen(js_name = resetView)]
    pub fn reset_view(&mut self) {
        self.app.reset_view();
    }

    /// Viewport resize
    pub fn resize(&mut self, width: f32, height: f32) {
        self.app.resize(width, height);
    }

    /// Tear down; returns the final audio commands as JSON
    pub fn shutdown(&mut self) -> String {
        let commands = self.app.shutdown();
        serde_json::to_string(&commands).unwrap_or_else(|_| "[]".to_string())
    }
}

//! StoryEditor - the mounted editor handle exposed to JavaScript.

use bocadillo_browser::StoryApp;
use bocadillo_core::EditorConfig;
use wasm_bindgen::prelude::*;

/// A mounted editor. Keep it alive for as long as the page is in use;
/// freeing it detaches every listener.
#[wasm_bindgen]
pub struct StoryEditor {
    app: StoryApp,
}

#[wasm_bindgen]
impl StoryEditor {
    /// Mount on the current document.
    ///
    /// `config` is optional; missing fields fall back to the stock element ids.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<StoryEditor, JsError> {
        let config = parse_config(config)?;
        let app = StoryApp::mount(config)
            .map_err(|e| JsError::new(&format!("Mount failed: {}", e)))?;
        Ok(Self { app })
    }

    /// Number of registered characters.
    #[wasm_bindgen(js_name = characterCount)]
    pub fn character_count(&self) -> usize {
        self.app.context().state.borrow().registry.len()
    }

    /// Whether delete mode is on.
    #[wasm_bindgen(js_name = deleteMode)]
    pub fn delete_mode(&self) -> bool {
        self.app.context().state.borrow().delete_mode
    }

    /// Whether new balloons go on the right.
    #[wasm_bindgen(js_name = invertSide)]
    pub fn invert_side(&self) -> bool {
        self.app.context().state.borrow().invert_side
    }

    /// Current theme value (`white`, `dark` or `blue`).
    #[wasm_bindgen(js_name = theme)]
    pub fn theme(&self) -> String {
        self.app.context().state.borrow().theme.to_string()
    }
}

fn parse_config(config: JsValue) -> Result<EditorConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(EditorConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))
}

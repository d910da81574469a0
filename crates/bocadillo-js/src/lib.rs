//! WASM bindings for the bocadillo dialogue editor.
//!
//! Mount the editor on a page that carries the stock control ids:
//!
//! ```js
//! import init, { StoryEditor } from "./pkg/bocadillo_js.js";
//! await init();
//! const editor = new StoryEditor();          // or new StoryEditor({ ids: { editor: "story" } })
//! ```

mod editor;

pub use editor::*;

use wasm_bindgen::prelude::*;

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

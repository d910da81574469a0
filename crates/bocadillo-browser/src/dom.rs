//! Small DOM helpers shared by the rendering modules.

use bocadillo_core::PlatformError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

/// Convert a thrown JS value into a readable message.
pub fn js_message(value: JsValue) -> String {
    match gloo_utils::errors::JsError::try_from(value) {
        Ok(err) => err.to_string(),
        Err(not_error) => not_error.to_string(),
    }
}

/// Attach context to fallible web-sys calls.
pub trait JsResultExt<T> {
    fn or_platform(self, what: &str) -> Result<T, PlatformError>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
    fn or_platform(self, what: &str) -> Result<T, PlatformError> {
        self.map_err(|e| PlatformError(format!("{what} failed: {}", js_message(e))))
    }
}

pub fn window() -> Result<Window, PlatformError> {
    web_sys::window().ok_or_else(|| "no window".into())
}

pub fn document() -> Result<Document, PlatformError> {
    window()?.document().ok_or_else(|| "no document".into())
}

/// Look up an element by id and cast it to the expected type.
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, PlatformError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PlatformError(format!("element not found: #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| PlatformError(format!("element #{id} has unexpected type")))
}

/// Create an element with a class name.
pub fn create<T: JsCast>(document: &Document, tag: &str, class: &str) -> Result<T, PlatformError> {
    let element = document.create_element(tag).or_platform("create_element")?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    element
        .dyn_into::<T>()
        .map_err(|_| PlatformError(format!("<{tag}> has unexpected type")))
}

/// Scroll just enough to bring an element into view.
pub fn scroll_into_view_nearest(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_block(ScrollLogicalPosition::Nearest);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

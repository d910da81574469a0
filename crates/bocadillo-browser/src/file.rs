//! Picked files to embeddable image references.

use bocadillo_core::{EditorError, ImageRef};
use wasm_bindgen_futures::JsFuture;

use crate::dom::js_message;

/// Read a picked file and encode it as a data URL.
///
/// Suspends until the browser finishes reading. Any failure is reported as
/// `EditorError::FileRead`; callers abort without touching state.
pub async fn read_file_as_image(file: &web_sys::File) -> Result<ImageRef, EditorError> {
    let buffer = JsFuture::from(file.array_buffer()).await.map_err(|e| {
        tracing::warn!(
            target: "bocadillo::file",
            file = %file.name(),
            error = %js_message(e),
            "reading file failed"
        );
        EditorError::FileRead
    })?;

    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    tracing::trace!(
        target: "bocadillo::file",
        file = %file.name(),
        mime = %file.type_(),
        len = bytes.len(),
        "file read"
    );
    Ok(ImageRef::from_bytes(&file.type_(), &bytes))
}

/// First file of a file input, if one was picked.
pub fn picked_file(input: &web_sys::HtmlInputElement) -> Option<web_sys::File> {
    input.files().and_then(|files| files.get(0))
}

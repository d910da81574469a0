//! Delete mode: handles on balloons that remove them with one click.

use bocadillo_core::{PlatformError, class};
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom::{self, JsResultExt};

const HANDLE_LABEL: &str = "🗑️";

/// Switch delete mode on the story container and sync the handles.
///
/// Returns the number of handles present afterwards.
pub fn set_delete_mode(
    story: &Element,
    editor: &Element,
    enabled: bool,
) -> Result<usize, PlatformError> {
    story
        .class_list()
        .toggle_with_force(class::DELETE_MODE, enabled)
        .or_platform("toggle delete-mode")?;
    refresh_delete_handles(editor, enabled)
}

/// Add a delete handle to every balloon that lacks one, or remove them all.
///
/// Idempotent per balloon. Returns the number of handles present afterwards.
pub fn refresh_delete_handles(editor: &Element, enabled: bool) -> Result<usize, PlatformError> {
    let document = dom::document()?;
    let balloons = editor
        .query_selector_all(&format!(".{}", class::BALLOON))
        .or_platform("query_selector_all")?;
    let own_handle = format!(":scope > .{}", class::DELETE_HANDLE);

    let mut handles = 0;
    for i in 0..balloons.length() {
        let Some(balloon) = balloons.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let existing = balloon
            .query_selector(&own_handle)
            .or_platform("query_selector")?;

        match (enabled, existing) {
            (true, Some(_)) => handles += 1,
            (true, None) => {
                let button: HtmlElement = dom::create(&document, "button", class::DELETE_HANDLE)?;
                button.set_text_content(Some(HANDLE_LABEL));
                button
                    .set_attribute("contenteditable", "false")
                    .or_platform("set_attribute")?;
                balloon.append_child(&button).or_platform("append handle")?;
                handles += 1;
            }
            (false, Some(handle)) => handle.remove(),
            (false, None) => {}
        }
    }

    tracing::trace!(target: "bocadillo::delete", enabled, handles, "delete handles refreshed");
    Ok(handles)
}

/// Listen for clicks on delete handles inside `editor`.
///
/// One delegated listener serves every handle, present and future. A click
/// removes the handle's balloon immediately, with no confirmation.
pub fn delete_listener(editor: &Element) -> EventListener {
    EventListener::new(editor, "click", |event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(handle)) = target.closest(&format!(".{}", class::DELETE_HANDLE)) else {
            return;
        };
        let Some(balloon) = handle.parent_element() else {
            return;
        };
        if balloon.class_list().contains(class::BALLOON) {
            balloon.remove();
            tracing::debug!(target: "bocadillo::delete", "balloon removed");
        }
    })
}

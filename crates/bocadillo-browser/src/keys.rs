//! Enter-key containment: line breaks never land inside a balloon.

use bocadillo_core::{PlatformError, class};
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, Node, Selection};

use crate::dom::{self, JsResultExt};

/// Handle a keydown in the editable region.
///
/// When Enter is pressed with the caret inside a balloon, or right after
/// one, the default paragraph break is suppressed. A `<br>` goes after the
/// balloon instead and the caret moves past it. Returns whether the event
/// was handled; everything else is left to the browser.
pub fn handle_enter(editor: &Element, event: &KeyboardEvent) -> Result<bool, PlatformError> {
    if event.key() != "Enter" {
        return Ok(false);
    }
    let window = dom::window()?;
    let Some(selection) = window.get_selection().or_platform("get_selection")? else {
        return Ok(false);
    };
    if selection.range_count() == 0 {
        return Ok(false);
    }
    let Some(balloon) = balloon_at_caret(&selection)? else {
        return Ok(false);
    };
    let node: &Node = &balloon;
    if !editor.contains(Some(node)) {
        return Ok(false);
    }

    event.prevent_default();

    let document = dom::document()?;
    let br = document.create_element("br").or_platform("create_element")?;
    balloon.after_with_node_1(&br).or_platform("insert break")?;

    let range = document.create_range().or_platform("create_range")?;
    range.set_start_after(&br).or_platform("set_start_after")?;
    range.collapse_with_to_start(true);
    selection
        .remove_all_ranges()
        .or_platform("remove_all_ranges")?;
    selection.add_range(&range).or_platform("add_range")?;
    dom::scroll_into_view_nearest(&br);

    tracing::trace!(target: "bocadillo::keys", "enter redirected after balloon");
    Ok(true)
}

/// The balloon containing the caret, or the one directly before it.
fn balloon_at_caret(selection: &Selection) -> Result<Option<Element>, PlatformError> {
    let Some(anchor) = selection.anchor_node() else {
        return Ok(None);
    };
    let selector = format!(".{}", class::BALLOON);

    let element = if anchor.node_type() == Node::ELEMENT_NODE {
        anchor.clone().dyn_into::<Element>().ok()
    } else {
        anchor.parent_element()
    };
    if let Some(element) = element {
        if let Some(balloon) = element.closest(&selector).or_platform("closest")? {
            return Ok(Some(balloon));
        }
    }

    let offset = selection.anchor_offset();
    let before = match anchor.node_type() {
        // Caret between children of an element, right after a balloon.
        Node::ELEMENT_NODE if offset > 0 => anchor.child_nodes().item(offset - 1),
        // Caret at the start of the text that follows a balloon.
        Node::TEXT_NODE if offset == 0 => anchor.previous_sibling(),
        _ => None,
    };
    if let Some(before) = before.and_then(|n| n.dyn_into::<Element>().ok()) {
        if before.class_list().contains(class::BALLOON) {
            return Ok(Some(before));
        }
    }
    Ok(None)
}

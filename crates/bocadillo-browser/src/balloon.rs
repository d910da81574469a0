//! Wrapping the selected text in a speech balloon.

use bocadillo_core::{AppState, BalloonSpec, EditorError, class};
use web_sys::{Document, HtmlElement, HtmlImageElement};

use crate::dom::{self, JsResultExt};

/// Wrap the current selection in a balloon for the character chosen in the
/// selector (`selected` is the selector's value).
///
/// Nothing is mutated unless every check passes: a non-collapsed selection
/// exists, it lies inside `editor`, and `selected` names a registered
/// character. The selected content then moves into the balloon's dialogue
/// and the balloon takes its place.
pub fn insert_balloon(
    state: &AppState,
    editor: &HtmlElement,
    selected: &str,
) -> Result<HtmlElement, EditorError> {
    let window = dom::window()?;
    let selection = window
        .get_selection()
        .or_platform("get_selection")?
        .ok_or(EditorError::NoSelection)?;
    if selection.range_count() == 0 || selection.is_collapsed() {
        return Err(EditorError::NoSelection);
    }

    let range = selection.get_range_at(0).or_platform("get_range_at")?;
    let common = range
        .common_ancestor_container()
        .or_platform("common_ancestor_container")?;
    if !editor.contains(Some(&common)) {
        return Err(EditorError::SelectionOutsideEditor);
    }

    let spec = state.capture_balloon(selected)?;

    let document = dom::document()?;
    let (balloon, dialogue) = build_balloon(&document, &spec)?;

    let fragment = range.extract_contents().or_platform("extract_contents")?;
    dialogue
        .append_child(&fragment)
        .or_platform("append dialogue")?;
    range.insert_node(&balloon).or_platform("insert_node")?;
    selection
        .remove_all_ranges()
        .or_platform("remove_all_ranges")?;
    dom::scroll_into_view_nearest(&balloon);

    tracing::debug!(
        target: "bocadillo::balloon",
        character = %spec.character_id,
        side = ?spec.side,
        "balloon inserted"
    );
    Ok(balloon)
}

/// Build the balloon markup, returning the outer element and the (empty)
/// dialogue element the selected content goes into.
fn build_balloon(
    document: &Document,
    spec: &BalloonSpec,
) -> Result<(HtmlElement, HtmlElement), EditorError> {
    let balloon: HtmlElement = dom::create(document, "div", &spec.classes().join(" "))?;
    balloon
        .style()
        .set_property("background", &spec.color)
        .or_platform("set background")?;
    balloon
        .set_attribute("data-character", spec.character_id.as_str())
        .or_platform("set_attribute")?;

    let name: HtmlElement = dom::create(document, "div", class::NAME)?;
    name.set_text_content(Some(&spec.name));

    let avatar_wrap: HtmlElement = dom::create(document, "div", class::AVATAR_WRAP)?;
    let avatar: HtmlImageElement = dom::create(document, "img", class::AVATAR)?;
    avatar.set_src(spec.avatar.as_str());
    avatar.set_alt(&spec.name);
    avatar_wrap
        .append_child(&avatar)
        .or_platform("append avatar")?;

    let dialogue: HtmlElement = dom::create(document, "div", class::DIALOGUE)?;

    balloon
        .append_with_node_3(&name, &avatar_wrap, &dialogue)
        .or_platform("append balloon")?;
    Ok((balloon, dialogue))
}

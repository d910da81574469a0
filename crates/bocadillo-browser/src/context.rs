//! Shared handler context: state, bound controls and the notifier.

use std::cell::RefCell;

use bocadillo_core::{AppState, EditorConfig, EditorError, Notifier, PlatformError};
use gloo_events::EventListener;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement};

use crate::dom::{JsResultExt, element_by_id};

/// The host page elements the controller binds to.
#[derive(Clone, Debug)]
pub struct Controls {
    pub char_name: HtmlInputElement,
    pub char_color: HtmlInputElement,
    pub char_avatar: HtmlInputElement,
    pub add_char: HtmlElement,
    /// Character card panel.
    pub chars: HtmlElement,
    /// Character selector used when inserting balloons.
    pub mark_char: HtmlSelectElement,
    pub mark_btn: HtmlElement,
    pub toggle_invert: HtmlElement,
    pub toggle_delete: HtmlElement,
    pub theme_select: HtmlSelectElement,
    /// The editable region.
    pub editor: HtmlElement,
    /// Container carrying theme and delete-mode classes.
    pub story: Element,
}

impl Controls {
    pub fn from_document(document: &Document, config: &EditorConfig) -> Result<Self, PlatformError> {
        let ids = &config.ids;
        let story = document
            .query_selector(&config.story_selector)
            .or_platform("query_selector")?
            .ok_or_else(|| PlatformError(format!("element not found: {}", config.story_selector)))?;

        Ok(Self {
            char_name: element_by_id(document, &ids.char_name)?,
            char_color: element_by_id(document, &ids.char_color)?,
            char_avatar: element_by_id(document, &ids.char_avatar)?,
            add_char: element_by_id(document, &ids.add_char)?,
            chars: element_by_id(document, &ids.chars)?,
            mark_char: element_by_id(document, &ids.mark_char)?,
            mark_btn: element_by_id(document, &ids.mark_btn)?,
            toggle_invert: element_by_id(document, &ids.toggle_invert)?,
            toggle_delete: element_by_id(document, &ids.toggle_delete)?,
            theme_select: element_by_id(document, &ids.theme_select)?,
            editor: element_by_id(document, &ids.editor)?,
            story,
        })
    }
}

/// Everything an event handler needs.
///
/// Handlers run one at a time on the event loop, so state is a plain
/// `RefCell`; borrows must not be held across an `.await`.
pub struct EditorContext {
    pub state: RefCell<AppState>,
    pub config: EditorConfig,
    pub controls: Controls,
    notifier: Box<dyn Notifier>,
    /// Listeners on the currently rendered cards, replaced on every render.
    pub(crate) panel_listeners: RefCell<Vec<EventListener>>,
    /// Listeners on the open emotion file picker, if any.
    pub(crate) picker_listeners: RefCell<Vec<EventListener>>,
}

impl EditorContext {
    pub fn new(config: EditorConfig, controls: Controls, notifier: Box<dyn Notifier>) -> Self {
        Self {
            state: RefCell::new(AppState::from_config(&config)),
            config,
            controls,
            notifier,
            panel_listeners: RefCell::new(Vec::new()),
            picker_listeners: RefCell::new(Vec::new()),
        }
    }

    /// Surface a failed operation to the user (or the log).
    pub fn report(&self, error: &EditorError) {
        self.notifier.report(error);
    }
}

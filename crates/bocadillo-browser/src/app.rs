//! Mounting the controller on a host page.

use std::rc::Rc;

use bocadillo_core::{CharacterDraft, EditorConfig, EditorError, Notifier, PlatformError, Theme};
use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::balloon::insert_balloon;
use crate::context::{Controls, EditorContext};
use crate::delete::{delete_listener, set_delete_mode};
use crate::dom;
use crate::file::{picked_file, read_file_as_image};
use crate::keys::handle_enter;
use crate::notify::AlertNotifier;
use crate::panel::render_chars;
use crate::theme::apply_theme;

/// A mounted editor. Dropping it detaches every listener.
pub struct StoryApp {
    ctx: Rc<EditorContext>,
    _listeners: Vec<EventListener>,
}

impl StoryApp {
    /// Bind to the page's controls, alerting on validation failures.
    pub fn mount(config: EditorConfig) -> Result<Self, PlatformError> {
        Self::mount_with_notifier(config, Box::new(AlertNotifier))
    }

    pub fn mount_with_notifier(
        config: EditorConfig,
        notifier: Box<dyn Notifier>,
    ) -> Result<Self, PlatformError> {
        let document = dom::document()?;
        let controls = Controls::from_document(&document, &config)?;
        let ctx = Rc::new(EditorContext::new(config, controls, notifier));

        let (theme, label) = {
            let state = ctx.state.borrow();
            (state.theme, state.invert_label())
        };
        apply_theme(&ctx.controls.story, theme)?;
        ctx.controls.theme_select.set_value(theme.as_str());
        ctx.controls.toggle_invert.set_text_content(Some(label));

        let listeners = wire(&ctx);
        render_chars(&ctx)?;

        tracing::info!(target: "bocadillo::app", "editor mounted");
        Ok(Self {
            ctx,
            _listeners: listeners,
        })
    }

    pub fn context(&self) -> &Rc<EditorContext> {
        &self.ctx
    }
}

fn wire(ctx: &Rc<EditorContext>) -> Vec<EventListener> {
    let controls = &ctx.controls;
    let mut listeners = Vec::new();

    listeners.push({
        let ctx = ctx.clone();
        EventListener::new(&controls.add_char, "click", move |_| {
            let ctx = ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = add_character(&ctx).await {
                    ctx.report(&e);
                }
            });
        })
    });

    // Keep the editor selection alive when the mark button is pressed.
    listeners.push(EventListener::new_with_options(
        &controls.mark_btn,
        "mousedown",
        EventListenerOptions::enable_prevent_default(),
        |event| event.prevent_default(),
    ));

    listeners.push({
        let ctx = ctx.clone();
        EventListener::new(&controls.mark_btn, "click", move |_| {
            let selected = ctx.controls.mark_char.value();
            let result = insert_balloon(&ctx.state.borrow(), &ctx.controls.editor, &selected);
            if let Err(e) = result {
                ctx.report(&e);
            }
        })
    });

    listeners.push({
        let ctx = ctx.clone();
        EventListener::new(&controls.toggle_invert, "click", move |_| {
            let label = {
                let mut state = ctx.state.borrow_mut();
                state.toggle_invert_side();
                state.invert_label()
            };
            ctx.controls.toggle_invert.set_text_content(Some(label));
        })
    });

    listeners.push({
        let ctx = ctx.clone();
        EventListener::new(&controls.toggle_delete, "click", move |_| {
            if let Err(e) = toggle_delete(&ctx) {
                ctx.report(&e.into());
            }
        })
    });

    listeners.push({
        let ctx = ctx.clone();
        EventListener::new(&controls.theme_select, "change", move |_| {
            if let Err(e) = change_theme(&ctx) {
                ctx.report(&e);
            }
        })
    });

    listeners.push({
        let ctx = ctx.clone();
        EventListener::new_with_options(
            &controls.editor,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if let Err(e) = handle_enter(&ctx.controls.editor, event) {
                    ctx.report(&e.into());
                }
            },
        )
    });

    listeners.push(delete_listener(&controls.editor));

    listeners
}

/// Read the character form, register the character and re-render.
///
/// The form is only cleared once the character has been added.
async fn add_character(ctx: &Rc<EditorContext>) -> Result<(), EditorError> {
    let controls = &ctx.controls;
    let name = controls.char_name.value();
    if name.trim().is_empty() {
        return Err(EditorError::EmptyName);
    }
    let color = controls.char_color.value();

    let mut draft = CharacterDraft::new(name, color);
    if let Some(file) = picked_file(&controls.char_avatar) {
        draft = draft.with_avatar(read_file_as_image(&file).await?);
    }

    let id = ctx
        .state
        .borrow_mut()
        .registry
        .add(draft)
        .map(|c| c.id.clone())?;
    tracing::debug!(target: "bocadillo::app", %id, "character added from form");

    controls.char_name.set_value("");
    controls.char_avatar.set_value("");
    render_chars(ctx)?;
    Ok(())
}

/// Flip delete mode, committing the flag only once the page reflects it.
fn toggle_delete(ctx: &EditorContext) -> Result<(), PlatformError> {
    let enabled = !ctx.state.borrow().delete_mode;
    set_delete_mode(&ctx.controls.story, &ctx.controls.editor, enabled)?;
    ctx.state.borrow_mut().toggle_delete_mode();
    Ok(())
}

fn change_theme(ctx: &EditorContext) -> Result<(), EditorError> {
    let theme: Theme = ctx.controls.theme_select.value().parse()?;
    apply_theme(&ctx.controls.story, theme)?;
    ctx.state.borrow_mut().set_theme(theme);
    Ok(())
}

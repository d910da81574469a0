//! Character panel and selector rendering.
//!
//! Both regions are rebuilt from scratch on every call. Registries are
//! small (one story's cast), so full replacement is fine.

use std::rc::{Rc, Weak};

use bocadillo_core::{
    CardView, CharacterId, Emotion, EmotionThumb, PlatformError, SelectorView, UploadOutcome,
    card_views, selector_view,
};
use gloo_events::EventListener;
use web_sys::{
    Document, File, HtmlElement, HtmlImageElement, HtmlInputElement, HtmlOptionElement,
};

use crate::context::EditorContext;
use crate::dom::{self, JsResultExt};
use crate::file::{picked_file, read_file_as_image};

/// Class toggled on a card to reveal its emotion picker.
const CARD_OPEN: &str = "open";

/// Rebuild the character cards and the character selector from the registry.
pub fn render_chars(ctx: &Rc<EditorContext>) -> Result<(), PlatformError> {
    let document = dom::document()?;
    let (cards, selector) = {
        let state = ctx.state.borrow();
        (card_views(&state.registry), selector_view(&state.registry))
    };

    // The handler that triggered this render may be one of these listeners,
    // so they are dropped after it returns rather than now.
    let stale = ctx.panel_listeners.take();
    if !stale.is_empty() {
        wasm_bindgen_futures::spawn_local(async move { drop(stale) });
    }

    let controls = &ctx.controls;
    controls.chars.set_inner_html("");
    controls.mark_char.set_inner_html("");

    match selector {
        SelectorView::Placeholder { label } => {
            let option =
                HtmlOptionElement::new_with_text_and_value(label, "").or_platform("new option")?;
            option.set_disabled(true);
            controls
                .mark_char
                .append_child(&option)
                .or_platform("append option")?;
        }
        SelectorView::Options(options) => {
            for opt in options {
                let option = HtmlOptionElement::new_with_text_and_value(&opt.label, &opt.value)
                    .or_platform("new option")?;
                controls
                    .mark_char
                    .append_child(&option)
                    .or_platform("append option")?;
            }
        }
    }

    let weak = Rc::downgrade(ctx);
    let mut listeners = Vec::new();
    for card in &cards {
        let element = build_card(&document, &weak, card, &mut listeners)?;
        controls
            .chars
            .append_child(&element)
            .or_platform("append card")?;
    }
    *ctx.panel_listeners.borrow_mut() = listeners;

    tracing::trace!(target: "bocadillo::panel", cards = cards.len(), "rendered characters");
    Ok(())
}

fn build_card(
    document: &Document,
    ctx: &Weak<EditorContext>,
    card: &CardView,
    listeners: &mut Vec<EventListener>,
) -> Result<HtmlElement, PlatformError> {
    let element: HtmlElement = dom::create(document, "div", "char-card")?;
    let header: HtmlElement = dom::create(document, "div", "char-header")?;

    let avatar: HtmlImageElement = dom::create(document, "img", "char-avatar")?;
    avatar.set_src(card.avatar.as_str());
    avatar.set_alt(&card.name);

    let name: HtmlElement = dom::create(document, "div", "char-name")?;
    name.set_text_content(Some(&card.name));

    let toggle: HtmlElement = dom::create(document, "button", "add-emotion")?;
    toggle.set_text_content(Some("+"));
    let card_element = element.clone();
    listeners.push(EventListener::new(&toggle, "click", move |_| {
        if let Err(e) = card_element.class_list().toggle(CARD_OPEN) {
            tracing::warn!("toggling card failed: {:?}", e);
        }
    }));

    header
        .append_with_node_3(&avatar, &name, &toggle)
        .or_platform("append header")?;
    element.append_child(&header).or_platform("append header")?;

    let panel: HtmlElement = dom::create(document, "div", "emotions-panel")?;
    for thumb in &card.emotions {
        let wrap = build_thumb(document, ctx, &card.id, thumb, listeners)?;
        panel.append_child(&wrap).or_platform("append emotion")?;
    }
    element.append_child(&panel).or_platform("append panel")?;

    Ok(element)
}

fn build_thumb(
    document: &Document,
    ctx: &Weak<EditorContext>,
    id: &CharacterId,
    thumb: &EmotionThumb,
    listeners: &mut Vec<EventListener>,
) -> Result<HtmlElement, PlatformError> {
    let wrap: HtmlElement = dom::create(document, "div", "emotion-wrap")?;

    let img: HtmlImageElement = dom::create(document, "img", "emotion-avatar")?;
    img.set_src(thumb.image.as_str());
    img.set_title(thumb.emotion.as_str());
    if thumb.selected {
        img.class_list().add_1("selected").or_platform("mark selected")?;
    }
    {
        let ctx = ctx.clone();
        let id = id.clone();
        let emotion = thumb.emotion;
        listeners.push(EventListener::new(&img, "click", move |_| {
            let Some(ctx) = ctx.upgrade() else { return };
            select_emotion(&ctx, &id, emotion);
        }));
    }

    let change: HtmlElement = dom::create(document, "button", "change-emotion")?;
    change.set_text_content(Some("✎"));
    {
        let ctx = ctx.clone();
        let id = id.clone();
        let emotion = thumb.emotion;
        listeners.push(EventListener::new(&change, "click", move |_| {
            let Some(ctx) = ctx.upgrade() else { return };
            if let Err(e) = pick_emotion_image(ctx, id.clone(), emotion) {
                tracing::warn!(target: "bocadillo::panel", error = %e, "opening file picker failed");
            }
        }));
    }

    wrap.append_with_node_2(&img, &change)
        .or_platform("append emotion")?;
    Ok(wrap)
}

fn select_emotion(ctx: &Rc<EditorContext>, id: &CharacterId, emotion: Emotion) {
    let result = ctx.state.borrow_mut().registry.set_current_emotion(id, emotion);
    if let Err(e) = result {
        ctx.report(&e);
        return;
    }
    if let Err(e) = render_chars(ctx) {
        tracing::warn!(target: "bocadillo::panel", error = %e, "render failed");
    }
}

/// Open a file picker for one emotion slot and replace its image once the
/// picked file has been read.
///
/// At most one picker is tracked; opening another, choosing a file or
/// cancelling drops the previous listeners.
fn pick_emotion_image(
    ctx: Rc<EditorContext>,
    id: CharacterId,
    emotion: Emotion,
) -> Result<(), PlatformError> {
    let document = dom::document()?;
    let input: HtmlInputElement = dom::create(&document, "input", "")?;
    input.set_type("file");
    input.set_accept("image/*");

    let weak = Rc::downgrade(&ctx);
    let picker = input.clone();
    let on_change = EventListener::new(&input, "change", move |_| {
        let Some(ctx) = weak.upgrade() else { return };
        release_picker(&ctx);
        if let Some(file) = picked_file(&picker) {
            upload_emotion_image(ctx, id.clone(), emotion, file);
        }
    });
    let weak = Rc::downgrade(&ctx);
    let on_cancel = EventListener::new(&input, "cancel", move |_| {
        if let Some(ctx) = weak.upgrade() {
            release_picker(&ctx);
        }
    });
    *ctx.picker_listeners.borrow_mut() = vec![on_change, on_cancel];

    input.click();
    Ok(())
}

/// Drop the picker listeners once the running handler has returned.
fn release_picker(ctx: &EditorContext) {
    let stale = ctx.picker_listeners.take();
    if !stale.is_empty() {
        wasm_bindgen_futures::spawn_local(async move { drop(stale) });
    }
}

fn upload_emotion_image(ctx: Rc<EditorContext>, id: CharacterId, emotion: Emotion, file: File) {
    let begun = ctx.state.borrow_mut().registry.begin_emotion_upload(&id, emotion);
    let ticket = match begun {
        Ok(ticket) => ticket,
        Err(e) => {
            ctx.report(&e);
            return;
        }
    };
    wasm_bindgen_futures::spawn_local(async move {
        match read_file_as_image(&file).await {
            Ok(image) => {
                let outcome = ctx
                    .state
                    .borrow_mut()
                    .registry
                    .finish_emotion_upload(ticket, image);
                match outcome {
                    Ok(UploadOutcome::Applied) => {
                        if let Err(e) = render_chars(&ctx) {
                            tracing::warn!(target: "bocadillo::panel", error = %e, "render failed");
                        }
                    }
                    Ok(UploadOutcome::Stale) => {}
                    Err(e) => ctx.report(&e),
                }
            }
            Err(e) => {
                ctx.state
                    .borrow_mut()
                    .registry
                    .abandon_emotion_upload(&ticket);
                ctx.report(&e);
            }
        }
    });
}

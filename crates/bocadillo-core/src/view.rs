//! View-models for the character panel and the character selector.
//!
//! The browser layer rebuilds both regions from these on every render, so
//! everything that decides *what* is shown lives here and can be tested
//! without a DOM.

use smol_str::SmolStr;

use crate::character::{Character, CharacterId};
use crate::emotion::Emotion;
use crate::image::ImageRef;
use crate::registry::CharacterRegistry;

/// Label of the disabled selector entry shown when there are no characters.
pub const EMPTY_SELECTOR_LABEL: &str = "(Sin personajes)";

/// One emotion thumbnail on a character card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmotionThumb {
    pub emotion: Emotion,
    pub image: ImageRef,
    pub selected: bool,
}

/// A character card: header avatar and name, plus the emotion picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub id: CharacterId,
    pub name: SmolStr,
    pub avatar: ImageRef,
    pub emotions: Vec<EmotionThumb>,
}

impl CardView {
    pub fn from_character(character: &Character) -> Self {
        Self {
            id: character.id.clone(),
            name: character.name.clone(),
            avatar: character.current_avatar().clone(),
            emotions: character
                .emotions
                .iter()
                .map(|(emotion, image)| EmotionThumb {
                    emotion,
                    image: image.clone(),
                    selected: emotion == character.current_emotion,
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorOption {
    pub value: SmolStr,
    pub label: SmolStr,
}

/// Contents of the character `<select>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorView {
    /// Single disabled entry with an empty value.
    Placeholder { label: &'static str },
    Options(Vec<SelectorOption>),
}

pub fn card_views(registry: &CharacterRegistry) -> Vec<CardView> {
    registry.iter().map(CardView::from_character).collect()
}

pub fn selector_view(registry: &CharacterRegistry) -> SelectorView {
    if registry.is_empty() {
        return SelectorView::Placeholder {
            label: EMPTY_SELECTOR_LABEL,
        };
    }
    SelectorView::Options(
        registry
            .iter()
            .map(|c| SelectorOption {
                value: c.id.as_str().into(),
                label: c.name.clone(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterDraft;

    struct ThumbRow {
        emotion: String,
        selected: bool,
    }

    fn thumbs(card: &CardView) -> Vec<ThumbRow> {
        card.emotions
            .iter()
            .map(|t| ThumbRow {
                emotion: t.emotion.to_string(),
                selected: t.selected,
            })
            .collect()
    }

    #[test]
    fn test_empty_registry_shows_placeholder() {
        let reg = CharacterRegistry::with_seed(3);
        assert!(card_views(&reg).is_empty());
        assert_eq!(
            selector_view(&reg),
            SelectorView::Placeholder {
                label: "(Sin personajes)"
            }
        );
    }

    #[test]
    fn test_selector_follows_registry_order() {
        let mut reg = CharacterRegistry::with_seed(3);
        reg.add(CharacterDraft::new("Ana", "")).unwrap();
        reg.add(CharacterDraft::new("Beto", "")).unwrap();

        let SelectorView::Options(options) = selector_view(&reg) else {
            panic!("expected options");
        };
        let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["Ana", "Beto"]);
        let ids: Vec<_> = reg.iter().map(|c| c.id.as_str()).collect();
        let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ids);
    }

    #[test]
    fn test_switched_emotion_is_the_only_selected() {
        let mut reg = CharacterRegistry::with_seed(3);
        let id = reg.add(CharacterDraft::new("Ana", "")).unwrap().id.clone();
        let ticket = reg.begin_emotion_upload(&id, Emotion::Sorprendido).unwrap();
        let surprised = ImageRef::from_bytes("image/png", b"!");
        reg.finish_emotion_upload(ticket, surprised.clone()).unwrap();
        reg.set_current_emotion(&id, Emotion::Sorprendido).unwrap();

        let cards = card_views(&reg);
        assert_eq!(cards[0].avatar, surprised);
        let selected: Vec<_> = thumbs(&cards[0])
            .into_iter()
            .filter(|t| t.selected)
            .map(|t| t.emotion)
            .collect();
        assert_eq!(selected, ["sorprendido"]);
        assert_eq!(cards[0].emotions.len(), 5);
    }
}

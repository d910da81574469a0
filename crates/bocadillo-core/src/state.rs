//! Application state shared by every event handler.

use crate::balloon::BalloonSpec;
use crate::character::CharacterId;
use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::registry::CharacterRegistry;
use crate::theme::Theme;

/// Characters plus the three UI modes.
///
/// Lives for the page session; nothing is persisted.
pub struct AppState {
    pub registry: CharacterRegistry,
    pub delete_mode: bool,
    /// Applies to balloons created after it is flipped, never to existing ones.
    pub invert_side: bool,
    pub theme: Theme,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CharacterRegistry::new())
    }
}

impl AppState {
    pub fn new(registry: CharacterRegistry) -> Self {
        Self {
            registry,
            delete_mode: false,
            invert_side: false,
            theme: Theme::default(),
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        let registry = CharacterRegistry::new().with_default_color(config.default_color.as_str());
        Self {
            theme: config.initial_theme,
            ..Self::new(registry)
        }
    }

    /// Flip delete mode, returning the new value.
    pub fn toggle_delete_mode(&mut self) -> bool {
        self.delete_mode = !self.delete_mode;
        tracing::debug!(target: "bocadillo::state", delete_mode = self.delete_mode);
        self.delete_mode
    }

    /// Flip side inversion, returning the new value.
    pub fn toggle_invert_side(&mut self) -> bool {
        self.invert_side = !self.invert_side;
        tracing::debug!(target: "bocadillo::state", invert_side = self.invert_side);
        self.invert_side
    }

    /// Label of the side-inversion button.
    pub fn invert_label(&self) -> &'static str {
        if self.invert_side { "✓" } else { "⇄" }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Snapshot the character chosen in the selector for a new balloon.
    ///
    /// `selected` is the selector's raw value; empty means nothing chosen
    /// (which is also what the placeholder option carries).
    pub fn capture_balloon(&self, selected: &str) -> Result<BalloonSpec, EditorError> {
        if selected.is_empty() {
            return Err(EditorError::NoCharacterChosen);
        }
        let id = CharacterId::from(selected);
        let character = self
            .registry
            .get(&id)
            .ok_or_else(|| EditorError::UnknownCharacter(selected.to_string()))?;
        Ok(BalloonSpec::capture(character, self.invert_side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balloon::{Side, class};
    use crate::character::CharacterDraft;
    use crate::emotion::Emotion;

    fn state_with_ana() -> (AppState, String) {
        let mut state = AppState::new(CharacterRegistry::with_seed(1));
        let id = state
            .registry
            .add(CharacterDraft::new("Ana", "#abcdef"))
            .unwrap()
            .id
            .to_string();
        (state, id)
    }

    #[test]
    fn test_side_fixed_at_capture_time() {
        let (mut state, id) = state_with_ana();

        let first = state.capture_balloon(&id).unwrap();
        state.toggle_invert_side();
        let second = state.capture_balloon(&id).unwrap();

        assert_eq!(first.side, Side::Left);
        assert!(!first.classes().contains(&class::RIGHT));
        assert_eq!(second.side, Side::Right);
        assert_eq!(second.classes(), vec![class::BALLOON, class::RIGHT]);
    }

    #[test]
    fn test_capture_copies_current_avatar() {
        let (mut state, id) = state_with_ana();
        let char_id = CharacterId::from(id.as_str());
        let ticket = state
            .registry
            .begin_emotion_upload(&char_id, Emotion::Feliz)
            .unwrap();
        let happy = crate::ImageRef::from_bytes("image/png", b"happy");
        state
            .registry
            .finish_emotion_upload(ticket, happy.clone())
            .unwrap();
        state
            .registry
            .set_current_emotion(&char_id, Emotion::Feliz)
            .unwrap();

        let spec = state.capture_balloon(&id).unwrap();
        assert_eq!(spec.avatar, happy);
        assert_eq!(spec.name, "Ana");
        assert_eq!(spec.color, "#abcdef");

        // Later switches do not reach the captured spec.
        state
            .registry
            .set_current_emotion(&char_id, Emotion::Normal)
            .unwrap();
        assert_eq!(spec.avatar, happy);
    }

    #[test]
    fn test_capture_requires_character() {
        let state = AppState::new(CharacterRegistry::with_seed(1));
        assert_eq!(
            state.capture_balloon(""),
            Err(EditorError::NoCharacterChosen)
        );
        assert!(matches!(
            state.capture_balloon("char_nobody000"),
            Err(EditorError::UnknownCharacter(_))
        ));
    }

    #[test]
    fn test_toggles() {
        let mut state = AppState::default();
        assert_eq!(state.invert_label(), "⇄");
        assert!(state.toggle_invert_side());
        assert_eq!(state.invert_label(), "✓");
        assert!(!state.toggle_invert_side());

        assert!(state.toggle_delete_mode());
        assert!(!state.toggle_delete_mode());
    }

    #[test]
    fn test_from_config() {
        let config = EditorConfig {
            default_color: "#111".into(),
            initial_theme: Theme::Blue,
            ..EditorConfig::default()
        };
        let mut state = AppState::from_config(&config);
        assert_eq!(state.theme, Theme::Blue);
        let c = state.registry.add(CharacterDraft::new("Ana", "")).unwrap();
        assert_eq!(c.color, "#111");
    }
}

//! Host page configuration: which elements the controller binds to.

use serde::Deserialize;

use crate::theme::Theme;

/// Color used when a character is added without one.
pub const DEFAULT_COLOR: &str = "#f3c26b";

/// Element ids of the controls on the host page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub char_name: String,
    pub char_color: String,
    pub char_avatar: String,
    pub add_char: String,
    pub chars: String,
    pub mark_char: String,
    pub mark_btn: String,
    pub toggle_invert: String,
    pub toggle_delete: String,
    pub theme_select: String,
    pub editor: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            char_name: "charName".into(),
            char_color: "charColor".into(),
            char_avatar: "charAvatar".into(),
            add_char: "addChar".into(),
            chars: "chars".into(),
            mark_char: "markChar".into(),
            mark_btn: "markBtn".into(),
            toggle_invert: "toggleInvert".into(),
            toggle_delete: "toggleDelete".into(),
            theme_select: "themeSelect".into(),
            editor: "editor".into(),
        }
    }
}

/// Editor configuration. Every field has a default, so a host page that
/// follows the stock markup can mount with an empty object.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    pub ids: ElementIds,
    /// Selector of the container that carries theme and delete-mode classes.
    pub story_selector: String,
    pub default_color: String,
    pub initial_theme: Theme,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            story_selector: ".story-area".into(),
            default_color: DEFAULT_COLOR.into(),
            initial_theme: Theme::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_page() {
        let config = EditorConfig::default();
        assert_eq!(config.ids.mark_char, "markChar");
        assert_eq!(config.story_selector, ".story-area");
        assert_eq!(config.default_color, "#f3c26b");
        assert_eq!(config.initial_theme, Theme::White);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: EditorConfig = serde_json::from_str(
            r#"{ "ids": { "editor": "story" }, "initialTheme": "dark" }"#,
        )
        .unwrap();
        assert_eq!(config.ids.editor, "story");
        assert_eq!(config.ids.char_name, "charName");
        assert_eq!(config.initial_theme, Theme::Dark);
        assert_eq!(config.default_color, DEFAULT_COLOR);
    }
}

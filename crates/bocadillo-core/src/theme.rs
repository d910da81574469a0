//! Visual themes of the story container.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::EditorError;

/// A story container theme. Purely presentational: the only trace it leaves
/// is one marker class on the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    White,
    Dark,
    Blue,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::White, Theme::Dark, Theme::Blue];

    /// Every marker class, removed before the new one is added.
    pub const ALL_CLASSES: [&'static str; 3] = ["theme-white", "theme-dark", "theme-blue"];

    /// Value used by the theme `<select>`.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::White => "white",
            Theme::Dark => "dark",
            Theme::Blue => "blue",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Theme::White => "theme-white",
            Theme::Dark => "theme-dark",
            Theme::Blue => "theme-blue",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| EditorError::UnknownTheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names_listed() {
        for theme in Theme::ALL {
            assert!(Theme::ALL_CLASSES.contains(&theme.class_name()));
            assert_eq!(theme.class_name(), format!("theme-{theme}"));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("blue".parse::<Theme>(), Ok(Theme::Blue));
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(EditorError::UnknownTheme("sepia".into()))
        );
    }
}

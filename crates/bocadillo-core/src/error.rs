//! Error types for editor operations.

use thiserror::Error;

/// Errors surfaced by editor operations.
///
/// The `Display` text of every validation variant is the message shown to
/// the user, so it stays in the language of the product UI.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EditorError {
    /// A character was added without a name.
    #[error("Ponle un nombre al personaje")]
    EmptyName,

    /// Balloon insertion without a text selection.
    #[error("Selecciona texto en el editor")]
    NoSelection,

    /// The selection lies outside the editable story region.
    #[error("Solo puedes añadir globos dentro del área de historia")]
    SelectionOutsideEditor,

    /// No character is chosen in the selector.
    #[error("Selecciona un personaje")]
    NoCharacterChosen,

    /// The id does not name a registered character.
    #[error("personaje desconocido: {0}")]
    UnknownCharacter(String),

    /// Theme value with no matching marker class.
    #[error("tema desconocido: {0}")]
    UnknownTheme(String),

    /// Reading a picked file failed.
    #[error("Error leyendo archivo")]
    FileRead,

    /// The host page is missing something the controller needs.
    #[error("DOM error: {0}")]
    Dom(String),
}

impl EditorError {
    /// Whether this is a user mistake rather than an environment failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EditorError::EmptyName
                | EditorError::NoSelection
                | EditorError::SelectionOutsideEditor
                | EditorError::NoCharacterChosen
        )
    }
}

/// Error type for platform (DOM) operations that are not shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformError(pub String);

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for PlatformError {}

impl From<&str> for PlatformError {
    fn from(s: &str) -> Self {
        PlatformError(s.to_string())
    }
}

impl From<String> for PlatformError {
    fn from(s: String) -> Self {
        PlatformError(s)
    }
}

impl From<PlatformError> for EditorError {
    fn from(e: PlatformError) -> Self {
        EditorError::Dom(e.0)
    }
}

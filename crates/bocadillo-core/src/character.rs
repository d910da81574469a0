//! Characters: a name, a color and one avatar per emotion.

use std::fmt;

use rand::Rng;
use smol_str::SmolStr;

use crate::emotion::{Emotion, EmotionSet};
use crate::image::ImageRef;

const ID_PREFIX: &str = "char";
const ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generated character identifier, e.g. `char_k3x9q0a1z`.
///
/// Also used as the `value` of the character's selector option.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CharacterId(SmolStr);

impl CharacterId {
    /// Draw a fresh random id. Uniqueness is enforced by the registry.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut id = String::with_capacity(ID_PREFIX.len() + 1 + ID_SUFFIX_LEN);
        id.push_str(ID_PREFIX);
        id.push('_');
        for _ in 0..ID_SUFFIX_LEN {
            id.push(BASE36[rng.random_range(0..BASE36.len())] as char);
        }
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CharacterId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

/// A registered character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    pub id: CharacterId,
    pub name: SmolStr,
    /// CSS color, used as balloon background and placeholder fill.
    pub color: SmolStr,
    pub emotions: EmotionSet<ImageRef>,
    pub current_emotion: Emotion,
}

impl Character {
    /// Avatar for the emotion currently shown.
    pub fn current_avatar(&self) -> &ImageRef {
        &self.emotions[self.current_emotion]
    }
}

/// User input for a new character, as read from the form.
#[derive(Clone, Debug, Default)]
pub struct CharacterDraft {
    pub name: String,
    pub color: String,
    /// Uploaded avatar, already converted to a data URL.
    pub avatar: Option<ImageRef>,
}

impl CharacterDraft {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: ImageRef) -> Self {
        self.avatar = Some(avatar);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_generated_id_shape() {
        let mut rng = SmallRng::seed_from_u64(7);
        let id = CharacterId::generate(&mut rng);
        let suffix = id.as_str().strip_prefix("char_").unwrap();
        assert_eq!(suffix.len(), 9);
        assert!(suffix.bytes().all(|b| BASE36.contains(&b)));
    }
}

//! The fixed set of emotions every character carries an avatar for.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// One of the five avatar variants a character can show.
///
/// Wire names are the ones used in the markup (`title` attributes) and in
/// the host page, so they stay in the product's language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Emotion {
    #[default]
    Normal,
    Feliz,
    Triste,
    Enojado,
    Sorprendido,
}

impl Emotion {
    /// All emotions in display order.
    pub const ALL: [Emotion; 5] = [
        Emotion::Normal,
        Emotion::Feliz,
        Emotion::Triste,
        Emotion::Enojado,
        Emotion::Sorprendido,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Normal => "normal",
            Emotion::Feliz => "feliz",
            Emotion::Triste => "triste",
            Emotion::Enojado => "enojado",
            Emotion::Sorprendido => "sorprendido",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown emotion name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown emotion: {0}")]
pub struct UnknownEmotion(pub String);

impl FromStr for Emotion {
    type Err = UnknownEmotion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emotion::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| UnknownEmotion(s.to_string()))
    }
}

/// A value for every emotion.
///
/// Backed by a fixed array, so a character can never be missing a slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmotionSet<T> {
    slots: [T; 5],
}

impl<T: Clone> EmotionSet<T> {
    /// Fill every slot with the same value.
    pub fn splat(value: T) -> Self {
        Self {
            slots: [
                value.clone(),
                value.clone(),
                value.clone(),
                value.clone(),
                value,
            ],
        }
    }
}

impl<T> EmotionSet<T> {
    /// Iterate `(emotion, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, &T)> {
        Emotion::ALL.into_iter().zip(self.slots.iter())
    }

    pub fn get(&self, emotion: Emotion) -> &T {
        &self.slots[emotion.index()]
    }

    /// Replace one slot, returning the previous value.
    pub fn replace(&mut self, emotion: Emotion, value: T) -> T {
        std::mem::replace(&mut self.slots[emotion.index()], value)
    }
}

impl<T> Index<Emotion> for EmotionSet<T> {
    type Output = T;

    fn index(&self, emotion: Emotion) -> &T {
        self.get(emotion)
    }
}

impl<T> IndexMut<Emotion> for EmotionSet<T> {
    fn index_mut(&mut self, emotion: Emotion) -> &mut T {
        &mut self.slots[emotion.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for emotion in Emotion::ALL {
            assert_eq!(emotion.as_str().parse::<Emotion>(), Ok(emotion));
        }
    }

    #[test]
    fn test_unknown_emotion_rejected() {
        assert_eq!(
            "furioso".parse::<Emotion>(),
            Err(UnknownEmotion("furioso".to_string()))
        );
    }

    #[test]
    fn test_default_is_normal() {
        assert_eq!(Emotion::default(), Emotion::Normal);
    }

    #[test]
    fn test_splat_and_replace() {
        let mut set = EmotionSet::splat(0u8);
        assert!(set.iter().all(|(_, v)| *v == 0));

        let old = set.replace(Emotion::Triste, 7);
        assert_eq!(old, 0);
        assert_eq!(set[Emotion::Triste], 7);
        assert_eq!(set[Emotion::Feliz], 0);

        let order: Vec<_> = set.iter().map(|(e, _)| e.as_str()).collect();
        assert_eq!(order, ["normal", "feliz", "triste", "enojado", "sorprendido"]);
    }
}

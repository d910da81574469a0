//! Insertion-ordered character registry.
//!
//! Holds every character for the session and sequences emotion avatar
//! uploads so that a slow file read can never overwrite a newer one.

use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use smol_str::SmolStr;
use web_time::SystemTime;

use crate::character::{Character, CharacterDraft, CharacterId};
use crate::config::DEFAULT_COLOR;
use crate::emotion::{Emotion, EmotionSet};
use crate::error::EditorError;
use crate::image::ImageRef;

/// Handle for one in-flight emotion image upload.
///
/// Obtained from `begin_emotion_upload` before the file is read and handed
/// back to `finish_emotion_upload` once it has been converted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadTicket {
    pub character: CharacterId,
    pub emotion: Emotion,
    generation: u64,
}

/// What happened to a finished upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The image replaced the slot.
    Applied,
    /// A newer upload for the same slot was started; this one was dropped.
    Stale,
}

/// The session's characters, in display order.
pub struct CharacterRegistry {
    chars: Vec<Character>,
    default_color: SmolStr,
    rng: SmallRng,
    /// Latest upload generation per (character, emotion) slot.
    uploads: HashMap<(CharacterId, Emotion), u64>,
    next_generation: u64,
}

impl Default for CharacterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterRegistry {
    /// Create an empty registry with a clock-seeded id generator.
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(seed)
    }

    /// Create an empty registry with a fixed id seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            chars: Vec::new(),
            default_color: DEFAULT_COLOR.into(),
            rng: SmallRng::seed_from_u64(seed),
            uploads: HashMap::new(),
            next_generation: 0,
        }
    }

    /// Override the color used when a draft has none.
    pub fn with_default_color(mut self, color: impl Into<SmolStr>) -> Self {
        self.default_color = color.into();
        self
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.chars.iter()
    }

    pub fn get(&self, id: &CharacterId) -> Option<&Character> {
        self.chars.iter().find(|c| &c.id == id)
    }

    fn get_mut(&mut self, id: &CharacterId) -> Result<&mut Character, EditorError> {
        self.chars
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| EditorError::UnknownCharacter(id.to_string()))
    }

    /// Register a new character from form input.
    ///
    /// The name is trimmed and must not be empty. An empty color falls back
    /// to the default. Every emotion starts out with the same image: the
    /// uploaded avatar if there is one, otherwise a generated placeholder.
    pub fn add(&mut self, draft: CharacterDraft) -> Result<&Character, EditorError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(EditorError::EmptyName);
        }
        let color: SmolStr = match draft.color.trim() {
            "" => self.default_color.clone(),
            c => c.into(),
        };
        let avatar = draft
            .avatar
            .unwrap_or_else(|| ImageRef::placeholder(name, &color));

        let id = self.fresh_id();
        tracing::debug!(target: "bocadillo::registry", %id, name, %color, "adding character");

        self.chars.push(Character {
            id,
            name: name.into(),
            color,
            emotions: EmotionSet::splat(avatar),
            current_emotion: Emotion::Normal,
        });
        Ok(&self.chars[self.chars.len() - 1])
    }

    fn fresh_id(&mut self) -> CharacterId {
        loop {
            let id = CharacterId::generate(&mut self.rng);
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Switch which emotion a character shows.
    pub fn set_current_emotion(
        &mut self,
        id: &CharacterId,
        emotion: Emotion,
    ) -> Result<(), EditorError> {
        let character = self.get_mut(id)?;
        character.current_emotion = emotion;
        tracing::debug!(target: "bocadillo::registry", %id, %emotion, "emotion switched");
        Ok(())
    }

    /// Start replacing one emotion's image. Supersedes any earlier upload for
    /// the same slot that has not finished yet.
    pub fn begin_emotion_upload(
        &mut self,
        id: &CharacterId,
        emotion: Emotion,
    ) -> Result<UploadTicket, EditorError> {
        self.get_mut(id)?;
        self.next_generation += 1;
        let generation = self.next_generation;
        self.uploads.insert((id.clone(), emotion), generation);
        Ok(UploadTicket {
            character: id.clone(),
            emotion,
            generation,
        })
    }

    /// Apply a converted image if its ticket is still the latest for the slot.
    pub fn finish_emotion_upload(
        &mut self,
        ticket: UploadTicket,
        image: ImageRef,
    ) -> Result<UploadOutcome, EditorError> {
        let key = (ticket.character, ticket.emotion);
        if self.uploads.get(&key) != Some(&ticket.generation) {
            tracing::debug!(
                target: "bocadillo::registry",
                character = %key.0,
                emotion = %key.1,
                generation = ticket.generation,
                "dropping stale upload"
            );
            return Ok(UploadOutcome::Stale);
        }
        self.uploads.remove(&key);
        let (id, emotion) = key;
        let character = self.get_mut(&id)?;
        character.emotions.replace(emotion, image);
        tracing::debug!(target: "bocadillo::registry", %id, %emotion, "emotion image replaced");
        Ok(UploadOutcome::Applied)
    }

    /// Forget an upload whose file could not be read. The slot keeps its image.
    pub fn abandon_emotion_upload(&mut self, ticket: &UploadTicket) {
        let key = (ticket.character.clone(), ticket.emotion);
        if self.uploads.get(&key) == Some(&ticket.generation) {
            self.uploads.remove(&key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CharacterRegistry {
        CharacterRegistry::with_seed(42)
    }

    #[test]
    fn test_add_fills_every_emotion_with_same_image() {
        let mut reg = registry();
        let c = reg.add(CharacterDraft::new("Ana", "#123456")).unwrap();

        assert_eq!(c.emotions.iter().count(), 5);
        let first = c.emotions[Emotion::Normal].clone();
        assert!(c.emotions.iter().all(|(_, img)| *img == first));
        assert_eq!(c.current_emotion, Emotion::Normal);
        assert_eq!(first, ImageRef::placeholder("Ana", "#123456"));
    }

    #[test]
    fn test_add_uses_uploaded_avatar() {
        let mut reg = registry();
        let avatar = ImageRef::from_bytes("image/png", b"png");
        let c = reg
            .add(CharacterDraft::new("Ana", "").with_avatar(avatar.clone()))
            .unwrap();
        assert!(c.emotions.iter().all(|(_, img)| *img == avatar));
    }

    #[test]
    fn test_add_trims_and_defaults_color() {
        let mut reg = registry();
        let c = reg.add(CharacterDraft::new("  Ana  ", "   ")).unwrap();
        assert_eq!(c.name, "Ana");
        assert_eq!(c.color, DEFAULT_COLOR);
    }

    #[test]
    fn test_custom_default_color() {
        let mut reg = registry().with_default_color("#000");
        let c = reg.add(CharacterDraft::new("Ana", "")).unwrap();
        assert_eq!(c.color, "#000");
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut reg = registry();
        reg.add(CharacterDraft::new("Ana", "")).unwrap();

        for name in ["", "   ", "\t\n"] {
            let err = reg.add(CharacterDraft::new(name, "red")).unwrap_err();
            assert_eq!(err, EditorError::EmptyName);
        }
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_insertion_order_and_unique_ids() {
        let mut reg = registry();
        for name in ["Ana", "Beto", "Carla", "Dani"] {
            reg.add(CharacterDraft::new(name, "")).unwrap();
        }
        let names: Vec<_> = reg.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Ana", "Beto", "Carla", "Dani"]);

        let mut ids: Vec<_> = reg.iter().map(|c| c.id.clone()).collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_set_current_emotion() {
        let mut reg = registry();
        let id = reg.add(CharacterDraft::new("Ana", "")).unwrap().id.clone();

        reg.set_current_emotion(&id, Emotion::Enojado).unwrap();
        assert_eq!(reg.get(&id).unwrap().current_emotion, Emotion::Enojado);

        let missing = CharacterId::from("char_missing00");
        assert_eq!(
            reg.set_current_emotion(&missing, Emotion::Feliz),
            Err(EditorError::UnknownCharacter("char_missing00".into()))
        );
    }

    #[test]
    fn test_upload_replaces_only_its_slot() {
        let mut reg = registry();
        let id = reg.add(CharacterDraft::new("Ana", "")).unwrap().id.clone();
        let original = reg.get(&id).unwrap().emotions[Emotion::Normal].clone();

        let ticket = reg.begin_emotion_upload(&id, Emotion::Feliz).unwrap();
        let happy = ImageRef::from_bytes("image/png", b"happy");
        assert_eq!(
            reg.finish_emotion_upload(ticket, happy.clone()),
            Ok(UploadOutcome::Applied)
        );

        let c = reg.get(&id).unwrap();
        assert_eq!(c.emotions[Emotion::Feliz], happy);
        assert_eq!(c.emotions[Emotion::Normal], original);
    }

    #[test]
    fn test_stale_upload_does_not_overwrite_newer() {
        let mut reg = registry();
        let id = reg.add(CharacterDraft::new("Ana", "")).unwrap().id.clone();

        let first = reg.begin_emotion_upload(&id, Emotion::Triste).unwrap();
        let second = reg.begin_emotion_upload(&id, Emotion::Triste).unwrap();

        let newer = ImageRef::from_bytes("image/png", b"newer");
        let older = ImageRef::from_bytes("image/png", b"older");

        // Second read resolves first, then the first one straggles in.
        assert_eq!(
            reg.finish_emotion_upload(second, newer.clone()),
            Ok(UploadOutcome::Applied)
        );
        assert_eq!(
            reg.finish_emotion_upload(first, older),
            Ok(UploadOutcome::Stale)
        );
        assert_eq!(reg.get(&id).unwrap().emotions[Emotion::Triste], newer);
    }

    #[test]
    fn test_uploads_to_different_slots_are_independent() {
        let mut reg = registry();
        let id = reg.add(CharacterDraft::new("Ana", "")).unwrap().id.clone();

        let sad = reg.begin_emotion_upload(&id, Emotion::Triste).unwrap();
        let angry = reg.begin_emotion_upload(&id, Emotion::Enojado).unwrap();
        let img = ImageRef::from_bytes("image/gif", b"x");

        assert_eq!(
            reg.finish_emotion_upload(sad, img.clone()),
            Ok(UploadOutcome::Applied)
        );
        assert_eq!(
            reg.finish_emotion_upload(angry, img),
            Ok(UploadOutcome::Applied)
        );
    }

    #[test]
    fn test_abandoned_upload_keeps_image() {
        let mut reg = registry();
        let id = reg.add(CharacterDraft::new("Ana", "")).unwrap().id.clone();
        let before = reg.get(&id).unwrap().emotions[Emotion::Feliz].clone();

        let ticket = reg.begin_emotion_upload(&id, Emotion::Feliz).unwrap();
        reg.abandon_emotion_upload(&ticket);

        assert_eq!(reg.get(&id).unwrap().emotions[Emotion::Feliz], before);
        // A late completion of an abandoned ticket is treated as stale.
        let img = ImageRef::from_bytes("image/png", b"late");
        assert_eq!(
            reg.finish_emotion_upload(ticket, img),
            Ok(UploadOutcome::Stale)
        );
    }
}

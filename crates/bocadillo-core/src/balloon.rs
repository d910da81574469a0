//! What a balloon bakes into its markup when it is inserted.
//!
//! Balloons have no backing record: once inserted, the markup is the
//! document. Name, color, avatar and side are copied here by value so that
//! later changes to the character or to the toggles never reach them.

use smol_str::SmolStr;

use crate::character::{Character, CharacterId};
use crate::image::ImageRef;

/// Class names used in balloon markup and on the story container.
pub mod class {
    pub const BALLOON: &str = "balloon";
    pub const RIGHT: &str = "right";
    pub const NAME: &str = "name";
    pub const AVATAR_WRAP: &str = "avatar-wrap";
    pub const AVATAR: &str = "avatar";
    pub const DIALOGUE: &str = "dialogue";
    pub const DELETE_HANDLE: &str = "del-handle";
    pub const DELETE_MODE: &str = "delete-mode";
}

/// Which side of the story a balloon aligns to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    pub fn from_inverted(invert_side: bool) -> Self {
        if invert_side { Side::Right } else { Side::Left }
    }
}

/// Snapshot of a character taken at insertion time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalloonSpec {
    pub character_id: CharacterId,
    pub name: SmolStr,
    /// Balloon background.
    pub color: SmolStr,
    pub avatar: ImageRef,
    pub side: Side,
}

impl BalloonSpec {
    pub fn capture(character: &Character, invert_side: bool) -> Self {
        Self {
            character_id: character.id.clone(),
            name: character.name.clone(),
            color: character.color.clone(),
            avatar: character.current_avatar().clone(),
            side: Side::from_inverted(invert_side),
        }
    }

    /// Classes of the outer balloon element.
    pub fn classes(&self) -> Vec<&'static str> {
        match self.side {
            Side::Left => vec![class::BALLOON],
            Side::Right => vec![class::BALLOON, class::RIGHT],
        }
    }
}

//! bocadillo-core: Pure Rust logic for the comic dialogue editor, without DOM dependencies.
//!
//! This crate provides:
//! - `Emotion` and `EmotionSet<T>` - the fixed set of avatar variants per character
//! - `CharacterRegistry` - insertion-ordered characters with sequenced avatar uploads
//! - `AppState` - registry plus the delete-mode, side-inversion and theme toggles
//! - `BalloonSpec` - everything a balloon bakes into its markup at insertion time
//! - View-models the browser layer renders the character panel from

pub mod balloon;
pub mod character;
pub mod config;
pub mod emotion;
pub mod error;
pub mod image;
pub mod platform;
pub mod registry;
pub mod state;
pub mod theme;
pub mod view;

pub use balloon::{BalloonSpec, Side, class};
pub use character::{Character, CharacterDraft, CharacterId};
pub use config::{DEFAULT_COLOR, EditorConfig, ElementIds};
pub use emotion::{Emotion, EmotionSet};
pub use error::{EditorError, PlatformError};
pub use image::{ImageRef, encode_uri_component};
pub use platform::{Notifier, RecordingNotifier};
pub use registry::{CharacterRegistry, UploadOutcome, UploadTicket};
pub use smol_str::SmolStr;
pub use state::AppState;
pub use theme::Theme;
pub use view::{CardView, EmotionThumb, SelectorOption, SelectorView, card_views, selector_view};

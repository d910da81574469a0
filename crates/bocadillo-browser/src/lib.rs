//! Browser DOM layer for the bocadillo dialogue editor.
//!
//! This crate binds the core state to a host page. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `app`: mounts the controller and wires every control's events
//! - `panel`: character cards and the character selector
//! - `balloon`: wraps the selected text in a speech balloon
//! - `delete`: delete-mode class and per-balloon delete handles
//! - `keys`: Enter-key containment inside balloons
//! - `theme`: theme marker classes on the story container
//! - `file`: picked files to data URLs
//!
//! # Re-exports
//!
//! This crate re-exports `bocadillo-core` for convenience, so consumers
//! only need to depend on `bocadillo-browser`.

// Re-export core crate
pub use bocadillo_core;
pub use bocadillo_core::*;

pub mod app;
pub mod balloon;
pub mod context;
pub mod delete;
pub mod dom;
pub mod file;
pub mod keys;
pub mod notify;
pub mod panel;
pub mod theme;

pub use app::StoryApp;
pub use balloon::insert_balloon;
pub use context::{Controls, EditorContext};
pub use delete::{refresh_delete_handles, set_delete_mode};
pub use keys::handle_enter;
pub use notify::AlertNotifier;
pub use panel::render_chars;
pub use theme::apply_theme;

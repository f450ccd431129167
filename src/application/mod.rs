// src/application/mod.rs
pub mod deck_manager;

pub use deck_manager::{DeckManager, DeckPackager, NoteStore};

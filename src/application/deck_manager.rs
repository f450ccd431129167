// src/application/deck_manager.rs
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::{DomainError, Note};

/// Durable home of the notes. One row per `add` call, committed immediately;
/// `load_all` returns rows in insertion (primary-key) order.
pub trait NoteStore {
    fn add(&mut self, note: &Note) -> Result<(), DomainError>;
    fn load_all(&mut self) -> Result<Vec<Note>, DomainError>;
}

/// Serializes a note collection into a flashcard package file.
pub trait DeckPackager {
    fn write(&mut self, notes: &[Note], path: &Path) -> Result<(), DomainError>;
}

/// In-memory working set of notes plus the save/load/export orchestration.
///
/// The manager owns the working set; the store owns the durable copy. Each
/// save or load is a full-collection transfer: `save` appends every in-memory
/// note to the store (so saving twice duplicates rows) and `load` appends
/// every stored row to memory. Nothing here dedups, updates, or deletes.
pub struct DeckManager<S: NoteStore, P: DeckPackager> {
    store: S,
    packager: P,
    package_path: PathBuf,
    notes: Vec<Note>,
}

impl<S: NoteStore, P: DeckPackager> DeckManager<S, P> {
    pub fn new(store: S, packager: P, package_path: PathBuf) -> Self {
        Self {
            store,
            packager,
            package_path,
            notes: Vec::new(),
        }
    }

    /// Append a note to the working set. Repeated identical notes are all kept.
    pub fn add_note(&mut self, note: Note) {
        debug!(word = %note.german_word, "Adding note to deck");
        self.notes.push(note);
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn package_path(&self) -> &Path {
        &self.package_path
    }

    /// Persist the working set row by row, then write the package file.
    ///
    /// A storage failure part-way leaves the already-persisted prefix in the
    /// store and writes no package file; the error propagates unchanged.
    pub fn save(&mut self) -> Result<(), DomainError> {
        for note in &self.notes {
            self.store.add(note)?;
        }
        self.packager.write(&self.notes, &self.package_path)?;
        info!(count = self.notes.len(), path = %self.package_path.display(), "Saved deck");
        Ok(())
    }

    /// Append every stored note to the working set.
    pub fn load(&mut self) -> Result<(), DomainError> {
        let loaded = self.store.load_all()?;
        debug!(count = loaded.len(), "Loaded notes from store");
        self.notes.extend(loaded);
        Ok(())
    }

    /// Write the package file from the working set only, leaving the store
    /// untouched.
    pub fn export(&mut self) -> Result<(), DomainError> {
        self.packager.write(&self.notes, &self.package_path)?;
        info!(count = self.notes.len(), path = %self.package_path.display(), "Exported deck");
        Ok(())
    }
}

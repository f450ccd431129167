// src/infrastructure/store.rs
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use tracing::{debug, instrument};

use crate::application::NoteStore;
use crate::domain::{DomainError, Note};

/// Single-table SQLite store for vocabulary notes.
///
/// Only the path is held here. Every operation opens its own short-lived
/// connection and commits before returning, so a handle can sit around for
/// the lifetime of the process without pinning the database file.
pub struct SqliteNoteStore {
    db_path: PathBuf,
}

impl SqliteNoteStore {
    /// Open (or create) the store at `db_path`, creating the schema if absent.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self, DomainError> {
        let store = Self {
            db_path: db_path.as_ref().to_path_buf(),
        };

        let conn = store.connect()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS notes (
                id INTEGER PRIMARY KEY,
                german_word TEXT NOT NULL,
                translation TEXT NOT NULL,
                german_sentence TEXT NOT NULL,
                english_sentence TEXT NOT NULL,
                other_forms TEXT
            )",
        )?;

        debug!(path = %store.db_path.display(), "Opened note store");
        Ok(store)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> Result<Connection, DomainError> {
        Ok(Connection::open(&self.db_path)?)
    }
}

impl NoteStore for SqliteNoteStore {
    #[instrument(level = "debug", skip(self, note), fields(word = %note.german_word))]
    fn add(&mut self, note: &Note) -> Result<(), DomainError> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO notes (german_word, translation, german_sentence, english_sentence, other_forms)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                note.german_word,
                note.translation,
                note.german_sentence,
                note.english_sentence,
                note.other_forms,
            ],
        )?;
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    fn load_all(&mut self) -> Result<Vec<Note>, DomainError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT german_word, translation, german_sentence, english_sentence, other_forms
             FROM notes ORDER BY id",
        )?;

        let notes = stmt
            .query_map([], |row| {
                Ok(Note {
                    german_word: row.get(0)?,
                    translation: row.get(1)?,
                    german_sentence: row.get(2)?,
                    english_sentence: row.get(3)?,
                    other_forms: row.get(4)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(notes)
    }
}

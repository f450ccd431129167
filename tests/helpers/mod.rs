// tests/helpers/mod.rs
use std::path::Path;

use anyhow::Result;
use wortschatz::application::DeckManager;
use wortschatz::domain::{DeckModel, Note};
use wortschatz::infrastructure::{ApkgWriter, SqliteNoteStore};

pub const DECK_ID: i64 = 2059400110;
pub const MODEL_ID: i64 = 1607392319;

/// Build a manager over `<base>.db` / `<base>.apkg`, the same wiring the CLI
/// uses.
pub fn manager_at(base: &Path) -> Result<DeckManager<SqliteNoteStore, ApkgWriter>> {
    let store = SqliteNoteStore::new(base.with_extension("db"))?;
    let writer = ApkgWriter::new(
        DECK_ID,
        "German Vocabulary".to_string(),
        DeckModel::german_vocabulary(MODEL_ID),
    );
    Ok(DeckManager::new(store, writer, base.with_extension("apkg")))
}

pub fn vereinbaren_note() -> Note {
    Note::new(
        "vereinbaren",
        "to agree",
        "Wir haben ein Treffen vereinbart.",
        "We agreed on a meeting.",
        Some("vereinbarte, vereinbart".to_string()),
    )
}

pub fn maedchen_note() -> Note {
    Note::new(
        "das Mädchen",
        "the girl",
        "Das Mädchen spielt im Park.",
        "The girl is playing in the park.",
        Some("die Mädchen".to_string()),
    )
}

// src/infrastructure/package.rs
use std::path::Path;

use genanki_rs::{Deck, Field, Model, Template};
use tracing::{debug, instrument};

use crate::application::DeckPackager;
use crate::domain::{DeckModel, DomainError, Note};

/// Writes the note collection as an Anki package (`.apkg`) via genanki-rs.
///
/// The deck model descriptor is converted to the packaging library's model
/// once per write; the package's internal layout is fully owned by genanki-rs.
pub struct ApkgWriter {
    deck_id: i64,
    deck_name: String,
    model: DeckModel,
}

impl ApkgWriter {
    pub fn new(deck_id: i64, deck_name: String, model: DeckModel) -> Self {
        Self {
            deck_id,
            deck_name,
            model,
        }
    }

    fn build_model(&self) -> Model {
        let fields = self.model.fields.iter().map(|f| Field::new(f)).collect();
        let templates = self
            .model
            .templates
            .iter()
            .map(|t| Template::new(t.name).qfmt(t.qfmt).afmt(t.afmt))
            .collect();
        Model::new(self.model.model_id, self.model.name, fields, templates)
    }
}

impl DeckPackager for ApkgWriter {
    #[instrument(level = "debug", skip(self, notes), fields(count = notes.len()))]
    fn write(&mut self, notes: &[Note], path: &Path) -> Result<(), DomainError> {
        let model = self.build_model();
        let mut deck = Deck::new(self.deck_id, &self.deck_name, "");

        for note in notes {
            let packaged = genanki_rs::Note::new(model.clone(), note.to_fields())
                .map_err(|e| DomainError::Package(e.to_string()))?;
            deck.add_note(packaged);
        }

        let path_str = path
            .to_str()
            .ok_or_else(|| DomainError::InvalidPath(path.display().to_string()))?;
        deck.write_to_file(path_str)
            .map_err(|e| DomainError::Package(e.to_string()))?;

        debug!(path = %path.display(), "Wrote Anki package");
        Ok(())
    }
}

// src/domain/note.rs
use serde::Serialize;

/// One vocabulary flashcard record.
///
/// `other_forms` holds plural or past-tense forms where the word has them;
/// it stays `None` for words without extra forms (adverbs, adjectives).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub german_word: String,
    pub translation: String,
    pub german_sentence: String,
    pub english_sentence: String,
    pub other_forms: Option<String>,
}

impl Note {
    pub fn new(
        german_word: impl Into<String>,
        translation: impl Into<String>,
        german_sentence: impl Into<String>,
        english_sentence: impl Into<String>,
        other_forms: Option<String>,
    ) -> Self {
        Self {
            german_word: german_word.into(),
            translation: translation.into(),
            german_sentence: german_sentence.into(),
            english_sentence: english_sentence.into(),
            other_forms,
        }
    }

    /// Field values in deck-model order. The ordered list exists only at the
    /// packaging boundary; everywhere else the fields are named.
    pub fn to_fields(&self) -> Vec<&str> {
        vec![
            self.german_word.as_str(),
            self.translation.as_str(),
            self.german_sentence.as_str(),
            self.english_sentence.as_str(),
            self.other_forms.as_deref().unwrap_or(""),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_full_note_when_converting_to_fields_then_order_matches_model() {
        let note = Note::new(
            "vereinbaren",
            "to agree",
            "Wir haben ein Treffen vereinbart.",
            "We agreed on a meeting.",
            Some("vereinbarte, vereinbart".to_string()),
        );

        assert_eq!(
            note.to_fields(),
            vec![
                "vereinbaren",
                "to agree",
                "Wir haben ein Treffen vereinbart.",
                "We agreed on a meeting.",
                "vereinbarte, vereinbart",
            ]
        );
    }

    #[test]
    fn given_no_other_forms_when_converting_to_fields_then_last_field_is_empty() {
        let note = Note::new("schnell", "fast", "Er läuft schnell.", "He runs fast.", None);

        assert_eq!(note.to_fields()[4], "");
        assert_eq!(note.other_forms, None);
    }
}

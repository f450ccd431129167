// src/ports/text.rs
use crate::domain::Note;

/// Renders notes for terminal output.
#[derive(Debug)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, notes: &[Note]) -> String {
        let mut out = String::new();
        for (idx, note) in notes.iter().enumerate() {
            out.push_str(&format!(
                "{:>4}  {}: {}\n      {} / {}\n",
                idx + 1,
                note.german_word,
                note.translation,
                note.german_sentence,
                note.english_sentence
            ));
            if let Some(forms) = &note.other_forms {
                out.push_str(&format!("      Other forms: {forms}\n"));
            }
        }
        out
    }
}

impl Default for TextPresenter {
    fn default() -> Self {
        Self::new()
    }
}

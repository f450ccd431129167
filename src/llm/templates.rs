// src/llm/templates.rs
//
// The five prompt contracts used to turn raw text into vocabulary notes:
// extraction, word translation, other grammatical forms, example-sentence
// generation, and sentence translation. Purely declarative; rendering fills
// the single input placeholder and appends the paired schema's format
// instructions. Invocation, retries, and transport live with the caller.

use crate::llm::response::{ResponseSchema, GERMAN_WORDS, MAPPING, TRANSLATIONS};

/// A fixed system/user prompt pair with one named `{placeholder}` in the user
/// text and the response schema the reply must follow.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    pub system: &'static str,
    user: &'static str,
    placeholder: &'static str,
    pub schema: &'static ResponseSchema,
}

/// A template with its placeholder filled, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt {
    pub system: String,
    pub user: String,
}

impl PromptTemplate {
    pub fn render(&self, input: &str) -> RenderedPrompt {
        let marker = format!("{{{}}}", self.placeholder);
        RenderedPrompt {
            system: self.system.to_string(),
            user: format!(
                "{}\n\n{}",
                self.user.replace(&marker, input),
                self.schema.format_instructions()
            ),
        }
    }
}

/// Free text -> list of German words and phrases.
pub static EXTRACT_WORDS: PromptTemplate = PromptTemplate {
    system: "You are a highly skilled assistant specializing in linguistic extraction \
             from German text.",
    user: "Extract all German words and phrases from the text below.\n\
           - Keep articles together with their nouns (e.g. `der Hund`, not `Hund`); \
           add the article if it is missing.\n\
           - Keep recognized phrases intact (e.g. `noch einmal` stays one entry).\n\
           - Return the words and phrases as a semicolon-separated list, nothing else.\n\n\
           Text:\n```{input_text}```",
    placeholder: "input_text",
    schema: &GERMAN_WORDS,
};

/// Word list -> list of English translations, order preserving.
pub static TRANSLATE_WORDS: PromptTemplate = PromptTemplate {
    system: "You are an expert translator specializing in German-to-English translations.",
    user: "Translate the following German words and phrases into English.\n\
           - Translate each entry to its closest English equivalent; where a word is \
           ambiguous, pick the most common meaning.\n\
           - Keep the input order and produce one translation per entry.\n\
           - Return only the translations, without comments or additional text.\n\n\
           Words:\n```{german_words}```",
    placeholder: "german_words",
    schema: &GERMAN_WORDS,
};

/// Word list -> mapping of word to its other grammatical forms, `NONE` where
/// a word has none.
pub static OTHER_FORMS: PromptTemplate = PromptTemplate {
    system: "You are an experienced German language teacher.",
    user: "For each of the following German words or phrases:\n\
           - Verbs: return both past forms (Präteritum and Perfekt).\n\
           - Nouns: return the plural form.\n\
           - Any other kind of word: return `NONE`.\n\
           Keep the input order, one entry per input, no numbering and no commentary.\n\n\
           Example input: ```kennen, der Tisch, spielen, schnell```\n\
           Example output: kennen : kannte, habe gekannt ; der Tisch : die Tische ; \
           spielen : spielte, habe gespielt ; schnell : NONE\n\n\
           Words:\n```{german_words}```",
    placeholder: "german_words",
    schema: &MAPPING,
};

/// Word list -> mapping of word to exactly one simple B1-level example
/// sentence, same cardinality as the input.
pub static WORD_SENTENCES: PromptTemplate = PromptTemplate {
    system: "You are an experienced German language teacher, specializing in B1 level German.",
    user: "Write exactly one simple B1-level German sentence for each of the following \
           words or phrases.\n\
           - One sentence per entry, in the input order; the output must contain as many \
           entries as the input.\n\
           - Use clear, simple sentence structures appropriate for B1 learners.\n\
           - Do not add comments, explanations, or numbering.\n\n\
           Example input: ```Abschluss ; Geld verlangen```\n\
           Example output: Abschluss : Die Schule hat einen wichtigen Abschluss. ; \
           Geld verlangen : Man kann für gute Arbeit Geld verlangen.\n\n\
           Words:\n{german_words}",
    placeholder: "german_words",
    schema: &MAPPING,
};

/// Sentence list -> list of English translations, order preserving.
pub static TRANSLATE_SENTENCES: PromptTemplate = PromptTemplate {
    system: "You are an expert in German-to-English translation, specializing in clear, \
             concise B1/B2 level English.",
    user: "Translate the following German sentences into simple and clear English, \
           suitable for B1/B2 proficiency levels.\n\
           - Keep the sentence order.\n\
           - Do not include comments, explanations, or numbering.\n\n\
           Sentences:\n```{german_sentences}```",
    placeholder: "german_sentences",
    schema: &TRANSLATIONS,
};

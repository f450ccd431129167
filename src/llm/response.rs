// src/llm/response.rs
//
// Structured-response contracts for the language-model boundary. A reply must
// carry a fenced ```json block (or be bare JSON) whose object holds the
// schema's field; the field value is a delimiter-separated payload. Anything
// else is an error: the parsers are deliberately strict so that model
// commentary never leaks into note fields.

use regex::Regex;
use thiserror::Error;

/// Sentinel the model returns for words without other grammatical forms.
pub const NO_FORMS_MARKER: &str = "NONE";

#[derive(Error, Debug)]
pub enum ResponseError {
    #[error("reply is not structured JSON output: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("reply is missing response field `{0}`")]
    MissingField(String),
    #[error("malformed mapping entry: `{0}`")]
    MalformedEntry(String),
}

/// Names and describes the single field a model reply must carry. The
/// description doubles as the payload-shape documentation embedded into the
/// rendered prompt's format instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseSchema {
    pub name: &'static str,
    pub description: &'static str,
}

impl ResponseSchema {
    /// Format instructions appended to every rendered prompt, mirroring the
    /// reply shape the parsers accept.
    pub fn format_instructions(&self) -> String {
        format!(
            "Return a markdown code block with a JSON object formatted exactly as follows:\n\
             ```json\n\
             {{\n\
             \t\"{}\": string  // {}\n\
             }}\n\
             ```",
            self.name, self.description
        )
    }
}

pub const GERMAN_WORDS: ResponseSchema = ResponseSchema {
    name: "german_words",
    description: "A list of German words/phrases separated by semicolons `;`.",
};

pub const TRANSLATIONS: ResponseSchema = ResponseSchema {
    name: "translations",
    description: "A list of the sentences separated by semicolons `;`, \
                  in input order, with no extra commentary.",
};

pub const MAPPING: ResponseSchema = ResponseSchema {
    name: "mapping",
    description: "Entries of the form `input : output` separated by semicolons `;`, \
                  e.g. `kennen : kannte, habe gekannt ; der Hund : die Hunde`.",
};

/// Pull the schema field's payload string out of a raw model reply.
fn extract_payload(raw: &str, schema: &ResponseSchema) -> Result<String, ResponseError> {
    let block_re = Regex::new(r"```(?:json)?\s*([\s\S]*?)\s*```").unwrap();
    let json_text = match block_re.captures(raw) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str()),
        None => raw.trim(),
    };

    let value: serde_json::Value = serde_json::from_str(json_text)?;
    value
        .get(schema.name)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| ResponseError::MissingField(schema.name.to_string()))
}

/// Parse a `;`-separated list reply. Order preserving; empty entries from
/// trailing delimiters are dropped.
pub fn parse_list(raw: &str, schema: &ResponseSchema) -> Result<Vec<String>, ResponseError> {
    let payload = extract_payload(raw, schema)?;
    Ok(payload
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect())
}

/// Parse a `input : output ; ...` mapping reply into ordered pairs. The
/// `NONE` sentinel becomes an absent value; an entry without a colon fails.
pub fn parse_mapping(raw: &str) -> Result<Vec<(String, Option<String>)>, ResponseError> {
    let payload = extract_payload(raw, &MAPPING)?;

    payload
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (key, value) = entry
                .split_once(':')
                .ok_or_else(|| ResponseError::MalformedEntry(entry.to_string()))?;
            let value = value.trim();
            let value = if value == NO_FORMS_MARKER {
                None
            } else {
                Some(value.to_string())
            };
            Ok((key.trim().to_string(), value))
        })
        .collect()
}

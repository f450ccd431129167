// src/domain/model.rs
//
// Static schema descriptor for the vocabulary deck: five field names and two
// card layouts (German->English and the reverse direction). Plain data here;
// the conversion into a packaging-library model happens in the infrastructure
// layer.

/// One card layout within the deck model. `qfmt`/`afmt` use the packaging
/// library's `{{Field Name}}` substitution syntax and are resolved by Anki at
/// review time, not by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTemplate {
    pub name: &'static str,
    pub qfmt: &'static str,
    pub afmt: &'static str,
}

/// Immutable deck schema: field names plus card templates, identified by the
/// caller-supplied model id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckModel {
    pub model_id: i64,
    pub name: &'static str,
    pub fields: &'static [&'static str],
    pub templates: &'static [CardTemplate],
}

pub const FIELD_NAMES: &[&str] = &[
    "German Word",
    "Translation",
    "German Sentence",
    "English Sentence",
    "Other Forms",
];

const TEMPLATES: &[CardTemplate] = &[
    CardTemplate {
        name: "Card 1",
        qfmt: "{{German Word}}<br><br>{{German Sentence}}<br><br><b>Other forms:</b> {{Other Forms}}",
        afmt: "{{FrontSide}}<hr id=\"answer\">{{Translation}}<br><br>{{English Sentence}}",
    },
    CardTemplate {
        name: "Card 2: English to German",
        qfmt: "{{Translation}}<br><br>{{English Sentence}}",
        afmt: "{{FrontSide}}<hr id=\"answer\">{{German Word}}<br><br>{{German Sentence}}<br><br><b>Other forms:</b> {{Other Forms}}",
    },
];

impl DeckModel {
    /// The standard German vocabulary model.
    pub fn german_vocabulary(model_id: i64) -> Self {
        Self {
            model_id,
            name: "German Vocabulary Model",
            fields: FIELD_NAMES,
            templates: TEMPLATES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_standard_model_when_constructed_then_declares_five_fields() {
        let model = DeckModel::german_vocabulary(1607392319);

        assert_eq!(model.model_id, 1607392319);
        assert_eq!(model.fields.len(), 5);
        assert_eq!(model.fields[0], "German Word");
        assert_eq!(model.fields[4], "Other Forms");
    }

    #[test]
    fn given_standard_model_when_constructed_then_has_forward_and_reverse_cards() {
        let model = DeckModel::german_vocabulary(1);

        assert_eq!(model.templates.len(), 2);
        assert!(model.templates[0].qfmt.contains("{{German Word}}"));
        assert!(model.templates[1].qfmt.contains("{{Translation}}"));
        // Both answer sides repeat the question side.
        for template in model.templates {
            assert!(template.afmt.starts_with("{{FrontSide}}"));
        }
    }

    #[test]
    fn given_templates_when_inspected_then_reference_only_declared_fields() {
        let model = DeckModel::german_vocabulary(1);
        let known: Vec<String> = model
            .fields
            .iter()
            .map(|f| format!("{{{{{f}}}}}"))
            .collect();

        for template in model.templates {
            for text in [template.qfmt, template.afmt] {
                for placeholder in text.match_indices("{{") {
                    let rest = &text[placeholder.0..];
                    let end = rest.find("}}").expect("unterminated placeholder") + 2;
                    let name = &rest[..end];
                    assert!(
                        name == "{{FrontSide}}" || known.iter().any(|k| k == name),
                        "unknown placeholder {name}"
                    );
                }
            }
        }
    }
}

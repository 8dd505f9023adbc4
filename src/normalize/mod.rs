//! Record normalizer: maps one raw dictionary record onto a flat
//! [`LexicalEntry`]. This is a pure per-record transform; all I/O and
//! persistence belong to the surrounding driver.

mod forms;
mod pos;

pub use forms::GrammaticalForms;

use crate::entry::{LexicalEntry, Relations};
use serde_json::Value;

/// Normalize a decoded dump record.
///
/// Returns `None` when the record lacks a usable `word` or `pos`. Optional
/// sub-fields with an unexpected shape are treated as absent; they never
/// fail the record.
pub fn normalize(record: &Value) -> Option<LexicalEntry> {
    let word = non_empty_str(record.get("word"))?;
    let pos = non_empty_str(record.get("pos"))?;

    let forms = forms::extract(record.get("forms"));
    let compare = forms.compare();

    Some(LexicalEntry {
        word: word.to_string(),
        part_of_speech: pos::expand(pos).to_string(),
        etymology: non_empty_str(record.get("etymology_text")).map(str::to_string),
        pronunciation: first_ipa(record),
        definitions: collect_definitions(record),
        examples: collect_examples(record),
        plural: forms.plural,
        compare,
        tenses: forms.tenses,
        relations: relations(record),
    })
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// First IPA transcription across the record's sounds, in input order. No
/// preference by sound type.
fn first_ipa(record: &Value) -> Option<String> {
    record
        .get("sounds")?
        .as_array()?
        .iter()
        .find_map(|sound| non_empty_str(sound.get("ipa")).map(str::to_string))
}

fn collect_definitions(record: &Value) -> Vec<String> {
    let mut definitions = Vec::new();
    if let Some(senses) = record.get("senses").and_then(Value::as_array) {
        for sense in senses {
            if let Some(glosses) = sense.get("glosses").and_then(Value::as_array) {
                definitions.extend(glosses.iter().filter_map(Value::as_str).map(str::to_string));
            }
        }
    }
    definitions
}

fn collect_examples(record: &Value) -> Vec<String> {
    let mut examples = Vec::new();
    if let Some(senses) = record.get("senses").and_then(Value::as_array) {
        for sense in senses {
            if let Some(items) = sense.get("examples").and_then(Value::as_array) {
                for item in items {
                    if let Some(text) = non_empty_str(item.get("text")) {
                        examples.push(text.to_string());
                    }
                }
            }
        }
    }
    examples
}

fn relations(record: &Value) -> Relations {
    Relations {
        synonyms: extract_relation(record, "synonyms"),
        antonyms: extract_relation(record, "antonyms"),
        hypernyms: extract_relation(record, "hypernyms"),
        hyponyms: extract_relation(record, "hyponyms"),
        holonyms: extract_relation(record, "holonyms"),
        meronyms: extract_relation(record, "meronyms"),
        troponyms: extract_relation(record, "troponyms"),
        derived: extract_relation(record, "derived"),
        related: extract_relation(record, "related"),
        homophones: extract_relation(record, "homophones"),
    }
}

/// Pull the ordered word list for one relation key. An element is accepted
/// when it is a plain string or an object carrying a non-empty `word`
/// field; anything else is dropped without affecting its siblings.
fn extract_relation(record: &Value, key: &str) -> Vec<String> {
    let mut words = Vec::new();
    if let Some(items) = record.get(key).and_then(Value::as_array) {
        for item in items {
            match item {
                Value::String(s) => words.push(s.clone()),
                Value::Object(_) => {
                    if let Some(word) = non_empty_str(item.get("word")) {
                        words.push(word.to_string());
                    }
                }
                _ => {}
            }
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejects_record_without_word() {
        let record = json!({"pos": "noun", "senses": [{"glosses": ["a thing"]}]});
        assert!(normalize(&record).is_none());
    }

    #[test]
    fn test_rejects_record_without_pos() {
        let record = json!({"word": "cat", "senses": [{"glosses": ["a feline"]}]});
        assert!(normalize(&record).is_none());
    }

    #[test]
    fn test_rejects_empty_word_or_pos() {
        assert!(normalize(&json!({"word": "", "pos": "noun"})).is_none());
        assert!(normalize(&json!({"word": "cat", "pos": ""})).is_none());
    }

    #[test]
    fn test_full_verb_record() {
        let record = json!({
            "word": "run",
            "pos": "v",
            "senses": [
                {"glosses": ["to move fast"], "examples": [{"text": "He ran."}]}
            ],
            "synonyms": ["sprint", {"word": "dash"}],
            "forms": [
                {"form": "running", "tags": ["gerund"]},
                {"form": "ran", "tags": ["past"]}
            ]
        });

        let entry = normalize(&record).unwrap();
        assert_eq!(entry.word, "run");
        assert_eq!(entry.part_of_speech, "verb");
        assert_eq!(entry.definitions, vec!["to move fast"]);
        assert_eq!(entry.examples, vec!["He ran."]);
        assert_eq!(entry.relations.synonyms, vec!["sprint", "dash"]);
        assert_eq!(entry.tenses, vec!["running", "ran"]);
    }

    #[test]
    fn test_definitions_preserve_sense_order_and_duplicates() {
        let record = json!({
            "word": "set",
            "pos": "noun",
            "senses": [
                {"glosses": ["a collection", "a collection"]},
                {"glosses": ["a group of things"]}
            ]
        });

        let entry = normalize(&record).unwrap();
        assert_eq!(
            entry.definitions,
            vec!["a collection", "a collection", "a group of things"]
        );
    }

    #[test]
    fn test_examples_skip_missing_or_empty_text() {
        let record = json!({
            "word": "cat",
            "pos": "noun",
            "senses": [
                {"glosses": ["a feline"], "examples": [
                    {"text": "The cat sat."},
                    {"ref": "citation only"},
                    {"text": ""}
                ]}
            ]
        });

        let entry = normalize(&record).unwrap();
        assert_eq!(entry.examples, vec!["The cat sat."]);
    }

    #[test]
    fn test_first_ipa_wins() {
        let record = json!({
            "word": "cat",
            "pos": "noun",
            "sounds": [
                {"audio": "cat.ogg"},
                {"ipa": "/kæt/"},
                {"ipa": "/kat/"}
            ]
        });

        let entry = normalize(&record).unwrap();
        assert_eq!(entry.pronunciation.as_deref(), Some("/kæt/"));
    }

    #[test]
    fn test_relation_elements_of_wrong_type_are_dropped() {
        let record = json!({
            "word": "big",
            "pos": "adj",
            "antonyms": ["valid", 42, {"word": "ok"}, {"note": "x"}]
        });

        let entry = normalize(&record).unwrap();
        assert_eq!(entry.relations.antonyms, vec!["valid", "ok"]);
    }

    #[test]
    fn test_relation_duplicates_are_retained() {
        let record = json!({
            "word": "big",
            "pos": "adj",
            "synonyms": ["large", {"word": "large"}, "huge"]
        });

        let entry = normalize(&record).unwrap();
        assert_eq!(entry.relations.synonyms, vec!["large", "large", "huge"]);
    }

    #[test]
    fn test_misshapen_optional_fields_are_treated_as_absent() {
        let record = json!({
            "word": "odd",
            "pos": "adj",
            "senses": "not a list",
            "sounds": {"ipa": "/ɒd/"},
            "synonyms": "strange",
            "forms": 7
        });

        let entry = normalize(&record).unwrap();
        assert!(entry.definitions.is_empty());
        assert!(entry.pronunciation.is_none());
        assert!(entry.relations.synonyms.is_empty());
        assert!(entry.plural.is_none());
    }

    #[test]
    fn test_named_forms_mapping() {
        let record = json!({
            "word": "happy",
            "pos": "adj",
            "forms": {"comparative": "happier", "superlative": "happiest"}
        });

        let entry = normalize(&record).unwrap();
        assert_eq!(entry.compare, vec!["happier", "happiest"]);
    }

    #[test]
    fn test_unknown_pos_passes_through() {
        let record = json!({"word": "hm", "pos": "romanization"});
        let entry = normalize(&record).unwrap();
        assert_eq!(entry.part_of_speech, "romanization");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let record = json!({
            "word": "run",
            "pos": "v",
            "senses": [{"glosses": ["to move fast"]}],
            "synonyms": ["sprint"],
            "forms": [{"form": "ran", "tags": ["past"]}]
        });

        assert_eq!(normalize(&record), normalize(&record));
    }
}

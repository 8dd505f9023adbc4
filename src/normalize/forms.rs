use serde_json::{Map, Value};

/// Tags that route a tagged form into the tense list.
const TENSE_TAGS: [&str; 5] = [
    "third-person",
    "past-participle",
    "present-participle",
    "gerund",
    "past",
];

/// The two shapes the raw `forms` field arrives in.
enum FormsField<'a> {
    /// Flat mapping of form name to word text.
    Named(&'a Map<String, Value>),
    /// Sequence of `{form, tags}` objects.
    Tagged(&'a [Value]),
}

/// Grammatical forms pulled out of one record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrammaticalForms {
    pub plural: Option<String>,
    pub comparative: Option<String>,
    pub superlative: Option<String>,
    /// Distinct form texts in first-seen order.
    pub tenses: Vec<String>,
}

impl GrammaticalForms {
    /// Comparative before superlative; absent members shrink the list.
    pub fn compare(&self) -> Vec<String> {
        self.comparative
            .iter()
            .chain(self.superlative.iter())
            .cloned()
            .collect()
    }
}

/// Extract grammatical forms from the raw `forms` field. The field's shape
/// is resolved once; any other shape counts as absent.
pub fn extract(forms: Option<&Value>) -> GrammaticalForms {
    match classify(forms) {
        Some(FormsField::Named(map)) => GrammaticalForms {
            plural: named_form(map, "plural"),
            comparative: named_form(map, "comparative"),
            superlative: named_form(map, "superlative"),
            tenses: Vec::new(),
        },
        Some(FormsField::Tagged(items)) => tagged_forms(items),
        None => GrammaticalForms::default(),
    }
}

fn classify(forms: Option<&Value>) -> Option<FormsField<'_>> {
    match forms {
        Some(Value::Object(map)) => Some(FormsField::Named(map)),
        Some(Value::Array(items)) => Some(FormsField::Tagged(items)),
        _ => None,
    }
}

fn named_form(map: &Map<String, Value>, name: &str) -> Option<String> {
    map.get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn tagged_forms(items: &[Value]) -> GrammaticalForms {
    let mut out = GrammaticalForms::default();

    for item in items {
        let text = match item.get("form").and_then(Value::as_str) {
            Some(t) if !t.is_empty() => t,
            _ => continue,
        };
        let tags: Vec<&str> = item
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        // Later forms overwrite earlier assignments in sequence order
        if tags.iter().any(|t| *t == "plural") {
            out.plural = Some(text.to_string());
        }
        if tags.iter().any(|t| *t == "comparative") {
            out.comparative = Some(text.to_string());
        }
        if tags.iter().any(|t| *t == "superlative") {
            out.superlative = Some(text.to_string());
        }
        if tags.iter().any(|t| TENSE_TAGS.contains(t)) && !out.tenses.iter().any(|t| t == text) {
            out.tenses.push(text.to_string());
        }
    }

    out
}

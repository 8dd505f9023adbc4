use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Closed map of short part-of-speech tags to their expanded names. This is
/// configuration data, not logic: entries can change without touching the
/// normalizer's control flow.
static POS_TABLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("abbrev", "abbreviation"),
        ("adj", "adjective"),
        ("adv", "adverb"),
        ("conj", "conjunction"),
        ("det", "determiner"),
        ("intj", "interjection"),
        ("n", "noun"),
        ("num", "numeral"),
        ("postp", "postposition"),
        ("prep", "preposition"),
        ("prep_phrase", "prepositional phrase"),
        ("pron", "pronoun"),
        ("punct", "punctuation"),
        ("v", "verb"),
    ])
});

/// Expand a part-of-speech tag. Unknown tags pass through unchanged.
pub fn expand(tag: &str) -> &str {
    POS_TABLE.get(tag).copied().unwrap_or(tag)
}

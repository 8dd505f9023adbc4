use serde::{Deserialize, Serialize};

/// The ten lexical-semantic relation lists of an entry. Word order within
/// each list follows the source record; duplicates are retained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Relations {
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub hypernyms: Vec<String>,
    pub hyponyms: Vec<String>,
    pub holonyms: Vec<String>,
    pub meronyms: Vec<String>,
    pub troponyms: Vec<String>,
    pub derived: Vec<String>,
    pub related: Vec<String>,
    pub homophones: Vec<String>,
}

/// A normalized lexical entry: one word/part-of-speech pairing with its
/// definitions, grammatical forms, and relation lists, ready to be written
/// as a single row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexicalEntry {
    pub word: String,
    pub part_of_speech: String,
    pub etymology: Option<String>,
    /// First IPA transcription found across the record's sounds.
    pub pronunciation: Option<String>,
    /// Every sense's glosses, in sense order.
    pub definitions: Vec<String>,
    /// Every sense's example texts, in sense order.
    pub examples: Vec<String>,
    pub plural: Option<String>,
    /// Comparative then superlative; absent members shrink the list.
    pub compare: Vec<String>,
    /// Distinct verb forms in first-seen order.
    pub tenses: Vec<String>,
    pub relations: Relations,
}

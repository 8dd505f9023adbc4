use crate::entry::LexicalEntry;
use crate::error::Result;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Transaction};
use std::path::Path;
use tracing::warn;
use uuid::Uuid;

/// List columns hold JSON array strings; an empty list is stored as NULL.
const SCHEMA: &str = r#"
PRAGMA journal_mode=WAL;
CREATE TABLE IF NOT EXISTS entries (
    id              INTEGER PRIMARY KEY,
    word            TEXT NOT NULL,
    part_of_speech  TEXT NOT NULL,
    etymology       TEXT,
    pronunciation   TEXT,
    definitions     TEXT,
    examples        TEXT,
    plural          TEXT,
    compare         TEXT,
    tenses          TEXT,
    synonyms        TEXT,
    antonyms        TEXT,
    hypernyms       TEXT,
    hyponyms        TEXT,
    holonyms        TEXT,
    meronyms        TEXT,
    troponyms       TEXT,
    derived         TEXT,
    related         TEXT,
    homophones      TEXT
);
CREATE INDEX IF NOT EXISTS idx_entries_word ON entries (word);
CREATE INDEX IF NOT EXISTS idx_entries_pos ON entries (part_of_speech);
CREATE TABLE IF NOT EXISTS words (
    word TEXT NOT NULL COLLATE NOCASE
);
CREATE UNIQUE INDEX IF NOT EXISTS idx_words_word ON words (word);
CREATE TABLE IF NOT EXISTS import_runs (
    id          TEXT PRIMARY KEY,
    started_at  TEXT NOT NULL,
    finished_at TEXT NOT NULL,
    imported    INTEGER NOT NULL,
    skipped     INTEGER NOT NULL,
    failed      INTEGER NOT NULL
);
"#;

/// Outcome of one batched write.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOutcome {
    pub written: u64,
    pub failed: u64,
}

/// Bookkeeping row for one complete import run.
#[derive(Debug, Clone)]
pub struct ImportRun {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub imported: u64,
    pub skipped: u64,
    pub failed: u64,
}

pub struct EntryStore {
    conn: Connection,
}

impl EntryStore {
    /// Open (or create) the database file and ensure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Write a batch of entries inside one transaction. A failing entry is
    /// logged and counted; its siblings still commit.
    pub fn insert_batch(&mut self, entries: &[LexicalEntry]) -> Result<BatchOutcome> {
        let tx = self.conn.transaction()?;
        let mut outcome = BatchOutcome::default();

        for entry in entries {
            match insert_entry(&tx, entry) {
                Ok(()) => outcome.written += 1,
                Err(e) => {
                    warn!("failed to write entry '{}': {}", entry.word, e);
                    outcome.failed += 1;
                }
            }
        }

        tx.commit()?;
        Ok(outcome)
    }

    /// Record the bookkeeping row for a finished run.
    pub fn record_run(&self, run: &ImportRun) -> Result<()> {
        self.conn.execute(
            "INSERT INTO import_runs (id, started_at, finished_at, imported, skipped, failed)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                run.id.to_string(),
                run.started_at.to_rfc3339(),
                run.finished_at.to_rfc3339(),
                run.imported as i64,
                run.skipped as i64,
                run.failed as i64,
            ],
        )?;
        Ok(())
    }

    /// Case-insensitive membership check against the word index.
    pub fn contains_word(&self, word: &str) -> Result<bool> {
        let mut stmt = self
            .conn
            .prepare("SELECT 1 FROM words WHERE word = ?1 LIMIT 1")?;
        Ok(stmt.exists(params![word])?)
    }

    pub fn entry_count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

fn insert_entry(tx: &Transaction<'_>, entry: &LexicalEntry) -> rusqlite::Result<()> {
    tx.execute(
        "INSERT INTO entries (
            word, part_of_speech, etymology, pronunciation,
            definitions, examples, plural, compare, tenses,
            synonyms, antonyms, hypernyms, hyponyms, holonyms,
            meronyms, troponyms, derived, related, homophones
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19)",
        params![
            entry.word,
            entry.part_of_speech,
            entry.etymology,
            entry.pronunciation,
            json_list(&entry.definitions),
            json_list(&entry.examples),
            entry.plural,
            json_list(&entry.compare),
            json_list(&entry.tenses),
            json_list(&entry.relations.synonyms),
            json_list(&entry.relations.antonyms),
            json_list(&entry.relations.hypernyms),
            json_list(&entry.relations.hyponyms),
            json_list(&entry.relations.holonyms),
            json_list(&entry.relations.meronyms),
            json_list(&entry.relations.troponyms),
            json_list(&entry.relations.derived),
            json_list(&entry.relations.related),
            json_list(&entry.relations.homophones),
        ],
    )?;

    tx.execute(
        "INSERT OR IGNORE INTO words (word) VALUES (?1)",
        params![entry.word],
    )?;
    Ok(())
}

/// JSON array string for a non-empty list, NULL otherwise.
fn json_list(words: &[String]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        serde_json::to_string(words).ok()
    }
}

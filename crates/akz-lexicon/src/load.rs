//! Lexicon loading and the shared read-only snapshot.

use std::{fs, path::Path, sync::Arc};

use serde::Deserialize;

use crate::{LexiconEntry, LexiconError};

/// Top-level shape of the dictionary JSON artifact.
#[derive(Deserialize)]
struct DictionaryData {
    /// The full entry list, in source order.
    words: Vec<LexiconEntry>,
}

/// The immutable lexicon snapshot.
///
/// Loaded once at startup and shared by reference counting; cloning a
/// `Lexicon` is cheap and every clone sees the same entries. All search
/// and ranking operations are side-effect-free with respect to it.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Entries in source order.
    entries: Arc<[LexiconEntry]>,
}

impl Lexicon {
    /// Loads the lexicon from a JSON file.
    ///
    /// Any read or parse failure is fatal for the application: there is
    /// no partial or degraded load.
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let text = fs::read_to_string(path).map_err(|source| LexiconError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parses a lexicon from dictionary JSON text.
    pub fn from_json(text: &str) -> Result<Self, LexiconError> {
        let data: DictionaryData =
            serde_json::from_str(text).map_err(|e| LexiconError::parse(&e))?;
        Ok(Self::from_entries(data.words))
    }

    /// Builds a lexicon directly from entries (fixtures, tests).
    pub fn from_entries(entries: Vec<LexiconEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the lexicon holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = &LexiconEntry> {
        self.entries.iter()
    }

    /// Returns the entry at `index`.
    pub fn get(&self, index: usize) -> Option<&LexiconEntry> {
        self.entries.get(index)
    }

    /// All entries as a slice, in source order.
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Returns all entries with the given headword.
    ///
    /// The raw data may contain duplicate headwords with different
    /// senses, so this returns every match rather than the first.
    pub fn find(&self, headword: &str) -> Vec<&LexiconEntry> {
        self.entries
            .iter()
            .filter(|e| e.headword == headword)
            .collect()
    }

    /// Returns entries related to `entry`, in both directions.
    ///
    /// Related terms are stored one-directionally in the data, so this
    /// combines the entry's own `related_terms` list with a scan for
    /// entries that reference this entry's headword.
    pub fn related_entries(&self, entry: &LexiconEntry) -> Vec<&LexiconEntry> {
        let mut related: Vec<&LexiconEntry> = Vec::new();

        for other in self.entries.iter() {
            if other.headword == entry.headword {
                continue;
            }
            let forward = entry.related_terms.iter().any(|t| *t == other.headword);
            let backward = other.related_terms.iter().any(|t| *t == entry.headword);
            if forward || backward {
                related.push(other);
            }
        }

        related
    }
}

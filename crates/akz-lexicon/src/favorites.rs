//! Durable favorites store.
//!
//! Favorites are full entry snapshots keyed by headword, persisted as a
//! JSON file in user-local storage. A favorite is a durable copy, not a
//! live reference: if the lexicon is later updated, existing favorites
//! keep the stale snapshot. The store carries an explicit version counter
//! so callers can invalidate caches instead of polling a dirty flag.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::{LexiconEntry, LexiconError};

/// Durable store of favorited entries, keyed by headword.
#[derive(Debug)]
pub struct FavoritesStore {
    /// Path of the backing JSON file.
    path: PathBuf,
    /// Snapshots in insertion order.
    entries: Vec<LexiconEntry>,
    /// Incremented on every successful mutation.
    version: u64,
}

impl FavoritesStore {
    /// Opens the store at `path`, loading any existing favorites.
    ///
    /// A missing file yields an empty store. A corrupt or unreadable file
    /// also degrades to an empty store (with a warning) rather than
    /// failing the application: favorites are a convenience, not data the
    /// app cannot run without.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "corrupt favorites file, starting empty");
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable favorites file, starting empty");
                Vec::new()
            }
        };

        Self {
            path,
            entries,
            version: 0,
        }
    }

    /// Adds a snapshot of `entry` if its headword is not already present.
    ///
    /// Returns true if the entry was added. A failed write leaves the
    /// in-memory list and version unchanged.
    pub fn add(&mut self, entry: &LexiconEntry) -> Result<bool, LexiconError> {
        if self.contains(&entry.headword) {
            return Ok(false);
        }

        let mut next = self.entries.clone();
        next.push(entry.clone());
        self.persist(&next)?;
        self.entries = next;
        self.version += 1;
        Ok(true)
    }

    /// Removes the favorite with the given headword.
    ///
    /// Returns true if an entry was removed. A failed write leaves the
    /// in-memory list and version unchanged.
    pub fn remove(&mut self, headword: &str) -> Result<bool, LexiconError> {
        let next: Vec<LexiconEntry> = self
            .entries
            .iter()
            .filter(|e| e.headword != headword)
            .cloned()
            .collect();
        if next.len() == self.entries.len() {
            return Ok(false);
        }

        self.persist(&next)?;
        self.entries = next;
        self.version += 1;
        Ok(true)
    }

    /// True if a favorite with this headword exists.
    pub fn contains(&self, headword: &str) -> bool {
        self.entries.iter().any(|e| e.headword == headword)
    }

    /// All favorites in insertion order.
    pub fn list(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Current version counter.
    ///
    /// Increments on every successful mutation; callers cache results
    /// keyed by this value instead of reloading unconditionally.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Writes `entries` to the favorites file atomically (write to a temp
    /// file in the same directory, then rename over the target).
    fn persist(&self, entries: &[LexiconEntry]) -> Result<(), LexiconError> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| LexiconError::FavoritesWrite(e.to_string()))?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .map_err(|e| LexiconError::FavoritesWrite(e.to_string()))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| LexiconError::FavoritesWrite(e.to_string()))?;
        tmp.persist(&self.path)
            .map_err(|e| LexiconError::FavoritesWrite(e.to_string()))?;

        Ok(())
    }
}

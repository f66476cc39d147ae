//! Dictionary data model and lexicon loading for akz.
//!
//! This crate owns the immutable lexicon snapshot and everything persisted
//! around it:
//! - [`LexiconEntry`] and its sub-records, deserialized from the dictionary
//!   JSON artifact
//! - [`Lexicon`], the shared read-only snapshot loaded once at startup
//! - [`FavoritesStore`], a durable key-value store of entry snapshots
//!
//! The lexicon is never mutated after loading. Search code in `akz-search`
//! borrows entries from the snapshot; favorites keep their own durable
//! copies with an independent lifecycle.

#![warn(missing_docs)]

mod entry;
mod error;
mod favorites;
mod load;

pub use entry::{ExampleSentence, LexiconEntry, PRINCIPAL_PART_LABELS, Sense};
pub use error::LexiconError;
pub use favorites::FavoritesStore;
pub use load::Lexicon;

//! Query parsing for akz.
//!
//! This crate turns a raw search string into a typed [`Query`]:
//! - [`normalize`] canonicalizes text for accent-insensitive matching
//! - [`extract`](tags::extract) pulls `#tag` directives out of the query
//! - [`pattern::expand`] expands the `C`/`V` phonological shorthand into
//!   a regex source string
//!
//! Everything here is a pure function over strings; compilation against
//! the lexicon happens in `akz-search`.

#![warn(missing_docs)]

pub mod normalize;
pub mod pattern;
pub mod query;
pub mod tags;

pub use normalize::normalize;
pub use query::{Query, SearchMode};
pub use tags::{ExtractedTags, FilterTag, MorphClass, ScopeTag};

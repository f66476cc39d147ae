//! The typed query consumed by the search pipeline.

use crate::{
    normalize,
    tags::{self, FilterTag, ScopeTag},
};

/// How the search term is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Accent-insensitive substring/token search over headwords and
    /// glosses.
    Literal,
    /// Phonological pattern regex over raw headwords.
    Pattern,
}

/// A parsed search query: the tag-stripped term, the mode, and the filter
/// list extracted from `#tag` directives.
///
/// Transient: constructed per search invocation and fully consumed by the
/// pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// The query text exactly as the user typed it.
    pub raw: String,
    /// Interpretation mode.
    pub mode: SearchMode,
    /// Tag-stripped search term. Normalized in literal mode; left raw in
    /// pattern mode, where accented vowels are meaningful.
    pub term: String,
    /// Filters from `#tag` directives, AND-combined.
    pub filters: Vec<FilterTag>,
    /// Restrict results to entries with audio.
    pub audio_only: bool,
}

impl Query {
    /// Parses a raw query string into a `Query`.
    pub fn new(raw: &str, mode: SearchMode, audio_only: bool) -> Self {
        let extracted = tags::extract(raw);
        let term = match mode {
            SearchMode::Literal => normalize(&extracted.residual),
            SearchMode::Pattern => extracted.residual,
        };

        Self {
            raw: raw.to_string(),
            mode,
            term,
            filters: extracted.tags,
            audio_only,
        }
    }

    /// The language scope, if a scope directive was given.
    ///
    /// Multiple scope directives AND together, which for two disjoint
    /// field restrictions means the first one wins the field-selection
    /// role in ranking.
    pub fn scope(&self) -> Option<ScopeTag> {
        self.filters.iter().find_map(|f| match f {
            FilterTag::Scope(scope) => Some(*scope),
            _ => None,
        })
    }

    /// True if no usable search text remains after tag stripping.
    pub fn term_is_empty(&self) -> bool {
        self.term.is_empty()
    }
}

//! The query pipeline: filter, sort, paginate.
//!
//! [`SearchEngine`] runs one full pass over the lexicon per query
//! (extract → filter → sort) and returns a [`ResultSet`] that owns the
//! sorted match list. Pagination is decoupled from recomputation:
//! [`ResultSet::page`] re-slices the already-sorted set, so a UI can page
//! back and forth without paying the filter/sort cost again.

use akz_lexicon::{Lexicon, LexiconEntry};
use akz_query::{Query, SearchMode, normalize};
use tracing::debug;

use crate::{Matcher, rank};

/// Default number of entries per result page.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// One page sliced out of a result set.
#[derive(Debug, Clone)]
pub struct ResultPage {
    /// The entries on this page, in rank order.
    pub items: Vec<LexiconEntry>,
    /// Total number of matches across all pages.
    pub total_count: usize,
    /// The (clamped) offset this page starts at.
    pub offset: usize,
}

/// The full sorted result of one search.
///
/// Holds indices into the lexicon snapshot rather than entry copies, so
/// a result set over the whole dictionary stays cheap.
#[derive(Debug, Clone)]
pub struct ResultSet {
    /// The lexicon the indices point into.
    lexicon: Lexicon,
    /// Matching entry indices, in rank order.
    indices: Vec<usize>,
}

impl ResultSet {
    /// An empty result set.
    fn empty(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            indices: Vec::new(),
        }
    }

    /// Total number of matches.
    pub fn total_count(&self) -> usize {
        self.indices.len()
    }

    /// True if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterates over all matches in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &LexiconEntry> {
        self.indices.iter().filter_map(|&i| self.lexicon.get(i))
    }

    /// Slices a page out of the sorted results.
    ///
    /// The offset is clamped to `[0, total_count]`, so out-of-range
    /// requests return a short or empty page rather than an error.
    pub fn page(&self, offset: usize, len: usize) -> ResultPage {
        let offset = offset.min(self.indices.len());
        let end = offset.saturating_add(len).min(self.indices.len());

        ResultPage {
            items: self.indices[offset..end]
                .iter()
                .filter_map(|&i| self.lexicon.get(i).cloned())
                .collect(),
            total_count: self.indices.len(),
            offset,
        }
    }

    /// The first page at the default page size.
    pub fn first_page(&self) -> ResultPage {
        self.page(0, DEFAULT_PAGE_SIZE)
    }
}

/// Searches the lexicon snapshot.
///
/// Stateless apart from the shared read-only lexicon; safe to use from
/// any number of threads at once.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    /// The immutable lexicon snapshot.
    lexicon: Lexicon,
}

impl SearchEngine {
    /// Creates an engine over a lexicon snapshot.
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// The underlying lexicon.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Runs a full search: filter by matcher and tags, sort by the
    /// ranking ladder.
    ///
    /// An empty term yields the whole lexicon in lexicographic order; an
    /// invalid pattern-mode regex yields an empty set.
    pub fn search(&self, query: &Query) -> ResultSet {
        self.search_cancellable(query, &|| false)
            .unwrap_or_else(|| ResultSet::empty(self.lexicon.clone()))
    }

    /// Convenience wrapper building the [`Query`] from raw text.
    pub fn search_text(&self, text: &str, mode: SearchMode, audio_only: bool) -> ResultSet {
        self.search(&Query::new(text, mode, audio_only))
    }

    /// Like [`search`](Self::search), but checks `cancelled` while
    /// scanning and returns `None` if the search was abandoned.
    ///
    /// Used by the session layer so a superseded query stops burning CPU
    /// instead of racing the query that replaced it.
    pub fn search_cancellable(
        &self,
        query: &Query,
        cancelled: &dyn Fn() -> bool,
    ) -> Option<ResultSet> {
        let Some(matcher) = Matcher::compile(query) else {
            debug!(term = %query.term, "pattern did not compile, returning empty results");
            return Some(ResultSet::empty(self.lexicon.clone()));
        };

        let mut indices: Vec<usize> = Vec::new();
        for (i, entry) in self.lexicon.iter().enumerate() {
            // Cancellation granularity: one check per 256 entries.
            if i % 256 == 0 && cancelled() {
                return None;
            }
            if matcher.matches(entry) {
                indices.push(i);
            }
        }

        if cancelled() {
            return None;
        }

        // Rank on the normalized term even in pattern mode; a regex term
        // rarely survives the exact/prefix rungs, which leaves pattern
        // results in lexicographic order.
        let sort_term = normalize(&query.term);
        let scope = query.scope();
        let entries = self.lexicon.entries();
        indices.sort_by(|&i, &j| rank::compare(&sort_term, scope, &entries[i], &entries[j]));

        debug!(
            term = %query.term,
            matches = indices.len(),
            "search complete"
        );

        Some(ResultSet {
            lexicon: self.lexicon.clone(),
            indices,
        })
    }
}

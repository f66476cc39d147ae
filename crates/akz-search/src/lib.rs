//! Search and ranking engine for the akz dictionary.
//!
//! The pipeline takes a typed [`Query`](akz_query::Query) and the
//! immutable [`Lexicon`](akz_lexicon::Lexicon) snapshot and produces a
//! relevance-ordered, paginated result set:
//!
//! 1. [`matcher`] decides per entry whether it is a candidate
//!    (substring/regex match plus `#tag` predicates)
//! 2. [`rank`] totally orders the candidates via the tie-break ladder
//! 3. [`engine`] runs filter → sort and exposes decoupled pagination
//! 4. [`session`] runs searches off the calling thread with
//!    last-write-wins staleness handling for per-keystroke use
//!
//! The pipeline holds no cross-call mutable state; the lexicon is shared
//! read-only across concurrent searches.

#![warn(missing_docs)]

pub mod engine;
pub mod matcher;
pub mod rank;
pub mod session;

pub use engine::{DEFAULT_PAGE_SIZE, ResultPage, ResultSet, SearchEngine};
pub use matcher::Matcher;
pub use session::{SearchRequest, SearchSession};

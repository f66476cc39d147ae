//! Candidate matching.
//!
//! A [`Matcher`] is compiled once per search from the typed query and then
//! applied to every lexicon entry. Literal mode matches the normalized
//! term against headwords (substring) and glosses (anchored, word-boundary
//! aware, strictly narrower than the headword check). Pattern mode runs
//! the expanded `C`/`V` regex against raw headwords only.
//!
//! `#tag` filters are additional AND predicates evaluated by iterating
//! the query's filter list; adding a tag means adding a predicate, not a
//! new branch in the match logic.

use akz_lexicon::LexiconEntry;
use akz_query::{FilterTag, MorphClass, Query, ScopeTag, SearchMode, normalize, pattern};
use regex::Regex;

/// How a morphological class label is recognized.
///
/// The dictionary's class labels are free-text strings observed in the
/// data rather than a clean taxonomy, so each class is defined by an
/// explicit list of label tests. New label variants get new rows here.
enum LabelRule {
    /// The label equals this string exactly.
    Equals(&'static str),
    /// The label contains this substring.
    Contains(&'static str),
}

impl LabelRule {
    /// Tests one label against this rule.
    fn matches(&self, label: &str) -> bool {
        match self {
            Self::Equals(s) => label == *s,
            Self::Contains(s) => label.contains(s),
        }
    }
}

/// Label vocabulary for each morphological class, as observed in the
/// dictionary data. A class matches if any of its rules accepts the
/// sense's label.
const MORPH_RULES: &[(MorphClass, &[LabelRule])] = &[
    (MorphClass::Li, &[LabelRule::Contains("-LI")]),
    (
        MorphClass::Cha,
        &[LabelRule::Equals("CHA-"), LabelRule::Contains("/CHA-")],
    ),
    (
        MorphClass::Am,
        &[LabelRule::Equals("AM-"), LabelRule::Contains("/AM-")],
    ),
    (MorphClass::AmP, &[LabelRule::Equals("AM-p")]),
    (
        MorphClass::Transitive,
        &[
            LabelRule::Contains("-LI/CHA-"),
            LabelRule::Contains("-LI/AM-"),
        ],
    ),
];

/// A query compiled for matching against lexicon entries.
#[derive(Debug)]
pub struct Matcher {
    /// The query being executed.
    query: Query,
    /// Pattern-mode regex over raw headwords.
    headword_regex: Option<Regex>,
    /// Literal-mode anchored gloss regex (`^term` or `\bterm`,
    /// case-insensitive, term escaped).
    gloss_regex: Option<Regex>,
}

impl Matcher {
    /// Compiles a matcher for `query`.
    ///
    /// Returns `None` if a pattern-mode query expands to an invalid
    /// regex. That is a user-input error, not a system fault: the search
    /// simply yields no results.
    pub fn compile(query: &Query) -> Option<Self> {
        let (headword_regex, gloss_regex) = match query.mode {
            SearchMode::Pattern => {
                let source = pattern::expand(&query.term);
                (Some(Regex::new(&source).ok()?), None)
            }
            SearchMode::Literal => {
                let term = regex::escape(&query.term);
                // Anchored alternation: match at the start of the gloss
                // or at a word boundary, never mid-word. Escaping the
                // term here is what neutralizes punctuation for the
                // comparison pass; tag filtering above never escapes.
                let source = format!("(?i)^{term}|\\b{term}");
                let gloss = Regex::new(&source).ok()?;
                (None, Some(gloss))
            }
        };

        Some(Self {
            query: query.clone(),
            headword_regex,
            gloss_regex,
        })
    }

    /// True if `entry` is a candidate for this query.
    pub fn matches(&self, entry: &LexiconEntry) -> bool {
        if !self.text_matches(entry) {
            return false;
        }

        if self.query.audio_only && !entry.has_audio() {
            return false;
        }

        self.query.filters.iter().all(|f| tag_allows(*f, entry))
    }

    /// The text-match half: term against headword and/or glosses,
    /// narrowed by a language-scope directive if present.
    fn text_matches(&self, entry: &LexiconEntry) -> bool {
        match self.query.mode {
            SearchMode::Pattern => match &self.headword_regex {
                Some(re) => re.is_match(&entry.headword),
                None => false,
            },
            SearchMode::Literal => match self.query.scope() {
                Some(ScopeTag::Alabama) => self.headword_matches(entry),
                Some(ScopeTag::English) => self.gloss_matches(entry),
                None => self.headword_matches(entry) || self.gloss_matches(entry),
            },
        }
    }

    /// Accent-insensitive substring test against the headword.
    fn headword_matches(&self, entry: &LexiconEntry) -> bool {
        normalize(&entry.headword).contains(&self.query.term)
    }

    /// Anchored word-boundary test against each sense gloss.
    fn gloss_matches(&self, entry: &LexiconEntry) -> bool {
        let Some(re) = &self.gloss_regex else {
            return false;
        };
        entry.senses.iter().any(|s| re.is_match(&s.gloss))
    }
}

/// Evaluates a single `#tag` predicate against an entry.
///
/// Scope tags narrow the text match instead and always pass here.
fn tag_allows(tag: FilterTag, entry: &LexiconEntry) -> bool {
    match tag {
        FilterTag::Scope(_) => true,
        FilterTag::Noun => {
            entry.senses.iter().any(|s| !s.gloss.starts_with("to ")) && !entry.has_affix_markers()
        }
        FilterTag::Verb => {
            entry.senses.iter().any(|s| s.gloss.starts_with("to ")) && !entry.has_affix_markers()
        }
        FilterTag::Morph(class) => entry
            .senses
            .iter()
            .filter_map(|s| s.class_label())
            .any(|label| class_matches(class, label)),
    }
}

/// Tests a class label against the rule table.
fn class_matches(class: MorphClass, label: &str) -> bool {
    MORPH_RULES
        .iter()
        .filter(|(c, _)| *c == class)
        .flat_map(|(_, rules)| rules.iter())
        .any(|rule| rule.matches(label))
}

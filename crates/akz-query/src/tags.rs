//! `#tag` directive extraction.
//!
//! Queries may embed hash-prefixed directives anywhere in the string
//! (order-independent, case-insensitive): language scope, part of speech,
//! and morphological class. Recognized directives are removed from the
//! residual search term; unrecognized `#…` tokens are left in place as
//! literal text, so an unknown tag is never an error.
//!
//! The directive vocabulary lives in one lookup table ([`DIRECTIVES`]);
//! adding a tag means adding a row, not another conditional.

/// Which field a language-scope directive restricts matching to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeTag {
    /// `#akz` / `#alabama`: match against the headword only.
    Alabama,
    /// `#en` / `#english`: match against sense glosses only.
    English,
}

/// Morphological verb classes, as labeled in the dictionary data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorphClass {
    /// `-LI` class (active verbs).
    Li,
    /// `CHA-` class (patient-marking).
    Cha,
    /// `AM-` class (dative-marking).
    Am,
    /// `AM-p` label (dative possessive).
    AmP,
    /// Transitive verbs (combined `-LI/CHA-` style labels).
    Transitive,
}

/// A filter selected by a `#tag` directive.
///
/// Filters combine by logical AND; the matcher evaluates them by
/// iterating the query's filter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterTag {
    /// Restrict matching to one field.
    Scope(ScopeTag),
    /// Entries with at least one non-verb sense and no affix markers.
    Noun,
    /// Entries with at least one "to …" sense and no affix markers.
    Verb,
    /// Entries whose class label matches a morphological class.
    Morph(MorphClass),
}

/// The directive vocabulary: lowercase token (with `#`) to filter.
const DIRECTIVES: &[(&str, FilterTag)] = &[
    ("#en", FilterTag::Scope(ScopeTag::English)),
    ("#english", FilterTag::Scope(ScopeTag::English)),
    ("#akz", FilterTag::Scope(ScopeTag::Alabama)),
    ("#alabama", FilterTag::Scope(ScopeTag::Alabama)),
    ("#noun", FilterTag::Noun),
    ("#verb", FilterTag::Verb),
    ("#li", FilterTag::Morph(MorphClass::Li)),
    ("#cha", FilterTag::Morph(MorphClass::Cha)),
    ("#am", FilterTag::Morph(MorphClass::Am)),
    ("#am-p", FilterTag::Morph(MorphClass::AmP)),
    ("#transitive", FilterTag::Morph(MorphClass::Transitive)),
];

/// Result of directive extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTags {
    /// The query with recognized directives removed; this is the term
    /// used for text matching. Whitespace collapses only around a
    /// removed directive, so a directive-free query keeps its spacing
    /// (trimmed at the ends).
    pub residual: String,
    /// Recognized filters, in first-seen order, deduplicated.
    pub tags: Vec<FilterTag>,
}

/// Looks up a token in the directive table (case-insensitive).
fn lookup(token: &str) -> Option<FilterTag> {
    let folded = token.to_lowercase();
    DIRECTIVES
        .iter()
        .find(|(name, _)| *name == folded)
        .map(|(_, tag)| *tag)
}

/// Extracts `#tag` directives from a query string.
///
/// Recognized directives are spliced out (the whitespace around a
/// removed directive collapses to a single space); everything else,
/// including unrecognized `#…` tokens and interior spacing, remains in
/// the residual term verbatim.
pub fn extract(query: &str) -> ExtractedTags {
    let mut tags: Vec<FilterTag> = Vec::new();
    let mut residual = String::new();

    let mut rest = query.trim();
    while !rest.is_empty() {
        let token_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (token, tail) = rest.split_at(token_end);

        match lookup(token) {
            Some(tag) => {
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
                rest = tail.trim_start();
                while residual.ends_with(char::is_whitespace) {
                    residual.pop();
                }
                if !residual.is_empty() && !rest.is_empty() {
                    residual.push(' ');
                }
            }
            None => {
                residual.push_str(token);
                let ws_end = tail
                    .find(|c: char| !c.is_whitespace())
                    .unwrap_or(tail.len());
                let (ws, after) = tail.split_at(ws_end);
                residual.push_str(ws);
                rest = after;
            }
        }
    }

    let residual = residual.trim_end().to_string();
    ExtractedTags { residual, tags }
}

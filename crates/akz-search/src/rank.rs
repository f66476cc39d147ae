//! Relevance ordering for candidate entries.
//!
//! Implements the tie-break ladder used to sort the filtered candidate
//! set. The ladder is evaluated top-down and the first decisive test
//! wins:
//!
//! 1. exact match (headword or joined glosses equals the term)
//! 2. language-scope restriction: compare within the scoped field only
//! 3. field selection, per entry: an entry is ranked on its headword if
//!    the headword contains the term, on its joined glosses otherwise
//! 4. within each entry's field: prefix match, then whole-segment
//!    containment (fields split on `;`), then lexicographic order on
//!    the headword
//!
//! Every rung compares values derived from one entry at a time, so the
//! comparator is a total order and safe to hand to `sort_by`.
//!
//! With an empty term the ladder degrades directly to lexicographic
//! order, so an empty query lists the whole dictionary alphabetically.

use std::cmp::Ordering;

use akz_lexicon::LexiconEntry;
use akz_query::{ScopeTag, normalize};

/// Compares two candidate entries for the given normalized term.
///
/// `scope` is the language-scope directive from the query, if any. The
/// result is used as a sort comparator over the filtered candidates.
pub fn compare(
    term: &str,
    scope: Option<ScopeTag>,
    a: &LexiconEntry,
    b: &LexiconEntry,
) -> Ordering {
    if term.is_empty() {
        return lexicographic(a, b);
    }

    // Rule 1: exact matches sort first.
    let a_exact = is_exact(term, a);
    let b_exact = is_exact(term, b);
    if a_exact != b_exact {
        return if a_exact {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    // Rules 2 and 3: pick each entry's compared field independently, so
    // the order stays transitive even when one candidate matched via
    // headword and the other only via gloss. How the mixed case should
    // rank is flagged for linguist review.
    let fa = sort_field(term, scope, a);
    let fb = sort_field(term, scope, b);
    field_compare(term, &fa, &fb).then_with(|| lexicographic(a, b))
}

/// The normalized field an entry is ranked on: the scoped field if a
/// scope directive is present, otherwise the headword when it contains
/// the term and the joined glosses when it does not.
fn sort_field(term: &str, scope: Option<ScopeTag>, entry: &LexiconEntry) -> String {
    match scope {
        Some(ScopeTag::Alabama) => normalize(&entry.headword),
        Some(ScopeTag::English) => normalize(&entry.joined_glosses()),
        None => {
            let head = normalize(&entry.headword);
            if head.contains(term) {
                head
            } else {
                normalize(&entry.joined_glosses())
            }
        }
    }
}

/// Rule 1: the normalized headword or joined-gloss string equals the term.
fn is_exact(term: &str, entry: &LexiconEntry) -> bool {
    normalize(&entry.headword) == term || normalize(&entry.joined_glosses()) == term
}

/// Rule 4 (a) and (b): prefix match beats non-prefix, then whole-segment
/// containment beats its absence. Ties fall through to the caller's
/// lexicographic fallback.
fn field_compare(term: &str, field_a: &str, field_b: &str) -> Ordering {
    let a_prefix = field_a.starts_with(term);
    let b_prefix = field_b.starts_with(term);
    if a_prefix != b_prefix {
        return if a_prefix {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    let a_segment = segment_prefix(term, field_a);
    let b_segment = segment_prefix(term, field_b);
    if a_segment != b_segment {
        return if a_segment {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    Ordering::Equal
}

/// True if any `;`-separated segment of the field starts with the term.
fn segment_prefix(term: &str, field: &str) -> bool {
    field
        .split(';')
        .any(|segment| segment.trim_start().starts_with(term))
}

/// Rule 4 (c): order on the normalized headword; the raw headword breaks
/// remaining ties so the order is total.
fn lexicographic(a: &LexiconEntry, b: &LexiconEntry) -> Ordering {
    normalize(&a.headword)
        .cmp(&normalize(&b.headword))
        .then_with(|| a.headword.cmp(&b.headword))
}

#[cfg(test)]
mod tests {
    use akz_lexicon::Sense;

    use super::*;

    /// Builds a minimal entry for tests.
    fn entry(headword: &str, glosses: &[&str]) -> LexiconEntry {
        LexiconEntry {
            headword: headword.into(),
            senses: glosses
                .iter()
                .map(|g| Sense {
                    gloss: (*g).into(),
                    part_of_speech: None,
                })
                .collect(),
            principal_parts: None,
            derivation: None,
            notes: None,
            related_terms: vec![],
            audio_refs: vec![],
            example_sentences: vec![],
        }
    }

    #[test]
    fn empty_term_is_lexicographic() {
        let a = entry("bihi", &["mulberry"]);
        let b = entry("ayó", &["to go"]);
        assert_eq!(compare("", None, &a, &b), Ordering::Greater);
        assert_eq!(compare("", None, &b, &a), Ordering::Less);
    }

    #[test]
    fn exact_headword_match_sorts_first() {
        let exact = entry("ayó", &["to go"]);
        let longer = entry("ayohli", &["road"]);
        assert_eq!(compare("ayo", None, &exact, &longer), Ordering::Less);
        assert_eq!(compare("ayo", None, &longer, &exact), Ordering::Greater);
    }

    #[test]
    fn exact_gloss_match_sorts_first() {
        let exact = entry("ayohli", &["road"]);
        let prefix = entry("oolimpa", &["roadhouse food"]);
        assert_eq!(compare("road", None, &exact, &prefix), Ordering::Less);
    }

    #[test]
    fn prefix_beats_non_prefix() {
        let prefix = entry("ayohli", &["road"]);
        let interior = entry("talayo", &["ridge"]);
        // Both headwords contain "ayo"; only one starts with it.
        assert_eq!(compare("ayo", None, &prefix, &interior), Ordering::Less);
        assert_eq!(compare("ayo", None, &interior, &prefix), Ordering::Greater);
    }

    #[test]
    fn segment_containment_breaks_prefix_ties() {
        // Neither gloss field starts with the term, but one has a
        // segment that does.
        let segment = entry("bihi", &["tree; road to town"]);
        let buried = entry("okcha", &["long road to town"]);
        assert_eq!(compare("road", None, &segment, &buried), Ordering::Less);
    }

    #[test]
    fn equal_prefix_matches_fall_to_lexicographic() {
        // Two equal-length prefix matches with no exact match anywhere:
        // the tie resolves lexicographically.
        let a = entry("ayohli", &["road"]);
        let b = entry("ayokha", &["circle"]);
        assert_eq!(compare("ayo", None, &a, &b), Ordering::Less);
        assert_eq!(compare("ayo", None, &b, &a), Ordering::Greater);
    }

    #[test]
    fn spec_scenario_ayo() {
        // lexicon = [ayó "to go", ayohli "road"], term "ayo": the exact
        // rule fires for ayó (normalized headword equals the term), so it
        // deterministically sorts first.
        let ayo = entry("ayó", &["to go"]);
        let ayohli = entry("ayohli", &["road"]);
        assert_eq!(compare("ayo", None, &ayo, &ayohli), Ordering::Less);
    }

    #[test]
    fn scope_en_compares_glosses_only() {
        // Headword-side noise must not matter under #en: compare the
        // gloss fields directly.
        let gloss_prefix = entry("waaka", &["water buffalo"]);
        let gloss_interior = entry("oki", &["fresh water"]);
        assert_eq!(
            compare("water", Some(ScopeTag::English), &gloss_prefix, &gloss_interior),
            Ordering::Less
        );
    }

    #[test]
    fn scope_akz_compares_headwords_only() {
        let head_prefix = entry("okila", &["spring"]);
        let head_interior = entry("sokcha", &["bag; oki carrier"]);
        assert_eq!(
            compare("oki", Some(ScopeTag::Alabama), &head_prefix, &head_interior),
            Ordering::Less
        );
    }

    #[test]
    fn each_entry_ranks_on_its_own_matching_field() {
        // a matched via gloss (prefix), b via headword (interior): each
        // is scored on the field it matched in, so the gloss prefix
        // outranks the non-prefix headword match.
        let via_gloss = entry("oolimpa", &["ayo dish"]);
        let via_head = entry("talayo", &["ridge"]);
        assert_eq!(compare("ayo", None, &via_gloss, &via_head), Ordering::Less);
        assert_eq!(compare("ayo", None, &via_head, &via_gloss), Ordering::Greater);
    }

    #[test]
    fn comparator_is_transitive_on_mixed_field_matches() {
        // Candidates matching via gloss prefix, gloss interior, and
        // headword interior for the same term. A pair-wise field choice
        // would order these cyclically; the per-entry choice must not.
        let entries = [
            entry("mint", &["oops; food"]),
            entry("ant", &["big oops"]),
            entry("good", &["whatever"]),
            entry("oolimpa", &["food"]),
            entry("koo", &["jar"]),
        ];

        for a in &entries {
            for b in &entries {
                for c in &entries {
                    if compare("oo", None, a, b) != Ordering::Greater
                        && compare("oo", None, b, c) != Ordering::Greater
                    {
                        assert_ne!(compare("oo", None, a, c), Ordering::Greater);
                    }
                }
            }
        }
    }

    #[test]
    fn comparator_is_antisymmetric_on_fixture() {
        let entries = [
            entry("ayó", &["to go"]),
            entry("ayohli", &["road"]),
            entry("talayo", &["ridge"]),
            entry("bihi", &["mulberry; road food"]),
        ];

        for a in &entries {
            for b in &entries {
                let forward = compare("ayo", None, a, b);
                let backward = compare("ayo", None, b, a);
                assert_eq!(forward, backward.reverse());
            }
        }
    }

    #[test]
    fn accent_insensitive_lexicographic_ties_stay_total() {
        let plain = entry("ayo", &["x"]);
        let accented = entry("ayó", &["y"]);
        // Normalized forms tie; raw headwords disambiguate, and the
        // order is consistent.
        let forward = compare("", None, &plain, &accented);
        assert_eq!(forward, compare("", None, &accented, &plain).reverse());
        assert_ne!(forward, Ordering::Equal);
    }
}

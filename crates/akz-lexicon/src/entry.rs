//! Dictionary entry records.
//!
//! These structs mirror the dictionary JSON artifact. The source data uses
//! the literal string `"nan"` in optional fields to mean "absent" (an
//! artifact of the spreadsheet export that produced the file), so accessors
//! are provided that fold `"nan"` to `None`.

use serde::{Deserialize, Serialize};

/// Positional labels for the comma-separated `principal_parts` field.
///
/// The dictionary lists inflected forms in a fixed order; the label for a
/// form is determined purely by its position.
pub const PRINCIPAL_PART_LABELS: &[&str] = &[
    "second person singular",
    "first person plural",
    "second person plural",
];

/// One sense of a dictionary entry: a gloss with an optional
/// part-of-speech / morphological class label.
///
/// Sense order is significant: senses are numbered for display and for
/// "negative form of X" style backlinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    /// English gloss for this sense.
    #[serde(rename = "definition")]
    pub gloss: String,

    /// Part-of-speech / morphological class label (e.g. `-LI`, `CHA-`,
    /// `AM-p`), if the data records one.
    #[serde(rename = "wordClass", default)]
    pub part_of_speech: Option<String>,
}

impl Sense {
    /// Returns the class label with `"nan"` folded to `None`.
    pub fn class_label(&self) -> Option<&str> {
        non_nan(self.part_of_speech.as_deref())
    }
}

/// An example sentence attached to an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSentence {
    /// The sentence in Alabama.
    #[serde(rename = "akz", default)]
    pub source_text: Option<String>,

    /// English translation.
    #[serde(rename = "en", default)]
    pub translation: Option<String>,
}

/// A single dictionary entry, loaded once and never mutated.
///
/// The headword acts as the primary key for display and favorites, but the
/// raw data may contain duplicate headwords with different senses; code
/// that needs a dedup key must treat headword plus position as identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Canonical form in Alabama (the lemma).
    #[serde(rename = "lemma")]
    pub headword: String,

    /// Ordered senses; order is significant.
    #[serde(rename = "definition", default)]
    pub senses: Vec<Sense>,

    /// Comma-separated inflected forms, positionally interpreted
    /// (see [`PRINCIPAL_PART_LABELS`]).
    #[serde(rename = "principalPart", default)]
    pub principal_parts: Option<String>,

    /// Derivational note (e.g. the base an affixed form derives from).
    #[serde(default)]
    pub derivation: Option<String>,

    /// Free-form usage notes.
    #[serde(default)]
    pub notes: Option<String>,

    /// Headwords of related entries. Stored one-directionally; use
    /// [`crate::Lexicon::related_entries`] for the symmetric view.
    #[serde(rename = "relatedTerms", default)]
    pub related_terms: Vec<String>,

    /// Identifiers resolved externally to audio assets.
    #[serde(rename = "audio", default)]
    pub audio_refs: Vec<String>,

    /// Example sentences with translations.
    #[serde(rename = "sentences", default)]
    pub example_sentences: Vec<ExampleSentence>,
}

impl LexiconEntry {
    /// All sense glosses joined with `"; "`, the form used for display
    /// and for gloss-side ranking.
    pub fn joined_glosses(&self) -> String {
        let glosses: Vec<&str> = self.senses.iter().map(|s| s.gloss.as_str()).collect();
        glosses.join("; ")
    }

    /// True if the entry carries at least one audio reference.
    pub fn has_audio(&self) -> bool {
        !self.audio_refs.is_empty()
    }

    /// True if the headword contains an affix marker (`-`, `<`, `>`),
    /// i.e. the entry is a bound form rather than a free word.
    pub fn has_affix_markers(&self) -> bool {
        self.headword.contains(['-', '<', '>'])
    }

    /// Derivation with `"nan"` folded to `None`.
    pub fn derivation_text(&self) -> Option<&str> {
        non_nan(self.derivation.as_deref())
    }

    /// Notes with `"nan"` folded to `None`.
    pub fn notes_text(&self) -> Option<&str> {
        non_nan(self.notes.as_deref())
    }

    /// Principal parts split into `(form, positional label)` pairs.
    ///
    /// Forms beyond the known label positions are returned with an empty
    /// label rather than dropped.
    pub fn labeled_principal_parts(&self) -> Vec<(&str, &'static str)> {
        let Some(parts) = non_nan(self.principal_parts.as_deref()) else {
            return Vec::new();
        };

        parts
            .split(", ")
            .enumerate()
            .map(|(i, form)| (form, *PRINCIPAL_PART_LABELS.get(i).unwrap_or(&"")))
            .collect()
    }
}

/// Folds the spreadsheet-export `"nan"` placeholder to `None`.
fn non_nan(value: Option<&str>) -> Option<&str> {
    match value {
        Some("nan") | None => None,
        Some(other) => Some(other),
    }
}

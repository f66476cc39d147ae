//! Phonological pattern shorthand.
//!
//! Pattern-mode queries may use `C` for "any licensed consonant" and `V`
//! for "any licensed vowel"; everything else is passed through to the
//! regex engine unescaped. This is a deliberate power-user mode: the
//! caller is trusted to write valid regex fragments around the shorthand,
//! and a malformed result is handled downstream by treating the search as
//! matching nothing.

/// The licensed consonant inventory of the orthography.
pub const CONSONANTS: &str = "bcdfhklɬmnpstwy";

/// The licensed vowel inventory, plain and accented.
pub const VOWELS: &str = "aeoiáóéíàòìè";

/// Expands the `C`/`V` shorthand into a regex source string.
///
/// `C` becomes a bracket class over [`CONSONANTS`], `V` over [`VOWELS`].
/// No escaping is applied to any other character.
pub fn expand(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());

    for ch in pattern.chars() {
        match ch {
            'C' => {
                out.push('[');
                out.push_str(CONSONANTS);
                out.push(']');
            }
            'V' => {
                out.push('[');
                out.push_str(VOWELS);
                out.push(']');
            }
            other => out.push(other),
        }
    }

    out
}

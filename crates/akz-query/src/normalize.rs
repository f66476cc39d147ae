//! Text canonicalization for accent-insensitive matching.
//!
//! The dictionary orthography marks pitch accent with grave/acute accents
//! on vowels and disambiguates homophones with subscript numerals. Neither
//! is significant for lookup, so matching happens over a normalized form
//! with both removed. The special consonant `ɬ` and the nasalization
//! marker `ⁿ` are phonemic and pass through untouched.

/// Canonicalizes text for matching.
///
/// Lowercases, folds the accented vowels à/á, ò/ó, ì/í to their plain
/// counterparts (both precomposed characters and combining-mark
/// sequences), and strips the subscript numerals ₁ ₂ ₃.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for ch in text.chars().flat_map(char::to_lowercase) {
        match ch {
            'à' | 'á' => out.push('a'),
            'ò' | 'ó' => out.push('o'),
            'ì' | 'í' => out.push('i'),
            // Combining grave/acute: covers decomposed accent sequences.
            '\u{0300}' | '\u{0301}' => {}
            // Subscript numerals disambiguating homophones.
            '₁' | '₂' | '₃' => {}
            _ => out.push(ch),
        }
    }

    out
}

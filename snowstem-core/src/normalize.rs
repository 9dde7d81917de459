//! Orthographic normalization
//!
//! Before the pipeline runs, a word-initial `y` and any `y` immediately
//! following a vowel are rewritten to the sentinel `Y` so the vowel
//! classifier treats them as consonants. The sentinel is reverted to
//! lowercase `y` as the pipeline's final act and must never appear in a
//! returned stem.

/// Internal marker for a `y` acting as a consonant.
pub const SENTINEL: char = 'Y';

/// Drop a single leading apostrophe, if present. Not recursive.
pub fn strip_leading_apostrophe(word: &str) -> &str {
    word.strip_prefix('\'').unwrap_or(word)
}

/// Mark consonant `y`s with the sentinel in one left-to-right pass.
///
/// A `y` that was itself just rewritten does not count as a vowel for the
/// position after it, so `sayyid` becomes `saYyid`, not `saYYid`.
pub fn mark_consonant_y(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev_is_vowel = false;
    for (i, ch) in word.chars().enumerate() {
        let ch = if ch == 'y' && (i == 0 || prev_is_vowel) {
            SENTINEL
        } else {
            ch
        };
        prev_is_vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        out.push(ch);
    }
    out
}

/// Revert every sentinel to lowercase `y`.
pub fn unmark_y(word: &str) -> String {
    word.replace(SENTINEL, "y")
}

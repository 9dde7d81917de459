//! R1/R2 region computation
//!
//! Porter2 gates most suffix rules on how deep into the word the suffix
//! lies. R1 is the offset just past the first vowel-run followed by a
//! non-vowel; R2 is the result of the same scan restarted at R1. Both are
//! computed once, on the normalized word before step 0, and reused unchanged
//! even as the word shrinks: a boundary beyond the current length simply
//! fails every "suffix inside region" test.

use crate::is_vowel;

/// Prefixes with fixed R1 offsets, checked before the general scan.
const R1_OVERRIDES: &[(&str, usize)] = &[("gener", 5), ("arsen", 5), ("commun", 6)];

/// The R1 and R2 boundaries of a word, as byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    /// Offset where the first region begins.
    pub r1: usize,
    /// Offset where the second region begins; always `>= r1`.
    pub r2: usize,
}

/// Compute both region boundaries in one pass pair.
pub fn regions(word: &str) -> Regions {
    let r1 = r1(word);
    Regions {
        r1,
        r2: scan_from(word, r1),
    }
}

/// Offset of R1: the first position after the first vowel-then-non-vowel
/// sequence, or the word length if there is none.
pub fn r1(word: &str) -> usize {
    for &(prefix, offset) in R1_OVERRIDES {
        if word.starts_with(prefix) {
            return offset;
        }
    }
    scan_from(word, 0)
}

/// Offset of R2: R1 of the remainder starting at R1.
pub fn r2(word: &str) -> usize {
    scan_from(word, r1(word))
}

/// Linear scan for the first vowel-run/non-vowel transition at or after
/// `start`. Returns the offset just past the transition's non-vowel, or the
/// word length when the pattern never completes.
fn scan_from(word: &str, start: usize) -> usize {
    let bytes = word.as_bytes();
    let mut i = start;
    while i < bytes.len() && !is_vowel(bytes[i]) {
        i += 1;
    }
    while i < bytes.len() && is_vowel(bytes[i]) {
        i += 1;
    }
    if i < bytes.len() {
        i + 1
    } else {
        bytes.len()
    }
}

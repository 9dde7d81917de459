//! Porter2 (Snowball English) stemming algorithm
//!
//! This crate implements the Porter2 suffix-stripping algorithm as a strict
//! downward pipeline over an owned word:
//!
//! - **Normalization**: apostrophe stripping and consonant-`y` marking
//! - **Regions**: the R1/R2 offsets that gate which suffix rules may fire
//! - **Exceptions**: full-word overrides and post-step-1a early exits
//! - **Steps**: the six ordered rewrite stages (0, 1a, 1b, 1c, 2, 3, 4, 5)
//!
//! Every operation is a pure function of its input; there is no shared state
//! between calls and no I/O. The crate deliberately carries zero runtime
//! dependencies so it can sit at the bottom of any text-processing stack.
//!
//! # Example
//!
//! ```rust
//! use snowstem_core::stem;
//!
//! assert_eq!(stem("consistently"), "consist");
//! assert_eq!(stem("caresses"), "caress");
//! assert_eq!(stem("skies"), "sky");
//! ```

pub mod exceptions;
pub mod normalize;
pub mod regions;
pub mod steps;

mod stemmer;

pub use regions::Regions;
pub use stemmer::stem;

/// Vowel test over raw bytes.
///
/// Lowercase `y` counts as a vowel; the consonant-`y` sentinel (`Y`) and any
/// non-ASCII byte do not. Suffix rules, region scans, and the short-syllable
/// classifier all share this definition.
pub(crate) fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowel_classification() {
        for b in [b'a', b'e', b'i', b'o', b'u', b'y'] {
            assert!(is_vowel(b));
        }
        assert!(!is_vowel(b'Y'));
        assert!(!is_vowel(b'b'));
        assert!(!is_vowel(b'\''));
        assert!(!is_vowel(0xC3)); // first byte of a multi-byte UTF-8 char
    }
}

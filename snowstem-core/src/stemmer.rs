//! Pipeline driver
//!
//! Fixed order, no re-entry: apostrophe strip, full-word exceptions,
//! consonant-`y` marking, one-shot R1/R2 computation, steps 0 and 1a, the
//! post-1a early exits, steps 1b through 5, sentinel reversion.

use crate::exceptions;
use crate::normalize;
use crate::regions::{self, Regions};
use crate::steps;

/// Stem a single word with the Porter2 algorithm.
///
/// Words of two bytes or fewer are returned unchanged. The result never
/// contains the internal consonant-`y` sentinel, and characters outside the
/// algorithm's working set pass through untouched.
pub fn stem(word: &str) -> String {
    if word.len() <= 2 {
        return word.to_string();
    }
    let word = normalize::strip_leading_apostrophe(word);

    if let Some(stem) = exceptions::full_word(word) {
        return stem.to_string();
    }

    let word = normalize::mark_consonant_y(word);
    // Computed once, before step 0, and deliberately never recomputed: later
    // steps compare against boundaries that may exceed the shrunken word.
    let Regions { r1, r2 } = regions::regions(&word);
    let word = steps::step_0(&word);
    let word = steps::step_1a(&word);

    if exceptions::early_exit_after_1a(&word) {
        return word;
    }

    let word = steps::step_1b(&word, r1);
    let word = steps::step_1c(&word);
    let word = steps::step_2(&word, r1);
    let word = steps::step_3(&word, r1, r2);
    let word = steps::step_4(&word, r2);
    let word = steps::step_5(&word, r1, r2);
    normalize::unmark_y(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_inputs_are_identity() {
        assert_eq!(stem(""), "");
        assert_eq!(stem("a"), "a");
        assert_eq!(stem("by"), "by");
        assert_eq!(stem("'s"), "'s");
    }

    #[test]
    fn regular_inflections() {
        assert_eq!(stem("mike"), "mike");
        assert_eq!(stem("consign"), "consign");
        assert_eq!(stem("consigned"), "consign");
        assert_eq!(stem("consigning"), "consign");
        assert_eq!(stem("consignment"), "consign");
        assert_eq!(stem("consist"), "consist");
        assert_eq!(stem("consisted"), "consist");
        assert_eq!(stem("consistency"), "consist");
        assert_eq!(stem("consistent"), "consist");
        assert_eq!(stem("consistently"), "consist");
        assert_eq!(stem("consisting"), "consist");
        assert_eq!(stem("consists"), "consist");
    }

    #[test]
    fn full_word_exceptions_bypass_the_pipeline() {
        assert_eq!(stem("skis"), "ski");
        assert_eq!(stem("skies"), "sky");
        assert_eq!(stem("dying"), "die");
        assert_eq!(stem("lying"), "lie");
        assert_eq!(stem("tying"), "tie");
        assert_eq!(stem("idly"), "idl");
        assert_eq!(stem("gently"), "gentl");
        assert_eq!(stem("ugly"), "ugli");
        assert_eq!(stem("early"), "earli");
        assert_eq!(stem("only"), "onli");
        assert_eq!(stem("singly"), "singl");
        assert_eq!(stem("sky"), "sky");
        assert_eq!(stem("news"), "news");
        assert_eq!(stem("howe"), "howe");
        assert_eq!(stem("atlas"), "atlas");
        assert_eq!(stem("cosmos"), "cosmos");
        assert_eq!(stem("bias"), "bias");
        assert_eq!(stem("andes"), "andes");
    }

    #[test]
    fn post_1a_exceptions_exit_early() {
        assert_eq!(stem("innings"), "inning");
        assert_eq!(stem("outing"), "outing");
        assert_eq!(stem("canninger"), "canning");
        assert_eq!(stem("herrings"), "herring");
        assert_eq!(stem("earring"), "earring");
        assert_eq!(stem("proceeder"), "proceed");
        assert_eq!(stem("exceeding"), "exceed");
        assert_eq!(stem("succeeds"), "succeed");
    }
}

//! The six ordered rewrite steps
//!
//! Each step is a pure function of the word and the region boundaries that
//! were computed before step 0. Within a step, suffix alternatives are tried
//! in fixed table order and the first terminal match decides the outcome: if
//! its region or predecessor test fails, the step ends with the word
//! unchanged rather than falling through to a shorter suffix.

use crate::is_vowel;
use crate::regions;

/// Step 2 rules: suffix, replacement, and the letters the remaining stem
/// must end in for the rule to fire (empty = no constraint).
const STEP_2_RULES: &[(&str, &str, &str)] = &[
    ("ization", "ize", ""),
    ("ational", "ate", ""),
    ("fulness", "ful", ""),
    ("ousness", "ous", ""),
    ("iveness", "ive", ""),
    ("tional", "tion", ""),
    ("biliti", "ble", ""),
    ("lessli", "less", ""),
    ("entli", "ent", ""),
    ("ation", "ate", ""),
    ("alism", "al", ""),
    ("aliti", "al", ""),
    ("ousli", "ous", ""),
    ("iviti", "ive", ""),
    ("fulli", "ful", ""),
    ("enci", "ence", ""),
    ("anci", "ance", ""),
    ("abli", "able", ""),
    ("izer", "ize", ""),
    ("ator", "ate", ""),
    ("alli", "al", ""),
    ("bli", "ble", ""),
    ("ogi", "og", "l"),
    ("li", "", "cdeghkmnrt"),
];

/// Step 3 rules: suffix, replacement, and whether the stem must also reach
/// into R2 (only `ative` does).
const STEP_3_RULES: &[(&str, &str, bool)] = &[
    ("ational", "ate", false),
    ("tional", "tion", false),
    ("alize", "al", false),
    ("icate", "ic", false),
    ("iciti", "ic", false),
    ("ative", "", true),
    ("ical", "ic", false),
    ("ness", "", false),
    ("ful", "", false),
];

/// Step 4 deletion-only suffixes, gated on R2.
const STEP_4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ism", "ate",
    "iti", "ous", "ive", "ize",
];

/// True when the word ends in a short syllable: a two-byte word matching
/// vowel/non-vowel, or any ending of non-vowel, vowel, non-vowel where the
/// final letter is not `w`, `x`, or the consonant-`y` sentinel.
pub(crate) fn ends_with_short_syllable(word: &str) -> bool {
    let b = word.as_bytes();
    let n = b.len();
    if n == 2 && is_vowel(b[0]) && !is_vowel(b[1]) {
        return true;
    }
    if n >= 3
        && !is_vowel(b[n - 3])
        && is_vowel(b[n - 2])
        && !is_vowel(b[n - 1])
        && !matches!(b[n - 1], b'w' | b'x' | b'Y')
    {
        return true;
    }
    false
}

/// True when the word ends in a short syllable and R1 never starts inside
/// it. Recomputes R1 on the current form, prefix overrides included, as the
/// doubling/e-insertion rules require.
pub(crate) fn is_short_word(word: &str) -> bool {
    ends_with_short_syllable(word) && regions::r1(word) == word.len()
}

/// Step 0: strip trailing possessive markers, longest first.
pub fn step_0(word: &str) -> String {
    for suffix in ["'s'", "'s", "'"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            return stem.to_string();
        }
    }
    word.to_string()
}

/// Step 1a: normalize plural and verb-form `s` endings.
pub fn step_1a(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("sses") {
        return format!("{stem}ss");
    }
    if word.ends_with("ied") || word.ends_with("ies") {
        let stem = &word[..word.len() - 3];
        return if word.len() > 4 {
            format!("{stem}i")
        } else {
            format!("{stem}ie")
        };
    }
    if word.ends_with("us") || word.ends_with("ss") {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix('s') {
        if has_vowel_before_final_position(stem) {
            return stem.to_string();
        }
    }
    word.to_string()
}

/// A vowel anywhere before the last byte, i.e. a vowel followed by at least
/// one more character.
fn has_vowel_before_final_position(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 2 && b[..b.len() - 1].iter().any(|&c| is_vowel(c))
}

/// Step 1b: strip the `ed`/`ing` family, with `ee` restoration for the
/// `eed` forms and doubling/e-insertion repair afterwards.
pub fn step_1b(word: &str, r1: usize) -> String {
    if let Some(stem) = word.strip_suffix("eedly") {
        return if stem.len() >= r1 {
            word[..word.len() - 3].to_string()
        } else {
            word.to_string()
        };
    }
    if let Some(stem) = word.strip_suffix("eed") {
        return if stem.len() >= r1 {
            word[..word.len() - 1].to_string()
        } else {
            word.to_string()
        };
    }

    for suffix in ["ed", "edly", "ing", "ingly"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.as_bytes().iter().any(|&c| is_vowel(c)) {
                return repair_after_strip(stem);
            }
            return word.to_string();
        }
    }

    word.to_string()
}

/// Post-strip repair for step 1b: restore a final `e` after `at`/`bl`/`iz`,
/// undouble one of the nine doubling pairs, or close a short word with `e`.
fn repair_after_strip(stem: &str) -> String {
    if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
        return format!("{stem}e");
    }
    if ends_with_doubled_consonant(stem) {
        return stem[..stem.len() - 1].to_string();
    }
    if is_short_word(stem) {
        return format!("{stem}e");
    }
    stem.to_string()
}

fn ends_with_doubled_consonant(s: &str) -> bool {
    let b = s.as_bytes();
    let n = b.len();
    n >= 2
        && b[n - 1] == b[n - 2]
        && matches!(
            b[n - 1],
            b'b' | b'd' | b'f' | b'g' | b'm' | b'n' | b'p' | b'r' | b't'
        )
}

/// Step 1c: terminal `y` (or sentinel) preceded by a non-vowel becomes `i`
/// in words longer than two characters.
pub fn step_1c(word: &str) -> String {
    let b = word.as_bytes();
    let n = b.len();
    if n > 2 && matches!(b[n - 1], b'y' | b'Y') && !is_vowel(b[n - 2]) {
        return format!("{}i", &word[..n - 1]);
    }
    word.to_string()
}

/// Step 2: first derivational suffix family, gated on R1.
pub fn step_2(word: &str, r1: usize) -> String {
    for &(suffix, replacement, allowed_predecessors) in STEP_2_RULES {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.len() >= r1
                && (allowed_predecessors.is_empty()
                    || stem
                        .as_bytes()
                        .last()
                        .is_some_and(|b| allowed_predecessors.as_bytes().contains(b)))
            {
                return format!("{stem}{replacement}");
            }
            return word.to_string();
        }
    }
    word.to_string()
}

/// Step 3: second derivational suffix family, gated on R1 (R2 for `ative`).
pub fn step_3(word: &str, r1: usize, r2: usize) -> String {
    for &(suffix, replacement, needs_r2) in STEP_3_RULES {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.len() >= r1 && (!needs_r2 || stem.len() >= r2) {
                return format!("{stem}{replacement}");
            }
            return word.to_string();
        }
    }
    word.to_string()
}

/// Step 4: deletion-only suffixes gated on R2, then `sion`/`tion` losing
/// their last three characters.
pub fn step_4(word: &str, r2: usize) -> String {
    for &suffix in STEP_4_SUFFIXES {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.len() >= r2 {
                return stem.to_string();
            }
            return word.to_string();
        }
    }
    if (word.ends_with("sion") || word.ends_with("tion")) && word.len() - 3 >= r2 {
        return word[..word.len() - 3].to_string();
    }
    word.to_string()
}

/// Step 5: collapse a trailing double `l` inside R2, and drop a trailing
/// `e` inside R2, or inside R1 when the rest does not end short.
pub fn step_5(word: &str, r1: usize, r2: usize) -> String {
    let b = word.as_bytes();
    let n = b.len();
    if b.last() == Some(&b'l') {
        if n >= 2 && n - 1 >= r2 && b[n - 2] == b'l' {
            return word[..n - 1].to_string();
        }
        return word.to_string();
    }
    if b.last() == Some(&b'e') {
        let stem = &word[..n - 1];
        if n - 1 >= r2 {
            return stem.to_string();
        }
        if n - 1 >= r1 && !ends_with_short_syllable(stem) {
            return stem.to_string();
        }
    }
    word.to_string()
}

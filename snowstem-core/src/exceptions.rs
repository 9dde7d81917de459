//! Exception tables
//!
//! Two small literal tables sidestep the rewrite steps entirely: full-word
//! overrides consulted before normalization, and a list of forms that end
//! the pipeline early once step 1a has produced them. Both are exact,
//! case-sensitive matches against the word's current state.

/// Full-word overrides, checked after apostrophe stripping and before
/// anything else. A hit short-circuits the whole pipeline.
pub fn full_word(word: &str) -> Option<&'static str> {
    let stem = match word {
        "skis" => "ski",
        "skies" => "sky",
        "dying" => "die",
        "lying" => "lie",
        "tying" => "tie",
        "idly" => "idl",
        "gently" => "gentl",
        "ugly" => "ugli",
        "early" => "earli",
        "only" => "onli",
        "singly" => "singl",
        // invariant forms the steps would otherwise mangle
        "sky" => "sky",
        "news" => "news",
        "howe" => "howe",
        "atlas" => "atlas",
        "cosmos" => "cosmos",
        "bias" => "bias",
        "andes" => "andes",
        _ => return None,
    };
    Some(stem)
}

/// Forms that exit the pipeline as-is immediately after step 1a, skipping
/// steps 1b through 5.
pub fn early_exit_after_1a(word: &str) -> bool {
    matches!(
        word,
        "inning" | "outing" | "canning" | "herring" | "earring" | "proceed" | "exceed" | "succeed"
    )
}

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// A pluggable normalization pass applied to each finalized fragment.
///
/// The default is [`smart_punctuate`]; a stricter grammar-aware pass can be
/// substituted without touching the aggregator or the state machine.
pub type NormalizeFn = Box<dyn Fn(&str) -> String + Send + Sync>;

fn capitalize_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // First letter of the string, and first letter after a sentence
    // terminator followed by whitespace.
    RE.get_or_init(|| Regex::new(r"(^\s*\w|[.?!]\s+\w)").expect("capitalization pattern is valid"))
}

/// Heuristic punctuation/capitalization for one finalized fragment.
///
/// Capitalizes the start of the fragment and letters following `.`, `?` or
/// `!` plus whitespace. If the result does not already end in a sentence
/// terminator and is longer than 8 characters, a period is appended.
///
/// This is not grammar-aware: abbreviations, numerals and multi-sentence
/// fragments are only handled as far as the rules above reach.
pub fn smart_punctuate(text: &str) -> String {
    let capitalized = capitalize_re()
        .replace_all(text, |caps: &Captures| caps[0].to_uppercase())
        .into_owned();

    if !capitalized.ends_with(['.', '?', '!']) && capitalized.chars().count() > 8 {
        return format!("{capitalized}.");
    }
    capitalized
}

//! Graphical syllable estimation.
//!
//! True phonetic syllabification is out of scope; the estimate subtracts
//! digraph and trigraph occurrences from the raw vowel count, since each
//! such group forms a single syllable nucleus.

use crate::config::LanguageProfile;
use crate::core::{SyllableCounts, TextCounts};

use super::{count_sequences, to_char_patterns};

/// Derive the syllable figures for a whole text from its counts.
///
/// The whole-text estimate may come out negative for pathological input;
/// that is a known artifact of the approximation and is deliberately left
/// unclamped so downstream formulas see the reference value.
pub fn estimate(text: &str, counts: &TextCounts, profile: &LanguageProfile) -> SyllableCounts {
    SyllableCounts {
        graphical_syllables: counts.vowels as i64 - (counts.digraphs + counts.trigraphs) as i64,
        polysyllabic_words: polysyllabic_words(text, profile),
    }
}

/// Graphical syllables of a single token
pub fn token_graphical_syllables(token: &str, profile: &LanguageProfile) -> i64 {
    let lower: Vec<char> = token.to_lowercase().chars().collect();
    let vowels = lower
        .iter()
        .filter(|c| profile.vowels.contains(**c))
        .count();
    let digraphs = count_sequences(&lower, &to_char_patterns(&profile.digraphs));
    let trigraphs = count_sequences(&lower, &to_char_patterns(&profile.trigraphs));
    vowels as i64 - (digraphs + trigraphs) as i64
}

/// Count tokens whose own graphical-syllable estimate reaches three.
/// Tokens are whitespace-separated chunks; attached punctuation holds no
/// vowels and does not disturb the estimate.
pub fn polysyllabic_words(text: &str, profile: &LanguageProfile) -> usize {
    text.split_whitespace()
        .filter(|token| token_graphical_syllables(token, profile) >= 3)
        .count()
}

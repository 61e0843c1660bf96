//! Plain-scan lexical counter: no pattern matching, only character walks.

use crate::config::LanguageProfile;
use crate::core::TextCounts;

use super::{count_sequences, to_char_patterns};

/// Punctuation stripped before splitting the text into tokens
const STRIP_PUNCTUATION: &[char] = &[
    '!', '(', ')', '-', '[', ']', '{', '}', ';', ':', '«', '»', '\'', '"', '\\', '<', '>', '.',
    '/', '?', '@', '#', '$', '%', '^', '&', '*', '_', '~', '…',
];

/// Elision marks and hyphens become separators so "l'eau" and "dit-il"
/// split into their component words
const ELISION_MARKS: &[char] = &['’', '\'', '-'];

/// Counts by scanning characters and substrings directly. Digraph and
/// trigraph occurrences use the same non-overlapping first-listed-wins rule
/// as the pattern strategy.
pub struct ScanCounter {
    vowels: Vec<char>,
    digraphs: Vec<Vec<char>>,
    trigraphs: Vec<Vec<char>>,
    long_word_len: usize,
    terminators: Vec<char>,
}

impl ScanCounter {
    pub fn new(profile: &LanguageProfile) -> Self {
        Self {
            vowels: profile.vowels.chars().collect(),
            digraphs: to_char_patterns(&profile.digraphs),
            trigraphs: to_char_patterns(&profile.trigraphs),
            long_word_len: profile.long_word_len,
            terminators: profile.sentence_terminators.chars().collect(),
        }
    }

    fn tokens(text: &str) -> Vec<String> {
        let separated: String = text
            .chars()
            .map(|c| if ELISION_MARKS.contains(&c) { ' ' } else { c })
            .collect();
        separated
            .split_whitespace()
            .map(|token| {
                token
                    .chars()
                    .filter(|c| !STRIP_PUNCTUATION.contains(c))
                    .collect::<String>()
            })
            .filter(|token| !token.is_empty())
            .collect()
    }

    fn sentence_count(&self, text: &str) -> usize {
        // Collapse ellipses so they terminate one sentence, not three
        let squashed = text.replace("...", ".").replace('…', ".");
        squashed
            .chars()
            .filter(|c| self.terminators.contains(c))
            .count()
            .max(1)
    }
}

impl super::TextCounter for ScanCounter {
    fn count(&self, text: &str) -> TextCounts {
        let tokens = Self::tokens(text);
        let lower: Vec<char> = text.to_lowercase().chars().collect();

        TextCounts {
            characters: tokens.iter().map(|t| t.chars().count()).sum(),
            vowels: lower.iter().filter(|c| self.vowels.contains(c)).count(),
            digraphs: count_sequences(&lower, &self.digraphs),
            trigraphs: count_sequences(&lower, &self.trigraphs),
            words: tokens.len(),
            long_words: tokens
                .iter()
                .filter(|t| t.chars().count() >= self.long_word_len)
                .count(),
            sentences: self.sentence_count(text),
        }
    }
}

//! Lexical counters: derive primitive counts (characters, vowels, vowel
//! digraphs/trigraphs, words, long words, sentences) from raw text.
//!
//! Two interchangeable strategies implement the same [`TextCounter`]
//! contract. [`PatternCounter`] works from compiled patterns and is the
//! canonical strategy; [`ScanCounter`] counts by plain character scanning.
//! They agree on well-formed prose but may diverge on edge-case
//! tokenization, which is accepted.

pub mod pattern;
pub mod scan;
pub mod syllables;

pub use pattern::PatternCounter;
pub use scan::ScanCounter;

use crate::config::LanguageProfile;
use crate::core::errors::Result;
use crate::core::TextCounts;

/// Counting strategy selector
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Pattern,
    Scan,
}

/// A lexical counting strategy. Counters never fail: any text yields a
/// [`TextCounts`] with `sentences >= 1`.
pub trait TextCounter {
    fn count(&self, text: &str) -> TextCounts;
}

/// Build the counter for a strategy from a language profile
pub fn counter_for(strategy: Strategy, profile: &LanguageProfile) -> Result<Box<dyn TextCounter>> {
    match strategy {
        Strategy::Pattern => Ok(Box::new(PatternCounter::new(profile)?)),
        Strategy::Scan => Ok(Box::new(ScanCounter::new(profile))),
    }
}

/// Count non-overlapping occurrences of the given character sequences,
/// scanning left to right. At each position the first listed sequence that
/// matches wins and the scan resumes after it, mirroring leftmost-first
/// alternation semantics.
pub(crate) fn count_sequences(chars: &[char], patterns: &[Vec<char>]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < chars.len() {
        let matched = patterns
            .iter()
            .find(|p| !p.is_empty() && chars[i..].starts_with(p));
        match matched {
            Some(pattern) => {
                count += 1;
                i += pattern.len();
            }
            None => i += 1,
        }
    }
    count
}

pub(crate) fn to_char_patterns(patterns: &[String]) -> Vec<Vec<char>> {
    patterns.iter().map(|p| p.chars().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn sequences_do_not_overlap() {
        let patterns = to_char_patterns(&["aa".to_string()]);
        assert_eq!(count_sequences(&chars("aaaa"), &patterns), 2);
        assert_eq!(count_sequences(&chars("aaa"), &patterns), 1);
    }

    #[test]
    fn first_listed_pattern_wins() {
        // "ou" is listed before "oû"; at a position holding "oû" only the
        // accented pattern matches, but plain "ou" must not be shadowed
        let patterns = to_char_patterns(&["ou".to_string(), "oû".to_string()]);
        assert_eq!(count_sequences(&chars("où goût"), &patterns), 1);
        assert_eq!(count_sequences(&chars("oû ou"), &patterns), 2);
    }

    #[test]
    fn empty_patterns_never_match() {
        let patterns = to_char_patterns(&["".to_string()]);
        assert_eq!(count_sequences(&chars("abc"), &patterns), 0);
    }

    #[test]
    fn both_strategies_agree_on_plain_prose() {
        let profile = LanguageProfile::default();
        let text = "Le chat dort. Le chien mange sa gamelle. Bonjour !";
        let pattern = PatternCounter::new(&profile).unwrap().count(text);
        let scan = ScanCounter::new(&profile).count(text);
        assert_eq!(pattern.words, scan.words);
        assert_eq!(pattern.long_words, scan.long_words);
        assert_eq!(pattern.sentences, scan.sentences);
        assert_eq!(pattern.vowels, scan.vowels);
        assert_eq!(pattern.digraphs, scan.digraphs);
        assert_eq!(pattern.trigraphs, scan.trigraphs);
    }
}

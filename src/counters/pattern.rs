//! Pattern-based lexical counter, the canonical strategy.

use crate::config::LanguageProfile;
use crate::core::errors::Result;
use crate::core::TextCounts;
use once_cell::sync::Lazy;
use regex::Regex;

static WORD_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w").unwrap());
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Counts by matching compiled patterns against the raw text. The
/// profile-dependent patterns are compiled once at construction.
pub struct PatternCounter {
    vowel: Regex,
    digraph: Option<Regex>,
    trigraph: Option<Regex>,
    long_word: Regex,
    sentence: Regex,
}

impl PatternCounter {
    pub fn new(profile: &LanguageProfile) -> Result<Self> {
        let vowel_class: String = profile
            .vowels
            .chars()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        let terminator_class = regex::escape(&profile.sentence_terminators);

        Ok(Self {
            vowel: Regex::new(&format!("(?i)[{vowel_class}]"))?,
            digraph: compile_alternation(&profile.digraphs)?,
            trigraph: compile_alternation(&profile.trigraphs)?,
            long_word: Regex::new(&format!(r"\w{{{},}}", profile.long_word_len))?,
            sentence: Regex::new(&format!(
                r"\w{{{},}}\s?[{}]",
                profile.min_sentence_token, terminator_class
            ))?,
        })
    }
}

/// Case-insensitive alternation over the listed sequences, preserving list
/// order so the first listed sequence wins at each position. `None` when the
/// list is empty: an empty alternation would match the empty string at every
/// position instead of matching nothing.
fn compile_alternation(patterns: &[String]) -> Result<Option<Regex>> {
    let non_empty: Vec<String> = patterns
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| regex::escape(p))
        .collect();
    if non_empty.is_empty() {
        return Ok(None);
    }
    Ok(Some(Regex::new(&format!("(?i){}", non_empty.join("|")))?))
}

impl super::TextCounter for PatternCounter {
    fn count(&self, text: &str) -> TextCounts {
        let count_opt =
            |re: &Option<Regex>| re.as_ref().map_or(0, |re| re.find_iter(text).count());

        TextCounts {
            characters: WORD_CHAR.find_iter(text).count(),
            vowels: self.vowel.find_iter(text).count(),
            digraphs: count_opt(&self.digraph),
            trigraphs: count_opt(&self.trigraph),
            words: TOKEN.find_iter(text).count(),
            long_words: self.long_word.find_iter(text).count(),
            // Floor: a text with no terminal punctuation is one sentence
            sentences: self.sentence.find_iter(text).count().max(1),
        }
    }
}

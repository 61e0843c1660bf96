pub mod errors;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Primitive counts derived from a text by a [`crate::counters::TextCounter`].
///
/// Invariant: `sentences >= 1`. A text with no terminal punctuation still
/// counts as one sentence so that downstream per-sentence divisions are
/// always defined.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextCounts {
    pub characters: usize,
    pub vowels: usize,
    pub digraphs: usize,
    pub trigraphs: usize,
    pub words: usize,
    pub long_words: usize,
    pub sentences: usize,
}

/// Syllable figures derived from [`TextCounts`] and the text itself.
///
/// `graphical_syllables` is vowels minus digraphs and trigraphs and may be
/// negative for pathological input; it is intentionally not clamped.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyllableCounts {
    pub graphical_syllables: i64,
    pub polysyllabic_words: usize,
}

/// The seven readability formulas computed by the scoring engine.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    Lix,
    Rix,
    Gunning,
    Smog,
    Fkgl,
    ColemanLiau,
    Ari,
}

impl Formula {
    /// Report order, matching the historical output order
    pub const ALL: [Formula; 7] = [
        Formula::Lix,
        Formula::Rix,
        Formula::Gunning,
        Formula::Smog,
        Formula::Fkgl,
        Formula::ColemanLiau,
        Formula::Ari,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Formula::Lix => "lix",
            Formula::Rix => "rix",
            Formula::Gunning => "gunning",
            Formula::Smog => "smog",
            Formula::Fkgl => "fkgl",
            Formula::ColemanLiau => "coleman_liau",
            Formula::Ari => "ari",
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(Formula, &str)] = &[
            (Formula::Lix, "LIX"),
            (Formula::Rix, "RIX"),
            (Formula::Gunning, "Gunning fog"),
            (Formula::Smog, "SMOG"),
            (Formula::Fkgl, "Flesch-Kincaid"),
            (Formula::ColemanLiau, "Coleman-Liau"),
            (Formula::Ari, "Automated readability index"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(formula, _)| formula == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}

/// One score per formula. Unbounded range; interpretation is per formula.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Scores {
    pub lix: f64,
    pub rix: f64,
    pub gunning: f64,
    pub smog: f64,
    pub fkgl: f64,
    pub coleman_liau: f64,
    pub ari: f64,
}

impl Scores {
    pub fn get(&self, formula: Formula) -> f64 {
        match formula {
            Formula::Lix => self.lix,
            Formula::Rix => self.rix,
            Formula::Gunning => self.gunning,
            Formula::Smog => self.smog,
            Formula::Fkgl => self.fkgl,
            Formula::ColemanLiau => self.coleman_liau,
            Formula::Ari => self.ari,
        }
    }

    /// Iterate scores in report order
    pub fn iter(&self) -> impl Iterator<Item = (Formula, f64)> + '_ {
        Formula::ALL.iter().map(move |f| (*f, self.get(*f)))
    }
}

/// Reading difficulty, ordered from easiest to hardest.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DifficultyTier {
    VeryEasy,
    Easy,
    Intermediate,
    Hard,
    VeryHard,
}

impl std::fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(DifficultyTier, &str)] = &[
            (DifficultyTier::VeryEasy, "Very Easy"),
            (DifficultyTier::Easy, "Easy"),
            (DifficultyTier::Intermediate, "Intermediate"),
            (DifficultyTier::Hard, "Hard"),
            (DifficultyTier::VeryHard, "Very Hard"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(tier, _)| tier == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}

/// A formula's rounded score and its difficulty tier.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScoreEntry {
    pub formula: Formula,
    /// Score rounded to two decimal places for display; the tier is
    /// classified from the unrounded value
    pub score: f64,
    pub tier: DifficultyTier,
}

/// Full result of a readability analysis: raw counts, syllable figures and
/// per-formula scores with tiers, in report order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReadabilityReport {
    pub source: Option<PathBuf>,
    pub generated_at: DateTime<Utc>,
    pub counts: TextCounts,
    pub syllables: SyllableCounts,
    pub scores: Vec<ScoreEntry>,
}

impl ReadabilityReport {
    pub fn entry(&self, formula: Formula) -> Option<&ScoreEntry> {
        self.scores.iter().find(|e| e.formula == formula)
    }
}

/// Result of the LIX-only quick flow.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LixSummary {
    pub file: String,
    pub words: usize,
    pub long_words: usize,
    pub sentences: usize,
    pub score: f64,
    pub tier: DifficultyTier,
}

//! Report assembly: package counts, scores and tiers into one value.
//!
//! The report is the only thing the pipeline hands to callers; display
//! layers format it but never recompute anything.

use crate::config::{LanguageProfile, LisixConfig};
use crate::core::errors::Result;
use crate::core::{
    Formula, LixSummary, ReadabilityReport, ScoreEntry, Scores, SyllableCounts, TextCounts,
};
use crate::counters::{self, ScanCounter, Strategy, TextCounter};
use crate::scoring::compute_scores;
use crate::scoring::scales::{classify_lix_simple, ScaleSet};
use chrono::Utc;
use std::path::PathBuf;

fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Pure aggregation step: round each score to two decimals for display and
/// attach the tier classified from the unrounded value.
pub fn build_report(
    source: Option<PathBuf>,
    counts: TextCounts,
    syllables: SyllableCounts,
    scores: &Scores,
    scales: &ScaleSet,
) -> ReadabilityReport {
    let entries = scores
        .iter()
        .map(|(formula, score)| ScoreEntry {
            formula,
            score: round2(score),
            tier: scales.classify(formula, score),
        })
        .collect();

    ReadabilityReport {
        source,
        generated_at: Utc::now(),
        counts,
        syllables,
        scores: entries,
    }
}

/// Run the full pipeline on a text: count, estimate syllables, score,
/// classify, assemble.
pub fn analyze_text(
    text: &str,
    config: &LisixConfig,
    strategy: Strategy,
) -> Result<ReadabilityReport> {
    let counter = counters::counter_for(strategy, &config.language)?;
    let counts = counter.count(text);
    let syllables = counters::syllables::estimate(text, &counts, &config.language);
    log::debug!(
        "counted {} words, {} sentences, {} graphical syllables",
        counts.words,
        counts.sentences,
        syllables.graphical_syllables
    );

    let scores = compute_scores(&counts, &syllables)?;
    Ok(build_report(None, counts, syllables, &scores, &config.scales))
}

/// LIX-only quick flow: scan counting, single score, simplified classifier
pub fn lix_summary(name: &str, text: &str, profile: &LanguageProfile) -> Result<LixSummary> {
    let counts = ScanCounter::new(profile).count(text);
    let syllables = counters::syllables::estimate(text, &counts, profile);
    let scores = compute_scores(&counts, &syllables)?;

    Ok(LixSummary {
        file: name.to_string(),
        words: counts.words,
        long_words: counts.long_words,
        sentences: counts.sentences,
        score: scores.lix,
        tier: classify_lix_simple(scores.lix),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DifficultyTier;

    #[test]
    fn report_rounds_scores_to_two_decimals() {
        let counts = TextCounts {
            characters: 19,
            words: 6,
            long_words: 1,
            sentences: 2,
            ..TextCounts::default()
        };
        let syllables = SyllableCounts {
            graphical_syllables: 7,
            polysyllabic_words: 1,
        };
        let scores = compute_scores(&counts, &syllables).unwrap();
        let report = build_report(None, counts, syllables, &scores, &ScaleSet::default());

        // lix = 6/2 + 100*1/6 = 19.666... -> 19.67
        let lix = report.entry(Formula::Lix).unwrap();
        assert_eq!(lix.score, 19.67);
        assert_eq!(lix.tier, DifficultyTier::VeryEasy);
    }

    #[test]
    fn report_lists_formulas_in_display_order() {
        let counts = TextCounts {
            characters: 6,
            words: 2,
            sentences: 1,
            ..TextCounts::default()
        };
        let syllables = SyllableCounts::default();
        let scores = compute_scores(&counts, &syllables).unwrap();
        let report = build_report(None, counts, syllables, &scores, &ScaleSet::default());

        let order: Vec<Formula> = report.scores.iter().map(|e| e.formula).collect();
        assert_eq!(order, Formula::ALL);
    }

    #[test]
    fn lix_summary_uses_the_simplified_classifier() {
        let profile = LanguageProfile::default();
        let summary = lix_summary("chat.txt", "Le chat.", &profile).unwrap();
        assert_eq!(summary.words, 2);
        assert_eq!(summary.sentences, 1);
        assert_eq!(summary.long_words, 0);
        assert!((summary.score - 2.0).abs() < 1e-9);
        assert_eq!(summary.tier, DifficultyTier::VeryEasy);
        assert_eq!(summary.file, "chat.txt");
    }
}

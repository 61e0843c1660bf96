//! Formula engine: combines primitive and derived counts into the seven
//! readability scores.

pub mod scales;

use crate::core::errors::{Error, Result};
use crate::core::{Scores, SyllableCounts, TextCounts};

/// Compute all seven readability scores from a text's counts.
///
/// Fails with [`Error::EmptyInput`] when the text has no words: every
/// formula divides by the word count, and a distinct failure beats a NaN
/// propagating into the report. `sentences >= 1` is guaranteed by the
/// counters, so per-sentence divisions need no guard.
pub fn compute_scores(counts: &TextCounts, syllables: &SyllableCounts) -> Result<Scores> {
    if counts.words == 0 {
        return Err(Error::EmptyInput);
    }

    let c = counts.characters as f64;
    let w = counts.words as f64;
    let s = counts.sentences as f64;
    let l = counts.long_words as f64;
    let g = syllables.graphical_syllables as f64;
    let p = syllables.polysyllabic_words as f64;

    Ok(Scores {
        lix: (w / s) + 100.0 * (l / w),
        rix: l / s,
        gunning: 0.4 * ((w / s) + 100.0 * (p / w)),
        smog: 1.043 * (p * (30.0 / s)).sqrt() + 3.1291,
        fkgl: 0.39 * (w / s) + 11.8 * (g / w) - 15.59,
        coleman_liau: 0.0588 * ((c / w) * 100.0) - 0.296 * ((s / w) * 100.0) - 15.8,
        ari: 4.71 * (c / w) + 0.5 * (w / s) - 21.43,
    })
}

//! Difficulty classification: per-formula threshold tables mapping a score
//! onto the five-tier difficulty scale.

use crate::core::{DifficultyTier, Formula};
use serde::{Deserialize, Serialize};

/// Four strictly descending thresholds partitioning the score axis into the
/// five difficulty tiers. A score strictly above `thresholds[0]` is
/// [`DifficultyTier::VeryHard`]; at or below `thresholds[3]` it is
/// [`DifficultyTier::VeryEasy`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Scale {
    pub thresholds: [f64; 4],
}

impl Scale {
    pub const fn new(thresholds: [f64; 4]) -> Self {
        Self { thresholds }
    }

    /// Classify a score. All comparisons are strict, so a score exactly on a
    /// threshold lands in the tier below it.
    pub fn classify(&self, score: f64) -> DifficultyTier {
        let [t1, t2, t3, t4] = self.thresholds;
        if score > t1 {
            DifficultyTier::VeryHard
        } else if score > t2 {
            DifficultyTier::Hard
        } else if score > t3 {
            DifficultyTier::Intermediate
        } else if score > t4 {
            DifficultyTier::Easy
        } else {
            DifficultyTier::VeryEasy
        }
    }

    fn is_descending(&self) -> bool {
        self.thresholds.windows(2).all(|w| w[0] > w[1])
    }
}

/// One threshold scale per formula, overridable through configuration
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScaleSet {
    pub lix: Scale,
    pub rix: Scale,
    pub gunning: Scale,
    pub smog: Scale,
    pub fkgl: Scale,
    pub coleman_liau: Scale,
    pub ari: Scale,
}

impl Default for ScaleSet {
    fn default() -> Self {
        Self {
            lix: Scale::new([59.0, 50.0, 40.0, 30.0]),
            rix: Scale::new([7.1, 5.3, 2.9, 1.8]),
            gunning: Scale::new([17.0, 13.0, 7.0, 1.0]),
            smog: Scale::new([14.0, 12.0, 7.0, 1.0]),
            fkgl: Scale::new([15.0, 12.0, 5.0, 1.0]),
            coleman_liau: Scale::new([15.0, 9.0, 5.0, 1.0]),
            ari: Scale::new([15.0, 9.0, 5.0, 1.0]),
        }
    }
}

impl ScaleSet {
    pub fn for_formula(&self, formula: Formula) -> Scale {
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

    pub fn classify(&self, formula: Formula, score: f64) -> DifficultyTier {
        self.for_formula(formula).classify(score)
    }

    /// Validate that every scale is strictly descending
    pub fn validate(&self) -> Result<(), String> {
        for formula in Formula::ALL {
            if !self.for_formula(formula).is_descending() {
                return Err(format!(
                    "{} thresholds must be strictly descending",
                    formula.as_str()
                ));
            }
        }
        Ok(())
    }
}

/// Simplified classifier used by the LIX-only quick flow. Unlike the primary
/// classifier it keeps the historical boundary rules: strict `>` for the top
/// band, inclusive `>=` for the three below it, so the two classifiers
/// disagree at exactly 50, 40 and 30.
pub fn classify_lix_simple(score: f64) -> DifficultyTier {
    if score > 60.0 {
        DifficultyTier::VeryHard
    } else if score >= 50.0 {
        DifficultyTier::Hard
    } else if score >= 40.0 {
        DifficultyTier::Intermediate
    } else if score >= 30.0 {
        DifficultyTier::Easy
    } else {
        DifficultyTier::VeryEasy
    }
}

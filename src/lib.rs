// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod counters;
pub mod io;
pub mod report;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    DifficultyTier, Formula, LixSummary, ReadabilityReport, ScoreEntry, Scores, SyllableCounts,
    TextCounts,
};

pub use crate::core::errors::{Error, Result};

pub use crate::config::{get_config, load_config, LanguageProfile, LisixConfig};

pub use crate::counters::{
    counter_for, syllables::polysyllabic_words, syllables::token_graphical_syllables,
    PatternCounter, ScanCounter, Strategy, TextCounter,
};

pub use crate::scoring::{
    compute_scores,
    scales::{classify_lix_simple, Scale, ScaleSet},
};

pub use crate::report::{analyze_text, build_report, lix_summary};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

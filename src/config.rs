use crate::scoring::scales::ScaleSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Language profile: the character classes and boundary rules the lexical
/// counters work from. Defaults describe French; alternate alphabets can be
/// configured without touching the scoring engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageProfile {
    /// Characters counted as vowels (case-insensitive)
    #[serde(default = "default_vowels")]
    pub vowels: String,

    /// Two-letter vowel combinations forming a single syllable nucleus.
    /// Order matters: at each position the first listed match wins.
    #[serde(default = "default_digraphs")]
    pub digraphs: Vec<String>,

    /// Three-letter vowel combinations forming a single syllable nucleus
    #[serde(default = "default_trigraphs")]
    pub trigraphs: Vec<String>,

    /// Minimum length of a "long" word (LIX/RIX count words of more than
    /// six letters, hence 7)
    #[serde(default = "default_long_word_len")]
    pub long_word_len: usize,

    /// Characters that terminate a sentence
    #[serde(default = "default_sentence_terminators")]
    pub sentence_terminators: String,

    /// Minimum token length in front of a terminator for it to count as a
    /// sentence end (filters initials and most abbreviations)
    #[serde(default = "default_min_sentence_token")]
    pub min_sentence_token: usize,
}

fn default_vowels() -> String {
    "aeiouœéèàâûù".to_string()
}

fn default_digraphs() -> Vec<String> {
    [
        "au", "eu", "ou", "oû", "où", "oi", "œu", "ei", "ai", "ée", "ue", "ui", "ua",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_trigraphs() -> Vec<String> {
    ["eau", "oue", "aie"].iter().map(|s| s.to_string()).collect()
}

fn default_long_word_len() -> usize {
    7
}

fn default_sentence_terminators() -> String {
    ".?!".to_string()
}

fn default_min_sentence_token() -> usize {
    2
}

impl Default for LanguageProfile {
    fn default() -> Self {
        Self {
            vowels: default_vowels(),
            digraphs: default_digraphs(),
            trigraphs: default_trigraphs(),
            long_word_len: default_long_word_len(),
            sentence_terminators: default_sentence_terminators(),
            min_sentence_token: default_min_sentence_token(),
        }
    }
}

impl LanguageProfile {
    /// Validate structural requirements of the profile
    pub fn validate(&self) -> Result<(), String> {
        if self.vowels.is_empty() {
            return Err("vowel set must not be empty".to_string());
        }
        if self.sentence_terminators.is_empty() {
            return Err("sentence terminator set must not be empty".to_string());
        }
        if self.long_word_len == 0 {
            return Err("long_word_len must be at least 1".to_string());
        }
        if self.min_sentence_token == 0 {
            return Err("min_sentence_token must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Top-level configuration, loaded from `.lisix.toml` when present
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LisixConfig {
    pub language: LanguageProfile,
    pub scales: ScaleSet,
}

static CONFIG: OnceLock<LisixConfig> = OnceLock::new();

/// Pure function to read config file contents
fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
#[cfg(test)]
pub(crate) fn parse_and_validate_config(contents: &str) -> Result<LisixConfig, String> {
    parse_and_validate_config_impl(contents)
}

fn parse_and_validate_config_impl(contents: &str) -> Result<LisixConfig, String> {
    let mut config = toml::from_str::<LisixConfig>(contents)
        .map_err(|e| format!("Failed to parse .lisix.toml: {}", e))?;

    if let Err(e) = config.language.validate() {
        eprintln!("Warning: Invalid language profile: {}. Using defaults.", e);
        config.language = LanguageProfile::default();
    }

    if let Err(e) = config.scales.validate() {
        eprintln!("Warning: Invalid scale thresholds: {}. Using defaults.", e);
        config.scales = ScaleSet::default();
    }

    Ok(config)
}

/// Pure function to try loading config from a specific path
fn try_load_config_from_path(config_path: &Path) -> Option<LisixConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config_impl(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

fn directory_ancestors_impl(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load configuration from the nearest `.lisix.toml`, falling back to the
/// built-in French defaults
pub fn load_config() -> LisixConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return LisixConfig::default();
        }
    };

    directory_ancestors_impl(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(".lisix.toml"))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            LisixConfig::default()
        })
}

/// Get the cached configuration
pub fn get_config() -> &'static LisixConfig {
    CONFIG.get_or_init(load_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, LisixConfig::default());
    }

    #[test]
    fn language_section_overrides_vowels() {
        let config = parse_and_validate_config(
            r#"
            [language]
            vowels = "aeiouy"
            long_word_len = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.language.vowels, "aeiouy");
        assert_eq!(config.language.long_word_len, 8);
        // Untouched fields keep their defaults
        assert_eq!(config.language.digraphs, default_digraphs());
    }

    #[test]
    fn invalid_language_profile_falls_back_to_defaults() {
        let config = parse_and_validate_config(
            r#"
            [language]
            vowels = ""
            "#,
        )
        .unwrap();
        assert_eq!(config.language, LanguageProfile::default());
    }

    #[test]
    fn scale_override_is_applied() {
        let config = parse_and_validate_config(
            r#"
            [scales]
            lix = [62.0, 52.0, 42.0, 32.0]
            "#,
        )
        .unwrap();
        assert_eq!(config.scales.lix.thresholds, [62.0, 52.0, 42.0, 32.0]);
        assert_eq!(config.scales.rix, ScaleSet::default().rix);
    }

    #[test]
    fn non_descending_scale_falls_back_to_defaults() {
        let config = parse_and_validate_config(
            r#"
            [scales]
            lix = [30.0, 40.0, 50.0, 60.0]
            "#,
        )
        .unwrap();
        assert_eq!(config.scales, ScaleSet::default());
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(parse_and_validate_config("language = nonsense").is_err());
    }

    #[test]
    fn ancestor_walk_respects_depth_limit() {
        let ancestors: Vec<_> =
            directory_ancestors_impl(PathBuf::from("/a/b/c/d/e/f"), 3).collect();
        assert_eq!(ancestors.len(), 3);
        assert_eq!(ancestors[0], PathBuf::from("/a/b/c/d/e/f"));
        assert_eq!(ancestors[1], PathBuf::from("/a/b/c/d/e"));
    }
}

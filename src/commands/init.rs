use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".lisix.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Lisix Configuration
# All values shown are the built-in French defaults.

[language]
vowels = "aeiouœéèàâûù"
digraphs = ["au", "eu", "ou", "oû", "où", "oi", "œu", "ei", "ai", "ée", "ue", "ui", "ua"]
trigraphs = ["eau", "oue", "aie"]
# Minimum length of a "long" word (LIX/RIX count words of more than six letters)
long_word_len = 7
sentence_terminators = ".?!"
min_sentence_token = 2

# Four descending thresholds per formula: VeryHard | Hard | Intermediate | Easy
[scales]
lix = [59.0, 50.0, 40.0, 30.0]
rix = [7.1, 5.3, 2.9, 1.8]
gunning = [17.0, 13.0, 7.0, 1.0]
smog = [14.0, 12.0, 7.0, 1.0]
fkgl = [15.0, 12.0, 5.0, 1.0]
coleman_liau = [15.0, 9.0, 5.0, 1.0]
ari = [15.0, 9.0, 5.0, 1.0]
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created .lisix.toml configuration file");

    Ok(())
}

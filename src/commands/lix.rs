use crate::config;
use crate::core::errors::Error;
use crate::io;
use crate::io::output::format_lix_summary;
use crate::report;
use anyhow::Result;
use std::path::Path;

pub fn handle_lix(path: &Path) -> Result<()> {
    let config = config::get_config();
    let text = io::read_file(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    match report::lix_summary(&name, &text, &config.language) {
        Ok(summary) => {
            println!("{}", format_lix_summary(&summary));
            Ok(())
        }
        Err(Error::EmptyInput) => {
            anyhow::bail!(
                "{}: le texte ne contient aucun mot, impossible de calculer un score",
                path.display()
            )
        }
        Err(e) => Err(e.into()),
    }
}

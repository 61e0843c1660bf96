use crate::cli;
use crate::config;
use crate::core::errors::Error;
use crate::counters::Strategy;
use crate::io;
use crate::io::output::{create_writer, OutputFormat};
use crate::report;
use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: cli::OutputFormat,
    pub output: Option<PathBuf>,
    pub strategy: cli::CountStrategy,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let app_config = config::get_config();
    let text = io::read_file(&config.path)?;

    let mut report = match report::analyze_text(
        &text,
        app_config,
        convert_strategy(config.strategy),
    ) {
        Ok(report) => report,
        Err(Error::EmptyInput) => {
            anyhow::bail!(
                "{}: le texte ne contient aucun mot, impossible de calculer un score",
                config.path.display()
            )
        }
        Err(e) => return Err(e.into()),
    };
    report.source = Some(config.path.clone());

    let destination: Box<dyn Write> = match &config.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                io::ensure_dir(parent)?;
            }
            Box::new(fs::File::create(path)?)
        }
        None => Box::new(std::io::stdout()),
    };

    let mut writer = create_writer(destination, convert_output_format(config.format));
    writer.write_report(&report)
}

// Pure functions mapping CLI arguments onto library types
fn convert_strategy(strategy: cli::CountStrategy) -> Strategy {
    match strategy {
        cli::CountStrategy::Pattern => Strategy::Pattern,
        cli::CountStrategy::Scan => Strategy::Scan,
    }
}

fn convert_output_format(format: cli::OutputFormat) -> OutputFormat {
    match format {
        cli::OutputFormat::Terminal => OutputFormat::Terminal,
        cli::OutputFormat::Json => OutputFormat::Json,
        cli::OutputFormat::Markdown => OutputFormat::Markdown,
    }
}

use crate::core::{DifficultyTier, LixSummary, ReadabilityReport};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ReadabilityReport) -> anyhow::Result<()>;
}

pub fn create_writer(writer: Box<dyn Write>, format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

/// Localized tier labels; display-only, the core stays language-neutral
pub fn tier_label_fr(tier: DifficultyTier) -> &'static str {
    match tier {
        DifficultyTier::VeryEasy => "Très facile",
        DifficultyTier::Easy => "Facile",
        DifficultyTier::Intermediate => "Intermédiaire",
        DifficultyTier::Hard => "Difficile",
        DifficultyTier::VeryHard => "Très difficile",
    }
}

/// The quick flow historically labels its middle tier "Moyenne"
pub fn tier_label_fr_simple(tier: DifficultyTier) -> &'static str {
    match tier {
        DifficultyTier::Intermediate => "Moyenne",
        other => tier_label_fr(other),
    }
}

fn tier_color(tier: DifficultyTier) -> Color {
    match tier {
        DifficultyTier::VeryEasy => Color::Green,
        DifficultyTier::Easy => Color::Cyan,
        DifficultyTier::Intermediate => Color::Yellow,
        DifficultyTier::Hard => Color::Red,
        DifficultyTier::VeryHard => Color::DarkRed,
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ReadabilityReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, report: &ReadabilityReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Rapport de lisibilité")?;
        writeln!(self.writer)?;
        if let Some(source) = &report.source {
            writeln!(self.writer, "Fichier : `{}`", source.display())?;
        }
        writeln!(
            self.writer,
            "Généré : {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_statistics(&mut self, report: &ReadabilityReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Statistiques du texte")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Statistique | Valeur |")?;
        writeln!(self.writer, "|-------------|--------|")?;
        for (label, value) in statistics_rows(report) {
            writeln!(self.writer, "| {label} | {value} |")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scores(&mut self, report: &ReadabilityReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Indices de lisibilité")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Indice | Score | Difficulté |")?;
        writeln!(self.writer, "|--------|-------|------------|")?;
        for entry in &report.scores {
            writeln!(
                self.writer,
                "| {} | {:.2} | {} |",
                entry.formula,
                entry.score,
                tier_label_fr(entry.tier)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &ReadabilityReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_statistics(report)?;
        self.write_scores(report)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ReadabilityReport) -> anyhow::Result<()> {
        if let Some(source) = &report.source {
            writeln!(self.writer, "{} {}", "Fichier :".bold(), source.display())?;
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "{}", "STATISTIQUES DU TEXTE".bold())?;
        let mut stats = Table::new();
        stats
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        for (label, value) in statistics_rows(report) {
            stats.add_row(vec![Cell::new(label), Cell::new(value)]);
        }
        writeln!(self.writer, "{stats}")?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", "INDICES DE LISIBILITÉ".bold())?;
        writeln!(
            self.writer,
            "{}",
            "La plupart de ces indices ont été conçus pour l'anglais ; LIX et RIX \
             sont les plus fiables pour les textes français."
                .dimmed()
        )?;
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Indice", "Score", "Difficulté"]);
        for entry in &report.scores {
            table.add_row(vec![
                Cell::new(entry.formula.to_string()),
                Cell::new(format!("{:.2}", entry.score)),
                Cell::new(tier_label_fr(entry.tier)).fg(tier_color(entry.tier)),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

fn statistics_rows(report: &ReadabilityReport) -> Vec<(&'static str, String)> {
    let counts = &report.counts;
    let syllables = &report.syllables;
    vec![
        ("Caractères", counts.characters.to_string()),
        ("Voyelles", counts.vowels.to_string()),
        ("Digrammes", counts.digraphs.to_string()),
        ("Trigrammes", counts.trigraphs.to_string()),
        (
            "Syllabes graphiques",
            syllables.graphical_syllables.to_string(),
        ),
        ("Mots", counts.words.to_string()),
        ("Mots longs (>6 lettres)", counts.long_words.to_string()),
        (
            "Mots complexes (≥3 syllabes)",
            syllables.polysyllabic_words.to_string(),
        ),
        ("Phrases", counts.sentences.to_string()),
    ]
}

/// Render the LIX-only quick flow result, one line per figure
pub fn format_lix_summary(summary: &LixSummary) -> String {
    format!(
        "Fichier : {}\n\nNombre de mots : {}\n\nNombre de mots longs : {}\n\n\
         Nombre de phrases : {}\n\nScore LIX : {}\n\nDifficulté : {}",
        summary.file,
        summary.words,
        summary.long_words,
        summary.sentences,
        summary.score,
        tier_label_fr_simple(summary.tier)
    )
}

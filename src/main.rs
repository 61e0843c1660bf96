use anyhow::Result;
use clap::Parser;
use lisix::cli::{Cli, Commands};
use lisix::commands::analyze::AnalyzeConfig;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            strategy,
        } => lisix::commands::analyze::handle_analyze(AnalyzeConfig {
            path,
            format,
            output,
            strategy,
        }),
        Commands::Lix { path } => lisix::commands::lix::handle_lix(&path),
        Commands::Init { force } => lisix::commands::init::init_config(force),
    }
}

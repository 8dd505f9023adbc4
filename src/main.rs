use clap::Parser;
use std::path::PathBuf;

use wikt_importer::config::Config;
use wikt_importer::importer;
use wikt_importer::logging::init_logging;

#[derive(Parser)]
#[command(name = "wikt-importer")]
#[command(about = "Imports a line-delimited Wiktionary JSON dump into SQLite")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the line-delimited JSON dump file
    #[arg(default_value = "kaikki.org-dictionary-English-words.jsonl")]
    dump_file: PathBuf,

    /// Path for the output SQLite database file
    #[arg(default_value = "wiktionary.db")]
    db_file: PathBuf,

    /// Entries per write transaction (overrides importer.toml)
    #[arg(long)]
    batch_size: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    init_logging();

    let mut config = Config::load()?;
    if let Some(batch_size) = cli.batch_size {
        config.batch_size = batch_size;
    }

    let summary = importer::run_import(&cli.dump_file, &cli.db_file, &config)?;

    println!(
        "Import complete: {} entries written to {} ({} bad lines, {} rejected, {} failed writes)",
        summary.imported,
        cli.db_file.display(),
        summary.bad_lines,
        summary.rejected,
        summary.failed
    );
    Ok(())
}

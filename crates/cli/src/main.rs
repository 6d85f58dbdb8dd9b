use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use theater_cli::{OutputFormat, load_catalog, load_invoices, render_all};

#[derive(Debug, Parser)]
#[command(name = "theater", version, about = "Billing statements for theatrical performances")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a statement for every invoice in a file
    Statement {
        /// Plays catalog (JSON object keyed by play id)
        #[arg(long, env = "THEATER_PLAYS")]
        plays: PathBuf,
        /// Invoices (JSON array, or a single invoice object)
        #[arg(long, env = "THEATER_INVOICES")]
        invoices: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    theater_observability::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Statement {
            plays,
            invoices,
            format,
        } => {
            let catalog = load_catalog(&plays)?;
            let invoices = load_invoices(&invoices)?;
            let output = render_all(&invoices, &catalog, format)?;

            tracing::info!(statements = invoices.len(), "rendered statements");

            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|()| stdout.flush())
                .context("writing statements to stdout")?;
        }
    }
    Ok(())
}

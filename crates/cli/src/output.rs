use anyhow::{Context, Result};
use clap::ValueEnum;

use theater_invoicing::Invoice;
use theater_plays::Catalog;
use theater_statement::{Statement, render_plain_text};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text statements, one after another
    #[default]
    Text,
    /// JSON array of priced statements (amounts in cents)
    Json,
}

/// Price every invoice, then format them all.
///
/// Nothing is returned unless every invoice prices cleanly.
pub fn render_all(invoices: &[Invoice], catalog: &Catalog, format: OutputFormat) -> Result<String> {
    let statements = invoices
        .iter()
        .map(|invoice| {
            Statement::build(invoice, catalog)
                .with_context(|| format!("pricing invoice for {}", invoice.customer()))
        })
        .collect::<Result<Vec<_>>>()?;

    match format {
        OutputFormat::Text => Ok(statements.iter().map(render_plain_text).collect()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&statements).context("encoding statements")?;
            json.push('\n');
            Ok(json)
        }
    }
}

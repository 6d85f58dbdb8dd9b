use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use theater_invoicing::Invoice;
use theater_plays::Catalog;

/// An invoices file holds either a list of invoices or a single one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InvoicesFile {
    Many(Vec<Invoice>),
    One(Invoice),
}

pub fn parse_catalog(json: &str) -> Result<Catalog> {
    serde_json::from_str(json).context("decoding plays json")
}

pub fn parse_invoices(json: &str) -> Result<Vec<Invoice>> {
    let file: InvoicesFile = serde_json::from_str(json).context("decoding invoices json")?;
    Ok(match file {
        InvoicesFile::Many(invoices) => invoices,
        InvoicesFile::One(invoice) => vec![invoice],
    })
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading plays from {}", path.display()))?;
    let catalog = parse_catalog(&json).with_context(|| format!("in {}", path.display()))?;
    if catalog.is_empty() {
        tracing::warn!(path = %path.display(), "plays catalog is empty");
    }
    tracing::debug!(path = %path.display(), plays = catalog.len(), "loaded catalog");
    Ok(catalog)
}

pub fn load_invoices(path: &Path) -> Result<Vec<Invoice>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading invoices from {}", path.display()))?;
    let invoices = parse_invoices(&json).with_context(|| format!("in {}", path.display()))?;
    tracing::debug!(path = %path.display(), invoices = invoices.len(), "loaded invoices");
    Ok(invoices)
}

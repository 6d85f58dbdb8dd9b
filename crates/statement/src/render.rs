//! Plain-text rendering.

use std::fmt::Write as _;

use theater_core::BillingResult;
use theater_invoicing::Invoice;
use theater_plays::Catalog;

use crate::statement::Statement;

/// Line terminator of the host platform.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// Line terminator of the host platform.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Render the billing statement for `invoice`.
///
/// Fails with `UnknownPlay` or `UnknownPlayType`; on failure no text is produced.
pub fn render(invoice: &Invoice, catalog: &Catalog) -> BillingResult<String> {
    let statement = Statement::build(invoice, catalog)?;
    Ok(render_plain_text(&statement))
}

/// Format an already priced statement.
pub fn render_plain_text(statement: &Statement) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write!(out, "Statement for {}{LINE_SEPARATOR}", statement.customer);
    for line in &statement.lines {
        let _ = write!(
            out,
            "  {}: {} ({} seats){LINE_SEPARATOR}",
            line.play_name, line.amount, line.audience
        );
    }
    let _ = write!(out, "Amount owed is {}{LINE_SEPARATOR}", statement.total_amount);
    let _ = write!(out, "You earned {} credits{LINE_SEPARATOR}", statement.total_credits);
    out
}

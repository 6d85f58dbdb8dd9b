//! Statement renderer.
//!
//! Resolves each performance of an invoice against the catalog, prices it,
//! accumulates totals and formats the result as a plain-text statement.
//! Rendering is all-or-nothing: any error yields no text at all.

pub mod render;
pub mod statement;

pub use render::{LINE_SEPARATOR, render, render_plain_text};
pub use statement::{Statement, StatementLine, total_amount, total_volume_credits};

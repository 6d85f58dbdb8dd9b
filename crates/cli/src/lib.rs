//! Command-line adapter: load invoices and plays from JSON, print statements.
//!
//! All file and console IO lives here; the billing crates stay pure.

pub mod input;
pub mod output;

pub use input::{load_catalog, load_invoices, parse_catalog, parse_invoices};
pub use output::{OutputFormat, render_all};

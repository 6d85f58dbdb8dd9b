//! Invoicing domain module.
//!
//! Invoices are immutable records built by the caller: a customer plus the
//! performances billed to them, in billing order. Pure data, no IO.

pub mod invoice;

pub use invoice::{Invoice, Performance};

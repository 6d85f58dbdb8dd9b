//! Pricing engine.
//!
//! Pure functions from (audience, genre) to the amount owed and the volume
//! credits earned for one performance. Exact integer arithmetic in cents.

pub mod engine;
pub mod rates;

pub use engine::{PerformanceCharge, compute_amount, compute_volume_credits, price_performance};

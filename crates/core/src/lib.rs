//! `theater-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the billing crates
//! (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use error::{BillingError, BillingResult};
pub use id::PlayId;
pub use money::Cents;
pub use value_object::ValueObject;

//! Domain error model.

use thiserror::Error;

use crate::id::PlayId;

/// Result type used across the billing crates.
pub type BillingResult<T> = Result<T, BillingError>;

/// Billing error.
///
/// These are data errors in the caller's input, never transient conditions.
/// A failing operation produces no partial output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BillingError {
    /// The play's genre has no pricing rule.
    #[error("unknown type: {0}")]
    UnknownPlayType(String),

    /// A performance references a play id absent from the catalog.
    #[error("unknown play: {0}")]
    UnknownPlay(PlayId),

    /// The total amount no longer fits in `u64` cents.
    #[error("amount overflow")]
    AmountOverflow,

    /// The total volume credits no longer fit in `u64`.
    #[error("volume credits overflow")]
    CreditsOverflow,
}

impl BillingError {
    pub fn unknown_play_type(genre: impl Into<String>) -> Self {
        Self::UnknownPlayType(genre.into())
    }

    pub fn unknown_play(id: impl Into<PlayId>) -> Self {
        Self::UnknownPlay(id.into())
    }
}

//! Money in minor currency units.
//!
//! Amounts are kept as integer cents end to end; the only place they are turned
//! into dollars is the US-currency `Display` impl below.

use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

const CENTS_PER_DOLLAR: u64 = 100;

/// An amount of US currency in cents.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(u64);

impl ValueObject for Cents {}

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub const fn new(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }

    pub fn checked_add(self, other: Cents) -> Option<Cents> {
        self.0.checked_add(other.0).map(Cents)
    }

    /// Sum of all amounts, or `None` if the total overflows.
    pub fn checked_sum<I>(amounts: I) -> Option<Cents>
    where
        I: IntoIterator<Item = Cents>,
    {
        amounts
            .into_iter()
            .try_fold(Cents::ZERO, |acc, amount| acc.checked_add(amount))
    }
}

impl From<u64> for Cents {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Cents> for u64 {
    fn from(value: Cents) -> Self {
        value.0
    }
}

/// US-locale currency: `$`, comma thousands separators, two decimals.
impl core::fmt::Display for Cents {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let dollars = (self.0 / CENTS_PER_DOLLAR).to_formatted_string(&Locale::en);
        let fraction = self.0 % CENTS_PER_DOLLAR;
        write!(f, "${dollars}.{fraction:02}")
    }
}

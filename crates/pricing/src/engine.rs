use serde::{Deserialize, Serialize};

use theater_core::{BillingError, BillingResult, Cents, ValueObject};
use theater_invoicing::Performance;
use theater_plays::{Genre, Play};

use crate::rates::{
    COMEDY_AUDIENCE_THRESHOLD, COMEDY_BASE_AMOUNT, COMEDY_CREDIT_DIVISOR, COMEDY_OVER_THRESHOLD_AMOUNT,
    COMEDY_PER_EXTRA_SEAT, COMEDY_PER_SEAT, TRAGEDY_AUDIENCE_THRESHOLD, TRAGEDY_BASE_AMOUNT,
    TRAGEDY_PER_EXTRA_SEAT, VOLUME_CREDIT_THRESHOLD,
};

/// Amount and credits for one performance.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceCharge {
    pub amount: Cents,
    pub credits: u64,
}

impl ValueObject for PerformanceCharge {}

/// Amount owed for a performance of the given genre.
///
/// Fails with `UnknownPlayType` for genres without a pricing rule.
pub fn compute_amount(audience: u32, genre: &Genre) -> BillingResult<Cents> {
    let seats = u64::from(audience);
    let amount = match genre {
        Genre::Tragedy => {
            let mut amount = TRAGEDY_BASE_AMOUNT;
            if audience > TRAGEDY_AUDIENCE_THRESHOLD {
                amount += u64::from(audience - TRAGEDY_AUDIENCE_THRESHOLD) * TRAGEDY_PER_EXTRA_SEAT;
            }
            amount
        }
        Genre::Comedy => {
            let mut amount = COMEDY_BASE_AMOUNT;
            if audience > COMEDY_AUDIENCE_THRESHOLD {
                amount += COMEDY_OVER_THRESHOLD_AMOUNT
                    + u64::from(audience - COMEDY_AUDIENCE_THRESHOLD) * COMEDY_PER_EXTRA_SEAT;
            }
            amount + COMEDY_PER_SEAT * seats
        }
        Genre::Unrecognized(other) => {
            return Err(BillingError::unknown_play_type(other.as_str()));
        }
    };
    Ok(Cents::new(amount))
}

/// Volume credits earned for a performance.
///
/// Unlike `compute_amount` this never fails: an unrecognized genre earns the
/// base credits only, same as a tragedy.
pub fn compute_volume_credits(audience: u32, genre: &Genre) -> u64 {
    let mut credits = u64::from(audience.saturating_sub(VOLUME_CREDIT_THRESHOLD));
    if *genre == Genre::Comedy {
        credits += u64::from(audience / COMEDY_CREDIT_DIVISOR);
    }
    credits
}

/// Price a performance of `play`.
pub fn price_performance(performance: &Performance, play: &Play) -> BillingResult<PerformanceCharge> {
    Ok(PerformanceCharge {
        amount: compute_amount(performance.audience, &play.genre)?,
        credits: compute_volume_credits(performance.audience, &play.genre),
    })
}

//! Pricing constants. Amounts are in cents.

// tragedy
pub const TRAGEDY_BASE_AMOUNT: u64 = 40_000;
pub const TRAGEDY_AUDIENCE_THRESHOLD: u32 = 30;
pub const TRAGEDY_PER_EXTRA_SEAT: u64 = 1_000;

// comedy
pub const COMEDY_BASE_AMOUNT: u64 = 30_000;
pub const COMEDY_AUDIENCE_THRESHOLD: u32 = 20;
pub const COMEDY_OVER_THRESHOLD_AMOUNT: u64 = 10_000;
pub const COMEDY_PER_EXTRA_SEAT: u64 = 500;
pub const COMEDY_PER_SEAT: u64 = 300;

// volume credits
pub const VOLUME_CREDIT_THRESHOLD: u32 = 30;
pub const COMEDY_CREDIT_DIVISOR: u32 = 5;

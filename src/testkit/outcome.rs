//! Builders for position fixtures used across tests.
//!
//! Concise factory functions for [`Outcome`] variants so tests focus on
//! assertions rather than construction boilerplate.

use rust_decimal::Decimal;

use crate::domain::{Outcome, StakeMode};

/// A plain back outcome.
pub fn back(odd: Decimal) -> Outcome {
    Outcome::back(odd)
}

/// A back outcome with a promotional boost percentage.
pub fn boosted(odd: Decimal, boost: Decimal) -> Outcome {
    Outcome::builder().raw_odd(odd).boost_percent(boost).build()
}

/// A freebet back outcome.
pub fn freebet(odd: Decimal) -> Outcome {
    Outcome::builder().raw_odd(odd).freebet(true).build()
}

/// A lay outcome with the given commission percentage.
pub fn lay(odd: Decimal, commission: Decimal) -> Outcome {
    Outcome::builder().raw_odd(odd).lay(commission).build()
}

/// A back outcome whose stake is pinned.
pub fn anchored(odd: Decimal, stake: Decimal) -> Outcome {
    Outcome::builder()
        .raw_odd(odd)
        .stake_mode(StakeMode::FixedAnchor(stake))
        .build()
}

/// A back outcome with a hand-entered stake.
pub fn manual(odd: Decimal, stake: Decimal) -> Outcome {
    Outcome::builder()
        .raw_odd(odd)
        .stake_mode(StakeMode::ManualOverride(stake))
        .build()
}

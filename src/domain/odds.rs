//! Odds normalization: boost application and lay-to-back conversion.
//!
//! Lay odds take part in probability arithmetic through their back-bet
//! equivalent (`odd / (odd - 1)`), while stake, liability, and settlement
//! formulas keep using the lay odd itself. [`normalize`] produces both
//! views for one outcome.

use rust_decimal::Decimal;

use super::money::Odd;
use super::outcome::{BetKind, Outcome};
use crate::numeric::ratio;

/// Final and back-equivalent odds for one outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedOdds {
    /// Boosted odd as quoted by the counterparty.
    pub final_odd: Odd,
    /// Odd driving implied-probability arithmetic: equals `final_odd`
    /// for back bets, the back-bet equivalent for lay bets.
    pub effective_odd: Odd,
}

/// Convert a lay odd to its back-bet equivalent.
///
/// A lay odd at or below 1 carries no usable probability and maps to zero.
pub fn lay_to_back(final_odd: Odd) -> Odd {
    if final_odd <= Decimal::ONE {
        return Decimal::ZERO;
    }
    ratio(final_odd, final_odd - Decimal::ONE)
}

/// Compute the final and effective odds for an outcome.
pub fn normalize(outcome: &Outcome) -> NormalizedOdds {
    let final_odd = outcome.final_odd();
    let effective_odd = match outcome.kind() {
        BetKind::Lay { .. } => lay_to_back(final_odd),
        BetKind::Back => final_odd,
    };

    NormalizedOdds {
        final_odd,
        effective_odd,
    }
}

/// Implied probability contributed by one outcome.
///
/// The sum of contributions across a position, times 100, is the
/// arbitrage percentage; under 100 the position locks in a profit.
pub fn implied_probability(outcome: &Outcome) -> Decimal {
    let odds = normalize(outcome);

    match outcome.kind() {
        BetKind::Lay { commission } => {
            // Commission shrinks what a winning lay actually returns.
            let kept = Decimal::ONE - commission / Decimal::ONE_HUNDRED;
            ratio(Decimal::ONE, odds.effective_odd * kept)
        }
        BetKind::Back if outcome.is_freebet() => {
            // Freebets never return the stake, so only odd - 1 pays.
            if odds.effective_odd > Decimal::ONE {
                ratio(Decimal::ONE, odds.effective_odd - Decimal::ONE)
            } else {
                Decimal::ONE
            }
        }
        BetKind::Back => ratio(Decimal::ONE, odds.effective_odd),
    }
}

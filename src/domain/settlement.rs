//! Stake distribution and per-scenario settlement.
//!
//! Given a position (one [`Outcome`] per counterparty), the solver picks a
//! distribution strategy, computes the capital tied up by each leg, and
//! settles every mutually exclusive winning scenario into one immutable
//! [`ArbitrageResult`]. The computation is pure: identical inputs always
//! produce identical results, and nothing is carried between calls.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::Stake;
use super::odds::{implied_probability, normalize};
use super::outcome::{BetKind, Outcome, StakeMode};
use crate::numeric::{ratio, round2};

/// Solver parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct SolverConfig {
    /// Nominal investment targeted by the automatic distribution mode.
    #[serde(default = "default_target_investment")]
    pub target_investment: Decimal,
}

fn default_target_investment() -> Decimal {
    Decimal::ONE_HUNDRED
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            target_investment: default_target_investment(),
        }
    }
}

/// Result of one settlement computation.
///
/// `distributed_stakes` and `returns` are ordered like the input
/// outcomes; `returns` holds the net profit realized if that outcome
/// wins. All monetary and percentage fields are rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArbitrageResult {
    /// Sum of implied probabilities times 100.
    pub arbitrage_percentage: Decimal,
    /// Whether the position locks in a profit regardless of the winner.
    pub is_arbitrage: bool,
    /// Capital tied up: stakes for back and freebet legs, liability for
    /// lay legs.
    pub total_investment: Decimal,
    /// Stake placed on each outcome, in input order.
    pub distributed_stakes: Vec<Stake>,
    /// Net profit if the matching outcome wins, in input order.
    pub returns: Vec<Decimal>,
    /// Worst-case net profit across all scenarios.
    pub profit: Decimal,
    /// Profit over total investment, as a percentage.
    pub profit_percentage: Decimal,
}

impl ArbitrageResult {
    /// The neutral result returned when the position is not computable.
    pub fn zero() -> Self {
        Self {
            arbitrage_percentage: Decimal::ZERO,
            is_arbitrage: false,
            total_investment: Decimal::ZERO,
            distributed_stakes: Vec::new(),
            returns: Vec::new(),
            profit: Decimal::ZERO,
            profit_percentage: Decimal::ZERO,
        }
    }
}

/// Solve a position with default parameters.
pub fn settle(outcomes: &[Outcome]) -> ArbitrageResult {
    solve(outcomes, &SolverConfig::default())
}

/// Solve a position: implied probabilities, stake distribution, and
/// per-scenario settlement.
///
/// Any outcome without a usable odd (zero or negative, or a lay odd at or
/// below 1) collapses the whole computation to [`ArbitrageResult::zero`].
pub fn solve(outcomes: &[Outcome], config: &SolverConfig) -> ArbitrageResult {
    if outcomes.is_empty() {
        return ArbitrageResult::zero();
    }

    let usable = outcomes
        .iter()
        .all(|outcome| normalize(outcome).effective_odd > Decimal::ZERO);
    if !usable {
        return ArbitrageResult::zero();
    }

    let probabilities: Vec<Decimal> = outcomes.iter().map(implied_probability).collect();
    let overround: Decimal = probabilities.iter().copied().sum::<Decimal>() * Decimal::ONE_HUNDRED;
    let is_arbitrage = overround < Decimal::ONE_HUNDRED;

    let stakes = distribute(outcomes, &probabilities, config);
    let total_investment = round2(total_outlay(outcomes, &stakes));

    let returns: Vec<Decimal> = outcomes
        .iter()
        .zip(&stakes)
        .map(|(outcome, stake)| round2(scenario_payout(outcome, *stake) - total_investment))
        .collect();

    let profit = round2(returns.iter().copied().min().unwrap_or(Decimal::ZERO));
    let profit_percentage = if total_investment > Decimal::ZERO {
        round2(ratio(profit, total_investment) * Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    };

    ArbitrageResult {
        arbitrage_percentage: round2(overround),
        is_arbitrage,
        total_investment,
        distributed_stakes: stakes,
        returns,
        profit,
        profit_percentage,
    }
}

/// Capital tied up by one leg: the stake for back and freebet bets, the
/// liability for lay bets.
pub fn leg_investment(outcome: &Outcome, stake: Stake) -> Decimal {
    match outcome.kind() {
        BetKind::Lay { .. } => stake * (outcome.final_odd() - Decimal::ONE),
        BetKind::Back => stake,
    }
}

/// Per-leg capital split for a whole position, rounded to two decimals.
pub fn leg_investments(outcomes: &[Outcome], stakes: &[Stake]) -> Vec<Decimal> {
    outcomes
        .iter()
        .zip(stakes)
        .map(|(outcome, stake)| round2(leg_investment(outcome, *stake)))
        .collect()
}

/// Pick a distribution strategy, first match wins: anchor, manual-only,
/// fully automatic.
fn distribute(outcomes: &[Outcome], probabilities: &[Decimal], config: &SolverConfig) -> Vec<Stake> {
    let anchor = outcomes.iter().enumerate().find_map(|(index, outcome)| {
        match outcome.stake_mode() {
            StakeMode::FixedAnchor(stake) => Some((index, stake)),
            _ => None,
        }
    });

    if let Some((index, stake)) = anchor {
        return distribute_anchored(outcomes, index, stake);
    }

    let has_manual = outcomes
        .iter()
        .any(|outcome| matches!(outcome.stake_mode(), StakeMode::ManualOverride(_)));
    if has_manual {
        // Non-overridden outcomes keep stake zero in this mode.
        return outcomes
            .iter()
            .map(|outcome| match outcome.stake_mode() {
                StakeMode::ManualOverride(amount) => round2(amount),
                _ => Decimal::ZERO,
            })
            .collect();
    }

    distribute_proportional(outcomes, probabilities, config.target_investment)
}

/// Total return when the given outcome wins with the given stake; the
/// figure every other leg is solved to match.
fn anchor_target_return(outcome: &Outcome, stake: Stake) -> Decimal {
    let final_odd = outcome.final_odd();
    match outcome.kind() {
        BetKind::Lay { commission } => {
            // Stake returned net of commission, plus the liability kept.
            let liability = stake * (final_odd - Decimal::ONE);
            stake * (Decimal::ONE - commission / Decimal::ONE_HUNDRED) + liability
        }
        BetKind::Back if outcome.is_freebet() => stake * (final_odd - Decimal::ONE),
        BetKind::Back => stake * final_odd,
    }
}

/// Stake that makes this outcome's winning scenario return `target`.
fn equalizing_stake(outcome: &Outcome, target: Decimal) -> Stake {
    let final_odd = outcome.final_odd();
    match outcome.kind() {
        BetKind::Lay { commission } => {
            let denominator = final_odd - commission / Decimal::ONE_HUNDRED;
            if denominator > Decimal::ZERO {
                ratio(target, denominator)
            } else {
                Decimal::ZERO
            }
        }
        BetKind::Back if outcome.is_freebet() => {
            if final_odd > Decimal::ONE {
                ratio(target, final_odd - Decimal::ONE)
            } else {
                Decimal::ZERO
            }
        }
        BetKind::Back => ratio(target, final_odd),
    }
}

/// Anchor mode: pin one stake, solve every other leg to the same total
/// return. Manual overrides still win over the solved figure.
fn distribute_anchored(outcomes: &[Outcome], anchor: usize, anchor_stake: Stake) -> Vec<Stake> {
    if anchor_stake <= Decimal::ZERO {
        return vec![Decimal::ZERO; outcomes.len()];
    }

    let target = anchor_target_return(&outcomes[anchor], anchor_stake);

    outcomes
        .iter()
        .enumerate()
        .map(|(index, outcome)| {
            if index == anchor {
                return round2(anchor_stake);
            }
            if let StakeMode::ManualOverride(amount) = outcome.stake_mode() {
                return round2(amount);
            }
            round2(equalizing_stake(outcome, target))
        })
        .collect()
}

/// Automatic mode: stakes proportional to implied probabilities, rescaled
/// so the realized outlay (lay legs tie up liability, not stake) lands
/// exactly on the target.
fn distribute_proportional(
    outcomes: &[Outcome],
    probabilities: &[Decimal],
    target: Decimal,
) -> Vec<Stake> {
    let total: Decimal = probabilities.iter().copied().sum();
    if total <= Decimal::ZERO {
        return vec![Decimal::ZERO; outcomes.len()];
    }

    let initial: Vec<Decimal> = probabilities
        .iter()
        .map(|probability| ratio(target * *probability, total))
        .collect();

    let outlay = total_outlay(outcomes, &initial);
    if outlay <= Decimal::ZERO {
        return vec![Decimal::ZERO; outcomes.len()];
    }

    let scale = ratio(target, outlay);
    initial
        .into_iter()
        .map(|stake| round2(stake * scale))
        .collect()
}

fn total_outlay(outcomes: &[Outcome], stakes: &[Stake]) -> Decimal {
    outcomes
        .iter()
        .zip(stakes)
        .map(|(outcome, stake)| leg_investment(outcome, *stake))
        .sum()
}

/// Payout of one leg winning alone; every other leg pays nothing because
/// event outcomes are mutually exclusive.
fn scenario_payout(outcome: &Outcome, stake: Stake) -> Decimal {
    let final_odd = outcome.final_odd();
    match outcome.kind() {
        BetKind::Lay { commission } => {
            // Stake kept, liability not paid, commission charged on the
            // kept stake.
            let liability = stake * (final_odd - Decimal::ONE);
            stake + liability - stake * commission / Decimal::ONE_HUNDRED
        }
        BetKind::Back if outcome.is_freebet() => stake * (final_odd - Decimal::ONE),
        BetKind::Back => stake * final_odd,
    }
}

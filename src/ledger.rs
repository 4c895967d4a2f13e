//! Flattened ledger records for the history collaborator.
//!
//! The engine does not store anything; it only flattens a computation
//! into one [`LedgerEntry`] that a history view can display or persist.
//! Manual entries cover operations settled outside the calculator, where
//! only the realized profit is known.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{leg_investment, ArbitrageResult, Outcome};
use crate::numeric::{ratio, round2};

/// One saved computation, flattened for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub operation: String,
    pub recorded_at: DateTime<Utc>,
    pub arbitrage_percentage: Decimal,
    pub profit: Decimal,
    pub profit_percentage: Decimal,
    pub total_investment: Decimal,
    pub is_arbitrage: bool,
    pub manual_entry: bool,
    pub legs: Vec<LedgerLeg>,
}

/// Per-outcome detail of a saved computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerLeg {
    pub raw_odd: Decimal,
    pub final_odd: Decimal,
    pub stake: Decimal,
    /// Capital tied up by the leg: the stake, or the liability for lays.
    pub investment: Decimal,
    pub lay: bool,
    pub freebet: bool,
    pub commission: Decimal,
    /// Net profit if this leg wins.
    pub expected_return: Decimal,
}

impl LedgerEntry {
    /// Flatten a computed position into a ledger record.
    pub fn from_computation(
        operation: impl Into<String>,
        recorded_at: DateTime<Utc>,
        outcomes: &[Outcome],
        result: &ArbitrageResult,
    ) -> Self {
        let legs = outcomes
            .iter()
            .enumerate()
            .map(|(index, outcome)| {
                let stake = result
                    .distributed_stakes
                    .get(index)
                    .copied()
                    .unwrap_or_default();

                LedgerLeg {
                    raw_odd: outcome.raw_odd(),
                    final_odd: outcome.final_odd(),
                    stake,
                    investment: round2(leg_investment(outcome, stake)),
                    lay: outcome.is_lay(),
                    freebet: outcome.is_freebet(),
                    commission: outcome.commission(),
                    expected_return: result.returns.get(index).copied().unwrap_or_default(),
                }
            })
            .collect();

        Self {
            operation: operation.into(),
            recorded_at,
            arbitrage_percentage: result.arbitrage_percentage,
            profit: result.profit,
            profit_percentage: result.profit_percentage,
            total_investment: result.total_investment,
            is_arbitrage: result.is_arbitrage,
            manual_entry: false,
            legs,
        }
    }

    /// Record an operation settled outside the calculator.
    ///
    /// When the investment is not supplied it is estimated as ten times
    /// the absolute profit (or 100 for a break-even entry) so the ROI
    /// column stays meaningful.
    pub fn manual(
        operation: impl Into<String>,
        recorded_at: DateTime<Utc>,
        profit: Decimal,
        investment: Option<Decimal>,
    ) -> Self {
        let investment = investment.unwrap_or_else(|| {
            if profit.is_zero() {
                Decimal::ONE_HUNDRED
            } else {
                profit.abs() * Decimal::TEN
            }
        });
        let profit_percentage = if investment > Decimal::ZERO {
            round2(ratio(profit, investment) * Decimal::ONE_HUNDRED)
        } else {
            Decimal::ZERO
        };

        Self {
            operation: operation.into(),
            recorded_at,
            arbitrage_percentage: Decimal::ZERO,
            profit: round2(profit),
            profit_percentage,
            total_investment: round2(investment),
            is_arbitrage: false,
            manual_entry: true,
            legs: Vec::new(),
        }
    }
}

/// Aggregate view over a batch of ledger entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub operations: usize,
    pub total_profit: Decimal,
    pub average_profit: Decimal,
    pub average_roi: Decimal,
    pub profitable: usize,
    pub losing: usize,
}

impl LedgerSummary {
    pub fn from_entries(entries: &[LedgerEntry]) -> Self {
        let operations = entries.len();
        let total_profit: Decimal = entries.iter().map(|entry| entry.profit).sum();
        let count = Decimal::from(operations as u64);

        let (average_profit, average_roi) = if operations > 0 {
            let total_roi: Decimal = entries.iter().map(|entry| entry.profit_percentage).sum();
            (round2(ratio(total_profit, count)), round2(ratio(total_roi, count)))
        } else {
            (Decimal::ZERO, Decimal::ZERO)
        };

        Self {
            operations,
            total_profit: round2(total_profit),
            average_profit,
            average_roi,
            profitable: entries
                .iter()
                .filter(|entry| entry.profit > Decimal::ZERO)
                .count(),
            losing: entries
                .iter()
                .filter(|entry| entry.profit < Decimal::ZERO)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settle;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn when() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 9, 0, 0).unwrap()
    }

    #[test]
    fn from_computation_copies_result_fields() {
        let outcomes = vec![Outcome::back(dec!(2.10)), Outcome::back(dec!(2.05))];
        let result = settle(&outcomes);
        let entry = LedgerEntry::from_computation("derby", when(), &outcomes, &result);

        assert_eq!(entry.operation, "derby");
        assert_eq!(entry.arbitrage_percentage, result.arbitrage_percentage);
        assert_eq!(entry.profit, result.profit);
        assert_eq!(entry.total_investment, result.total_investment);
        assert!(!entry.manual_entry);
        assert_eq!(entry.legs.len(), 2);
        assert_eq!(entry.legs[0].stake, result.distributed_stakes[0]);
        assert_eq!(entry.legs[0].expected_return, result.returns[0]);
    }

    #[test]
    fn lay_legs_report_liability_as_investment() {
        let outcomes = vec![
            Outcome::back(dec!(2.00)),
            Outcome::builder()
                .raw_odd(dec!(3.00))
                .lay(dec!(4.5))
                .stake_mode(crate::domain::StakeMode::ManualOverride(dec!(50)))
                .build(),
        ];
        let result = settle(&outcomes);
        let entry = LedgerEntry::from_computation("cup tie", when(), &outcomes, &result);

        assert!(entry.legs[1].lay);
        assert_eq!(entry.legs[1].stake, dec!(50.00));
        assert_eq!(entry.legs[1].investment, dec!(100.00));
    }

    #[test]
    fn manual_entry_estimates_missing_investment() {
        let entry = LedgerEntry::manual("cashout", when(), dec!(50), None);

        assert!(entry.manual_entry);
        assert_eq!(entry.total_investment, dec!(500.00));
        assert_eq!(entry.profit_percentage, dec!(10.00));
        assert!(entry.legs.is_empty());
    }

    #[test]
    fn manual_entry_with_zero_profit_defaults_to_hundred() {
        let entry = LedgerEntry::manual("scratch", when(), Decimal::ZERO, None);

        assert_eq!(entry.total_investment, dec!(100));
        assert_eq!(entry.profit_percentage, dec!(0));
    }

    #[test]
    fn manual_entry_uses_supplied_investment() {
        let entry = LedgerEntry::manual("promo", when(), dec!(-25), Some(dec!(200)));

        assert_eq!(entry.profit_percentage, dec!(-12.50));
    }

    #[test]
    fn summary_aggregates_profit_and_counts() {
        let entries = vec![
            LedgerEntry::manual("a", when(), dec!(50), Some(dec!(100))),
            LedgerEntry::manual("b", when(), dec!(-10), Some(dec!(100))),
            LedgerEntry::manual("c", when(), dec!(20), Some(dec!(200))),
        ];
        let summary = LedgerSummary::from_entries(&entries);

        assert_eq!(summary.operations, 3);
        assert_eq!(summary.total_profit, dec!(60.00));
        assert_eq!(summary.average_profit, dec!(20.00));
        assert_eq!(summary.profitable, 2);
        assert_eq!(summary.losing, 1);
        // ROIs are 50, -10, 10.
        assert_eq!(summary.average_roi, dec!(16.67));
    }

    #[test]
    fn summary_of_empty_ledger_is_all_zero() {
        let summary = LedgerSummary::from_entries(&[]);

        assert_eq!(summary.operations, 0);
        assert_eq!(summary.total_profit, Decimal::ZERO);
        assert_eq!(summary.average_profit, Decimal::ZERO);
    }
}

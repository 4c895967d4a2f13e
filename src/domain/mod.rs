//! Engine domain: outcome model, odds normalization, stake distribution,
//! and settlement.

mod money;
mod odds;
mod outcome;
mod settlement;

// Core domain types
pub use money::{Odd, Stake};
pub use outcome::{BetKind, Outcome, OutcomeBuilder, StakeMode};

// Odds normalizer
pub use odds::{implied_probability, lay_to_back, normalize, NormalizedOdds};

// Stake/settlement solver
pub use settlement::{
    leg_investment, leg_investments, settle, solve, ArbitrageResult, SolverConfig,
};

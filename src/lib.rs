//! Surestake - stake distribution and settlement for hedged betting positions.
//!
//! This crate computes how to split money across multiple simultaneous
//! bets on the same event so the outcome is financially hedged: whether
//! the position is a guaranteed-profit arbitrage, how much to stake on
//! each outcome, and the profit or loss for every possible winner.
//!
//! # Modules
//!
//! - [`domain`] - The engine: outcome model, odds normalization, stake
//!   distribution strategies, per-scenario settlement
//! - [`numeric`] - Safe parsing, money rounding, guarded division
//! - [`share`] - Reversible URL-safe tokens reconstructing a position
//! - [`ledger`] - Flattened records for the history collaborator
//! - [`config`] - Configuration loading from TOML files
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line interface
//!
//! The engine is pure and stateless: each call reads its input snapshot
//! and produces a fresh, immutable result record. Re-invocation on edits
//! is the caller's responsibility.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use surestake::domain::{settle, Outcome};
//!
//! let outcomes = vec![Outcome::back(dec!(2.10)), Outcome::back(dec!(2.05))];
//! let result = settle(&outcomes);
//!
//! assert!(result.is_arbitrage);
//! assert_eq!(result.arbitrage_percentage, dec!(96.40));
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod numeric;
pub mod share;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

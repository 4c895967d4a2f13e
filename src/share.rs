//! Share tokens: reversible text encoding of a whole position.
//!
//! A snapshot of the outcome list plus the headline result fields is
//! serialized as JSON, packed with base64, then percent-escaped so it can
//! ride in a `?shared=` query parameter and rebuild the same position on
//! the other end.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{ArbitrageResult, Outcome, StakeMode};
use crate::error::ShareError;

/// Everything needed to reconstruct a position from a link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareSnapshot {
    pub outcomes: Vec<SharedOutcome>,
    pub results: SharedResults,
    pub timestamp: DateTime<Utc>,
    pub outcome_count: usize,
}

/// Wire form of one outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedOutcome {
    pub odd: Decimal,
    #[serde(default)]
    pub boost: Decimal,
    #[serde(default)]
    pub freebet: bool,
    #[serde(default)]
    pub lay: bool,
    #[serde(default)]
    pub commission: Decimal,
    #[serde(default)]
    pub fixed_stake: Option<Decimal>,
    #[serde(default)]
    pub manual_stake: Option<Decimal>,
}

/// Headline result fields carried alongside the outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedResults {
    pub arbitrage_percentage: Decimal,
    pub profit: Decimal,
    pub profit_percentage: Decimal,
    pub total_investment: Decimal,
    pub is_arbitrage: bool,
}

impl SharedOutcome {
    pub fn from_outcome(outcome: &Outcome) -> Self {
        let (fixed_stake, manual_stake) = match outcome.stake_mode() {
            StakeMode::Computed => (None, None),
            StakeMode::FixedAnchor(stake) => (Some(stake), None),
            StakeMode::ManualOverride(stake) => (None, Some(stake)),
        };

        Self {
            odd: outcome.raw_odd(),
            boost: outcome.boost_percent(),
            freebet: outcome.is_freebet(),
            lay: outcome.is_lay(),
            commission: outcome.commission(),
            fixed_stake,
            manual_stake,
        }
    }

    pub fn to_outcome(&self) -> Outcome {
        let stake_mode = if let Some(stake) = self.fixed_stake {
            StakeMode::FixedAnchor(stake)
        } else if let Some(stake) = self.manual_stake {
            StakeMode::ManualOverride(stake)
        } else {
            StakeMode::Computed
        };

        let builder = Outcome::builder()
            .raw_odd(self.odd)
            .boost_percent(self.boost)
            .freebet(self.freebet)
            .stake_mode(stake_mode);

        if self.lay {
            builder.lay(self.commission).build()
        } else {
            builder.build()
        }
    }
}

impl ShareSnapshot {
    /// Capture a snapshot of a position and its computed result.
    pub fn capture(
        outcomes: &[Outcome],
        result: &ArbitrageResult,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            outcomes: outcomes.iter().map(SharedOutcome::from_outcome).collect(),
            results: SharedResults {
                arbitrage_percentage: result.arbitrage_percentage,
                profit: result.profit,
                profit_percentage: result.profit_percentage,
                total_investment: result.total_investment,
                is_arbitrage: result.is_arbitrage,
            },
            timestamp,
            outcome_count: outcomes.len(),
        }
    }

    /// Rebuild the outcome list carried by the snapshot.
    pub fn rebuild_outcomes(&self) -> Vec<Outcome> {
        self.outcomes.iter().map(SharedOutcome::to_outcome).collect()
    }

    /// Encode the snapshot as a URL-safe token.
    pub fn encode(&self) -> std::result::Result<String, ShareError> {
        let json = serde_json::to_string(self)?;
        let packed = STANDARD.encode(json.as_bytes());
        Ok(urlencoding::encode(&packed).into_owned())
    }

    /// Decode a token produced by [`encode`](Self::encode).
    pub fn decode(token: &str) -> std::result::Result<Self, ShareError> {
        let unescaped = urlencoding::decode(token)?;
        let bytes = STANDARD.decode(unescaped.as_bytes())?;
        let json = String::from_utf8(bytes)?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// Build the full share URL for a token.
pub fn share_url(base: &str, token: &str) -> String {
    format!("{base}?shared={token}")
}

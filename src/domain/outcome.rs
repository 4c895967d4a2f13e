//! Wagering outcome model with builder construction.
//!
//! One [`Outcome`] describes the bet offered by a single counterparty:
//! the quoted odd, an optional promotional boost, whether the bet is a
//! back or a lay (with its commission rate), whether the stake is a
//! freebet, and how the stake amount is determined.

use rust_decimal::Decimal;

use super::money::Odd;

/// Which side of the wager an outcome takes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BetKind {
    /// Plain back bet: pays `stake * odd` on a win.
    Back,
    /// Lay bet: receives the matched stake if the backer loses, owes
    /// `stake * (odd - 1)` if the backer wins. `commission` is the
    /// percentage rate charged on net winnings.
    Lay {
        /// Commission percentage, e.g. `4.5` for 4.5%.
        commission: Decimal,
    },
}

/// How the stake for an outcome is determined.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StakeMode {
    /// Solved by the engine.
    #[default]
    Computed,
    /// Pinned by the user; every other outcome is solved to equalize
    /// payout against it. At most one outcome per position.
    FixedAnchor(Decimal),
    /// Entered by hand; used verbatim, never solved.
    ManualOverride(Decimal),
}

/// The bet offered by one counterparty.
///
/// Use [`Outcome::builder()`] to construct instances. The final odd is
/// always derived from the raw odd and boost, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    raw_odd: Decimal,
    boost_percent: Decimal,
    kind: BetKind,
    freebet: bool,
    stake_mode: StakeMode,
}

impl Outcome {
    /// Create a new builder for constructing an Outcome.
    pub fn builder() -> OutcomeBuilder {
        OutcomeBuilder::new()
    }

    /// A plain back outcome with no boost and an engine-computed stake.
    pub fn back(raw_odd: Decimal) -> Self {
        Self::builder().raw_odd(raw_odd).build()
    }

    /// Get the raw odd as entered.
    pub fn raw_odd(&self) -> Decimal {
        self.raw_odd
    }

    /// Get the promotional boost percentage.
    pub fn boost_percent(&self) -> Decimal {
        self.boost_percent
    }

    /// Get the bet kind.
    pub fn kind(&self) -> BetKind {
        self.kind
    }

    /// Whether this outcome is a lay bet.
    pub fn is_lay(&self) -> bool {
        matches!(self.kind, BetKind::Lay { .. })
    }

    /// Commission percentage charged on this outcome's winnings.
    /// Zero for back bets.
    pub fn commission(&self) -> Decimal {
        match self.kind {
            BetKind::Lay { commission } => commission,
            BetKind::Back => Decimal::ZERO,
        }
    }

    /// Whether the stake is a freebet. The flag is only meaningful for
    /// back bets; the engine ignores it on lay outcomes.
    pub fn is_freebet(&self) -> bool {
        self.freebet
    }

    /// Get the stake mode.
    pub fn stake_mode(&self) -> StakeMode {
        self.stake_mode
    }

    /// The odd after the promotional boost, or zero when no usable odd
    /// has been entered.
    pub fn final_odd(&self) -> Odd {
        if self.raw_odd <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.raw_odd * (Decimal::ONE + self.boost_percent / Decimal::ONE_HUNDRED)
    }
}

/// Builder for constructing [`Outcome`] instances.
///
/// Every field has a usable default (`raw_odd` 0 = "not yet entered",
/// back bet, no boost, computed stake), so `build` never fails.
#[derive(Debug, Default)]
pub struct OutcomeBuilder {
    raw_odd: Decimal,
    boost_percent: Decimal,
    kind: Option<BetKind>,
    freebet: bool,
    stake_mode: StakeMode,
}

impl OutcomeBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw odd.
    pub fn raw_odd(mut self, raw_odd: Decimal) -> Self {
        self.raw_odd = raw_odd;
        self
    }

    /// Set the promotional boost percentage.
    pub fn boost_percent(mut self, boost_percent: Decimal) -> Self {
        self.boost_percent = boost_percent;
        self
    }

    /// Set the bet kind.
    pub fn kind(mut self, kind: BetKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Mark the outcome as a lay bet with the given commission percentage.
    pub fn lay(mut self, commission: Decimal) -> Self {
        self.kind = Some(BetKind::Lay { commission });
        self
    }

    /// Mark the stake as a freebet.
    pub fn freebet(mut self, freebet: bool) -> Self {
        self.freebet = freebet;
        self
    }

    /// Set the stake mode.
    pub fn stake_mode(mut self, stake_mode: StakeMode) -> Self {
        self.stake_mode = stake_mode;
        self
    }

    /// Build the Outcome.
    pub fn build(self) -> Outcome {
        Outcome {
            raw_odd: self.raw_odd,
            boost_percent: self.boost_percent,
            kind: self.kind.unwrap_or(BetKind::Back),
            freebet: self.freebet,
            stake_mode: self.stake_mode,
        }
    }
}

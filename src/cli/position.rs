//! Position files: the TOML input listing one outcome per counterparty.
//!
//! ```toml
//! [[outcome]]
//! odd = 2.10
//!
//! [[outcome]]
//! odd = 2.00
//! lay = true
//! commission = 4.5
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::path::Path;

use crate::domain::{Outcome, StakeMode};
use crate::error::PositionFileError;

/// One `[[outcome]]` table of a position file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutcomeSpec {
    /// Decimal odd as quoted by the counterparty.
    pub odd: Decimal,

    /// Promotional boost percentage applied to the odd.
    #[serde(default)]
    pub boost: Decimal,

    /// Whether the stake is a freebet.
    #[serde(default)]
    pub freebet: bool,

    /// Whether this is a lay bet.
    #[serde(default)]
    pub lay: bool,

    /// Commission percentage charged on lay winnings.
    #[serde(default = "default_commission")]
    pub commission: Decimal,

    /// Pin this outcome's stake; all others are solved against it.
    pub fixed_stake: Option<Decimal>,

    /// Stake entered by hand; used verbatim, never solved.
    pub manual_stake: Option<Decimal>,
}

fn default_commission() -> Decimal {
    dec!(4.5)
}

impl OutcomeSpec {
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

/// A parsed position file.
#[derive(Debug, Deserialize)]
pub struct PositionFile {
    #[serde(rename = "outcome")]
    pub outcomes: Vec<OutcomeSpec>,
}

impl PositionFile {
    pub fn load<P: AsRef<Path>>(path: P) -> std::result::Result<Self, PositionFileError> {
        let content = std::fs::read_to_string(path).map_err(PositionFileError::ReadFile)?;

        let file: Self = toml::from_str(&content).map_err(PositionFileError::Parse)?;

        file.validate()?;

        Ok(file)
    }

    fn validate(&self) -> std::result::Result<(), PositionFileError> {
        if self.outcomes.is_empty() {
            return Err(PositionFileError::Empty);
        }

        let anchors = self
            .outcomes
            .iter()
            .filter(|spec| spec.fixed_stake.is_some())
            .count();
        if anchors > 1 {
            return Err(PositionFileError::MultipleAnchors { count: anchors });
        }

        Ok(())
    }

    /// Convert the file into engine outcomes, in declaration order.
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.outcomes.iter().map(OutcomeSpec::to_outcome).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BetKind;

    #[test]
    fn parses_minimal_position() {
        let file: PositionFile = toml::from_str(
            r#"
            [[outcome]]
            odd = 2.10

            [[outcome]]
            odd = 2.05
            "#,
        )
        .unwrap();
        file.validate().unwrap();

        let outcomes = file.outcomes();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].raw_odd(), dec!(2.10));
        assert_eq!(outcomes[0].kind(), BetKind::Back);
        assert_eq!(outcomes[0].stake_mode(), StakeMode::Computed);
    }

    #[test]
    fn lay_outcome_defaults_commission() {
        let file: PositionFile = toml::from_str(
            r#"
            [[outcome]]
            odd = 2.00
            lay = true
            "#,
        )
        .unwrap();

        let outcomes = file.outcomes();
        assert_eq!(outcomes[0].kind(), BetKind::Lay { commission: dec!(4.5) });
    }

    #[test]
    fn fixed_stake_wins_over_manual_stake() {
        let file: PositionFile = toml::from_str(
            r#"
            [[outcome]]
            odd = 2.00
            fixed_stake = 100
            manual_stake = 50
            "#,
        )
        .unwrap();

        let outcomes = file.outcomes();
        assert_eq!(outcomes[0].stake_mode(), StakeMode::FixedAnchor(dec!(100)));
    }

    #[test]
    fn rejects_empty_file() {
        let file: PositionFile = toml::from_str("outcome = []").unwrap();

        assert!(matches!(file.validate(), Err(PositionFileError::Empty)));
    }

    #[test]
    fn rejects_two_anchors() {
        let file: PositionFile = toml::from_str(
            r#"
            [[outcome]]
            odd = 2.00
            fixed_stake = 100

            [[outcome]]
            odd = 2.00
            fixed_stake = 50
            "#,
        )
        .unwrap();

        assert!(matches!(
            file.validate(),
            Err(PositionFileError::MultipleAnchors { count: 2 })
        ));
    }

    #[test]
    fn rejects_unknown_fields() {
        let parsed: std::result::Result<PositionFile, _> = toml::from_str(
            r#"
            [[outcome]]
            odd = 2.00
            commision = 5.0
            "#,
        );

        assert!(parsed.is_err());
    }
}

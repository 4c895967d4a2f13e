//! Monetary and odds scalar types.

use rust_decimal::Decimal;

/// Decimal odd as quoted by a counterparty.
pub type Odd = Decimal;

/// Amount of money placed on an outcome.
pub type Stake = Decimal;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn odd_and_stake_are_decimal() {
        let odd: Odd = dec!(2.10);
        let stake: Stake = dec!(50.00);

        assert_eq!(odd * stake, dec!(105.00));
    }
}

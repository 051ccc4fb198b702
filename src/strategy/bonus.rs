//! Reference bonus policy
//!
//! Rank-based share of profit. Rules are checked in this order and the first
//! match wins:
//!
//! | rank            | share |
//! |-----------------|-------|
//! | 0 (first)       | 15%   |
//! | total - 1 (last)| 0%    |
//! | 1 or 2          | 10%   |
//! | anything else   | 5%    |
//!
//! A lone seller is both first and last and receives 15%. The last place
//! receives nothing even when it is rank 1 or 2.

use crate::types::SellerAccumulator;
use rust_decimal::Decimal;

/// Share of profit awarded at `rank` among `total` sellers
pub fn bonus_rate(rank: usize, total: usize) -> Decimal {
    match rank {
        0 => Decimal::new(15, 2),
        r if r + 1 == total => Decimal::ZERO,
        1 | 2 => Decimal::new(10, 2),
        _ => Decimal::new(5, 2),
    }
}

/// Bonus amount: the seller's profit times its rank share
pub fn calculate_bonus_by_profit(rank: usize, total: usize, seller: &SellerAccumulator) -> Decimal {
    seller.profit * bonus_rate(rank, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Seller;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::single_seller_first_wins(0, 1, dec!(0.15))]
    #[case::first_of_many(0, 10, dec!(0.15))]
    #[case::second(1, 10, dec!(0.10))]
    #[case::third(2, 10, dec!(0.10))]
    #[case::middle(3, 10, dec!(0.05))]
    #[case::second_to_last(8, 10, dec!(0.05))]
    #[case::last(9, 10, dec!(0))]
    #[case::last_of_two(1, 2, dec!(0))]
    #[case::last_of_three(2, 3, dec!(0))]
    #[case::third_of_four(2, 4, dec!(0.10))]
    fn test_bonus_rate(#[case] rank: usize, #[case] total: usize, #[case] expected: Decimal) {
        assert_eq!(bonus_rate(rank, total), expected);
    }

    #[test]
    fn test_bonus_amount_scales_profit() {
        let mut seller = SellerAccumulator::new(&Seller {
            id: "seller_1".to_string(),
            first_name: "Anna".to_string(),
            last_name: "Ivanova".to_string(),
        });
        seller.profit = dec!(50);

        assert_eq!(calculate_bonus_by_profit(0, 1, &seller), dec!(7.5));
        assert_eq!(calculate_bonus_by_profit(1, 5, &seller), dec!(5));
        assert_eq!(calculate_bonus_by_profit(3, 5, &seller), dec!(2.5));
        assert_eq!(calculate_bonus_by_profit(4, 5, &seller), dec!(0));
    }
}

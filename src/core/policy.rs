//! Bonus and top-product policy
//!
//! Walks the profit-ranked sellers with their zero-based rank, asks the bonus
//! strategy for each seller's bonus and derives the seller's best-selling
//! products.

use crate::strategy::BonusStrategy;
use crate::types::{SellerAccumulator, SoldProducts, TopProduct};
use rust_decimal::Decimal;

/// Maximum number of products listed per seller
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// A ranked seller with its policy-derived fields
#[derive(Debug, Clone, PartialEq)]
pub struct AwardedSeller {
    pub stats: SellerAccumulator,
    pub bonus: Decimal,
    pub top_products: Vec<TopProduct>,
}

/// Apply the bonus strategy and top-product selection to ranked sellers
///
/// `ranked` must already be in profit-descending order: the position in the
/// slice is the rank passed to the bonus strategy.
pub fn apply_policies(
    ranked: Vec<SellerAccumulator>,
    bonus: &dyn BonusStrategy,
) -> Vec<AwardedSeller> {
    let total = ranked.len();

    ranked
        .into_iter()
        .enumerate()
        .map(|(rank, stats)| {
            let bonus = bonus.calculate_bonus(rank, total, &stats);
            let top_products = top_products(&stats.products_sold, TOP_PRODUCTS_LIMIT);
            AwardedSeller {
                stats,
                bonus,
                top_products,
            }
        })
        .collect()
}

/// Best-selling products, quantity descending, at most `limit` entries
///
/// Equal quantities keep first-sale order (`sort_by` is stable).
pub fn top_products(sold: &SoldProducts, limit: usize) -> Vec<TopProduct> {
    let mut products: Vec<TopProduct> = sold
        .iter()
        .map(|(sku, quantity)| TopProduct {
            sku: sku.to_string(),
            quantity,
        })
        .collect();

    products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    products.truncate(limit);
    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::calculate_bonus_by_profit;
    use crate::types::Seller;
    use rust_decimal_macros::dec;

    fn acc(id: &str, profit: Decimal) -> SellerAccumulator {
        let mut acc = SellerAccumulator::new(&Seller {
            id: id.to_string(),
            first_name: id.to_string(),
            last_name: id.to_string(),
        });
        acc.profit = profit;
        acc
    }

    fn skus(products: &[TopProduct]) -> Vec<&str> {
        products.iter().map(|p| p.sku.as_str()).collect()
    }

    #[test]
    fn test_bonus_strategy_receives_rank_and_total() {
        let ranked = vec![acc("a", dec!(3)), acc("b", dec!(2)), acc("c", dec!(1))];
        let echo = |rank: usize, total: usize, _: &SellerAccumulator| {
            Decimal::from(rank * 100 + total)
        };

        let awarded = apply_policies(ranked, &echo);
        let bonuses: Vec<Decimal> = awarded.iter().map(|a| a.bonus).collect();
        assert_eq!(bonuses, vec![dec!(3), dec!(103), dec!(203)]);
    }

    #[test]
    fn test_reference_bonus_policy_over_ranks() {
        let ranked = vec![
            acc("a", dec!(1000)),
            acc("b", dec!(500)),
            acc("c", dec!(400)),
            acc("d", dec!(300)),
            acc("e", dec!(200)),
        ];

        let awarded = apply_policies(ranked, &calculate_bonus_by_profit);
        let bonuses: Vec<Decimal> = awarded.iter().map(|a| a.bonus).collect();
        assert_eq!(
            bonuses,
            vec![dec!(150), dec!(50), dec!(40), dec!(15), dec!(0)]
        );
    }

    #[test]
    fn test_single_seller_gets_first_place_bonus() {
        let awarded = apply_policies(vec![acc("a", dec!(50))], &calculate_bonus_by_profit);
        assert_eq!(awarded[0].bonus, dec!(7.5));
    }

    #[test]
    fn test_tied_profits_get_rank_bonuses() {
        let ranked = vec![acc("a", dec!(300)), acc("b", dec!(300)), acc("x", dec!(100))];

        let awarded = apply_policies(ranked, &calculate_bonus_by_profit);
        let bonuses: Vec<Decimal> = awarded.iter().map(|a| a.bonus).collect();
        assert_eq!(bonuses, vec![dec!(45), dec!(30), dec!(0)]);
    }

    #[test]
    fn test_top_products_sorted_by_quantity() {
        let mut sold = SoldProducts::default();
        sold.add("P1", 2);
        sold.add("P2", 7);
        sold.add("P3", 4);

        let top = top_products(&sold, TOP_PRODUCTS_LIMIT);
        assert_eq!(skus(&top), vec!["P2", "P3", "P1"]);
        assert_eq!(top[0].quantity, 7);
    }

    #[test]
    fn test_top_products_ties_keep_first_sale_order() {
        let mut sold = SoldProducts::default();
        sold.add("B", 3);
        sold.add("A", 3);
        sold.add("C", 5);
        sold.add("D", 3);

        let top = top_products(&sold, TOP_PRODUCTS_LIMIT);
        assert_eq!(skus(&top), vec!["C", "B", "A", "D"]);
    }

    #[test]
    fn test_top_products_truncated_to_limit() {
        let mut sold = SoldProducts::default();
        for n in 0..12u64 {
            sold.add(&format!("SKU_{:02}", n), n + 1);
        }

        let top = top_products(&sold, TOP_PRODUCTS_LIMIT);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].sku, "SKU_11");
        assert_eq!(top[9].sku, "SKU_02");
    }

    #[test]
    fn test_top_products_empty_when_nothing_sold() {
        let top = top_products(&SoldProducts::default(), TOP_PRODUCTS_LIMIT);
        assert!(top.is_empty());
    }
}

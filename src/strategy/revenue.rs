//! Reference revenue policy

use crate::types::Item;
use rust_decimal::Decimal;

/// Revenue of a line: sale price times quantity, less the percentage discount
///
/// `sale_price * quantity * (1 - discount / 100)`
///
/// Returns None when the result does not fit in a `Decimal`.
pub fn calculate_simple_revenue(item: &Item) -> Option<Decimal> {
    let discount = Decimal::ONE.checked_sub(item.discount.checked_div(Decimal::ONE_HUNDRED)?)?;
    item.sale_price
        .checked_mul(Decimal::from(item.quantity))?
        .checked_mul(discount)
}

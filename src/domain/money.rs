//! Monetary types for price and quantity representation.

use rust_decimal::Decimal;

/// Price represented as a Decimal for precision.
///
/// Prices are compared directly; no currency conversion happens anywhere.
pub type Price = Decimal;

/// Number of shares in an order.
pub type Quantity = u32;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn decimal_prices_compare_exactly() {
        let threshold: Price = dec!(200.0);
        let below: Price = dec!(199.9);

        assert!(below < threshold);
        assert!(dec!(200.00) >= threshold);
    }
}

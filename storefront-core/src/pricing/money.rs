//! Money calculation utilities using rust_decimal for precision
//!
//! Prices travel as `f64` on the wire. All arithmetic is done on `Decimal`
//! and only rounded when converted back for display or storage.

use rust_decimal::prelude::*;

use super::PricingError;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price or surcharge per item (1,000,000)
pub const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per line
pub const MAX_QUANTITY: i32 = 9999;
/// Maximum number of lines in one order
pub const MAX_ORDER_LINES: usize = 1000;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Round to 2 decimal places, midpoint away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// Validate a monetary input: finite, non-negative, not above [`MAX_PRICE`]
pub fn require_amount(value: f64, field: &'static str) -> Result<Decimal, PricingError> {
    if !value.is_finite() {
        return Err(PricingError::NonFinite { field, value });
    }
    if value < 0.0 {
        return Err(PricingError::Negative { field, value });
    }
    if value > MAX_PRICE {
        return Err(PricingError::TooLarge {
            field,
            value,
            max: MAX_PRICE,
        });
    }
    Ok(to_decimal(value))
}

/// Validate a line quantity: positive and not above [`MAX_QUANTITY`]
pub fn require_quantity(quantity: i32) -> Result<Decimal, PricingError> {
    if quantity <= 0 {
        return Err(PricingError::NonPositiveQuantity(quantity));
    }
    if quantity > MAX_QUANTITY {
        return Err(PricingError::QuantityTooLarge {
            quantity,
            max: MAX_QUANTITY,
        });
    }
    Ok(Decimal::from(quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let sum_f64 = 0.1_f64 + 0.2_f64;
        assert_ne!(sum_f64, 0.3);

        let sum_dec = to_decimal(0.1) + to_decimal(0.2);
        assert_eq!(to_f64(sum_dec), 0.3);
    }

    #[test]
    fn test_accumulation_precision() {
        let mut total = Decimal::ZERO;
        for _ in 0..1000 {
            total += to_decimal(0.01);
        }
        assert_eq!(to_f64(total), 10.0);
    }

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(Decimal::new(1005, 3)), Decimal::new(101, 2));
        assert_eq!(round_money(Decimal::new(1004, 3)), Decimal::new(100, 2));
    }

    #[test]
    fn test_require_amount() {
        assert_eq!(require_amount(12.5, "price").unwrap(), Decimal::new(125, 1));
        assert_eq!(require_amount(0.0, "price").unwrap(), Decimal::ZERO);
        assert!(matches!(
            require_amount(-0.01, "price"),
            Err(PricingError::Negative { field: "price", .. })
        ));
        assert!(matches!(
            require_amount(f64::NAN, "price"),
            Err(PricingError::NonFinite { .. })
        ));
        assert!(matches!(
            require_amount(f64::INFINITY, "price"),
            Err(PricingError::NonFinite { .. })
        ));
        assert!(matches!(
            require_amount(MAX_PRICE + 1.0, "price"),
            Err(PricingError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_require_quantity() {
        assert_eq!(require_quantity(3).unwrap(), Decimal::from(3));
        assert_eq!(
            require_quantity(0),
            Err(PricingError::NonPositiveQuantity(0))
        );
        assert_eq!(
            require_quantity(-2),
            Err(PricingError::NonPositiveQuantity(-2))
        );
        assert!(matches!(
            require_quantity(MAX_QUANTITY + 1),
            Err(PricingError::QuantityTooLarge { .. })
        ));
    }
}

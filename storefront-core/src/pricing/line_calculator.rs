//! Line Item Price Calculator
//!
//! `line_total = (base_price + Σ variant prices + Σ add-on prices) * quantity`
//!
//! Uses rust_decimal for precision. No rounding is applied here; callers
//! round once when presenting totals (see [`super::round_money`]).

use rust_decimal::Decimal;
use shared::models::{OrderLineItem, PriceModifier};

use super::PricingError;
use super::money::{require_amount, require_quantity};

/// Sum of surcharges, a missing price counts as zero
fn modifier_total(
    modifiers: &[PriceModifier],
    field: &'static str,
) -> Result<Decimal, PricingError> {
    modifiers.iter().try_fold(Decimal::ZERO, |acc, modifier| {
        Ok(acc + require_amount(modifier.surcharge(), field)?)
    })
}

/// Price of a single unit: base price plus every selected surcharge
pub fn calculate_unit_price(
    base_price: f64,
    variants: &[PriceModifier],
    addons: &[PriceModifier],
) -> Result<Decimal, PricingError> {
    let base = require_amount(base_price, "base_price")?;
    let variant_total = modifier_total(variants, "variant price")?;
    let addon_total = modifier_total(addons, "addon price")?;

    Ok(base + variant_total + addon_total)
}

/// Calculate the total charge for one order line
///
/// # Errors
/// - quantity <= 0 or above the per-line maximum
/// - a negative, non-finite or oversized base price or surcharge
pub fn calculate_line_total(
    base_price: f64,
    quantity: i32,
    variants: &[PriceModifier],
    addons: &[PriceModifier],
) -> Result<Decimal, PricingError> {
    let quantity = require_quantity(quantity)?;
    let unit = calculate_unit_price(base_price, variants, addons)?;

    Ok(unit * quantity)
}

/// [`calculate_line_total`] for an assembled line item
pub fn calculate_item_total(item: &OrderLineItem) -> Result<Decimal, PricingError> {
    calculate_line_total(item.base_price, item.quantity, &item.variants, &item.addons)
}

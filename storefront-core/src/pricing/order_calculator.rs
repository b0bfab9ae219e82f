//! Order Price Calculator
//!
//! Prices every line of a cart and sums the exact line totals. Rounding
//! happens once, on the presented amounts.

use rust_decimal::Decimal;
use serde::Serialize;
use shared::error::{AppError, ErrorCode};
use shared::models::OrderLineItem;
use thiserror::Error;

use super::PricingError;
use super::line_calculator::{calculate_item_total, calculate_unit_price};
use super::money::{MAX_ORDER_LINES, to_f64};

/// Priced line of an order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineQuote {
    /// Position of the line in the submitted cart
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_item_id: Option<String>,
    pub unit_price: f64,
    pub quantity: i32,
    pub line_total: f64,
}

/// Priced order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderQuote {
    pub restaurant_id: String,
    pub lines: Vec<LineQuote>,
    /// Sum of quantities
    pub item_count: i32,
    /// Sum of exact line totals, rounded to cents
    pub total: f64,
}

/// Pricing failure for an order
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderPricingError {
    #[error("order has no items")]
    Empty,

    #[error("order exceeds maximum allowed lines ({max}), got {count}")]
    TooManyLines { count: usize, max: usize },

    #[error("line {index}: {source}")]
    Line {
        index: usize,
        #[source]
        source: PricingError,
    },
}

impl From<OrderPricingError> for AppError {
    fn from(err: OrderPricingError) -> Self {
        match err {
            OrderPricingError::Empty => AppError::new(ErrorCode::EmptyOrder),
            OrderPricingError::TooManyLines { count, .. } => {
                AppError::with_message(ErrorCode::OrderTooLarge, err.to_string())
                    .with_detail("lines", count as u64)
            }
            OrderPricingError::Line { index, ref source } => {
                AppError::with_message(source.code(), err.to_string())
                    .with_detail("line", index as u64)
            }
        }
    }
}

/// Price all lines of an order
pub fn calculate_order(
    restaurant_id: &str,
    items: &[OrderLineItem],
) -> Result<OrderQuote, OrderPricingError> {
    if items.is_empty() {
        return Err(OrderPricingError::Empty);
    }
    if items.len() > MAX_ORDER_LINES {
        return Err(OrderPricingError::TooManyLines {
            count: items.len(),
            max: MAX_ORDER_LINES,
        });
    }

    let mut lines = Vec::with_capacity(items.len());
    let mut total = Decimal::ZERO;
    let mut item_count: i32 = 0;

    for (index, item) in items.iter().enumerate() {
        let line_error = |source| OrderPricingError::Line { index, source };

        let line_total = calculate_item_total(item).map_err(line_error)?;
        let unit_price =
            calculate_unit_price(item.base_price, &item.variants, &item.addons).map_err(line_error)?;

        total += line_total;
        // bounded by MAX_ORDER_LINES * MAX_QUANTITY
        item_count += item.quantity;
        lines.push(LineQuote {
            index,
            menu_item_id: item.menu_item_id.clone(),
            unit_price: to_f64(unit_price),
            quantity: item.quantity,
            line_total: to_f64(line_total),
        });
    }

    Ok(OrderQuote {
        restaurant_id: restaurant_id.to_string(),
        lines,
        item_count,
        total: to_f64(total),
    })
}

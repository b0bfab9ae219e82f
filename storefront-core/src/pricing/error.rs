use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Rejected pricing input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("quantity must be positive, got {0}")]
    NonPositiveQuantity(i32),

    #[error("quantity exceeds maximum allowed ({max}), got {quantity}")]
    QuantityTooLarge { quantity: i32, max: i32 },

    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} exceeds maximum allowed ({max}), got {value}")]
    TooLarge {
        field: &'static str,
        value: f64,
        max: f64,
    },
}

impl PricingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PricingError::NonPositiveQuantity(_) | PricingError::QuantityTooLarge { .. } => {
                ErrorCode::InvalidQuantity
            }
            PricingError::NonFinite { .. }
            | PricingError::Negative { .. }
            | PricingError::TooLarge { .. } => ErrorCode::InvalidAmount,
        }
    }
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        AppError::with_message(err.code(), err.to_string())
    }
}

//! Unified error codes
//!
//! Error codes are organized by category:
//! - 1xxx: Restaurant errors
//! - 2xxx: Order errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (the storefront and dashboard read the
/// numeric value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 1xxx: Restaurant ====================
    /// Restaurant not found
    RestaurantNotFound = 1001,
    /// Restaurant is not accepting orders
    RestaurantClosed = 1002,
    /// Opening hours are malformed
    InvalidSchedule = 1003,

    // ==================== 2xxx: Order ====================
    /// Order has no line items
    EmptyOrder = 2001,
    /// Quantity is not positive or exceeds the limit
    InvalidQuantity = 2002,
    /// Price or surcharge is negative, non-finite or too large
    InvalidAmount = 2003,
    /// Order has more lines than allowed
    OrderTooLarge = 2004,

    // ==================== 9xxx: System ====================
    /// Catalog storage could not be read
    StorageError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // Restaurant
            ErrorCode::RestaurantNotFound => "Restaurant not found",
            ErrorCode::RestaurantClosed => "Restaurant is currently closed",
            ErrorCode::InvalidSchedule => "Opening hours are invalid",

            // Order
            ErrorCode::EmptyOrder => "Order has no items",
            ErrorCode::InvalidQuantity => "Quantity is invalid",
            ErrorCode::InvalidAmount => "Amount is invalid",
            ErrorCode::OrderTooLarge => "Order has too many lines",

            // System
            ErrorCode::StorageError => "Storage error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // Restaurant
            1001 => Ok(ErrorCode::RestaurantNotFound),
            1002 => Ok(ErrorCode::RestaurantClosed),
            1003 => Ok(ErrorCode::InvalidSchedule),

            // Order
            2001 => Ok(ErrorCode::EmptyOrder),
            2002 => Ok(ErrorCode::InvalidQuantity),
            2003 => Ok(ErrorCode::InvalidAmount),
            2004 => Ok(ErrorCode::OrderTooLarge),

            // System
            9003 => Ok(ErrorCode::StorageError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::RestaurantNotFound.code(), 1001);
        assert_eq!(ErrorCode::RestaurantClosed.code(), 1002);
        assert_eq!(ErrorCode::InvalidSchedule.code(), 1003);
        assert_eq!(ErrorCode::EmptyOrder.code(), 2001);
        assert_eq!(ErrorCode::InvalidQuantity.code(), 2002);
        assert_eq!(ErrorCode::InvalidAmount.code(), 2003);
        assert_eq!(ErrorCode::OrderTooLarge.code(), 2004);
        assert_eq!(ErrorCode::StorageError.code(), 9003);
    }

    #[test]
    fn test_try_from_roundtrips_every_code() {
        let all = [
            ErrorCode::RestaurantNotFound,
            ErrorCode::RestaurantClosed,
            ErrorCode::InvalidSchedule,
            ErrorCode::EmptyOrder,
            ErrorCode::InvalidQuantity,
            ErrorCode::InvalidAmount,
            ErrorCode::OrderTooLarge,
            ErrorCode::StorageError,
        ];
        for code in all {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
        assert_eq!(ErrorCode::try_from(1004), Err(InvalidErrorCode(1004)));
        assert_eq!(ErrorCode::try_from(65535), Err(InvalidErrorCode(65535)));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::InvalidSchedule).unwrap();
        assert_eq!(json, "1003");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("2002").unwrap();
        assert_eq!(code, ErrorCode::InvalidQuantity);
        assert!(serde_json::from_str::<ErrorCode>("1234").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::RestaurantClosed.to_string(), "1002");
        assert_eq!(InvalidErrorCode(42).to_string(), "invalid error code: 42");
    }
}

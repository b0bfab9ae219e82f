//! Error type shared by the storefront services

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type shared by the backend services:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for debugging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create a restaurant not found error
    pub fn restaurant_not_found(restaurant_id: impl Into<String>) -> Self {
        let id: String = restaurant_id.into();
        Self::with_message(
            ErrorCode::RestaurantNotFound,
            format!("Restaurant {} not found", id),
        )
        .with_detail("restaurant_id", id)
    }

    /// Create a restaurant closed error
    pub fn restaurant_closed(restaurant_id: impl Into<String>) -> Self {
        let id: String = restaurant_id.into();
        Self::new(ErrorCode::RestaurantClosed).with_detail("restaurant_id", id)
    }

    /// Create an invalid schedule error for one weekday
    pub fn invalid_schedule(day: &str, msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidSchedule, msg).with_detail("day", day)
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageError, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_message() {
        let err = AppError::new(ErrorCode::EmptyOrder);
        assert_eq!(err.code, ErrorCode::EmptyOrder);
        assert_eq!(err.message, "Order has no items");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_with_detail_accumulates() {
        let err = AppError::invalid_schedule("friday", "close is not HH:MM")
            .with_detail("value", "25:00");
        let details = err.details.unwrap();
        assert_eq!(details.get("day"), Some(&Value::from("friday")));
        assert_eq!(details.get("value"), Some(&Value::from("25:00")));
    }

    #[test]
    fn test_restaurant_not_found() {
        let err = AppError::restaurant_not_found("r-42");
        assert_eq!(err.code, ErrorCode::RestaurantNotFound);
        assert_eq!(err.to_string(), "Restaurant r-42 not found");
        assert_eq!(
            err.details.unwrap().get("restaurant_id"),
            Some(&Value::from("r-42"))
        );
    }

    #[test]
    fn test_restaurant_closed_uses_default_message() {
        let err = AppError::restaurant_closed("r-1");
        assert_eq!(err.code, ErrorCode::RestaurantClosed);
        assert_eq!(err.to_string(), "Restaurant is currently closed");
    }

    #[test]
    fn test_storage_error() {
        let err = AppError::storage("catalog.json: No such file or directory");
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.details.is_none());
    }
}

//! Unified error system for the storefront platform
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 1xxx: Restaurant errors (profile, opening hours)
//! - 2xxx: Order errors (line items, pricing)
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::InvalidSchedule, "monday: open is missing")
//!     .with_detail("day", "monday");
//!
//! assert_eq!(err.code.code(), 1003);
//! assert_eq!(err.details.unwrap()["day"], "monday");
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};

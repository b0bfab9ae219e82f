//! Shared types for the storefront platform
//!
//! Wire models exchanged between the storefront, the restaurant-admin
//! dashboard and the backend, plus the unified error system.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};

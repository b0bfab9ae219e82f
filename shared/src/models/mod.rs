//! Data models
//!
//! Shared between the backend services and the storefront/dashboard (via API).

pub mod line_item;
pub mod restaurant;
pub mod schedule;

// Re-exports
pub use line_item::*;
pub use restaurant::*;
pub use schedule::*;

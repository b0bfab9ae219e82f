//! Availability Module
//!
//! Opening-hours evaluation, restaurant status and schedule validation.

mod evaluator;
mod status;
mod validation;

pub use evaluator::*;
pub use status::*;
pub use validation::*;

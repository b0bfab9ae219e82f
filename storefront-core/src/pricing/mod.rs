//! Pricing Module
//!
//! Line item and order totals. All arithmetic is done in `Decimal`.

mod error;
mod line_calculator;
mod money;
mod order_calculator;

pub use error::*;
pub use line_calculator::*;
pub use money::*;
pub use order_calculator::*;

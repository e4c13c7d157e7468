//! Progressive income-tax calculators.

pub mod brackets;
pub mod progressive;

pub use brackets::{Regime, TaxBracket};
pub use progressive::{calculate_tax, TaxInput, TaxResult};

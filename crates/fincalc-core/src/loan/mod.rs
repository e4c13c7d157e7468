//! Amortizing loan calculators (EMI / mortgage).

pub mod amortization;

pub use amortization::{calculate_amortization, AmortizationYear, LoanInput, LoanResult};

//! Compound-growth calculators: recurring contributions (SIP) and lump sums.

pub mod lumpsum;
pub mod sip;

pub use lumpsum::{calculate_lumpsum, LumpsumInput, LumpsumResult};
pub use sip::{calculate_sip, SipInput, SipResult};

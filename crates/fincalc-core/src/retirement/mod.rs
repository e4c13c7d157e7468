//! Retirement-account formulas: Social Security benefits and required
//! minimum distributions.

pub mod rmd;
pub mod social_security;

pub use rmd::{calculate_rmd, RmdInput, RmdResult};
pub use social_security::{calculate_pia, PiaInput, PiaResult, PiaSegments};

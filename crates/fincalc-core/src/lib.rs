pub mod error;
pub mod periods;
pub mod rounding;
pub mod types;

#[cfg(feature = "tax")]
pub mod tax;

#[cfg(feature = "growth")]
pub mod growth;

#[cfg(feature = "loan")]
pub mod loan;

#[cfg(feature = "planning")]
pub mod planning;

#[cfg(feature = "retirement")]
pub mod retirement;

pub use error::FinCalcError;
pub use types::*;

/// Standard result type for all fincalc operations
pub type FinCalcResult<T> = Result<T, FinCalcError>;

pub mod error;
pub mod time_value;
pub mod types;

#[cfg(feature = "amortization")]
pub mod amortization;

#[cfg(feature = "eligibility")]
pub mod eligibility;

#[cfg(feature = "income")]
pub mod income;

pub use error::MortgageError;
pub use types::*;

/// Standard result type for all mortgage-core operations
pub type MortgageResult<T> = Result<T, MortgageError>;

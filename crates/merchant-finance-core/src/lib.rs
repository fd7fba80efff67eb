pub mod error;
pub mod format;
pub mod time_value;
pub mod types;

#[cfg(feature = "schedule")]
pub mod schedule;

#[cfg(feature = "preview")]
pub mod preview;

#[cfg(feature = "response")]
pub mod response;

pub use error::FinanceError;
pub use types::*;

/// Standard result type for all merchant-finance operations
pub type FinanceResult<T> = Result<T, FinanceError>;

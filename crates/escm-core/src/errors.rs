use crate::{FloatValue, Year};
use thiserror::Error;

/// Error type for invalid inputs and configuration.
///
/// The simulation loop itself cannot fail; these errors are raised when
/// scenarios or parameters are constructed, parsed or validated.
#[derive(Error, Debug)]
pub enum EscmError {
    #[error("{0}")]
    Error(String),
    #[error("Lever {name} must be a finite number, got {value}")]
    NonFiniteLever { name: String, value: FloatValue },
    #[error("Unknown lever: {0}")]
    UnknownLever(String),
    #[error("Unknown energy source: {0}")]
    UnknownEnergySource(String),
    #[error("Invalid year range. start_year={start} must not be after end_year={end}")]
    InvalidYearRange { start: Year, end: Year },
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Could not parse input: {0}")]
    Parse(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience type for `Result<T, EscmError>`.
pub type EscmResult<T> = Result<T, EscmError>;

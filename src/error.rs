//! # Domain Errors
//!
//! Every failure the goods and transport model can report. A batch that does
//! not fit is not among them: it is a normal `false` from
//! [`Transport::load`](crate::transport::Transport::load).

use thiserror::Error;

/// Errors raised while building entities or operating a transport.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SupplyError {
    /// A field did not carry the semantic type it declares.
    ///
    /// Raised before any entity exists, so construction is all-or-nothing.
    #[error("{field} must be {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: String,
    },

    /// A transport must move, otherwise travel time is undefined.
    #[error("speed must be greater than zero, got {0}")]
    NonPositiveSpeed(f64),

    /// Travel distance was negative, NaN or infinite.
    #[error("distance must be a finite non-negative number, got {0}")]
    InvalidDistance(f64),

    /// A simulated delay does not fit in a `Duration` at the current pace.
    #[error("a delay of {0} time units is out of range")]
    DelayOutOfRange(f64),

    /// The simulation configuration could not be read.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SupplyError {
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        SupplyError::TypeMismatch {
            field: field.into(),
            expected,
            found: found.into(),
        }
    }
}

/// Convenience alias used across the domain modules.
pub type SupplyResult<T> = Result<T, SupplyError>;

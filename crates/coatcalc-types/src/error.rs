//! Error types for coatcalc input validation.

use thiserror::Error;

/// Error for a coat count outside the supported range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid coat count: '{0}'. Valid options: 1, 2, 3")]
pub struct CoatsError(pub String);

/// Error for a buffer percentage outside the supported range.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BufferError {
    /// Buffer is below zero or above the maximum.
    #[error("Buffer {value}% out of range (expected 0 to {max}%)")]
    OutOfRange {
        /// The rejected value.
        value: f64,
        /// The maximum accepted value.
        max: f64,
    },

    /// Buffer is NaN or infinite.
    #[error("Buffer must be a finite number")]
    NotFinite,

    /// Buffer text could not be parsed as a number.
    #[error("Invalid buffer percentage: '{0}'")]
    Parse(String),
}

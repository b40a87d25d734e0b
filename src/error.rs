//! Unified error types for the flow-ratio library.
//!
//! All fallible operations across the crate return [`FlowError`] as their
//! error type, ensuring a consistent error handling experience for consumers.

use thiserror::Error;

/// Errors produced by ratio, cast, and split calculations.
///
/// Arithmetic variants carry a static description of the failing operation
/// so that callers can match on the variant and still log something useful.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// A divisor was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A result exceeded the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A result fell below the representable range.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// A token amount or rate was rejected.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// A decimal precision was out of range or a decimal string had too
    /// many fractional digits.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// A scenario could not be loaded or failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, FlowError>;

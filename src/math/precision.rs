//! Precision trait for interchangeable numeric backends.
//!
//! The [`Precision`] trait abstracts over numeric types so that the flow
//! split estimate can be written once and evaluated with either exact
//! decimal fixed-point or IEEE 754 floating-point arithmetic.
//!
//! | Feature | Backend | Type |
//! |---------|---------|------|
//! | always | 18-digit decimal fixed point | [`Wad`](super::Wad) |
//! | `float` | IEEE 754 `f64` | `FloatArithmetic` |

use crate::error::FlowError;

/// Abstraction over numeric types used in flow calculations.
///
/// # Contract
///
/// - All checked arithmetic methods return [`Err`] on overflow or
///   underflow; they **never** panic.
pub trait Precision: Clone + Copy + core::fmt::Debug + PartialEq + PartialOrd {
    // -- Conversions --------------------------------------------------------

    /// Converts this value to `f64`, potentially losing precision.
    #[must_use]
    fn to_f64_lossy(&self) -> f64;

    // -- Checked arithmetic -------------------------------------------------

    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Overflow`] if the result is not representable.
    fn checked_add(&self, other: &Self) -> Result<Self, FlowError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Underflow`] if the result is not representable.
    fn checked_sub(&self, other: &Self) -> Result<Self, FlowError>;

    /// Checked multiplication.
    ///
    /// Backends that must discard digits round towards zero.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Overflow`] if the result is not representable.
    fn checked_mul(&self, other: &Self) -> Result<Self, FlowError>;
}

//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait provides the fallible operations the flow
//! split needs. They return [`Result<Self, FlowError>`](crate::error::FlowError)
//! instead of panicking on overflow or underflow. [`FlowRate`] implements it.
//!
//! # Examples
//!
//! ```
//! use flow_ratio::domain::FlowRate;
//! use flow_ratio::math::CheckedArithmetic;
//!
//! let doubled = FlowRate::new(100).safe_scale(2);
//! assert_eq!(doubled, Ok(FlowRate::new(200)));
//! ```

use crate::domain::FlowRate;
use crate::error::FlowError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, FlowError>;

    /// Checked multiplication by a plain integer factor.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Overflow`] if the result exceeds `u128`.
    fn safe_scale(&self, factor: u128) -> Result<Self, FlowError>;
}

// ---------------------------------------------------------------------------
// FlowRate
// ---------------------------------------------------------------------------

impl CheckedArithmetic for FlowRate {
    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, FlowError> {
        self.checked_sub(other)
            .ok_or(FlowError::Underflow("flow rate subtraction underflow"))
    }

    #[inline]
    fn safe_scale(&self, factor: u128) -> Result<Self, FlowError> {
        self.checked_scale(factor)
            .ok_or(FlowError::Overflow("flow rate scale overflow"))
    }
}

//! Floating-point implementation of the [`Precision`] trait.
//!
//! This module is only available when the `float` Cargo feature is enabled.
//! It provides [`FloatArithmetic`], a newtype over `f64` used to cross-check
//! the fixed-point flow split.
//!
//! # Precision characteristics
//!
//! | Aspect | Value |
//! |--------|-------|
//! | Significant digits | ~15–17 |
//! | Range | ±2^1024 |
//! | Determinism | Subject to IEEE 754 rounding |

use crate::error::FlowError;

use super::Precision;

/// IEEE 754 `f64`-backed precision type.
///
/// All checked arithmetic methods return [`Err`] when the result is
/// non-finite (`NaN` or `±∞`).
///
/// # Examples
///
/// ```
/// use flow_ratio::math::{FloatArithmetic, Precision};
///
/// let a = FloatArithmetic::new(10.0);
/// let b = FloatArithmetic::new(3.0);
/// assert!(a.checked_add(&b).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FloatArithmetic(f64);

impl FloatArithmetic {
    /// Creates a new `FloatArithmetic` from a raw `f64`.
    #[inline]
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the underlying `f64` value.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }
}

fn finite(value: f64, err: FlowError) -> Result<FloatArithmetic, FlowError> {
    if value.is_finite() {
        Ok(FloatArithmetic(value))
    } else {
        Err(err)
    }
}

impl Precision for FloatArithmetic {
    #[inline]
    fn to_f64_lossy(&self) -> f64 {
        self.0
    }

    fn checked_add(&self, other: &Self) -> Result<Self, FlowError> {
        finite(self.0 + other.0, FlowError::Overflow("float addition overflow"))
    }

    /// Subtracts. A negative result is representable in `f64` and is
    /// returned as-is; only non-finite results are errors.
    fn checked_sub(&self, other: &Self) -> Result<Self, FlowError> {
        finite(
            self.0 - other.0,
            FlowError::Underflow("float subtraction underflow"),
        )
    }

    fn checked_mul(&self, other: &Self) -> Result<Self, FlowError> {
        finite(
            self.0 * other.0,
            FlowError::Overflow("float multiplication overflow"),
        )
    }
}

//! Floating-point cross-check of the fixed-point split.
//!
//! The exact split is recomputed in `f64` at human scale (tokens per second
//! rather than raw units) so the two can be compared by eye. The float ratio
//! is an independent, hand-typed input and is never derived from the
//! reserves. Agreement is only expected when it matches the fixed-point
//! ratio.

use core::fmt;

use crate::domain::FlowRate;
use crate::error::FlowError;
use crate::math::{FloatArithmetic, Precision, Wad};

use super::{estimate_split, FlowSplit};

/// Default tolerance for [`CrossCheck::is_within`], in tokens per second.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Floating-point approximation of a [`FlowSplit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossCheck {
    step1: f64,
    step2: f64,
}

impl CrossCheck {
    /// Computes `step1 = flow * ratio` and `step2 = flow * (2 - ratio)` in
    /// `f64`, with `flow` converted from raw units to tokens per second.
    ///
    /// # Errors
    ///
    /// - [`FlowError::InvalidAmount`] if `ratio` is negative or not finite.
    /// - [`FlowError::Overflow`] if an intermediate is not finite.
    pub fn compute(flow: FlowRate, ratio: f64) -> Result<Self, FlowError> {
        if !ratio.is_finite() || ratio < 0.0 {
            return Err(FlowError::InvalidAmount(
                "cross-check ratio must be finite and non-negative",
            ));
        }
        let flow = FloatArithmetic::new(Wad::from_raw(flow.get()).to_f64_lossy());
        let (step1, step2) = estimate_split(flow, FloatArithmetic::new(ratio))?;
        Ok(Self {
            step1: step1.get(),
            step2: step2.get(),
        })
    }

    /// Approximation of the first output rate, in tokens per second.
    #[must_use]
    pub const fn step1(&self) -> f64 {
        self.step1
    }

    /// Approximation of the second output rate, in tokens per second.
    #[must_use]
    pub const fn step2(&self) -> f64 {
        self.step2
    }

    /// Absolute differences from the exact split, in tokens per second.
    #[must_use]
    pub fn deviation(&self, split: &FlowSplit) -> (f64, f64) {
        let exact1 = Wad::from_raw(split.out_rate_1().get()).to_f64_lossy();
        let exact2 = Wad::from_raw(split.out_rate_2().get()).to_f64_lossy();
        ((self.step1 - exact1).abs(), (self.step2 - exact2).abs())
    }

    /// Returns `true` if both steps are within `tolerance` of the exact split.
    #[must_use]
    pub fn is_within(&self, split: &FlowSplit, tolerance: f64) -> bool {
        let (d1, d2) = self.deviation(split);
        d1 <= tolerance && d2 <= tolerance
    }
}

impl fmt::Display for CrossCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.step1, self.step2)
    }
}

//! Reserve ratio as an 18-decimal fixed-point value.

use core::fmt;

use crate::error::FlowError;
use crate::math::Wad;

use super::{Amount, Rounding};

/// The proportion `numerator / denominator` of two reserves, scaled by 10^18.
///
/// `Ratio::ONE` means the reserves are equal. Ratios above one are valid
/// (token2 outweighs token1); the flow split rejects those that would make
/// the first output exceed the doubled input.
///
/// # Examples
///
/// ```
/// use flow_ratio::domain::{Amount, Ratio};
///
/// let r = Ratio::from_amounts(Amount::from_whole(99), Amount::from_whole(100))
///     .expect("non-zero denominator");
/// assert_eq!(r.get(), 990_000_000_000_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Ratio(u128);

impl Ratio {
    /// Zero ratio.
    pub const ZERO: Self = Self(0);

    /// `1.0`, i.e. `10^18`.
    pub const ONE: Self = Self(Wad::ONE.raw());

    /// Wraps a raw, already scaled ratio.
    pub const fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// Computes `numerator / denominator * 10^18`, rounded half-up to the
    /// nearest integer.
    ///
    /// # Errors
    ///
    /// - [`FlowError::DivisionByZero`] if `denominator` is zero.
    /// - [`FlowError::Overflow`] if the ratio exceeds `u128`.
    pub fn from_amounts(numerator: Amount, denominator: Amount) -> Result<Self, FlowError> {
        Wad::from_ratio(numerator.get(), denominator.get(), Rounding::HalfUp)
            .map(|w| Self(w.raw()))
    }

    /// Returns the raw scaled value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns the ratio as a [`Wad`] for fixed-point arithmetic.
    #[must_use]
    pub const fn as_wad(&self) -> Wad {
        Wad::from_raw(self.0)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

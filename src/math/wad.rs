//! Decimal fixed-point number with 18 fractional digits.
//!
//! [`Wad`] stores `value * 10^18` in a `u128`. Products and quotients are
//! formed in 256-bit space and rounded back with an explicit
//! [`Rounding`] mode, so no digit shifting is left to the caller.

use core::fmt;

use crate::domain::{Decimals, Rounding};
use crate::error::FlowError;

use super::wide::{to_u128, U256};
use super::{div_round_wide, Precision};

/// `10^18`, the raw representation of `1.0`.
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Unsigned decimal fixed-point value scaled by 10^18.
///
/// # Examples
///
/// ```
/// use flow_ratio::domain::Rounding;
/// use flow_ratio::math::Wad;
///
/// let r = Wad::from_ratio(99, 100, Rounding::HalfUp).expect("non-zero");
/// assert_eq!(r.raw(), 990_000_000_000_000_000);
/// assert_eq!(r.to_string(), "0.99");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Wad(u128);

impl Wad {
    /// `0.0`
    pub const ZERO: Self = Self(0);

    /// `1.0`
    pub const ONE: Self = Self(WAD);

    /// Wraps a raw value that is already scaled by 10^18.
    #[must_use]
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Returns the raw scaled value.
    #[must_use]
    pub const fn raw(&self) -> u128 {
        self.0
    }

    /// Computes `numerator / denominator` as a `Wad`, i.e.
    /// `numerator * 10^18 / denominator` rounded with `rounding`.
    ///
    /// Both operands share the same unit, so any common scale cancels.
    ///
    /// # Errors
    ///
    /// - [`FlowError::DivisionByZero`] if `denominator` is zero.
    /// - [`FlowError::Overflow`] if the quotient exceeds `u128`.
    pub fn from_ratio(
        numerator: u128,
        denominator: u128,
        rounding: Rounding,
    ) -> Result<Self, FlowError> {
        let scaled = U256::from(numerator) * U256::from(WAD);
        let q = div_round_wide(scaled, U256::from(denominator), rounding)
            .ok_or(FlowError::DivisionByZero)?;
        to_u128(q, "wad ratio exceeds u128").map(Self)
    }

    /// Multiplies and rescales with an explicit rounding mode.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Overflow`] if the product exceeds `u128`.
    pub fn mul_round(&self, other: &Self, rounding: Rounding) -> Result<Self, FlowError> {
        let product = U256::from(self.0) * U256::from(other.0);
        let q = div_round_wide(product, U256::from(WAD), rounding)
            .ok_or(FlowError::DivisionByZero)?;
        to_u128(q, "wad multiplication overflow").map(Self)
    }
}

impl fmt::Display for Wad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Decimals::WAD.format_units(self.0))
    }
}

impl Precision for Wad {
    /// Converts to `f64`. Values above 2^53 raw units lose precision.
    #[inline]
    fn to_f64_lossy(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let v = self.0 as f64 / WAD as f64;
        v
    }

    fn checked_add(&self, other: &Self) -> Result<Self, FlowError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(FlowError::Overflow("wad addition overflow"))
    }

    fn checked_sub(&self, other: &Self) -> Result<Self, FlowError> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or(FlowError::Underflow("wad subtraction underflow"))
    }

    fn checked_mul(&self, other: &Self) -> Result<Self, FlowError> {
        self.mul_round(other, Rounding::Down)
    }
}

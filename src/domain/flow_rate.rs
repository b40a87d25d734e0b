//! Token flow rate scaled by 10^18.

use core::fmt;

use crate::error::FlowError;

use super::Decimals;

/// Amount of token streamed per second, in WAD units.
///
/// Rates are non-negative by construction; the direction of a stream is not
/// modelled here.
///
/// # Examples
///
/// ```
/// use flow_ratio::domain::FlowRate;
///
/// let rate = FlowRate::parse("0.00003858").expect("valid decimal");
/// assert_eq!(rate.get(), 38_580_000_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct FlowRate(u128);

impl FlowRate {
    /// No flow.
    pub const ZERO: Self = Self(0);

    /// Creates a rate from a raw, already scaled value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Parses a human-readable per-second rate into WAD units.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Decimals::parse_units`].
    pub fn parse(s: &str) -> Result<Self, FlowError> {
        Decimals::WAD.parse_units(s).map(Self)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication by a plain integer. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_scale(&self, factor: u128) -> Option<Self> {
        match self.0.checked_mul(factor) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for FlowRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

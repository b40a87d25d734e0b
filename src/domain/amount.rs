//! Token reserve amount scaled by 10^18.

use core::fmt;

use crate::error::FlowError;

use super::Decimals;

/// A token amount in WAD units (10^18 raw units per whole token).
///
/// `Amount` does not track which token it belongs to; the two reserves of a
/// scenario are simply `token1` and `token2`. All `u128` values are valid.
///
/// # Examples
///
/// ```
/// use flow_ratio::domain::Amount;
///
/// let a = Amount::from_whole(100);
/// assert_eq!(a.get(), 100_000_000_000_000_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Amount` from a raw, already scaled `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Creates an amount from a whole number of tokens.
    ///
    /// Cannot overflow because `u64::MAX * 10^18 < u128::MAX`.
    pub const fn from_whole(tokens: u64) -> Self {
        Self(Decimals::WAD.scale_up(tokens))
    }

    /// Parses a human-readable decimal such as `"99.5"` into WAD units.
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

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

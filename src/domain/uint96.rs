//! Range-checked 96-bit unsigned value.
//!
//! Streaming protocols store per-second flow rates in 96-bit slots. A value
//! that does not fit must be reported, not silently replaced by zero, so the
//! cast returns a [`Result`] that keeps "was zero" and "did not fit" apart.

use core::fmt;

use crate::error::FlowError;

/// `2^96 - 1`
const U96_MAX: u128 = (1u128 << 96) - 1;

/// A value proven to lie in `0..=2^96 - 1`.
///
/// # Examples
///
/// ```
/// use flow_ratio::domain::Uint96;
///
/// assert!(Uint96::try_from((1u128 << 96) - 1).is_ok());
/// assert!(Uint96::try_from(1u128 << 96).is_err());
/// assert!(Uint96::try_from(-1i128).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Uint96(u128);

impl Uint96 {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// `2^96 - 1`.
    pub const MAX: Self = Self(U96_MAX);

    /// Returns the value widened to `u128`.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }
}

impl TryFrom<u128> for Uint96 {
    type Error = FlowError;

    fn try_from(value: u128) -> Result<Self, Self::Error> {
        if value > U96_MAX {
            return Err(FlowError::Overflow("value exceeds uint96 range"));
        }
        Ok(Self(value))
    }
}

impl TryFrom<i128> for Uint96 {
    type Error = FlowError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        let unsigned = u128::try_from(value)
            .map_err(|_| FlowError::Underflow("negative value cannot be cast to uint96"))?;
        Self::try_from(unsigned)
    }
}

impl From<Uint96> for u128 {
    fn from(value: Uint96) -> Self {
        value.0
    }
}

impl fmt::Display for Uint96 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bounds-checks a signed value against the unsigned 96-bit range.
///
/// | Input | Result |
/// |-------|--------|
/// | `0..=2^96-1` | `Ok` |
/// | above `2^96-1` | [`FlowError::Overflow`] |
/// | negative | [`FlowError::Underflow`] |
///
/// # Errors
///
/// See the table above.
pub fn safe_cast_to_u96(value: i128) -> Result<Uint96, FlowError> {
    Uint96::try_from(value)
}

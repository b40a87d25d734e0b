//! Explicit rounding direction for arithmetic operations.

/// Specifies how the discarded remainder of a division is treated.
///
/// All division in the library requires an explicit `Rounding` parameter
/// to prevent silent precision loss.
///
/// # Examples
///
/// ```
/// use flow_ratio::domain::Rounding;
/// use flow_ratio::math::{div_round_wide, U256};
///
/// let q = div_round_wide(U256::from(15u8), U256::from(10u8), Rounding::HalfUp);
/// assert_eq!(q, Some(U256::from(2u8)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
    /// Round to the nearest integer; exact halves round up.
    HalfUp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality() {
        assert_eq!(Rounding::HalfUp, Rounding::HalfUp);
        assert_ne!(Rounding::Up, Rounding::HalfUp);
        assert_ne!(Rounding::Down, Rounding::HalfUp);
    }
}

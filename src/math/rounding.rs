//! Rounding helpers for integer division.
//!
//! [`div_round_wide`] divides [`U256`] operands with an explicit
//! [`Rounding`] mode. It is the low-level building block used by
//! [`Wad`](super::Wad) and the ratio and split calculations.
//!
//! # Convention
//!
//! | Quantity | Mode | Rationale |
//! |----------|------|-----------|
//! | Reserve ratio | [`Rounding::HalfUp`] | Nearest 10^-18, ties up |
//! | Output flow rate | [`Rounding::Down`] | Never stream more than computed |
//!
//! # Examples
//!
//! ```
//! use flow_ratio::domain::Rounding;
//! use flow_ratio::math::{div_round_wide, U256};
//!
//! let n = U256::from(10u8);
//! let d = U256::from(3u8);
//! assert_eq!(div_round_wide(n, d, Rounding::Down), Some(U256::from(3u8)));
//! assert_eq!(div_round_wide(n, d, Rounding::Up), Some(U256::from(4u8)));
//! assert_eq!(div_round_wide(n, U256::zero(), Rounding::Down), None);
//! ```

use crate::domain::Rounding;

use super::U256;

/// Integer division of 256-bit values with explicit rounding.
///
/// - [`Rounding::Down`]: floor division (round towards zero).
/// - [`Rounding::Up`]: ceiling division.
/// - [`Rounding::HalfUp`]: nearest integer, incrementing when
///   `2 * remainder >= denominator`.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub fn div_round_wide(numerator: U256, denominator: U256, rounding: Rounding) -> Option<U256> {
    if denominator.is_zero() {
        return None;
    }
    let (q, r) = numerator.div_mod(denominator);
    let bump = match rounding {
        Rounding::Down => false,
        Rounding::Up => !r.is_zero(),
        // r < denominator, so the subtraction cannot underflow
        Rounding::HalfUp => !r.is_zero() && r >= denominator - r,
    };
    if bump {
        q.checked_add(U256::one())
    } else {
        Some(q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn div(n: u128, d: u128, mode: Rounding) -> Option<U256> {
        div_round_wide(U256::from(n), U256::from(d), mode)
    }

    fn some(v: u128) -> Option<U256> {
        Some(U256::from(v))
    }

    // -- Division by zero ---------------------------------------------------

    #[test]
    fn div_by_zero_returns_none() {
        assert_eq!(div(100, 0, Rounding::Down), None);
        assert_eq!(div(100, 0, Rounding::HalfUp), None);
        assert_eq!(div(1, 0, Rounding::Up), None);
    }

    // -- Exact division -----------------------------------------------------

    #[test]
    fn exact_division_all_modes_agree() {
        for mode in [Rounding::Down, Rounding::Up, Rounding::HalfUp] {
            assert_eq!(div(100, 10, mode), some(10));
            assert_eq!(div(0, 7, mode), some(0));
            assert_eq!(div(7, 7, mode), some(1));
        }
    }

    // -- Down / Up ----------------------------------------------------------

    #[test]
    fn remainder_down_and_up() {
        assert_eq!(div(9, 10, Rounding::Down), some(0));
        assert_eq!(div(9, 10, Rounding::Up), some(1));
        assert_eq!(div(1, u128::MAX, Rounding::Up), some(1));
    }

    #[test]
    fn max_divided_by_two() {
        let floor = u128::MAX / 2;
        assert_eq!(div(u128::MAX, 2, Rounding::Down), some(floor));
        assert_eq!(div(u128::MAX, 2, Rounding::Up), some(floor + 1));
        // MAX / 2 = floor + 0.5 exactly, ties go up
        assert_eq!(div(u128::MAX, 2, Rounding::HalfUp), some(floor + 1));
    }

    // -- HalfUp -------------------------------------------------------------

    #[test]
    fn half_up_below_half() {
        assert_eq!(div(14, 10, Rounding::HalfUp), some(1));
    }

    #[test]
    fn half_up_exact_half() {
        assert_eq!(div(15, 10, Rounding::HalfUp), some(2));
        assert_eq!(div(1, 2, Rounding::HalfUp), some(1));
    }

    #[test]
    fn half_up_above_half() {
        assert_eq!(div(16, 10, Rounding::HalfUp), some(2));
    }

    #[test]
    fn half_up_odd_denominator() {
        // 5 / 3 = 1.666.. -> 2; 4 / 3 = 1.333.. -> 1
        assert_eq!(div(5, 3, Rounding::HalfUp), some(2));
        assert_eq!(div(4, 3, Rounding::HalfUp), some(1));
    }

    // -- Full width ---------------------------------------------------------

    #[test]
    fn max_by_one() {
        assert_eq!(
            div_round_wide(U256::MAX, U256::one(), Rounding::HalfUp),
            Some(U256::MAX)
        );
    }

    #[test]
    fn numerator_beyond_u128() {
        // (u128::MAX + 1) / 2 = 2^127
        let n = U256::from(u128::MAX) + U256::one();
        assert_eq!(
            div_round_wide(n, U256::from(2u8), Rounding::Down),
            some(1u128 << 127)
        );
    }
}

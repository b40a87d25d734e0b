//! 256-bit unsigned integer for intermediate products.
//!
//! Multiplying two WAD-scaled values produces up to 36 significant decimal
//! digits before rescaling, and the ratio numerator `token * 10^18` exceeds
//! `u128` for balances above roughly 3.4 * 10^20 raw units. All such
//! products go through [`U256`] and are narrowed back with [`to_u128`].

use crate::error::FlowError;

uint::construct_uint! {
    /// 256-bit unsigned integer.
    pub struct U256(4);
}

/// Narrows a [`U256`] to `u128`.
///
/// # Errors
///
/// Returns [`FlowError::Overflow`] with `context` if the value needs more
/// than 128 bits.
pub fn to_u128(value: U256, context: &'static str) -> Result<u128, FlowError> {
    if value.bits() > 128 {
        return Err(FlowError::Overflow(context));
    }
    Ok(value.low_u128())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn narrow_in_range() {
        assert_eq!(to_u128(U256::from(u128::MAX), "x"), Ok(u128::MAX));
        assert_eq!(to_u128(U256::zero(), "x"), Ok(0));
    }

    #[test]
    fn narrow_out_of_range() {
        let big = U256::from(u128::MAX) + U256::one();
        assert_eq!(to_u128(big, "too big"), Err(FlowError::Overflow("too big")));
    }

    #[test]
    fn product_beyond_u128() {
        // 99e18 * 1e19 does not fit in u128
        let n = U256::from(99_000_000_000_000_000_000u128) * U256::exp10(19);
        assert!(n.bits() > 128);
    }
}

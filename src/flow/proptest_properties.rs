//! Property-based tests using `proptest` for ratio and split invariants.
//!
//! 1. **Nearest rounding**: `get_ratio(n, d)` is within half a unit of
//!    `n * 10^18 / d`, ties up.
//! 2. **Conservation**: `out1 + out2 == 2 * flow` for every ratio in
//!    `[0, 2 * 10^18]`.
//! 3. **Monotonicity**: a larger ratio never shrinks the first output.
//! 4. **Backend agreement**: the `Wad` estimate equals the exact split.
//! 5. **Cast boundary**: values cast to `Uint96` iff they are in range.

use proptest::prelude::*;

use crate::domain::{safe_cast_to_u96, Amount, FlowRate, Ratio};
use crate::math::{Wad, U256, WAD};

use super::{estimate_split, get_ratio, split_flow};

const MAX_FLOW: u128 = 1u128 << 100;

proptest! {
    #[test]
    fn ratio_is_nearest_half_up(n in 0u128..=u128::MAX >> 8, d in 1u128..=u128::MAX >> 8) {
        let ratio = get_ratio(Amount::new(n), Amount::new(d));
        // a quotient too large for u128 is the only possible failure
        prop_assume!(ratio.is_ok());
        let r = ratio.map_err(|e| TestCaseError::fail(e.to_string()))?;

        // |r * d - n * WAD| <= d / 2, with ties resolved upwards
        let scaled = U256::from(n) * U256::from(WAD);
        let back = U256::from(r.get()) * U256::from(d);
        let two = U256::from(2u8);
        if back >= scaled {
            prop_assert!((back - scaled) * two <= U256::from(d));
        } else {
            prop_assert!((scaled - back) * two < U256::from(d));
        }
    }

    #[test]
    fn split_conserves_doubled_flow(flow in 0u128..MAX_FLOW, ratio in 0u128..=2 * WAD) {
        let split = split_flow(FlowRate::new(flow), Ratio::new(ratio))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(
            split.out_rate_1().get() + split.out_rate_2().get(),
            2 * flow
        );
    }

    #[test]
    fn first_output_is_monotone_in_ratio(
        flow in 0u128..MAX_FLOW,
        a in 0u128..=2 * WAD,
        b in 0u128..=2 * WAD,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let s_lo = split_flow(FlowRate::new(flow), Ratio::new(lo))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let s_hi = split_flow(FlowRate::new(flow), Ratio::new(hi))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert!(s_lo.out_rate_1() <= s_hi.out_rate_1());
        prop_assert!(s_lo.out_rate_2() >= s_hi.out_rate_2());
    }

    #[test]
    fn wad_estimate_equals_split(flow in 0u128..MAX_FLOW, ratio in 0u128..=2 * WAD) {
        let split = split_flow(FlowRate::new(flow), Ratio::new(ratio))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let (s1, s2) = estimate_split(Wad::from_raw(flow), Wad::from_raw(ratio))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(s1.raw(), split.out_rate_1().get());
        prop_assert_eq!(s2.raw(), split.out_rate_2().get());
    }

    #[test]
    fn cast_accepts_exactly_the_u96_range(v in any::<i128>()) {
        let in_range = (0..1i128 << 96).contains(&v);
        prop_assert_eq!(safe_cast_to_u96(v).is_ok(), in_range);
    }
}

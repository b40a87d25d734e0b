//! Reserve ratio and doubled flow split.
//!
//! An incoming stream of rate `F` is paid out as two streams whose sum is
//! exactly `2F`. The first output takes the share given by the reserve
//! ratio `R = token2 / token1`; the second takes the remainder:
//!
//! ```text
//! out1 = floor(R * F / 10^18)
//! out2 = 2F - out1
//! ```
//!
//! Rounding `out1` down and deriving `out2` by subtraction keeps the
//! conservation law exact at the raw-unit level.

use core::fmt;

use tracing::debug;

use crate::domain::{Amount, FlowRate, Ratio, Rounding, Uint96};
use crate::error::FlowError;
use crate::math::{CheckedArithmetic, Precision, Wad};

/// Computes the reserve ratio `numerator / denominator` scaled by 10^18,
/// rounded half-up.
///
/// # Errors
///
/// - [`FlowError::DivisionByZero`] if `denominator` is zero.
/// - [`FlowError::Overflow`] if the ratio does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use flow_ratio::domain::Amount;
/// use flow_ratio::flow::get_ratio;
///
/// let r = get_ratio(Amount::from_whole(99), Amount::from_whole(100)).expect("ok");
/// assert_eq!(r.get(), 990_000_000_000_000_000);
/// ```
pub fn get_ratio(numerator: Amount, denominator: Amount) -> Result<Ratio, FlowError> {
    let ratio = Ratio::from_amounts(numerator, denominator)?;
    debug!(%numerator, %denominator, %ratio, "computed reserve ratio");
    Ok(ratio)
}

/// Result of splitting a doubled flow rate by a reserve ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowSplit {
    input: FlowRate,
    ratio: Ratio,
    out_rate_1: FlowRate,
    out_rate_2: FlowRate,
}

impl FlowSplit {
    /// The base flow rate that was split.
    #[must_use]
    pub const fn input(&self) -> FlowRate {
        self.input
    }

    /// The ratio the split was computed with.
    #[must_use]
    pub const fn ratio(&self) -> Ratio {
        self.ratio
    }

    /// The ratio-weighted share of the doubled flow.
    #[must_use]
    pub const fn out_rate_1(&self) -> FlowRate {
        self.out_rate_1
    }

    /// The complement, `2 * input - out_rate_1`.
    #[must_use]
    pub const fn out_rate_2(&self) -> FlowRate {
        self.out_rate_2
    }

    /// Sum of both outputs; always equal to twice the input.
    #[must_use]
    pub const fn total(&self) -> u128 {
        // out_rate_2 was derived as 2 * input - out_rate_1, so this is 2 * input
        self.out_rate_1.get() + self.out_rate_2.get()
    }

    /// Casts both output rates into the 96-bit range used by streaming
    /// protocols.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Overflow`] if either rate exceeds `2^96 - 1`.
    pub fn to_u96(&self) -> Result<(Uint96, Uint96), FlowError> {
        Ok((
            Uint96::try_from(self.out_rate_1.get())?,
            Uint96::try_from(self.out_rate_2.get())?,
        ))
    }
}

impl fmt::Display for FlowSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {} -> ({}, {})",
            self.input, self.ratio, self.out_rate_1, self.out_rate_2
        )
    }
}

/// Splits `2 * flow` into two rates weighted by `ratio`.
///
/// # Errors
///
/// - [`FlowError::Overflow`] if `2 * flow` or `ratio * flow` exceeds `u128`.
/// - [`FlowError::Underflow`] if the ratio is above `2.0`, which would make
///   the first output larger than the doubled flow. The second output would
///   be negative, so such reserves are rejected rather than reported as a
///   negative rate.
///
/// # Examples
///
/// ```
/// use flow_ratio::domain::{FlowRate, Ratio};
/// use flow_ratio::flow::split_flow;
///
/// let split = split_flow(FlowRate::new(38_580_000_000_000), Ratio::new(990_000_000_000_000_000))
///     .expect("in range");
/// assert_eq!(split.out_rate_1().get(), 38_194_200_000_000);
/// assert_eq!(split.out_rate_2().get(), 38_965_800_000_000);
/// ```
pub fn split_flow(flow: FlowRate, ratio: Ratio) -> Result<FlowSplit, FlowError> {
    let share = Wad::from_raw(flow.get()).mul_round(&ratio.as_wad(), Rounding::Down)?;
    let out_rate_1 = FlowRate::new(share.raw());
    let doubled = flow.safe_scale(2)?;
    let out_rate_2 = doubled
        .safe_sub(&out_rate_1)
        .map_err(|_| FlowError::Underflow("ratio share exceeds doubled flow"))?;

    let split = FlowSplit {
        input: flow,
        ratio,
        out_rate_1,
        out_rate_2,
    };
    debug!(%split, "split doubled flow");
    Ok(split)
}

/// Evaluates the split formula over any [`Precision`] backend.
///
/// Returns `(flow * ratio, 2 * flow - flow * ratio)`. The second term is
/// algebraically `flow * (2 - ratio)`; it is formed as a complement so that
/// an exact backend such as [`Wad`] reproduces [`split_flow`] bit for bit.
///
/// # Errors
///
/// Propagates the backend's overflow and underflow errors.
pub fn estimate_split<P: Precision>(flow: P, ratio: P) -> Result<(P, P), FlowError> {
    let step1 = flow.checked_mul(&ratio)?;
    let doubled = flow.checked_add(&flow)?;
    let step2 = doubled.checked_sub(&step1)?;
    Ok((step1, step2))
}

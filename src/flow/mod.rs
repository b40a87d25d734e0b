//! Ratio computation and flow-rate splitting.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`get_ratio`] | Reserve ratio scaled by 10^18, rounded half-up |
//! | [`split_flow`] | Exact split of a doubled flow into a [`FlowSplit`] |
//! | [`estimate_split`] | Same formula over any [`Precision`](crate::math::Precision) backend |
//! | `CrossCheck` | `f64` approximation for comparison (`float` feature) |

mod split;

#[cfg(feature = "float")]
mod cross_check;

#[cfg(test)]
mod proptest_properties;

pub use split::{estimate_split, get_ratio, split_flow, FlowSplit};

#[cfg(feature = "float")]
pub use cross_check::{CrossCheck, DEFAULT_TOLERANCE};

//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use flow_ratio::prelude::*;
//! ```

pub use crate::config::{ScenarioConfig, ScenarioFile};
pub use crate::domain::{
    safe_cast_to_u96, Amount, Decimals, FlowRate, Ratio, Rounding, Uint96,
};
pub use crate::error::{FlowError, Result};
pub use crate::flow::{estimate_split, get_ratio, split_flow, FlowSplit};
pub use crate::math::{CheckedArithmetic, Precision, Wad};
pub use crate::report::ScenarioReport;

#[cfg(feature = "float")]
pub use crate::flow::CrossCheck;
#[cfg(feature = "float")]
pub use crate::math::FloatArithmetic;

//! One complete scenario run and its console rendering.
//!
//! The rendered form is a fixed sequence of `label: value` lines followed
//! by the two cross-check values on one line:
//!
//! ```text
//! FlowRate: 38580000000000
//! ratio: 990000000000000000
//! outRate1: 38194200000000
//! outRate2: 38965800000000
//! <step1> <step2>
//! ```

use core::fmt;

use tracing::{debug, warn};

use crate::config::ScenarioConfig;
use crate::domain::{FlowRate, Ratio};
use crate::error::FlowError;
use crate::flow::{get_ratio, split_flow, FlowSplit};

#[cfg(feature = "float")]
use crate::flow::{CrossCheck, DEFAULT_TOLERANCE};

/// Everything computed for one [`ScenarioConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioReport {
    split: FlowSplit,
    #[cfg(feature = "float")]
    cross_check: CrossCheck,
}

impl ScenarioReport {
    /// Computes the ratio, the split, and (with the `float` feature) the
    /// floating-point cross-check for `config`.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`get_ratio`], [`split_flow`], and the
    /// cross-check.
    pub fn run(config: &ScenarioConfig) -> Result<Self, FlowError> {
        let ratio = get_ratio(config.token2(), config.token1())?;
        let split = split_flow(config.flow_rate(), ratio)?;
        match split.to_u96() {
            Ok((a, b)) => debug!(%a, %b, "output rates fit in uint96"),
            Err(e) => warn!(error = %e, "output rates exceed uint96"),
        }

        #[cfg(feature = "float")]
        let report = Self::with_cross_check(config, split)?;
        #[cfg(not(feature = "float"))]
        let report = Self { split };
        Ok(report)
    }

    #[cfg(feature = "float")]
    fn with_cross_check(config: &ScenarioConfig, split: FlowSplit) -> Result<Self, FlowError> {
        let cross_check = CrossCheck::compute(config.flow_rate(), config.cross_check_ratio())?;
        Ok(Self { split, cross_check }.checked(DEFAULT_TOLERANCE))
    }

    #[cfg(feature = "float")]
    fn checked(self, tolerance: f64) -> Self {
        let (d1, d2) = self.cross_check.deviation(&self.split);
        if self.cross_check.is_within(&self.split, tolerance) {
            debug!(d1, d2, "cross-check agrees with fixed-point split");
        } else {
            warn!(d1, d2, tolerance, "cross-check deviates from fixed-point split");
        }
        self
    }

    /// The base flow rate.
    pub const fn flow_rate(&self) -> FlowRate {
        self.split.input()
    }

    /// The reserve ratio.
    pub const fn ratio(&self) -> Ratio {
        self.split.ratio()
    }

    /// The exact split.
    #[must_use]
    pub const fn split(&self) -> &FlowSplit {
        &self.split
    }

    /// The floating-point cross-check.
    #[cfg(feature = "float")]
    #[must_use]
    pub const fn cross_check(&self) -> &CrossCheck {
        &self.cross_check
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FlowRate: {}", self.split.input())?;
        writeln!(f, "ratio: {}", self.split.ratio())?;
        writeln!(f, "outRate1: {}", self.split.out_rate_1())?;
        write!(f, "outRate2: {}", self.split.out_rate_2())?;
        #[cfg(feature = "float")]
        write!(f, "\n{}", self.cross_check)?;
        Ok(())
    }
}

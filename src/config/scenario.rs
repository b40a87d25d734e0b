//! Scenario inputs: a base flow rate and the two reserves it is split by.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{Amount, FlowRate};
use crate::error::FlowError;

/// Sample base flow rate, `0.00003858` tokens per second.
pub const SAMPLE_FLOW_RATE: FlowRate = FlowRate::new(38_580_000_000_000);

/// Sample reserve of token 1, `100` tokens.
pub const SAMPLE_TOKEN1: Amount = Amount::from_whole(100);

/// Sample reserve of token 2, `99` tokens.
pub const SAMPLE_TOKEN2: Amount = Amount::from_whole(99);

/// Hand-typed float ratio the cross-check uses unless a scenario sets one.
///
/// It is not derived from the reserves, so a scenario with other reserves
/// shows how far the float estimate drifts from the exact split.
pub const SAMPLE_CROSS_CHECK_RATIO: f64 = 0.99;

/// Validated inputs for one ratio and split calculation.
///
/// The ratio is `token2 / token1`, so `token1` must be non-zero.
///
/// # Validation
///
/// - `token1` must be non-zero.
/// - `cross_check_ratio` must be finite and non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    flow_rate: FlowRate,
    token1: Amount,
    token2: Amount,
    cross_check_ratio: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            flow_rate: SAMPLE_FLOW_RATE,
            token1: SAMPLE_TOKEN1,
            token2: SAMPLE_TOKEN2,
            cross_check_ratio: SAMPLE_CROSS_CHECK_RATIO,
        }
    }
}

impl ScenarioConfig {
    /// Creates a new `ScenarioConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidConfiguration`] if validation fails.
    pub fn new(
        flow_rate: FlowRate,
        token1: Amount,
        token2: Amount,
        cross_check_ratio: f64,
    ) -> Result<Self, FlowError> {
        let config = Self {
            flow_rate,
            token1,
            token2,
            cross_check_ratio,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidConfiguration`] naming the failed rule.
    pub fn validate(&self) -> Result<(), FlowError> {
        if self.token1.is_zero() {
            return Err(FlowError::InvalidConfiguration(
                "token1 reserve must be non-zero".into(),
            ));
        }
        let r = self.cross_check_ratio;
        if !r.is_finite() || r < 0.0 {
            return Err(FlowError::InvalidConfiguration(format!(
                "cross_check_ratio must be finite and non-negative, got {r}"
            )));
        }
        Ok(())
    }

    /// Returns the base flow rate.
    pub const fn flow_rate(&self) -> FlowRate {
        self.flow_rate
    }

    /// Returns the reserve of token 1 (the ratio denominator).
    pub const fn token1(&self) -> Amount {
        self.token1
    }

    /// Returns the reserve of token 2 (the ratio numerator).
    pub const fn token2(&self) -> Amount {
        self.token2
    }

    /// Returns the float ratio used by the cross-check.
    #[must_use]
    pub const fn cross_check_ratio(&self) -> f64 {
        self.cross_check_ratio
    }
}

/// Unvalidated scenario as read from TOML or assembled from CLI flags.
///
/// Amounts are decimal strings in whole-token units so that values such as
/// `0.00003858` are scaled exactly. Missing fields fall back to the sample
/// scenario when resolved.
///
/// ```toml
/// flow_rate = "0.00003858"
/// token1 = "100"
/// token2 = "99"
/// cross_check_ratio = 0.99
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFile {
    /// Base flow rate, tokens per second.
    pub flow_rate: Option<String>,
    /// Reserve of token 1.
    pub token1: Option<String>,
    /// Reserve of token 2.
    pub token2: Option<String>,
    /// Float ratio for the cross-check; [`SAMPLE_CROSS_CHECK_RATIO`] if absent.
    pub cross_check_ratio: Option<f64>,
}

impl ScenarioFile {
    /// Parses a scenario from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidConfiguration`] if the TOML is malformed
    /// or contains unknown keys.
    pub fn from_toml_str(s: &str) -> Result<Self, FlowError> {
        toml::from_str(s).map_err(|e| FlowError::InvalidConfiguration(e.to_string()))
    }

    /// Reads and parses a scenario file.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidConfiguration`] if the file cannot be
    /// read or parsed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FlowError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            FlowError::InvalidConfiguration(format!("read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    /// Returns `self` with every field that `overrides` sets replaced.
    #[must_use]
    pub fn overlay(self, overrides: Self) -> Self {
        Self {
            flow_rate: overrides.flow_rate.or(self.flow_rate),
            token1: overrides.token1.or(self.token1),
            token2: overrides.token2.or(self.token2),
            cross_check_ratio: overrides.cross_check_ratio.or(self.cross_check_ratio),
        }
    }

    /// Parses the decimal strings and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidConfiguration`] naming the offending
    /// field if a value does not parse or validation fails.
    pub fn resolve(&self) -> Result<ScenarioConfig, FlowError> {
        let field = |name: &str, e: FlowError| {
            FlowError::InvalidConfiguration(format!("{name}: {e}"))
        };
        let flow_rate = match &self.flow_rate {
            Some(s) => FlowRate::parse(s).map_err(|e| field("flow_rate", e))?,
            None => SAMPLE_FLOW_RATE,
        };
        let token1 = match &self.token1 {
            Some(s) => Amount::parse(s).map_err(|e| field("token1", e))?,
            None => SAMPLE_TOKEN1,
        };
        let token2 = match &self.token2 {
            Some(s) => Amount::parse(s).map_err(|e| field("token2", e))?,
            None => SAMPLE_TOKEN2,
        };
        let cross_check_ratio = self.cross_check_ratio.unwrap_or(SAMPLE_CROSS_CHECK_RATIO);
        ScenarioConfig::new(flow_rate, token1, token2, cross_check_ratio)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sample() {
        let cfg = ScenarioConfig::default();
        assert_eq!(cfg.flow_rate().get(), 38_580_000_000_000);
        assert_eq!(cfg.token1().get(), 100_000_000_000_000_000_000);
        assert_eq!(cfg.token2().get(), 99_000_000_000_000_000_000);
        assert_eq!(cfg.cross_check_ratio(), SAMPLE_CROSS_CHECK_RATIO);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_token1_rejected() {
        let Err(e) = ScenarioConfig::new(
            SAMPLE_FLOW_RATE,
            Amount::ZERO,
            SAMPLE_TOKEN2,
            SAMPLE_CROSS_CHECK_RATIO,
        ) else {
            panic!("expected Err");
        };
        assert_eq!(
            e,
            FlowError::InvalidConfiguration("token1 reserve must be non-zero".into())
        );
    }

    #[test]
    fn zero_token2_allowed() {
        assert!(ScenarioConfig::new(
            SAMPLE_FLOW_RATE,
            SAMPLE_TOKEN1,
            Amount::ZERO,
            SAMPLE_CROSS_CHECK_RATIO
        )
        .is_ok());
    }

    #[test]
    fn bad_cross_check_ratio_rejected() {
        for r in [f64::NAN, f64::INFINITY, -1.0] {
            assert!(matches!(
                ScenarioConfig::new(SAMPLE_FLOW_RATE, SAMPLE_TOKEN1, SAMPLE_TOKEN2, r),
                Err(FlowError::InvalidConfiguration(_))
            ));
        }
    }

    // -- ScenarioFile -------------------------------------------------------

    #[test]
    fn parse_full_file() {
        let text = r#"
            flow_rate = "0.00003858"
            token1 = "100"
            token2 = "99"
            cross_check_ratio = 0.5
        "#;
        let Ok(file) = ScenarioFile::from_toml_str(text) else {
            panic!("valid toml");
        };
        let Ok(cfg) = file.resolve() else {
            panic!("valid scenario");
        };
        assert_eq!(cfg.flow_rate(), SAMPLE_FLOW_RATE);
        assert_eq!(cfg.token1(), SAMPLE_TOKEN1);
        assert_eq!(cfg.token2(), SAMPLE_TOKEN2);
        assert_eq!(cfg.cross_check_ratio(), 0.5);
    }

    #[test]
    fn cross_check_ratio_ignores_reserves() {
        let Ok(file) = ScenarioFile::from_toml_str("token1 = \"40\"\ntoken2 = \"20\"") else {
            panic!("valid toml");
        };
        let Ok(cfg) = file.resolve() else {
            panic!("valid scenario");
        };
        assert_eq!(cfg.cross_check_ratio(), SAMPLE_CROSS_CHECK_RATIO);
    }

    #[test]
    fn empty_file_resolves_to_sample() {
        let Ok(file) = ScenarioFile::from_toml_str("") else {
            panic!("empty toml is valid");
        };
        assert_eq!(file.resolve(), Ok(ScenarioConfig::default()));
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(matches!(
            ScenarioFile::from_toml_str("flowrate = \"1\""),
            Err(FlowError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn bad_decimal_names_field() {
        let file = ScenarioFile {
            token2: Some("ninety".into()),
            ..ScenarioFile::default()
        };
        let Err(FlowError::InvalidConfiguration(msg)) = file.resolve() else {
            panic!("expected configuration error");
        };
        assert!(msg.starts_with("token2:"), "{msg}");
    }

    #[test]
    fn overlay_prefers_overrides() {
        let base = ScenarioFile {
            flow_rate: Some("1".into()),
            token1: Some("10".into()),
            ..ScenarioFile::default()
        };
        let overrides = ScenarioFile {
            token1: Some("20".into()),
            cross_check_ratio: Some(0.5),
            ..ScenarioFile::default()
        };
        let merged = base.overlay(overrides);
        assert_eq!(merged.flow_rate.as_deref(), Some("1"));
        assert_eq!(merged.token1.as_deref(), Some("20"));
        assert_eq!(merged.token2, None);
        assert_eq!(merged.cross_check_ratio, Some(0.5));
    }

    #[test]
    fn missing_file_is_configuration_error() {
        assert!(matches!(
            ScenarioFile::from_path("/nonexistent/scenario.toml"),
            Err(FlowError::InvalidConfiguration(_))
        ));
    }
}

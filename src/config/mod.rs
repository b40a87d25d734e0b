//! Scenario configuration.
//!
//! [`ScenarioFile`] is the unvalidated form read from TOML or built from CLI
//! flags; [`ScenarioFile::resolve`] turns it into a validated
//! [`ScenarioConfig`].

mod scenario;

pub use scenario::{
    ScenarioConfig, ScenarioFile, SAMPLE_CROSS_CHECK_RATIO, SAMPLE_FLOW_RATE, SAMPLE_TOKEN1,
    SAMPLE_TOKEN2,
};

//! # Flow Ratio
//!
//! Fixed-point reserve ratio and flow-rate split for streaming token flows.
//!
//! Given two token reserves and a base flow rate (all scaled by 10^18), this
//! crate computes the ratio `token2 / token1` rounded half-up, then splits a
//! doubled flow into two output rates that always sum to exactly twice the
//! input. An optional `f64` cross-check recomputes the split approximately.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `float` | yes | `f64` backend and the floating-point cross-check |
//!
//! # Quick Start
//!
//! ```rust
//! use flow_ratio::domain::{Amount, FlowRate};
//! use flow_ratio::flow::{get_ratio, split_flow};
//!
//! let ratio = get_ratio(Amount::from_whole(99), Amount::from_whole(100))
//!     .expect("non-zero reserve");
//! let split = split_flow(FlowRate::parse("0.00003858").expect("decimal"), ratio)
//!     .expect("ratio at most 2");
//!
//! assert_eq!(ratio.get(), 990_000_000_000_000_000);
//! assert_eq!(split.out_rate_1().get(), 38_194_200_000_000);
//! assert_eq!(split.out_rate_2().get(), 38_965_800_000_000);
//! assert_eq!(split.total(), 2 * 38_580_000_000_000);
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype values: [`Amount`](domain::Amount), [`FlowRate`](domain::FlowRate), [`Ratio`](domain::Ratio), [`Uint96`](domain::Uint96) |
//! | [`math`]   | Rounded division, [`Wad`](math::Wad) fixed point, precision backends |
//! | [`flow`]   | [`get_ratio`](flow::get_ratio), [`split_flow`](flow::split_flow), cross-check |
//! | [`config`] | [`ScenarioConfig`](config::ScenarioConfig) and TOML loading |
//! | [`report`] | [`ScenarioReport`](report::ScenarioReport): run and render a scenario |
//! | [`error`]  | [`FlowError`](error::FlowError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod error;
pub mod flow;
pub mod math;
pub mod prelude;
pub mod report;

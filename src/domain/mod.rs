//! Domain value types for ratio and flow calculations.
//!
//! Every quantity is a newtype over `u128` scaled by 10^18, so a reserve, a
//! rate, and a ratio cannot be mixed up by accident.

mod amount;
mod decimals;
mod flow_rate;
mod ratio;
mod rounding;
mod uint96;

pub use amount::Amount;
pub use decimals::Decimals;
pub use flow_rate::FlowRate;
pub use ratio::Ratio;
pub use rounding::Rounding;
pub use uint96::{safe_cast_to_u96, Uint96};

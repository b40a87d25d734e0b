//! Arithmetic and precision utilities for flow calculations.
//!
//! This module provides the [`Precision`] trait for interchangeable numeric
//! backends, the [`Wad`] decimal fixed-point type, [`CheckedArithmetic`] for
//! overflow-safe flow-rate operations, and [`div_round_wide`] for explicit
//! division rounding.
//!
//! # Backends
//!
//! | Feature | Type | Use case |
//! |---------|------|----------|
//! | always | `Wad` | Exact 18-decimal results |
//! | `float` | `FloatArithmetic` | Cross-checking with `f64` |

mod checked;
mod precision;
mod rounding;
mod wad;
mod wide;

#[cfg(feature = "float")]
mod float_precision;

pub use checked::CheckedArithmetic;
pub use precision::Precision;
pub use rounding::div_round_wide;
pub use wad::{Wad, WAD};
pub use wide::{to_u128, U256};

#[cfg(feature = "float")]
pub use float_precision::FloatArithmetic;

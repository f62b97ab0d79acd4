//! Decomposition engine: period-over-period growth of the total, split into
//! per-category contributions.
//!
//! For each period `t >= 1`:
//! - `growth[t] = (total[t] - total[t-1]) / total[t-1]`
//! - `rate[t][c] = (x[t][c] - x[t-1][c]) / d[t][c]`
//! - `contrib[t][c] = rate[t][c] * x[t-1][c] / total[t-1]`
//!
//! With the default denominator `d = x[t-1][c]` the contributions of a
//! period sum to its growth.

pub mod engine;
pub mod types;

pub use engine::{decompose, DecompositionEngine};
pub use types::{Decomposition, GrowthDenominator};

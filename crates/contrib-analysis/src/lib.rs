//! Growth decomposition and stacked-bar geometry.
//!
//! - [`decomposition`]: total growth per period and each category's
//!   contribution to it.
//! - [`stacking`]: top/bottom bounds for stacking signed contributions
//!   above and below zero.
//! - [`pipeline`]: both steps in sequence, configured from
//!   [`contrib_core::config::AnalysisConfig`].

pub mod decomposition;
pub mod pipeline;
pub mod stacking;

pub use decomposition::{decompose, Decomposition, DecompositionEngine, GrowthDenominator};
pub use pipeline::{analyze, Analysis};
pub use stacking::{build_segments, Segment, StackBuilder, StackSegments};

//! Analysis configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GROWTH_DENOMINATOR, DEFAULT_PARALLEL_THRESHOLD};

/// Configuration for the decomposition engine and stack geometry builder.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Per-category growth denominator: "prior" or "current". Default: "prior".
    pub growth_denominator: Option<String>,
    /// Fail with `DivisionUndefined` instead of propagating NaN/Inf. Default: false.
    pub strict_finite: Option<bool>,
    /// Row count at which stacking runs in parallel. Default: 4096.
    pub parallel_threshold: Option<usize>,
}

impl AnalysisConfig {
    /// Returns the effective denominator name, defaulting to "prior".
    pub fn effective_growth_denominator(&self) -> &str {
        self.growth_denominator
            .as_deref()
            .unwrap_or(DEFAULT_GROWTH_DENOMINATOR)
    }

    pub fn effective_strict_finite(&self) -> bool {
        self.strict_finite.unwrap_or(false)
    }

    pub fn effective_parallel_threshold(&self) -> usize {
        self.parallel_threshold.unwrap_or(DEFAULT_PARALLEL_THRESHOLD)
    }
}

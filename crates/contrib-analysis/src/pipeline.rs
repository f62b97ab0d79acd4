//! Decomposition followed by stacking, configured from `AnalysisConfig`.

use std::time::Instant;

use contrib_core::config::AnalysisConfig;
use contrib_core::constants::SUM_TOLERANCE;
use contrib_core::errors::AnalysisError;
use contrib_core::PeriodTable;
use serde::{Deserialize, Serialize};

use crate::decomposition::{Decomposition, DecompositionEngine, GrowthDenominator};
use crate::stacking::{StackBuilder, StackSegments};

/// Everything the renderer needs for one input table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub decomposition: Decomposition,
    pub segments: StackSegments,
}

pub fn analyze(table: &PeriodTable, config: &AnalysisConfig) -> Result<Analysis, AnalysisError> {
    let _span = tracing::info_span!(
        "analyze",
        periods = table.n_periods(),
        categories = table.n_categories()
    )
    .entered();
    let start = Instant::now();

    let decomposition = DecompositionEngine::from_config(config)?.decompose(table)?;
    let residual = decomposition.max_abs_residual();
    if decomposition.denominator == GrowthDenominator::Prior
        && decomposition.is_finite()
        && residual > SUM_TOLERANCE
    {
        tracing::warn!(residual, "contributions do not sum to total growth");
    }

    let segments = StackBuilder::from_config(config).build(&decomposition.contributions)?;

    tracing::info!(
        elapsed_us = start.elapsed().as_micros() as u64,
        max_abs_residual = residual,
        "analysis complete"
    );

    Ok(Analysis {
        decomposition,
        segments,
    })
}

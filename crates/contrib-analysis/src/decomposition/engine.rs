//! The decomposition engine.

use contrib_core::config::AnalysisConfig;
use contrib_core::errors::AnalysisError;
use contrib_core::{PeriodSeries, PeriodTable};

use super::types::{Decomposition, GrowthDenominator};

/// Decompose with the default engine: prior-period denominator, non-finite
/// values propagated.
pub fn decompose(table: &PeriodTable) -> Result<Decomposition, AnalysisError> {
    DecompositionEngine::new().decompose(table)
}

/// Computes growth and contribution tables from a period-indexed table.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecompositionEngine {
    denominator: GrowthDenominator,
    strict_finite: bool,
}

impl DecompositionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails with `UnknownDenominator` when the configured name is not
    /// recognized.
    pub fn from_config(config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        let name = config.effective_growth_denominator();
        let denominator =
            GrowthDenominator::from_name(name).ok_or_else(|| AnalysisError::UnknownDenominator {
                value: name.to_string(),
            })?;
        Ok(Self {
            denominator,
            strict_finite: config.effective_strict_finite(),
        })
    }

    pub fn with_denominator(mut self, denominator: GrowthDenominator) -> Self {
        self.denominator = denominator;
        self
    }

    /// When set, non-finite results fail with `DivisionUndefined` instead of
    /// flowing through.
    pub fn strict(mut self, strict_finite: bool) -> Self {
        self.strict_finite = strict_finite;
        self
    }

    pub fn denominator(&self) -> GrowthDenominator {
        self.denominator
    }

    /// Requires at least 2 periods and 1 category. The input is not modified.
    pub fn decompose(&self, table: &PeriodTable) -> Result<Decomposition, AnalysisError> {
        if table.n_periods() < 2 {
            return Err(AnalysisError::invalid_shape(format!(
                "need at least 2 periods, got {}",
                table.n_periods()
            )));
        }
        if table.n_categories() == 0 {
            return Err(AnalysisError::invalid_shape("need at least 1 category"));
        }

        let totals = table.totals();
        let rows = table.rows();
        let periods = table.periods();

        let mut growth = Vec::with_capacity(rows.len() - 1);
        let mut contributions = Vec::with_capacity(rows.len() - 1);

        for t in 1..rows.len() {
            let prior_total = totals[t - 1];
            growth.push((periods[t].clone(), (totals[t] - prior_total) / prior_total));

            let row = rows[t]
                .iter()
                .zip(&rows[t - 1])
                .map(|(&current, &prior)| {
                    let divisor = match self.denominator {
                        GrowthDenominator::Prior => prior,
                        GrowthDenominator::Current => current,
                    };
                    let rate = (current - prior) / divisor;
                    rate * prior / prior_total
                })
                .collect();
            contributions.push(row);
        }

        let decomposition = Decomposition {
            growth: PeriodSeries::new(growth),
            contributions: PeriodTable::new(
                periods[1..].iter().cloned(),
                table.categories().iter().cloned(),
                contributions,
            )?,
            denominator: self.denominator,
        };

        tracing::debug!(
            periods = decomposition.n_periods(),
            categories = table.n_categories(),
            denominator = %self.denominator,
            "decomposed growth"
        );

        if let Err(e) = decomposition.ensure_finite() {
            if self.strict_finite {
                return Err(e);
            }
            tracing::warn!(error = %e, "non-finite values in decomposition");
        }

        Ok(decomposition)
    }
}

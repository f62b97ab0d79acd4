//! Decomposition output types.

use std::fmt;

use contrib_core::constants::{GROWTH_DENOMINATOR_CURRENT, GROWTH_DENOMINATOR_PRIOR};
use contrib_core::errors::AnalysisError;
use contrib_core::{PeriodSeries, PeriodTable};
use serde::{Deserialize, Serialize};

/// Denominator of the intermediate per-category growth rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthDenominator {
    /// Divide by the category's prior-period value. Contributions then sum
    /// exactly to total growth.
    #[default]
    Prior,
    /// Divide by the category's current-period value. Known quirk: the
    /// contributions no longer sum to total growth.
    Current,
}

impl GrowthDenominator {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Prior => GROWTH_DENOMINATOR_PRIOR,
            Self::Current => GROWTH_DENOMINATOR_CURRENT,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            GROWTH_DENOMINATOR_PRIOR => Some(Self::Prior),
            GROWTH_DENOMINATOR_CURRENT => Some(Self::Current),
            _ => None,
        }
    }
}

impl fmt::Display for GrowthDenominator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Growth series and contribution table for periods `1..N` of an N-period
/// input. The first input period has no predecessor and is excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decomposition {
    pub growth: PeriodSeries,
    pub contributions: PeriodTable,
    pub denominator: GrowthDenominator,
}

impl Decomposition {
    pub fn n_periods(&self) -> usize {
        self.growth.len()
    }

    /// `growth[t] - sum_c contrib[t][c]` for every period.
    pub fn residuals(&self) -> Vec<f64> {
        self.growth
            .values()
            .zip(self.contributions.rows())
            .map(|(g, row)| g - row.iter().sum::<f64>())
            .collect()
    }

    /// Largest absolute residual; NaN if any residual is NaN.
    pub fn max_abs_residual(&self) -> f64 {
        self.residuals()
            .into_iter()
            .map(f64::abs)
            .fold(0.0, |acc, r| if r.is_nan() || acc.is_nan() { f64::NAN } else { acc.max(r) })
    }

    pub fn is_finite(&self) -> bool {
        self.growth.first_non_finite().is_none() && self.contributions.first_non_finite().is_none()
    }

    /// Fails with `DivisionUndefined` at the first period (in order) holding
    /// a non-finite growth or contribution. Undefined total growth is
    /// reported without a category.
    pub fn ensure_finite(&self) -> Result<(), AnalysisError> {
        let categories = self.contributions.categories();
        for ((period, g), row) in self.growth.points().iter().zip(self.contributions.rows()) {
            if !g.is_finite() {
                return Err(AnalysisError::DivisionUndefined {
                    period: period.clone(),
                    category: None,
                });
            }
            if let Some(c) = row.iter().position(|v| !v.is_finite()) {
                return Err(AnalysisError::DivisionUndefined {
                    period: period.clone(),
                    category: Some(categories[c].clone()),
                });
            }
        }
        Ok(())
    }
}

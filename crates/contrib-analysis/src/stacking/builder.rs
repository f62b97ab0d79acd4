//! Builds stack segments row by row.

use contrib_core::config::AnalysisConfig;
use contrib_core::constants::DEFAULT_PARALLEL_THRESHOLD;
use contrib_core::errors::AnalysisError;
use contrib_core::PeriodTable;
use rayon::prelude::*;

use super::types::StackSegments;

/// Build segments with the default builder.
pub fn build_segments(table: &PeriodTable) -> Result<StackSegments, AnalysisError> {
    StackBuilder::new().build(table)
}

/// Stack one row in column order. Returns `(tops, bottoms)`.
///
/// Zero counts as non-negative, so it yields a zero-height segment at the
/// current positive height. NaN fails the `>= 0` test and lands in the
/// negative stack.
pub fn stack_row(values: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let mut tops = Vec::with_capacity(values.len());
    let mut bottoms = Vec::with_capacity(values.len());
    let mut pos = 0.0;
    let mut neg = 0.0;

    for &v in values {
        if v >= 0.0 {
            bottoms.push(pos);
            pos += v;
            tops.push(pos);
        } else {
            tops.push(neg);
            neg += v;
            bottoms.push(neg);
        }
    }
    (tops, bottoms)
}

/// Row-independent segment builder. Tables with at least
/// `parallel_threshold` rows are stacked on the rayon pool; the result is
/// identical either way.
#[derive(Debug, Clone, Copy)]
pub struct StackBuilder {
    parallel_threshold: usize,
}

impl Default for StackBuilder {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl StackBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            parallel_threshold: config.effective_parallel_threshold(),
        }
    }

    pub fn with_parallel_threshold(mut self, rows: usize) -> Self {
        self.parallel_threshold = rows.max(1);
        self
    }

    pub fn build(&self, table: &PeriodTable) -> Result<StackSegments, AnalysisError> {
        let stacked: Vec<(Vec<f64>, Vec<f64>)> = if table.n_periods() >= self.parallel_threshold {
            table.rows().par_iter().map(|row| stack_row(row)).collect()
        } else {
            table.rows().iter().map(|row| stack_row(row)).collect()
        };
        let (tops, bottoms): (Vec<_>, Vec<_>) = stacked.into_iter().unzip();

        tracing::debug!(
            periods = table.n_periods(),
            categories = table.n_categories(),
            "built stack segments"
        );

        StackSegments::from_parts(table.with_rows(tops)?, table.with_rows(bottoms)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_sign_row() {
        let (tops, bottoms) = stack_row(&[5.0, -3.0, 2.0]);
        assert_eq!(tops, vec![5.0, 0.0, 7.0]);
        assert_eq!(bottoms, vec![0.0, -3.0, 5.0]);
    }

    #[test]
    fn test_zero_is_non_negative() {
        let (tops, bottoms) = stack_row(&[-1.0, 2.0, 0.0, -4.0]);
        assert_eq!(tops[2], 2.0);
        assert_eq!(bottoms[2], 2.0);
        assert_eq!(bottoms[3], -5.0);
        assert_eq!(tops[3], -1.0);
    }

    #[test]
    fn test_all_negative_row() {
        let (tops, bottoms) = stack_row(&[-1.0, -2.0]);
        assert_eq!(tops, vec![0.0, -1.0]);
        assert_eq!(bottoms, vec![-1.0, -3.0]);
    }

    #[test]
    fn test_empty_row() {
        let (tops, bottoms) = stack_row(&[]);
        assert!(tops.is_empty() && bottoms.is_empty());
    }
}

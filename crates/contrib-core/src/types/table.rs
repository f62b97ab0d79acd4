//! Period-indexed table: ordered periods × ordered categories of `f64` cells.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;

/// A rectangular table whose rows are chronologically ordered periods and
/// whose columns are named categories.
///
/// The shape is validated on construction (and on deserialization): one row
/// per period, one cell per category in every row, unique labels on both
/// axes. Row order and column order are both significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct PeriodTable {
    periods: Vec<String>,
    categories: Vec<String>,
    rows: Vec<Vec<f64>>,
}

#[derive(Deserialize)]
struct RawTable {
    periods: Vec<String>,
    categories: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl TryFrom<RawTable> for PeriodTable {
    type Error = AnalysisError;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        PeriodTable::new(raw.periods, raw.categories, raw.rows)
    }
}

impl PeriodTable {
    /// Build a table, validating that `rows` is `periods.len()` by
    /// `categories.len()` and that labels are unique.
    pub fn new<P, C>(
        periods: impl IntoIterator<Item = P>,
        categories: impl IntoIterator<Item = C>,
        rows: Vec<Vec<f64>>,
    ) -> Result<Self, AnalysisError>
    where
        P: Into<String>,
        C: Into<String>,
    {
        let periods: Vec<String> = periods.into_iter().map(Into::into).collect();
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();

        if rows.len() != periods.len() {
            return Err(AnalysisError::invalid_shape(format!(
                "{} periods but {} rows",
                periods.len(),
                rows.len()
            )));
        }
        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != categories.len())
        {
            return Err(AnalysisError::invalid_shape(format!(
                "row {} ({}) has {} cells, expected {}",
                i,
                periods[i],
                row.len(),
                categories.len()
            )));
        }
        if let Some(dup) = first_duplicate(&periods) {
            return Err(AnalysisError::invalid_shape(format!(
                "duplicate period label: {dup}"
            )));
        }
        if let Some(dup) = first_duplicate(&categories) {
            return Err(AnalysisError::invalid_shape(format!(
                "duplicate category: {dup}"
            )));
        }

        Ok(Self {
            periods,
            categories,
            rows,
        })
    }

    /// Build a table with the same axes as `self` but new cell values.
    /// `rows` must have the same dimensions.
    pub fn with_rows(&self, rows: Vec<Vec<f64>>) -> Result<Self, AnalysisError> {
        Self::new(self.periods.clone(), self.categories.clone(), rows)
    }

    pub fn periods(&self) -> &[String] {
        &self.periods
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, period_idx: usize) -> Option<&[f64]> {
        self.rows.get(period_idx).map(Vec::as_slice)
    }

    pub fn n_periods(&self) -> usize {
        self.periods.len()
    }

    pub fn n_categories(&self) -> usize {
        self.categories.len()
    }

    /// Value at (period label, category name).
    pub fn get(&self, period: &str, category: &str) -> Option<f64> {
        let p = self.period_index(period)?;
        let c = self.category_index(category)?;
        Some(self.rows[p][c])
    }

    pub fn period_index(&self, period: &str) -> Option<usize> {
        self.periods.iter().position(|p| p == period)
    }

    pub fn category_index(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == category)
    }

    /// All values of one category, in period order.
    pub fn column(&self, category: &str) -> Option<Vec<f64>> {
        let c = self.category_index(category)?;
        Some(self.rows.iter().map(|row| row[c]).collect())
    }

    /// Per-period sum across all categories.
    pub fn totals(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.iter().sum()).collect()
    }

    /// True when both tables share period labels and category names, in order.
    pub fn same_axes(&self, other: &PeriodTable) -> bool {
        self.periods == other.periods && self.categories == other.categories
    }

    /// First (period, category) whose value is NaN or infinite.
    pub fn first_non_finite(&self) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(p, row)| {
            row.iter().position(|v| !v.is_finite()).map(|c| (p, c))
        })
    }

    /// Reorder columns by category name. Every category must appear exactly once.
    pub fn reorder_categories(&self, order: &[&str]) -> Result<Self, AnalysisError> {
        if order.len() != self.categories.len() {
            return Err(AnalysisError::invalid_shape(format!(
                "column order names {} categories, table has {}",
                order.len(),
                self.categories.len()
            )));
        }
        let indices = order
            .iter()
            .map(|name| {
                self.category_index(name).ok_or_else(|| {
                    AnalysisError::invalid_shape(format!("unknown category: {name}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i]).collect())
            .collect();
        Self::new(self.periods.clone(), order.iter().copied(), rows)
    }
}

fn first_duplicate(labels: &[String]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(labels.len());
    labels
        .iter()
        .find(|label| !seen.insert(label.as_str()))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PeriodTable {
        PeriodTable::new(
            ["2019", "2020", "2021"],
            ["A", "B"],
            vec![vec![10.0, 20.0], vec![15.0, 25.0], vec![12.0, 30.0]],
        )
        .unwrap()
    }

    #[test]
    fn test_totals() {
        assert_eq!(sample().totals(), vec![30.0, 40.0, 42.0]);
    }

    #[test]
    fn test_lookup_by_label() {
        let t = sample();
        assert_eq!(t.get("2020", "B"), Some(25.0));
        assert_eq!(t.get("2022", "B"), None);
        assert_eq!(t.column("A"), Some(vec![10.0, 15.0, 12.0]));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = PeriodTable::new(["a", "b"], ["x", "y"], vec![vec![1.0, 2.0], vec![3.0]])
            .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidShape { .. }));
    }

    #[test]
    fn test_row_count_mismatch_rejected() {
        let err = PeriodTable::new(["a", "b"], ["x"], vec![vec![1.0]]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidShape { .. }));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let err = PeriodTable::new(["a"], ["x", "x"], vec![vec![1.0, 2.0]]).unwrap_err();
        assert!(err.to_string().contains("duplicate category"));
    }

    #[test]
    fn test_reorder_categories() {
        let t = sample().reorder_categories(&["B", "A"]).unwrap();
        assert_eq!(t.categories(), &["B".to_string(), "A".to_string()]);
        assert_eq!(t.row(0), Some(&[20.0, 10.0][..]));
        assert!(sample().reorder_categories(&["B", "C"]).is_err());
    }

    #[test]
    fn test_first_non_finite() {
        let t = PeriodTable::new(["a", "b"], ["x", "y"], vec![vec![1.0, 2.0], vec![f64::NAN, 1.0]])
            .unwrap();
        assert_eq!(t.first_non_finite(), Some((1, 0)));
        assert_eq!(sample().first_non_finite(), None);
    }
}

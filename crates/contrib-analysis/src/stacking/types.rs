//! Stack segment types.

use contrib_core::errors::AnalysisError;
use contrib_core::PeriodTable;
use serde::{Deserialize, Serialize};

/// The `[bottom, top]` interval one category occupies in one period's bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub top: f64,
    pub bottom: f64,
}

impl Segment {
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn is_empty(&self) -> bool {
        self.top == self.bottom
    }
}

/// Paired top and bottom tables, both shaped like the contribution table
/// they were built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackSegments {
    tops: PeriodTable,
    bottoms: PeriodTable,
}

impl StackSegments {
    /// Pair two tables. They must share periods, categories, and dimensions.
    pub fn from_parts(tops: PeriodTable, bottoms: PeriodTable) -> Result<Self, AnalysisError> {
        if !tops.same_axes(&bottoms) {
            return Err(AnalysisError::invalid_shape(format!(
                "tops are {}x{} but bottoms are {}x{} or labelled differently",
                tops.n_periods(),
                tops.n_categories(),
                bottoms.n_periods(),
                bottoms.n_categories()
            )));
        }
        Ok(Self { tops, bottoms })
    }

    pub fn tops(&self) -> &PeriodTable {
        &self.tops
    }

    pub fn bottoms(&self) -> &PeriodTable {
        &self.bottoms
    }

    pub fn into_parts(self) -> (PeriodTable, PeriodTable) {
        (self.tops, self.bottoms)
    }

    pub fn segment(&self, period_idx: usize, category_idx: usize) -> Option<Segment> {
        let top = *self.tops.row(period_idx)?.get(category_idx)?;
        let bottom = *self.bottoms.row(period_idx)?.get(category_idx)?;
        Some(Segment { top, bottom })
    }

    /// `(lowest bottom, highest top)` of one period's bar, zero included.
    pub fn row_extent(&self, period_idx: usize) -> Option<(f64, f64)> {
        let tops = self.tops.row(period_idx)?;
        let bottoms = self.bottoms.row(period_idx)?;
        Some((
            bottoms.iter().copied().fold(0.0, f64::min),
            tops.iter().copied().fold(0.0, f64::max),
        ))
    }

    /// `(lowest bottom, highest top)` across all periods, zero included.
    pub fn overall_extent(&self) -> (f64, f64) {
        (0..self.tops.n_periods())
            .filter_map(|p| self.row_extent(p))
            .fold((0.0, 0.0), |(lo, hi), (b, t)| (lo.min(b), hi.max(t)))
    }
}

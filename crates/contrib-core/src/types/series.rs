//! Period-indexed series: ordered `(period, value)` pairs.

use serde::{Deserialize, Serialize};

/// An ordered sequence of `(period, value)` pairs, e.g. total growth.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodSeries {
    points: Vec<(String, f64)>,
}

impl PeriodSeries {
    pub fn new(points: Vec<(String, f64)>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[(String, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn periods(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|(p, _)| p.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(_, v)| *v)
    }

    pub fn get(&self, period: &str) -> Option<f64> {
        self.points
            .iter()
            .find(|(p, _)| p == period)
            .map(|(_, v)| *v)
    }

    /// First point whose value is NaN or infinite.
    pub fn first_non_finite(&self) -> Option<&(String, f64)> {
        self.points.iter().find(|(_, v)| !v.is_finite())
    }
}

impl FromIterator<(String, f64)> for PeriodSeries {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

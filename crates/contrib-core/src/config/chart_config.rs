//! Chart configuration consumed by the renderer.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BAR_WIDTH, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_LEGEND_LOCATION,
    DEFAULT_PALETTE, DEFAULT_PERIOD,
};

/// Presentation options. Palette and legend names are kept as strings here
/// and only resolved by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChartConfig {
    /// Palette name, e.g. "Colorblind". Default: "Colorblind".
    pub palette: Option<String>,
    /// Period label ("year", "quarter", ...). Names the growth chart file.
    pub period: Option<String>,
    /// Bar width as a fraction of the period slot. Default: 0.5.
    pub bar_width: Option<f64>,
    /// Legend location, e.g. "bottom_left". Default: "top_right".
    pub legend_location: Option<String>,
    /// Render total growth alongside contributions. Default: true.
    pub total_growth: Option<bool>,
    /// Directory the HTML files are written to. Default: current directory.
    pub output_dir: Option<PathBuf>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ChartConfig {
    pub fn effective_palette(&self) -> &str {
        self.palette.as_deref().unwrap_or(DEFAULT_PALETTE)
    }

    pub fn effective_period(&self) -> &str {
        self.period.as_deref().unwrap_or(DEFAULT_PERIOD)
    }

    pub fn effective_bar_width(&self) -> f64 {
        self.bar_width.unwrap_or(DEFAULT_BAR_WIDTH)
    }

    pub fn effective_legend_location(&self) -> &str {
        self.legend_location
            .as_deref()
            .unwrap_or(DEFAULT_LEGEND_LOCATION)
    }

    pub fn effective_total_growth(&self) -> bool {
        self.total_growth.unwrap_or(true)
    }

    pub fn effective_output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn effective_width(&self) -> u32 {
        self.width.unwrap_or(DEFAULT_CHART_WIDTH)
    }

    pub fn effective_height(&self) -> u32 {
        self.height.unwrap_or(DEFAULT_CHART_HEIGHT)
    }
}

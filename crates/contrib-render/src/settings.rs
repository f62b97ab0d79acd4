//! Resolved, validated presentation settings.

use std::path::PathBuf;

use contrib_core::config::ChartConfig;
use contrib_core::errors::RenderError;

use crate::legend::LegendLocation;
use crate::palette::Palette;

/// `ChartConfig` with every option resolved to a checked value.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub palette: &'static Palette,
    pub period: String,
    pub bar_width: f64,
    pub legend_location: LegendLocation,
    pub total_growth: bool,
    pub output_dir: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl RenderSettings {
    /// Fails with `UnknownPalette`, `UnknownLocation`, or `InvalidBarWidth`.
    pub fn from_config(config: &ChartConfig) -> Result<Self, RenderError> {
        let bar_width = config.effective_bar_width();
        if !(bar_width > 0.0 && bar_width <= 1.0) {
            return Err(RenderError::InvalidBarWidth { value: bar_width });
        }
        Ok(Self {
            palette: Palette::lookup(config.effective_palette())?,
            period: config.effective_period().to_string(),
            bar_width,
            legend_location: config.effective_legend_location().parse()?,
            total_growth: config.effective_total_growth(),
            output_dir: config.effective_output_dir(),
            width: config.effective_width().max(1),
            height: config.effective_height().max(1),
        })
    }
}

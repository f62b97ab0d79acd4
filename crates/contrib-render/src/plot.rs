//! Chart entry points: growth chart, contribution chart, and both in one go.

use std::path::{Path, PathBuf};

use contrib_analysis::{analyze, build_segments, Analysis, StackSegments};
use contrib_core::config::ContribConfig;
use contrib_core::constants::CONTRIBUTION_CHART_FILE;
use contrib_core::errors::{ContribError, RenderError};
use contrib_core::{PeriodSeries, PeriodTable};
use serde::Serialize;

use crate::chart::{Bar, BarChart, LegendEntry};
use crate::format::{growth_file_name, growth_title, sentence_case, CONTRIBUTION_TITLE};
use crate::page::html_page;
use crate::settings::RenderSettings;

/// Color of the single-series growth chart.
const GROWTH_COLOR: &str = "#1f77b4";

/// Paths written by [`plot_contributions`], plus the numbers behind them.
#[derive(Debug, Clone)]
pub struct PlotOutput {
    pub growth_chart: Option<PathBuf>,
    pub contribution_chart: PathBuf,
    pub analysis: Analysis,
}

#[derive(Serialize)]
struct GrowthData<'a> {
    period: &'a str,
    growth: &'a PeriodSeries,
}

#[derive(Serialize)]
struct ContributionData<'a> {
    period: &'a str,
    contributions: &'a PeriodTable,
    segments: &'a StackSegments,
}

/// HTML for the total growth chart. Fails on empty or non-finite series.
pub fn render_growth_html(
    growth: &PeriodSeries,
    settings: &RenderSettings,
) -> Result<String, RenderError> {
    if growth.is_empty() {
        return Err(RenderError::EmptyChart("growth series has no periods".to_string()));
    }
    if let Some((period, _)) = growth.first_non_finite() {
        return Err(RenderError::NonFiniteValue {
            chart: "growth".to_string(),
            period: period.clone(),
        });
    }

    let bars = growth
        .values()
        .enumerate()
        .map(|(slot, g)| Bar {
            slot,
            bottom: 0.0,
            top: g,
            color: GROWTH_COLOR.to_string(),
        })
        .collect();

    let chart = BarChart {
        title: growth_title(&settings.period),
        x_label: sentence_case(&settings.period),
        slots: growth.periods().map(str::to_string).collect(),
        bars,
        legend: Vec::new(),
        legend_location: settings.legend_location,
        bar_width: settings.bar_width,
        width: settings.width,
        height: settings.height,
    };

    let data = GrowthData {
        period: &settings.period,
        growth,
    };
    Ok(html_page(&chart.title, &chart.to_svg(), &data))
}

/// HTML for the stacked contribution chart, one color per category in
/// column order.
pub fn render_contribution_html(
    contributions: &PeriodTable,
    segments: &StackSegments,
    settings: &RenderSettings,
) -> Result<String, RenderError> {
    if contributions.n_periods() == 0 {
        return Err(RenderError::EmptyChart("contribution table has no periods".to_string()));
    }
    if !segments.tops().same_axes(contributions) {
        return Err(RenderError::ShapeMismatch {
            contributions: describe_shape(contributions),
            segments: describe_shape(segments.tops()),
        });
    }
    if let Some((p, _)) = contributions.first_non_finite() {
        return Err(RenderError::NonFiniteValue {
            chart: "contribution".to_string(),
            period: contributions.periods()[p].clone(),
        });
    }
    let colors = settings.palette.colors(contributions.n_categories())?;

    let mut bars = Vec::with_capacity(contributions.n_periods() * colors.len());
    for (c, color) in colors.iter().enumerate() {
        for p in 0..contributions.n_periods() {
            if let Some(seg) = segments.segment(p, c) {
                bars.push(Bar {
                    slot: p,
                    bottom: seg.bottom,
                    top: seg.top,
                    color: color.to_string(),
                });
            }
        }
    }

    let legend = contributions
        .categories()
        .iter()
        .zip(colors)
        .map(|(label, color)| LegendEntry {
            label: label.clone(),
            color: color.to_string(),
        })
        .collect();

    let chart = BarChart {
        title: CONTRIBUTION_TITLE.to_string(),
        x_label: sentence_case(&settings.period),
        slots: contributions.periods().to_vec(),
        bars,
        legend,
        legend_location: settings.legend_location,
        bar_width: settings.bar_width,
        width: settings.width,
        height: settings.height,
    };

    let data = ContributionData {
        period: &settings.period,
        contributions,
        segments,
    };
    Ok(html_page(&chart.title, &chart.to_svg(), &data))
}

/// Write the growth chart to `{output_dir}/{period}_growth.html`.
pub fn plot_growth(growth: &PeriodSeries, settings: &RenderSettings) -> Result<PathBuf, RenderError> {
    let html = render_growth_html(growth, settings)?;
    let path = settings.output_dir.join(growth_file_name(&settings.period));
    write_file(&path, &html)?;
    Ok(path)
}

/// Write the contribution chart to `{output_dir}/Growth_contribs.html`.
/// Stack segments are built from `contributions`.
pub fn plot_contrib(
    contributions: &PeriodTable,
    settings: &RenderSettings,
) -> Result<PathBuf, ContribError> {
    let segments = build_segments(contributions)?;
    Ok(write_contribution_chart(contributions, &segments, settings)?)
}

/// Decompose `table`, then write the growth chart (when
/// `chart.total_growth` is on) and the contribution chart.
pub fn plot_contributions(
    table: &PeriodTable,
    config: &ContribConfig,
) -> Result<PlotOutput, ContribError> {
    let settings = RenderSettings::from_config(&config.chart)?;
    let analysis = analyze(table, &config.analysis)?;

    let growth_chart = if settings.total_growth {
        Some(plot_growth(&analysis.decomposition.growth, &settings)?)
    } else {
        None
    };
    let contribution_chart = write_contribution_chart(
        &analysis.decomposition.contributions,
        &analysis.segments,
        &settings,
    )?;

    Ok(PlotOutput {
        growth_chart,
        contribution_chart,
        analysis,
    })
}

fn write_contribution_chart(
    contributions: &PeriodTable,
    segments: &StackSegments,
    settings: &RenderSettings,
) -> Result<PathBuf, RenderError> {
    let html = render_contribution_html(contributions, segments, settings)?;
    let path = settings.output_dir.join(CONTRIBUTION_CHART_FILE);
    write_file(&path, &html)?;
    Ok(path)
}

fn describe_shape(table: &PeriodTable) -> String {
    format!(
        "{} periods x {} categories [{}]",
        table.n_periods(),
        table.n_categories(),
        table.categories().join(", ")
    )
}

fn write_file(path: &Path, contents: &str) -> Result<(), RenderError> {
    let io_err = |e: std::io::Error| RenderError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, contents).map_err(io_err)?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "chart written");
    Ok(())
}

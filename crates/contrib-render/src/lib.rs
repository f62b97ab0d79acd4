//! Static bar charts for growth and contribution-to-growth tables.
//!
//! The renderer consumes the outputs of `contrib-analysis` and writes
//! self-contained HTML files with an inline SVG chart. Presentation options
//! (palette, legend location, bar width, period label) come from
//! [`contrib_core::config::ChartConfig`] and are resolved here, never in the
//! analysis crates.

pub mod chart;
pub mod format;
pub mod legend;
pub mod page;
pub mod palette;
pub mod plot;
pub mod settings;

pub use legend::LegendLocation;
pub use palette::{palette, Palette};
pub use plot::{
    plot_contrib, plot_contributions, plot_growth, render_contribution_html, render_growth_html,
    PlotOutput,
};
pub use settings::RenderSettings;

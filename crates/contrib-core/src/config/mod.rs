//! Configuration system for Contrib.
//! TOML-based, layered resolution: overrides > project > user > defaults.

pub mod analysis_config;
pub mod chart_config;
pub mod contrib_config;

pub use analysis_config::AnalysisConfig;
pub use chart_config::ChartConfig;
pub use contrib_config::{ConfigOverrides, ContribConfig};

//! Top-level Contrib configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, ChartConfig};
use crate::constants::{GROWTH_DENOMINATORS, PROJECT_CONFIG_FILE};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Project config (`contrib.toml` in project root)
/// 3. User config (`~/.contrib/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContribConfig {
    pub analysis: AnalysisConfig,
    pub chart: ChartConfig,
}

/// Caller-supplied overrides, applied last.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub growth_denominator: Option<String>,
    pub strict_finite: Option<bool>,
    pub parallel_threshold: Option<usize>,
    pub palette: Option<String>,
    pub period: Option<String>,
    pub bar_width: Option<f64>,
    pub legend_location: Option<String>,
    pub total_growth: Option<bool>,
    pub output_dir: Option<PathBuf>,
}

impl ContribConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;
        tracing::debug!(root = %root.display(), "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values. Palette and legend names are left
    /// to the renderer.
    pub fn validate(config: &ContribConfig) -> Result<(), ConfigError> {
        if let Some(ref denominator) = config.analysis.growth_denominator {
            if !GROWTH_DENOMINATORS.contains(&denominator.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "analysis.growth_denominator".to_string(),
                    message: format!(
                        "expected one of {GROWTH_DENOMINATORS:?}, got \"{denominator}\""
                    ),
                });
            }
        }
        if config.analysis.parallel_threshold == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.parallel_threshold".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(width) = config.chart.bar_width {
            if !(width > 0.0 && width <= 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "chart.bar_width".to_string(),
                    message: "must be in (0.0, 1.0]".to_string(),
                });
            }
        }
        if config.chart.width == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "chart.width".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.chart.height == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "chart.height".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref period) = config.chart.period {
            if period.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "chart.period".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.contrib/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".contrib").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut ContribConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ContribConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a `Some` value.
    fn merge(base: &mut ContribConfig, other: &ContribConfig) {
        // Analysis
        if other.analysis.growth_denominator.is_some() {
            base.analysis.growth_denominator = other.analysis.growth_denominator.clone();
        }
        if other.analysis.strict_finite.is_some() {
            base.analysis.strict_finite = other.analysis.strict_finite;
        }
        if other.analysis.parallel_threshold.is_some() {
            base.analysis.parallel_threshold = other.analysis.parallel_threshold;
        }

        // Chart
        if other.chart.palette.is_some() {
            base.chart.palette = other.chart.palette.clone();
        }
        if other.chart.period.is_some() {
            base.chart.period = other.chart.period.clone();
        }
        if other.chart.bar_width.is_some() {
            base.chart.bar_width = other.chart.bar_width;
        }
        if other.chart.legend_location.is_some() {
            base.chart.legend_location = other.chart.legend_location.clone();
        }
        if other.chart.total_growth.is_some() {
            base.chart.total_growth = other.chart.total_growth;
        }
        if other.chart.output_dir.is_some() {
            base.chart.output_dir = other.chart.output_dir.clone();
        }
        if other.chart.width.is_some() {
            base.chart.width = other.chart.width;
        }
        if other.chart.height.is_some() {
            base.chart.height = other.chart.height;
        }
    }

    /// Apply programmatic overrides (highest priority).
    pub fn apply_overrides(config: &mut ContribConfig, o: &ConfigOverrides) {
        if let Some(ref v) = o.growth_denominator {
            config.analysis.growth_denominator = Some(v.clone());
        }
        if let Some(v) = o.strict_finite {
            config.analysis.strict_finite = Some(v);
        }
        if let Some(v) = o.parallel_threshold {
            config.analysis.parallel_threshold = Some(v);
        }
        if let Some(ref v) = o.palette {
            config.chart.palette = Some(v.clone());
        }
        if let Some(ref v) = o.period {
            config.chart.period = Some(v.clone());
        }
        if let Some(v) = o.bar_width {
            config.chart.bar_width = Some(v);
        }
        if let Some(ref v) = o.legend_location {
            config.chart.legend_location = Some(v.clone());
        }
        if let Some(v) = o.total_growth {
            config.chart.total_growth = Some(v);
        }
        if let Some(ref v) = o.output_dir {
            config.chart.output_dir = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

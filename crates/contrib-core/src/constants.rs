//! Shared constants for Contrib.

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "contrib.toml";

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "CONTRIB_LOG";

/// Fallback log filter when `CONTRIB_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "contrib=info";

/// Growth denominator name: divide by the category's prior-period value.
pub const GROWTH_DENOMINATOR_PRIOR: &str = "prior";

/// Growth denominator name: divide by the category's current-period value.
pub const GROWTH_DENOMINATOR_CURRENT: &str = "current";

/// Every accepted growth denominator name.
pub const GROWTH_DENOMINATORS: [&str; 2] =
    [GROWTH_DENOMINATOR_PRIOR, GROWTH_DENOMINATOR_CURRENT];

/// Default per-category growth denominator.
pub const DEFAULT_GROWTH_DENOMINATOR: &str = GROWTH_DENOMINATOR_PRIOR;

/// Row count at which segment building switches to rayon.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Tolerance for the contribution-sum invariant.
pub const SUM_TOLERANCE: f64 = 1e-9;

/// Default palette name.
pub const DEFAULT_PALETTE: &str = "Colorblind";

/// Default period label.
pub const DEFAULT_PERIOD: &str = "year";

/// Default bar width as a fraction of the period slot.
pub const DEFAULT_BAR_WIDTH: f64 = 0.5;

/// Default legend location.
pub const DEFAULT_LEGEND_LOCATION: &str = "top_right";

/// Default chart width in pixels.
pub const DEFAULT_CHART_WIDTH: u32 = 800;

/// Default chart height in pixels.
pub const DEFAULT_CHART_HEIGHT: u32 = 500;

/// File name of the contribution chart.
pub const CONTRIBUTION_CHART_FILE: &str = "Growth_contribs.html";

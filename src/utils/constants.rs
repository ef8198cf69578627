/// Start time shown before the user enters one
pub const DEFAULT_START_TIME: &str = "01-01-2025 00:00";

/// Output file names
pub const READINGS_FILE: &str = "current_readings.csv";
pub const ANNUAL_MAXIMA_FILE: &str = "annual_maxima.csv";
pub const EXTREMES_FILE: &str = "extreme_readings.csv";
pub const SERIES_FILE: &str = "polar_series.json";
pub const CHART_FILE: &str = "current_rose.svg";

/// Directory for generated outputs
pub const OUTPUT_ROOT: &str = "output";

/// Settings
pub const ENV_PREFIX: &str = "CURRENT_ROSE";
pub const DEFAULT_CHART_TITLE: &str = "Current Rose with Directional Extreme Bars & Annual Maxima";

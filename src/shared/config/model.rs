use serde::Deserialize;

use crate::series::options::{MalformedPolicy, RangeMode};
use crate::shared::datetime::time::TimeConfig;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub series: SeriesConfig,
    pub time: Option<TimeConfig>,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_stdout_level")]
    pub stdout_level: String,
    #[serde(default = "default_file_level")]
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            stdout_level: default_stdout_level(),
            file_level: default_file_level(),
        }
    }
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_stdout_level() -> String {
    "info".to_string()
}

fn default_file_level() -> String {
    "debug".to_string()
}

#[derive(Debug, Deserialize)]
pub struct SeriesConfig {
    /// What to do with a row whose time column cannot be parsed
    #[serde(default)]
    pub malformed_timestamps: MalformedPolicy,
    /// How the first and last bucket of the axis are chosen
    #[serde(default)]
    pub range_mode: RangeMode,
    /// Upper bound on generated buckets before the computation is rejected
    #[serde(default = "default_max_buckets")]
    pub max_buckets: usize,
    /// Value emitted for buckets without an observation
    #[serde(default)]
    pub fill_value: f64,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            malformed_timestamps: MalformedPolicy::default(),
            range_mode: RangeMode::default(),
            max_buckets: default_max_buckets(),
            fill_value: 0.0,
        }
    }
}

fn default_max_buckets() -> usize {
    100_000 // Roughly eleven years of hourly buckets
}

use std::env;

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path =
        env::var("SERIES_BUCKETIZER_CONFIG").unwrap_or_else(|_| "config".to_string());
    load_settings_from(&config_path)
}

/// Load settings from `path` (extension optional), layered under
/// `SERIES_BUCKETIZER__*` environment overrides. A missing file yields defaults.
pub fn load_settings_from(path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix("SERIES_BUCKETIZER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    Ok(settings)
}

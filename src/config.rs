//! Configuration for the crossing counter window.
//!
//! Defaults reproduce the fixed experiment setup. An optional
//! `crossing_counter.yaml` in the working directory may override any field;
//! absent fields keep their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Recording analysed when no override is given.
pub const DEFAULT_DATA_PATH: &str = "experiments/blebbing_1_left_shift_2_stimulation_0.tsv";

/// Name of the optional override file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "crossing_counter.yaml";

/// Length of the recent window in time units.
pub const DEFAULT_WINDOW: f64 = 5000.0;

/// Divisor turning a raw crossing count into the printed rate.
pub const DEFAULT_RATE_DIVISOR: usize = 5;

/// Top-level configuration.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Tab-separated recording to load, relative to the working directory.
    pub data_path: PathBuf,
    /// Recent window length in time units.
    pub window: f64,
    /// The rate is `count / rate_divisor` (integer division).
    pub rate_divisor: usize,
    /// Native window title.
    pub title: String,
    /// RGB color of the threshold line.
    pub cursor_color: [u8; 3],
    /// Show the legend with the channel names.
    pub show_legend: bool,

    /// Optional eframe native-window options.
    #[serde(skip)]
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            window: DEFAULT_WINDOW,
            rate_divisor: DEFAULT_RATE_DIVISOR,
            title: "Crossing Counter".to_string(),
            cursor_color: [0, 0, 0],
            show_legend: true,
            native_options: None,
        }
    }
}

impl CounterConfig {
    /// Parse a YAML document and validate it.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: CounterConfig = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&s)
    }

    /// Load `crossing_counter.yaml` from `dir` if it exists, otherwise return the defaults.
    pub fn load_or_default(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        log::info!("using config overrides from {:?}", path);
        Self::load(&path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.window.is_finite() || self.window <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "window must be a positive number, got {}",
                self.window
            )));
        }
        if self.rate_divisor == 0 {
            return Err(ConfigError::Invalid(
                "rate_divisor must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn cursor_color32(&self) -> egui::Color32 {
        let [r, g, b] = self.cursor_color;
        egui::Color32::from_rgb(r, g, b)
    }
}

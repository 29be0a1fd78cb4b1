//! Configuration file support for gazewatch.
//!
//! Supports TOML configuration from:
//! - XDG config: `~/.config/gazewatch/config.toml` (lowest priority)
//! - Project-local: `.gazewatch.toml` (searched up directory tree)
//! - CLI flags (highest priority, applied separately)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General options.
    pub general: GeneralConfig,
    /// Closed-eyes settings.
    pub eyes: EyesConfig,
    /// Head orientation settings.
    pub head: HeadConfig,
    /// Gaze direction settings.
    pub gaze: GazeConfig,
    /// Degenerate geometry settings.
    pub geometry: GeometryConfig,
    /// Output formatting settings.
    pub output: OutputConfig,
}

/// General configuration options.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Recurse into subdirectories by default.
    pub recursive: Option<bool>,
}

/// Closed-eyes configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct EyesConfig {
    /// Eye aspect ratio threshold.
    pub ear_threshold: Option<f64>,
}

/// Head orientation configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct HeadConfig {
    /// Face-turn ratio below which the face is turned left.
    pub turn_left: Option<f64>,
    /// Face-turn ratio above which the face is turned right.
    pub turn_right: Option<f64>,
    /// Vertical ratio below which the face is tilted up.
    pub tilt_up: Option<f64>,
    /// Vertical ratio above which the face is tilted down.
    pub tilt_down: Option<f64>,
}

/// Gaze direction configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GazeConfig {
    /// Gaze ratio below which the eyes look left.
    pub left: Option<f64>,
    /// Gaze ratio above which the eyes look right.
    pub right: Option<f64>,
}

/// Degenerate geometry configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Shortest span accepted as a ratio denominator.
    pub min_span: Option<f64>,
}

/// Output formatting configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "json" or "jsonl".
    pub format: Option<String>,
    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
    /// Include computed ratios.
    pub metrics: Option<bool>,
    /// Show progress spinner.
    pub progress: Option<bool>,
}

impl AppConfig {
    /// Load configuration from XDG and project-local files.
    ///
    /// Priority (lowest to highest):
    /// 1. XDG config: `~/.config/gazewatch/config.toml`
    /// 2. Project-local: `.gazewatch.toml` (searched up from cwd)
    ///
    /// Missing files are silently ignored. Invalid values are logged as warnings.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(xdg_path) = xdg_config_path() {
            if xdg_path.exists() {
                info!("Loading XDG config: {}", xdg_path.display());
                if let Some(xdg_config) = load_file(&xdg_path) {
                    config = xdg_config;
                }
            } else {
                debug!("XDG config not found: {}", xdg_path.display());
            }
        }

        if let Some(project_path) = find_project_config() {
            info!("Loading project config: {}", project_path.display());
            if let Some(project_config) = load_file(&project_path) {
                config.merge(project_config);
            }
        }

        if let Err(e) = config.validate() {
            eprintln!("warning: {e}");
        }

        config
    }

    /// Validate configuration values are within acceptable ranges.
    fn validate(&self) -> Result<(), String> {
        let thresholds = [
            ("eyes.ear_threshold", self.eyes.ear_threshold),
            ("head.turn_left", self.head.turn_left),
            ("head.turn_right", self.head.turn_right),
            ("head.tilt_up", self.head.tilt_up),
            ("head.tilt_down", self.head.tilt_down),
            ("gaze.left", self.gaze.left),
            ("gaze.right", self.gaze.right),
        ];
        for (name, value) in thresholds {
            if let Some(t) = value {
                if !(0.0..=1.0).contains(&t) {
                    return Err(format!("{name} must be 0.0-1.0, got {t}"));
                }
            }
        }

        let bands = [
            ("head.turn_left", self.head.turn_left, "head.turn_right", self.head.turn_right),
            ("head.tilt_up", self.head.tilt_up, "head.tilt_down", self.head.tilt_down),
            ("gaze.left", self.gaze.left, "gaze.right", self.gaze.right),
        ];
        for (low_name, low, high_name, high) in bands {
            if let (Some(low), Some(high)) = (low, high) {
                if low >= high {
                    return Err(format!(
                        "{low_name} ({low}) must be below {high_name} ({high})"
                    ));
                }
            }
        }

        if let Some(span) = self.geometry.min_span {
            if span.is_nan() || span <= 0.0 {
                return Err(format!("geometry.min_span must be positive, got {span}"));
            }
        }

        if let Some(ref f) = self.output.format {
            if f != "json" && f != "jsonl" {
                return Err(format!(
                    "output.format must be 'json' or 'jsonl', got '{f}'"
                ));
            }
        }

        Ok(())
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` when present.
    fn merge(&mut self, other: Self) {
        // General
        self.general.recursive = other.general.recursive.or(self.general.recursive);

        // Eyes
        self.eyes.ear_threshold = other.eyes.ear_threshold.or(self.eyes.ear_threshold);

        // Head
        self.head.turn_left = other.head.turn_left.or(self.head.turn_left);
        self.head.turn_right = other.head.turn_right.or(self.head.turn_right);
        self.head.tilt_up = other.head.tilt_up.or(self.head.tilt_up);
        self.head.tilt_down = other.head.tilt_down.or(self.head.tilt_down);

        // Gaze
        self.gaze.left = other.gaze.left.or(self.gaze.left);
        self.gaze.right = other.gaze.right.or(self.gaze.right);

        // Geometry
        self.geometry.min_span = other.geometry.min_span.or(self.geometry.min_span);

        // Output
        self.output.format = other.output.format.or_else(|| self.output.format.take());
        self.output.pretty = other.output.pretty.or(self.output.pretty);
        self.output.metrics = other.output.metrics.or(self.output.metrics);
        self.output.progress = other.output.progress.or(self.output.progress);
    }
}

/// Get the XDG config file path.
fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gazewatch").join("config.toml"))
}

/// Find project-local config by searching up from current directory.
fn find_project_config() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_in_parents(&cwd)
}

/// Search for `.gazewatch.toml` in the given directory and its parents.
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        let config_path = dir.join(".gazewatch.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        current = dir.parent();
    }

    None
}

/// Load and parse a TOML config file.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to read config file {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Failed to parse config file {}: {}", path.display(), e);
            None
        }
    }
}

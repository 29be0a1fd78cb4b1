//! Classify command - label landmark frames with attention states.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use gazewatch_adapters::JsonlFrameSource;
use gazewatch_core::{
    run_session, AttentionClassifier, AttentionState, ClassifierConfig, SessionOptions,
    SessionSummary,
};
use tracing::{debug, info};

use super::ExitCode;
use crate::config::AppConfig;
use crate::output::{JsonOutput, OutputFormat, ProgressBar};

/// Parse and validate a threshold value (0.0-1.0).
fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not in 0.0..=1.0"))
    }
}

/// Shared arguments for frame classification.
#[derive(Args, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct ClassifyArgs {
    /// JSON Lines files or directories to classify ("-" reads stdin)
    pub paths: Vec<PathBuf>,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Eye aspect ratio below which the eyes count as closed (0.0-1.0)
    #[arg(long, value_parser = parse_threshold)]
    pub ear_threshold: Option<f64>,

    /// Face-turn ratio below which the face is turned left (0.0-1.0)
    #[arg(long, value_parser = parse_threshold)]
    pub turn_left: Option<f64>,

    /// Face-turn ratio above which the face is turned right (0.0-1.0)
    #[arg(long, value_parser = parse_threshold)]
    pub turn_right: Option<f64>,

    /// Vertical ratio below which the face is tilted up (0.0-1.0)
    #[arg(long, value_parser = parse_threshold)]
    pub tilt_up: Option<f64>,

    /// Vertical ratio above which the face is tilted down (0.0-1.0)
    #[arg(long, value_parser = parse_threshold)]
    pub tilt_down: Option<f64>,

    /// Gaze ratio below which the eyes look left (0.0-1.0)
    #[arg(long, value_parser = parse_threshold)]
    pub gaze_left: Option<f64>,

    /// Gaze ratio above which the eyes look right (0.0-1.0)
    #[arg(long, value_parser = parse_threshold)]
    pub gaze_right: Option<f64>,

    /// Include computed ratios in output
    #[arg(long)]
    pub metrics: bool,

    /// Show progress spinner
    #[arg(long)]
    pub progress: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output (only affects --format json)
    #[arg(long)]
    pub pretty: bool,

    /// Degenerate-span cutoff from config (not a CLI flag).
    #[arg(skip)]
    min_span: Option<f64>,
}

impl ClassifyArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Layering priority (lowest to highest):
    /// 1. Hardcoded defaults (`ClassifierConfig::default()`)
    /// 2. Config file values (XDG, then project-local)
    /// 3. CLI arguments (already set on self)
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        if !args.recursive {
            args.recursive = config.general.recursive.unwrap_or(false);
        }

        // Thresholds: CLI > config
        args.ear_threshold = args.ear_threshold.or(config.eyes.ear_threshold);
        args.turn_left = args.turn_left.or(config.head.turn_left);
        args.turn_right = args.turn_right.or(config.head.turn_right);
        args.tilt_up = args.tilt_up.or(config.head.tilt_up);
        args.tilt_down = args.tilt_down.or(config.head.tilt_down);
        args.gaze_left = args.gaze_left.or(config.gaze.left);
        args.gaze_right = args.gaze_right.or(config.gaze.right);
        args.min_span = args.min_span.or(config.geometry.min_span);

        if args.format.is_none() {
            args.format = config
                .output
                .format
                .as_deref()
                .and_then(|s| match s {
                    "json" => Some(OutputFormat::Json),
                    "jsonl" => Some(OutputFormat::Jsonl),
                    _ => None,
                });
        }

        if !args.pretty {
            args.pretty = config.output.pretty.unwrap_or(false);
        }
        if !args.metrics {
            args.metrics = config.output.metrics.unwrap_or(false);
        }
        if !args.progress {
            args.progress = config.output.progress.unwrap_or(false);
        }

        args
    }

    /// Builds the classifier configuration, filling unset values with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a lower bound is not below its upper bound, or if
    /// the degenerate-span cutoff is not positive.
    pub fn classifier_config(&self) -> Result<ClassifierConfig> {
        let defaults = ClassifierConfig::default();
        let config = ClassifierConfig {
            ear_threshold: self.ear_threshold.unwrap_or(defaults.ear_threshold),
            turn_left: self.turn_left.unwrap_or(defaults.turn_left),
            turn_right: self.turn_right.unwrap_or(defaults.turn_right),
            tilt_up: self.tilt_up.unwrap_or(defaults.tilt_up),
            tilt_down: self.tilt_down.unwrap_or(defaults.tilt_down),
            gaze_left: self.gaze_left.unwrap_or(defaults.gaze_left),
            gaze_right: self.gaze_right.unwrap_or(defaults.gaze_right),
            min_span: self.min_span.unwrap_or(defaults.min_span),
        };

        check_band("turn-left", config.turn_left, "turn-right", config.turn_right)?;
        check_band("tilt-up", config.tilt_up, "tilt-down", config.tilt_down)?;
        check_band("gaze-left", config.gaze_left, "gaze-right", config.gaze_right)?;
        if config.min_span.is_nan() || config.min_span <= 0.0 {
            bail!("min_span must be positive, got {}", config.min_span);
        }

        debug!("Classifier config: {config:?}");
        Ok(config)
    }

    /// Get output format with fallback to JSONL.
    fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

fn check_band(low_name: &str, low: f64, high_name: &str, high: f64) -> Result<()> {
    if low >= high {
        bail!("--{low_name} ({low}) must be below --{high_name} ({high})");
    }
    Ok(())
}

/// Result of running the classify command.
#[allow(dead_code)] // Summary exposed for programmatic use
pub struct ClassifyResult {
    /// Session totals.
    pub summary: SessionSummary,
    /// Exit code.
    pub exit_code: ExitCode,
}

/// Run the classify command.
///
/// Expects `args` to have been processed through `with_config()` first
/// to apply configuration file settings.
pub fn run(args: &ClassifyArgs) -> Result<ClassifyResult> {
    info!("Running classify command on {} paths", args.paths.len());

    if args.paths.is_empty() {
        bail!("No paths specified");
    }

    let classifier = AttentionClassifier::new(args.classifier_config()?);
    let source = JsonlFrameSource::new(args.paths.clone(), args.recursive);

    let show_progress = !args.quiet && (args.progress || std::io::stderr().is_terminal());
    let progress_bar = ProgressBar::new(args.quiet, show_progress);

    let output = JsonOutput::stdout(args.format(), args.pretty);

    let summary = run_session(
        &source,
        &classifier,
        &output,
        &progress_bar,
        SessionOptions {
            include_metrics: args.metrics,
        },
        iso_timestamp,
    )?;

    for state in AttentionState::ALL {
        let count = summary.count(state);
        if count > 0 {
            info!("{}: {count} frame(s)", state.as_str());
        }
    }

    let exit_code = if summary.inattentive > 0 {
        ExitCode::Inattentive
    } else {
        ExitCode::Success
    };

    Ok(ClassifyResult { summary, exit_code })
}

/// Generate ISO 8601 UTC timestamp (RFC 3339 format).
fn iso_timestamp() -> String {
    match time::OffsetDateTime::now_utc().format(&time::format_description::well_known::Rfc3339) {
        Ok(ts) => ts,
        Err(e) => {
            debug!("Timestamp format failed: {e}");
            String::from("1970-01-01T00:00:00Z")
        }
    }
}

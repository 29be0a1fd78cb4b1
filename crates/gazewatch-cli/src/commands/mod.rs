//! CLI command definitions and handlers.

pub mod classify;
pub mod landmarks;

use clap::{Parser, Subcommand};

/// gazewatch - attention-state classification from facial landmarks
#[derive(Parser)]
#[command(name = "gazewatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Shared classify arguments (paths, thresholds, flags).
    #[command(flatten)]
    pub classify: classify::ClassifyArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Classify landmark frames into attention states
    Classify(classify::ClassifyArgs),
    /// Print the landmark roles and their mesh indices
    Landmarks(landmarks::LandmarksArgs),
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Every classified frame was attentive, or nothing was classified.
    Success = 0,
    /// At least one frame was classified as inattentive.
    Inattentive = 1,
    /// Bad arguments, invalid thresholds or an output failure.
    Error = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}

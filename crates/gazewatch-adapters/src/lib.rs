//! gazewatch adapters - external adapters for gazewatch.
//!
//! This crate provides:
//! - A JSON Lines frame source over files, directories and stdin
//! - The detector output wire format

pub mod fs;
pub mod wire;

pub use fs::{JsonlFrameSource, STDIN_PATH};
pub use wire::{parse_frame, DetectorOutput};

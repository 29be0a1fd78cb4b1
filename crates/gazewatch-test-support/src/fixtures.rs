//! Detector-output fixtures in the JSON Lines wire format.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use gazewatch_core::LandmarkFrame;

/// Serializes one detector result containing the given faces.
#[must_use]
pub fn detector_line(faces: &[LandmarkFrame]) -> String {
    serde_json::json!({ "faces": faces }).to_string()
}

/// Serializes a detector result with no faces.
#[must_use]
pub fn no_face_line() -> String {
    detector_line(&[])
}

/// Serializes one detector result per entry; `None` entries have no face.
#[must_use]
pub fn detector_lines(frames: &[Option<LandmarkFrame>]) -> String {
    frames.iter().fold(String::new(), |mut out, frame| {
        let line = frame
            .as_ref()
            .map_or_else(no_face_line, |f| detector_line(std::slice::from_ref(f)));
        let _ = writeln!(out, "{line}");
        out
    })
}

/// Writes detector results to a JSON Lines file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_frames(path: &Path, frames: &[Option<LandmarkFrame>]) -> Result<()> {
    std::fs::write(path, detector_lines(frames))
        .with_context(|| format!("Failed to write {}", path.display()))
}

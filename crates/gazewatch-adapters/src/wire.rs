//! Detector output wire format.
//!
//! One JSON object per frame, shaped like the face-mesh detector's result
//! callback:
//!
//! ```json
//! {"faces": [[{"x": 0.51, "y": 0.43, "z": -0.02}, ...]]}
//! ```
//!
//! `multiFaceLandmarks` is accepted as an alias for `faces`. A missing, null
//! or empty face list means no face was detected.

use anyhow::{Context, Result};
use gazewatch_core::{FrameError, Landmark, LandmarkFrame};
use serde::Deserialize;
use tracing::debug;

/// A single detector result.
///
/// Faces are kept as raw point lists; only the face that is classified is
/// validated.
#[derive(Debug, Default, Deserialize)]
pub struct DetectorOutput {
    /// Landmarks for each detected face.
    #[serde(default, alias = "multiFaceLandmarks")]
    pub faces: Option<Vec<Vec<Landmark>>>,
}

impl DetectorOutput {
    /// Returns the first detected face, discarding any others.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError`] if the first face has too few landmarks.
    pub fn into_first_face(self) -> Result<Option<LandmarkFrame>, FrameError> {
        let Some(faces) = self.faces else {
            return Ok(None);
        };
        let mut faces = faces.into_iter();
        let first = faces.next();
        let extra = faces.count();
        if extra > 0 {
            debug!("Ignoring {extra} additional face(s)");
        }
        first.map(LandmarkFrame::new).transpose()
    }
}

/// Parses one line of detector output into the face to classify.
///
/// # Errors
///
/// Returns an error if the line is not valid JSON or the first face has too
/// few landmarks.
pub fn parse_frame(line: &str) -> Result<Option<LandmarkFrame>> {
    let output: DetectorOutput =
        serde_json::from_str(line).context("Failed to parse detector output")?;
    Ok(output.into_first_face()?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use gazewatch_core::MESH_LANDMARK_COUNT;

    fn face_json(points: usize) -> String {
        let point = r#"{"x":0.5,"y":0.5,"z":0.0}"#;
        format!("[{}]", vec![point; points].join(","))
    }

    #[test]
    fn test_missing_faces_is_no_face() {
        assert!(parse_frame("{}").unwrap().is_none());
        assert!(parse_frame(r#"{"faces": null}"#).unwrap().is_none());
        assert!(parse_frame(r#"{"faces": []}"#).unwrap().is_none());
    }

    #[test]
    fn test_first_face_is_used() {
        let line = format!(
            r#"{{"faces": [{}, {}]}}"#,
            face_json(MESH_LANDMARK_COUNT),
            face_json(MESH_LANDMARK_COUNT)
        );
        let face = parse_frame(&line).unwrap().unwrap();
        assert_eq!(face.len(), MESH_LANDMARK_COUNT);
    }

    #[test]
    fn test_detector_alias_accepted() {
        let line = format!(
            r#"{{"multiFaceLandmarks": [{}]}}"#,
            face_json(MESH_LANDMARK_COUNT)
        );
        assert!(parse_frame(&line).unwrap().is_some());
    }

    #[test]
    fn test_short_face_rejected() {
        let line = format!(r#"{{"faces": [{}]}}"#, face_json(12));
        let err = parse_frame(&line).unwrap_err();
        assert!(format!("{err:#}").contains("12 landmarks"));
    }

    #[test]
    fn test_short_extra_face_ignored() {
        let line = format!(
            r#"{{"faces": [{}, {}]}}"#,
            face_json(MESH_LANDMARK_COUNT),
            face_json(3)
        );
        let face = parse_frame(&line).unwrap().unwrap();
        assert_eq!(face.len(), MESH_LANDMARK_COUNT);
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(parse_frame("{not json").is_err());
    }
}

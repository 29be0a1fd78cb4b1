//! Attention states and per-frame metrics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete attention state for one frame.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttentionState {
    /// Average eye aspect ratio below threshold (closed or blinking).
    EyesClosed,
    /// Head yawed towards the image's left.
    FaceTurnedLeft,
    /// Head yawed towards the image's right.
    FaceTurnedRight,
    /// Head pitched up.
    FaceTiltedUp,
    /// Head pitched down.
    FaceTiltedDown,
    /// Eyes looking left.
    LookingLeft,
    /// Eyes looking right.
    LookingRight,
    /// Face and eyes centered on the screen.
    LookingStraight,
    /// The detector reported no face.
    NoFaceDetected,
    /// Landmark geometry was degenerate and no ratio could be trusted.
    Indeterminate,
}

impl AttentionState {
    /// All states, in classification precedence order.
    pub const ALL: [Self; 10] = [
        Self::EyesClosed,
        Self::FaceTurnedLeft,
        Self::FaceTurnedRight,
        Self::FaceTiltedUp,
        Self::FaceTiltedDown,
        Self::LookingLeft,
        Self::LookingRight,
        Self::LookingStraight,
        Self::NoFaceDetected,
        Self::Indeterminate,
    ];

    /// Machine-readable name, as used in JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EyesClosed => "eyes_closed",
            Self::FaceTurnedLeft => "face_turned_left",
            Self::FaceTurnedRight => "face_turned_right",
            Self::FaceTiltedUp => "face_tilted_up",
            Self::FaceTiltedDown => "face_tilted_down",
            Self::LookingLeft => "looking_left",
            Self::LookingRight => "looking_right",
            Self::LookingStraight => "looking_straight",
            Self::NoFaceDetected => "no_face_detected",
            Self::Indeterminate => "indeterminate",
        }
    }

    /// Human-readable status line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EyesClosed => "Eyes closed or blinking",
            Self::FaceTurnedLeft => "Face turned left",
            Self::FaceTurnedRight => "Face turned right",
            Self::FaceTiltedUp => "Face tilted up",
            Self::FaceTiltedDown => "Face tilted down",
            Self::LookingLeft => "Looking left",
            Self::LookingRight => "Looking right",
            Self::LookingStraight => "Looking straight at screen",
            Self::NoFaceDetected => "No face detected",
            Self::Indeterminate => "Indeterminate",
        }
    }

    /// True only when the user is looking straight at the screen.
    #[must_use]
    pub const fn is_attentive(self) -> bool {
        matches!(self, Self::LookingStraight)
    }
}

impl fmt::Display for AttentionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ratios computed while classifying a frame.
///
/// A ratio is `None` when classification stopped before reaching it, or when
/// its denominator was degenerate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttentionMetrics {
    /// Mean eye aspect ratio of both eyes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_ear: Option<f64>,
    /// Nose position between the cheeks (0 = left cheek, 1 = right cheek).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_turn_ratio: Option<f64>,
    /// Nose position between forehead and chin (0 = forehead, 1 = chin).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_face_ratio: Option<f64>,
    /// Mean horizontal pupil offset within the eye span.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gaze_ratio: Option<f64>,
}

/// Outcome of classifying one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// The attention state.
    pub state: AttentionState,
    /// Ratios computed along the way.
    pub metrics: AttentionMetrics,
}

impl Classification {
    /// A classification with no computed metrics.
    #[must_use]
    pub fn bare(state: AttentionState) -> Self {
        Self {
            state,
            metrics: AttentionMetrics::default(),
        }
    }
}

//! Attention-state classification from face-mesh landmarks.
//!
//! Rules run in a fixed precedence order and the first match wins:
//! 1. Eye aspect ratio (closed eyes)
//! 2. Horizontal face turn
//! 3. Vertical face tilt
//! 4. Gaze direction
//!
//! Each ratio is computed only when its rule is reached, so a degenerate
//! span in a later rule cannot override an earlier match.

use tracing::trace;

use super::geometry::{average_ear, average_gaze_ratio, face_turn_ratio, vertical_face_ratio};
use crate::domain::{AttentionMetrics, AttentionState, Classification, LandmarkFrame};

/// Thresholds for attention classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierConfig {
    /// Average eye aspect ratio below which eyes count as closed.
    pub ear_threshold: f64,
    /// Face-turn ratio below which the face is turned left.
    pub turn_left: f64,
    /// Face-turn ratio above which the face is turned right.
    pub turn_right: f64,
    /// Vertical face ratio below which the face is tilted up.
    pub tilt_up: f64,
    /// Vertical face ratio above which the face is tilted down.
    pub tilt_down: f64,
    /// Gaze ratio below which the eyes look left.
    pub gaze_left: f64,
    /// Gaze ratio above which the eyes look right.
    pub gaze_right: f64,
    /// Shortest span accepted as a ratio denominator.
    pub min_span: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            ear_threshold: 0.2,
            turn_left: 0.4,
            turn_right: 0.6,
            tilt_up: 0.4,
            tilt_down: 0.6,
            gaze_left: 0.4,
            gaze_right: 0.6,
            min_span: 1e-6,
        }
    }
}

impl ClassifierConfig {
    /// Sets the closed-eyes threshold.
    #[must_use]
    pub const fn with_ear_threshold(mut self, threshold: f64) -> Self {
        self.ear_threshold = threshold;
        self
    }

    /// Sets the face-turn band.
    #[must_use]
    pub const fn with_turn_thresholds(mut self, left: f64, right: f64) -> Self {
        self.turn_left = left;
        self.turn_right = right;
        self
    }

    /// Sets the face-tilt band.
    #[must_use]
    pub const fn with_tilt_thresholds(mut self, up: f64, down: f64) -> Self {
        self.tilt_up = up;
        self.tilt_down = down;
        self
    }

    /// Sets the gaze band.
    #[must_use]
    pub const fn with_gaze_thresholds(mut self, left: f64, right: f64) -> Self {
        self.gaze_left = left;
        self.gaze_right = right;
        self
    }

    /// Sets the degenerate-span cutoff.
    #[must_use]
    pub const fn with_min_span(mut self, min_span: f64) -> Self {
        self.min_span = min_span;
        self
    }
}

/// Stateless attention classifier.
#[derive(Debug, Clone, Default)]
pub struct AttentionClassifier {
    config: ClassifierConfig,
}

impl AttentionClassifier {
    /// Creates a classifier with the given thresholds.
    #[must_use]
    pub const fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Returns the active thresholds.
    #[must_use]
    pub const fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classifies one frame. `None` means the detector found no face.
    #[must_use]
    pub fn classify(&self, face: Option<&LandmarkFrame>) -> Classification {
        let Some(face) = face else {
            return Classification::bare(AttentionState::NoFaceDetected);
        };

        let mut metrics = AttentionMetrics::default();
        let state = self.evaluate(face, &mut metrics);
        trace!(?state, ?metrics, "classified frame");

        Classification { state, metrics }
    }

    fn evaluate(&self, face: &LandmarkFrame, metrics: &mut AttentionMetrics) -> AttentionState {
        let cfg = &self.config;

        let Some(ear) = average_ear(face, cfg.min_span) else {
            return AttentionState::Indeterminate;
        };
        metrics.average_ear = Some(ear);
        if ear < cfg.ear_threshold {
            return AttentionState::EyesClosed;
        }

        let Some(turn) = face_turn_ratio(face, cfg.min_span) else {
            return AttentionState::Indeterminate;
        };
        metrics.face_turn_ratio = Some(turn);
        if turn < cfg.turn_left {
            return AttentionState::FaceTurnedLeft;
        }
        if turn > cfg.turn_right {
            return AttentionState::FaceTurnedRight;
        }

        let Some(vertical) = vertical_face_ratio(face, cfg.min_span) else {
            return AttentionState::Indeterminate;
        };
        metrics.vertical_face_ratio = Some(vertical);
        if vertical < cfg.tilt_up {
            return AttentionState::FaceTiltedUp;
        }
        if vertical > cfg.tilt_down {
            return AttentionState::FaceTiltedDown;
        }

        let Some(gaze) = average_gaze_ratio(face, cfg.min_span) else {
            return AttentionState::Indeterminate;
        };
        metrics.gaze_ratio = Some(gaze);
        if gaze < cfg.gaze_left {
            return AttentionState::LookingLeft;
        }
        if gaze > cfg.gaze_right {
            return AttentionState::LookingRight;
        }

        AttentionState::LookingStraight
    }
}

/// Classifies one frame with default thresholds.
#[must_use]
pub fn classify(face: Option<&LandmarkFrame>) -> AttentionState {
    AttentionClassifier::default().classify(face).state
}

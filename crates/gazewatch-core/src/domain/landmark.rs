//! Facial landmarks and the face-mesh index table.

use std::ops::Index;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of points in the canonical face mesh.
pub const MESH_LANDMARK_COUNT: usize = 468;

/// Number of points when the detector also refines iris landmarks.
pub const REFINED_MESH_LANDMARK_COUNT: usize = 478;

/// A single facial landmark in normalized image coordinates.
///
/// `x` and `y` are fractions of the image width and height. They are
/// conceptually in `0.0..=1.0` but are not clamped. `z` is carried through
/// from the detector and ignored by the classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position (fraction of image width).
    pub x: f64,
    /// Vertical position (fraction of image height).
    pub y: f64,
    /// Relative depth.
    #[serde(default)]
    pub z: f64,
}

impl Landmark {
    /// Creates a 2D landmark with zero depth.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Returns true when both image coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Semantic role of a landmark used by the attention classifier.
///
/// Each role maps to one fixed index in the detector's face-mesh topology.
/// This is the only place those indices are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandmarkRole {
    /// Nose tip (mesh index 1).
    NoseTip,
    /// Top of the forehead (mesh index 10).
    Forehead,
    /// Bottom of the chin (mesh index 152).
    Chin,
    /// Left cheek edge (mesh index 234).
    LeftCheek,
    /// Right cheek edge (mesh index 454).
    RightCheek,
    /// Left upper eyelid (mesh index 159).
    LeftEyeTop,
    /// Left lower eyelid (mesh index 145).
    LeftEyeBottom,
    /// Left eye corner nearest the nose (mesh index 133).
    LeftEyeInner,
    /// Left eye corner nearest the temple (mesh index 33).
    LeftEyeOuter,
    /// Right upper eyelid (mesh index 386).
    RightEyeTop,
    /// Right lower eyelid (mesh index 374).
    RightEyeBottom,
    /// Right eye corner nearest the nose (mesh index 362).
    RightEyeInner,
    /// Right eye corner nearest the temple (mesh index 263).
    RightEyeOuter,
}

impl LandmarkRole {
    /// All roles, in table order.
    pub const ALL: [Self; 13] = [
        Self::NoseTip,
        Self::Forehead,
        Self::Chin,
        Self::LeftCheek,
        Self::RightCheek,
        Self::LeftEyeTop,
        Self::LeftEyeBottom,
        Self::LeftEyeInner,
        Self::LeftEyeOuter,
        Self::RightEyeTop,
        Self::RightEyeBottom,
        Self::RightEyeInner,
        Self::RightEyeOuter,
    ];

    /// Face-mesh index of this role.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::NoseTip => 1,
            Self::Forehead => 10,
            Self::Chin => 152,
            Self::LeftCheek => 234,
            Self::RightCheek => 454,
            Self::LeftEyeTop => 159,
            Self::LeftEyeBottom => 145,
            Self::LeftEyeInner => 133,
            Self::LeftEyeOuter => 33,
            Self::RightEyeTop => 386,
            Self::RightEyeBottom => 374,
            Self::RightEyeInner => 362,
            Self::RightEyeOuter => 263,
        }
    }

    /// Stable snake_case name of this role.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NoseTip => "nose_tip",
            Self::Forehead => "forehead",
            Self::Chin => "chin",
            Self::LeftCheek => "left_cheek",
            Self::RightCheek => "right_cheek",
            Self::LeftEyeTop => "left_eye_top",
            Self::LeftEyeBottom => "left_eye_bottom",
            Self::LeftEyeInner => "left_eye_inner",
            Self::LeftEyeOuter => "left_eye_outer",
            Self::RightEyeTop => "right_eye_top",
            Self::RightEyeBottom => "right_eye_bottom",
            Self::RightEyeInner => "right_eye_inner",
            Self::RightEyeOuter => "right_eye_outer",
        }
    }

    /// Minimum frame length that contains every role.
    #[must_use]
    pub const fn required_len() -> usize {
        let mut max = 0;
        let mut i = 0;
        while i < Self::ALL.len() {
            let idx = Self::ALL[i].index();
            if idx > max {
                max = idx;
            }
            i += 1;
        }
        max + 1
    }
}

/// The four landmarks describing one eye.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EyeRoles {
    /// Upper eyelid.
    pub top: LandmarkRole,
    /// Lower eyelid.
    pub bottom: LandmarkRole,
    /// Corner nearest the nose.
    pub inner: LandmarkRole,
    /// Corner nearest the temple.
    pub outer: LandmarkRole,
}

impl EyeRoles {
    /// The subject's left eye.
    pub const LEFT: Self = Self {
        top: LandmarkRole::LeftEyeTop,
        bottom: LandmarkRole::LeftEyeBottom,
        inner: LandmarkRole::LeftEyeInner,
        outer: LandmarkRole::LeftEyeOuter,
    };

    /// The subject's right eye.
    pub const RIGHT: Self = Self {
        top: LandmarkRole::RightEyeTop,
        bottom: LandmarkRole::RightEyeBottom,
        inner: LandmarkRole::RightEyeInner,
        outer: LandmarkRole::RightEyeOuter,
    };
}

/// Errors raised when building a [`LandmarkFrame`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// The detector output is shorter than the highest required index.
    #[error("face has {found} landmarks, at least {required} are required")]
    TooFewLandmarks {
        /// Number of landmarks supplied.
        found: usize,
        /// Number of landmarks needed to cover every role.
        required: usize,
    },
}

/// All landmarks for one detected face.
///
/// A frame is guaranteed to contain every [`LandmarkRole`], so role lookups
/// through `frame[role]` never go out of bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct LandmarkFrame {
    points: Vec<Landmark>,
}

impl LandmarkFrame {
    /// Builds a frame from detector output.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::TooFewLandmarks`] if any role index is missing.
    pub fn new(points: Vec<Landmark>) -> Result<Self, FrameError> {
        let required = LandmarkRole::required_len();
        if points.len() < required {
            return Err(FrameError::TooFewLandmarks {
                found: points.len(),
                required,
            });
        }
        Ok(Self { points })
    }

    /// Returns the landmark for a role.
    #[must_use]
    pub fn get(&self, role: LandmarkRole) -> &Landmark {
        &self.points[role.index()]
    }

    /// Number of landmarks in the frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a valid frame is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All landmarks in mesh order.
    #[must_use]
    pub fn points(&self) -> &[Landmark] {
        &self.points
    }
}

impl Index<LandmarkRole> for LandmarkFrame {
    type Output = Landmark;

    fn index(&self, role: LandmarkRole) -> &Landmark {
        self.get(role)
    }
}

impl TryFrom<Vec<Landmark>> for LandmarkFrame {
    type Error = FrameError;

    fn try_from(points: Vec<Landmark>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<LandmarkFrame> for Vec<Landmark> {
    fn from(frame: LandmarkFrame) -> Self {
        frame.points
    }
}

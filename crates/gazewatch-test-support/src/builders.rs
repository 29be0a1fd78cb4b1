//! Synthetic landmark frame builders for testing.

use gazewatch_core::{Landmark, LandmarkFrame, LandmarkRole, REFINED_MESH_LANDMARK_COUNT};

/// Builder for synthetic faces with chosen classifier ratios.
///
/// Landmarks are laid out on a plausible frontal face: cheeks at x = 0.3 and
/// 0.7, forehead and chin at y = 0.2 and 0.8, eyes 0.1 wide at y = 0.4. The
/// nose and eyelids are then placed so that the face-turn, vertical-face,
/// per-eye gaze and per-eye aspect ratios equal the requested values (up to
/// float rounding).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticFaceBuilder {
    ear: f64,
    turn: f64,
    vertical: f64,
    gaze: f64,
    point_count: usize,
    degenerate_cheeks: bool,
}

const LEFT_CHEEK_X: f64 = 0.3;
const RIGHT_CHEEK_X: f64 = 0.7;
const FOREHEAD_Y: f64 = 0.2;
const CHIN_Y: f64 = 0.8;
const EYE_Y: f64 = 0.4;
const EYE_WIDTH: f64 = 0.1;
const LEFT_EYE_INNER_X: f64 = 0.45;
const RIGHT_EYE_INNER_X: f64 = 0.55;

impl Default for SyntheticFaceBuilder {
    fn default() -> Self {
        Self::frontal()
    }
}

impl SyntheticFaceBuilder {
    // === Presets ===

    /// Open eyes, centered head, centered gaze.
    #[must_use]
    pub const fn frontal() -> Self {
        Self {
            ear: 0.3,
            turn: 0.5,
            vertical: 0.5,
            gaze: 0.5,
            point_count: REFINED_MESH_LANDMARK_COUNT,
            degenerate_cheeks: false,
        }
    }

    /// Eyes closed, everything else frontal.
    #[must_use]
    pub const fn eyes_closed() -> Self {
        Self::frontal().with_ear(0.1)
    }

    /// Head turned left.
    #[must_use]
    pub const fn turned_left() -> Self {
        Self::frontal().with_turn(0.2)
    }

    /// Head turned right.
    #[must_use]
    pub const fn turned_right() -> Self {
        Self::frontal().with_turn(0.8)
    }

    /// Head tilted up.
    #[must_use]
    pub const fn tilted_up() -> Self {
        Self::frontal().with_vertical(0.2)
    }

    /// Head tilted down.
    #[must_use]
    pub const fn tilted_down() -> Self {
        Self::frontal().with_vertical(0.8)
    }

    /// Gaze to the left.
    #[must_use]
    pub const fn looking_left() -> Self {
        Self::frontal().with_gaze(0.2)
    }

    /// Gaze to the right.
    #[must_use]
    pub const fn looking_right() -> Self {
        Self::frontal().with_gaze(0.8)
    }

    /// Side profile: both cheek landmarks share one x coordinate.
    #[must_use]
    pub const fn profile() -> Self {
        let mut builder = Self::frontal();
        builder.degenerate_cheeks = true;
        builder
    }

    // === Overrides ===

    /// Sets the eye aspect ratio of both eyes.
    #[must_use]
    pub const fn with_ear(mut self, ear: f64) -> Self {
        self.ear = ear;
        self
    }

    /// Sets the face-turn ratio.
    #[must_use]
    pub const fn with_turn(mut self, turn: f64) -> Self {
        self.turn = turn;
        self
    }

    /// Sets the vertical face ratio.
    #[must_use]
    pub const fn with_vertical(mut self, vertical: f64) -> Self {
        self.vertical = vertical;
        self
    }

    /// Sets the gaze ratio of both eyes.
    #[must_use]
    pub const fn with_gaze(mut self, gaze: f64) -> Self {
        self.gaze = gaze;
        self
    }

    /// Sets the total number of landmarks (defaults to the refined mesh size).
    #[must_use]
    pub const fn with_point_count(mut self, count: usize) -> Self {
        self.point_count = count;
        self
    }

    /// Returns the raw landmark list without validating its length.
    #[must_use]
    pub fn points(&self) -> Vec<Landmark> {
        let mut points = vec![Landmark::new(0.5, 0.5); self.point_count];
        let mut set = |role: LandmarkRole, x: f64, y: f64| {
            if let Some(p) = points.get_mut(role.index()) {
                *p = Landmark::new(x, y);
            }
        };

        let right_cheek_x = if self.degenerate_cheeks {
            LEFT_CHEEK_X
        } else {
            RIGHT_CHEEK_X
        };
        set(LandmarkRole::LeftCheek, LEFT_CHEEK_X, 0.5);
        set(LandmarkRole::RightCheek, right_cheek_x, 0.5);
        set(LandmarkRole::Forehead, 0.5, FOREHEAD_Y);
        set(LandmarkRole::Chin, 0.5, CHIN_Y);
        set(
            LandmarkRole::NoseTip,
            self.turn.mul_add(RIGHT_CHEEK_X - LEFT_CHEEK_X, LEFT_CHEEK_X),
            self.vertical.mul_add(CHIN_Y - FOREHEAD_Y, FOREHEAD_Y),
        );

        let half_lid = self.ear * EYE_WIDTH / 2.0;

        // Left eye opens towards smaller x.
        let left_outer_x = LEFT_EYE_INNER_X - EYE_WIDTH;
        let left_pupil_x = self.gaze.mul_add(-EYE_WIDTH, LEFT_EYE_INNER_X);
        set(LandmarkRole::LeftEyeInner, LEFT_EYE_INNER_X, EYE_Y);
        set(LandmarkRole::LeftEyeOuter, left_outer_x, EYE_Y);
        set(LandmarkRole::LeftEyeTop, left_pupil_x, EYE_Y - half_lid);
        set(LandmarkRole::LeftEyeBottom, left_pupil_x, EYE_Y + half_lid);

        // Right eye opens towards larger x.
        let right_outer_x = RIGHT_EYE_INNER_X + EYE_WIDTH;
        let right_pupil_x = self.gaze.mul_add(EYE_WIDTH, RIGHT_EYE_INNER_X);
        set(LandmarkRole::RightEyeInner, RIGHT_EYE_INNER_X, EYE_Y);
        set(LandmarkRole::RightEyeOuter, right_outer_x, EYE_Y);
        set(LandmarkRole::RightEyeTop, right_pupil_x, EYE_Y - half_lid);
        set(LandmarkRole::RightEyeBottom, right_pupil_x, EYE_Y + half_lid);

        points
    }

    /// Builds the frame.
    ///
    /// # Panics
    ///
    /// Panics if the point count is too small to hold every landmark role.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn build(&self) -> LandmarkFrame {
        LandmarkFrame::new(self.points()).expect("synthetic face has too few landmarks")
    }
}

//! Ratio computations over face-mesh landmarks.
//!
//! Every ratio returns `None` when its denominator is shorter than `min_span`
//! or when any input is non-finite.

use crate::domain::{EyeRoles, Landmark, LandmarkFrame, LandmarkRole};

/// Euclidean distance between two landmarks in the image plane.
#[must_use]
pub fn distance(a: &Landmark, b: &Landmark) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Midpoint of two landmarks in the image plane.
#[must_use]
pub fn midpoint(a: &Landmark, b: &Landmark) -> Landmark {
    Landmark::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Divides `numerator` by `denominator`, rejecting degenerate spans.
#[must_use]
pub fn ratio(numerator: f64, denominator: f64, min_span: f64) -> Option<f64> {
    if !numerator.is_finite() || !denominator.is_finite() || denominator.abs() < min_span {
        return None;
    }
    let value = numerator / denominator;
    value.is_finite().then_some(value)
}

/// Eye aspect ratio: eyelid separation over corner-to-corner width.
#[must_use]
pub fn eye_aspect_ratio(face: &LandmarkFrame, eye: EyeRoles, min_span: f64) -> Option<f64> {
    let vertical = distance(&face[eye.top], &face[eye.bottom]);
    let horizontal = distance(&face[eye.inner], &face[eye.outer]);
    ratio(vertical, horizontal, min_span)
}

/// Mean eye aspect ratio of both eyes.
#[must_use]
pub fn average_ear(face: &LandmarkFrame, min_span: f64) -> Option<f64> {
    let left = eye_aspect_ratio(face, EyeRoles::LEFT, min_span)?;
    let right = eye_aspect_ratio(face, EyeRoles::RIGHT, min_span)?;
    Some((left + right) / 2.0)
}

/// Horizontal nose position between the cheeks.
#[must_use]
pub fn face_turn_ratio(face: &LandmarkFrame, min_span: f64) -> Option<f64> {
    let nose = face[LandmarkRole::NoseTip];
    let left = face[LandmarkRole::LeftCheek];
    let right = face[LandmarkRole::RightCheek];
    ratio(nose.x - left.x, right.x - left.x, min_span)
}

/// Vertical nose position between forehead and chin.
#[must_use]
pub fn vertical_face_ratio(face: &LandmarkFrame, min_span: f64) -> Option<f64> {
    let nose = face[LandmarkRole::NoseTip];
    let forehead = face[LandmarkRole::Forehead];
    let chin = face[LandmarkRole::Chin];
    ratio(nose.y - forehead.y, chin.y - forehead.y, min_span)
}

/// Horizontal pupil offset from the inner corner, as a fraction of eye width.
///
/// The pupil is approximated by the midpoint of the two eyelid landmarks.
#[must_use]
pub fn gaze_ratio(face: &LandmarkFrame, eye: EyeRoles, min_span: f64) -> Option<f64> {
    let pupil = midpoint(&face[eye.top], &face[eye.bottom]);
    let inner = face[eye.inner];
    let outer = face[eye.outer];
    ratio((pupil.x - inner.x).abs(), (outer.x - inner.x).abs(), min_span)
}

/// Mean gaze ratio of both eyes.
#[must_use]
pub fn average_gaze_ratio(face: &LandmarkFrame, min_span: f64) -> Option<f64> {
    let left = gaze_ratio(face, EyeRoles::LEFT, min_span)?;
    let right = gaze_ratio(face, EyeRoles::RIGHT, min_span)?;
    Some((left + right) / 2.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::domain::MESH_LANDMARK_COUNT;

    const SPAN: f64 = 1e-6;

    fn blank_face() -> Vec<Landmark> {
        vec![Landmark::default(); MESH_LANDMARK_COUNT]
    }

    #[test]
    fn test_distance_and_midpoint() {
        let a = Landmark::new(0.0, 0.0);
        let b = Landmark::new(0.3, 0.4);
        assert!((distance(&a, &b) - 0.5).abs() < 1e-6);
        assert_eq!(midpoint(&a, &b), Landmark::new(0.15, 0.2));
    }

    #[test]
    fn test_ratio_rejects_degenerate_denominator() {
        assert_eq!(ratio(0.5, 0.0, SPAN), None);
        assert_eq!(ratio(0.5, 1e-9, SPAN), None);
        assert_eq!(ratio(f64::NAN, 1.0, SPAN), None);
        assert_eq!(ratio(0.5, f64::INFINITY, SPAN), None);
        assert_eq!(ratio(0.5, 1.0, SPAN), Some(0.5));
        assert_eq!(ratio(0.5, -1.0, SPAN), Some(-0.5));
    }

    #[test]
    fn test_eye_aspect_ratio() {
        let mut points = blank_face();
        points[LandmarkRole::LeftEyeInner.index()] = Landmark::new(0.4, 0.4);
        points[LandmarkRole::LeftEyeOuter.index()] = Landmark::new(0.3, 0.4);
        points[LandmarkRole::LeftEyeTop.index()] = Landmark::new(0.35, 0.385);
        points[LandmarkRole::LeftEyeBottom.index()] = Landmark::new(0.35, 0.415);
        let face = LandmarkFrame::new(points).unwrap();

        let ear = eye_aspect_ratio(&face, EyeRoles::LEFT, SPAN).unwrap();
        assert!((ear - 0.3).abs() < 1e-4);
        // Right eye corners coincide at the origin.
        assert_eq!(eye_aspect_ratio(&face, EyeRoles::RIGHT, SPAN), None);
        assert_eq!(average_ear(&face, SPAN), None);
    }

    #[test]
    fn test_face_ratios() {
        let mut points = blank_face();
        points[LandmarkRole::LeftCheek.index()] = Landmark::new(0.0, 0.5);
        points[LandmarkRole::RightCheek.index()] = Landmark::new(1.0, 0.5);
        points[LandmarkRole::Forehead.index()] = Landmark::new(0.5, 0.0);
        points[LandmarkRole::Chin.index()] = Landmark::new(0.5, 1.0);
        points[LandmarkRole::NoseTip.index()] = Landmark::new(0.25, 0.75);
        let face = LandmarkFrame::new(points).unwrap();

        assert_eq!(face_turn_ratio(&face, SPAN), Some(0.25));
        assert_eq!(vertical_face_ratio(&face, SPAN), Some(0.75));
    }

    #[test]
    fn test_gaze_ratio_is_direction_independent() {
        let mut points = blank_face();
        // Left eye: outer corner left of inner corner.
        points[LandmarkRole::LeftEyeOuter.index()] = Landmark::new(0.0, 0.5);
        points[LandmarkRole::LeftEyeInner.index()] = Landmark::new(1.0, 0.5);
        points[LandmarkRole::LeftEyeTop.index()] = Landmark::new(0.75, 0.4);
        points[LandmarkRole::LeftEyeBottom.index()] = Landmark::new(0.75, 0.6);
        // Right eye: mirrored.
        points[LandmarkRole::RightEyeInner.index()] = Landmark::new(0.0, 0.5);
        points[LandmarkRole::RightEyeOuter.index()] = Landmark::new(1.0, 0.5);
        points[LandmarkRole::RightEyeTop.index()] = Landmark::new(0.25, 0.4);
        points[LandmarkRole::RightEyeBottom.index()] = Landmark::new(0.25, 0.6);
        let face = LandmarkFrame::new(points).unwrap();

        assert_eq!(gaze_ratio(&face, EyeRoles::LEFT, SPAN), Some(0.25));
        assert_eq!(gaze_ratio(&face, EyeRoles::RIGHT, SPAN), Some(0.25));
        assert_eq!(average_gaze_ratio(&face, SPAN), Some(0.25));
    }
}

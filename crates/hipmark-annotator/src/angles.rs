//! Hip conformation angle calculations.
//!
//! Pure functions over image-space coordinates. Image space has +Y pointing
//! down, so "up" (the vertical reference) is the negative Y direction.
//! A zero-length vector never raises an error; the angle is reported as `0.0`.

use std::fmt;

use hipmark_core::constants::NORBERG_REFERENCE_LENGTH;
use hipmark_core::Side;

use crate::model::{FemurCircle, Keypoint, Point};

/// Angle in degrees between the vertical reference through `center` and the
/// line from `center` to `point`.
///
/// When `point` lies left of `center` the result is mirrored to
/// `180 - angle`, so the metric grows away from the body midline on both sides.
pub fn norberg_angle(center: Point, point: Point) -> f64 {
    let v1 = (0.0, -NORBERG_REFERENCE_LENGTH);
    let v2 = point.delta_from(&center);

    let dot = v1.0 * v2.0 + v1.1 * v2.1;
    let mag1 = (v1.0 * v1.0 + v1.1 * v1.1).sqrt();
    let mag2 = (v2.0 * v2.0 + v2.1 * v2.1).sqrt();

    if mag1 == 0.0 || mag2 == 0.0 {
        return 0.0;
    }

    let mut angle = (dot / (mag1 * mag2)).clamp(-1.0, 1.0).acos().to_degrees();
    if point.x < center.x {
        angle = 180.0 - angle;
    }
    angle
}

/// Included angle in degrees at `vertex` between `vertex -> point1` and
/// `vertex -> point2`. Always within `[0, 180]`.
pub fn joint_angle(point1: Point, vertex: Point, point2: Point) -> f64 {
    let v1 = point1.delta_from(&vertex);
    let v2 = point2.delta_from(&vertex);

    let dot = v1.0 * v2.0 + v1.1 * v2.1;
    let mag1 = (v1.0 * v1.0 + v1.1 * v1.1).sqrt();
    let mag2 = (v2.0 * v2.0 + v2.1 * v2.1).sqrt();

    if mag1 == 0.0 || mag2 == 0.0 {
        return 0.0;
    }

    // Near-colinear inputs can overshoot [-1, 1] and make acos return NaN.
    let cos = (dot / (mag1 * mag2)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// The four derived measurements of one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HipAngles {
    pub left_norberg: f64,
    pub right_norberg: f64,
    pub left_joint: f64,
    pub right_joint: f64,
}

impl HipAngles {
    /// Computes both sides from the two acetabulum keypoints and femoral head circles.
    ///
    /// Each side's joint angle is measured at its own circle center, between
    /// its keypoint and the opposite circle center.
    pub fn compute(
        left_keypoint: &Keypoint,
        right_keypoint: &Keypoint,
        left_circle: &FemurCircle,
        right_circle: &FemurCircle,
    ) -> Self {
        let left_center = left_circle.center();
        let right_center = right_circle.center();

        Self {
            left_norberg: norberg_angle(left_center, left_keypoint.position()),
            right_norberg: norberg_angle(right_center, right_keypoint.position()),
            left_joint: joint_angle(left_keypoint.position(), left_center, right_center),
            right_joint: joint_angle(right_keypoint.position(), right_center, left_center),
        }
    }

    pub fn norberg(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.left_norberg,
            Side::Right => self.right_norberg,
        }
    }

    pub fn joint(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.left_joint,
            Side::Right => self.right_joint,
        }
    }

    pub fn average_norberg(&self) -> f64 {
        (self.left_norberg + self.right_norberg) / 2.0
    }

    pub fn average_joint(&self) -> f64 {
        (self.left_joint + self.right_joint) / 2.0
    }
}

impl fmt::Display for HipAngles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "LEFT: Norberg {:.1}°, Joint {:.1}°", self.left_norberg, self.left_joint)?;
        writeln!(f, "RIGHT: Norberg {:.1}°, Joint {:.1}°", self.right_norberg, self.right_joint)?;
        write!(
            f,
            "AVERAGE: Norberg {:.1}°, Joint {:.1}°",
            self.average_norberg(),
            self.average_joint()
        )
    }
}

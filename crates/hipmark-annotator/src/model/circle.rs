use serde::{Deserialize, Serialize};

use super::{AnnotationShape, Cardinal, Handle, Point};

/// Femoral head circle.
///
/// Invariant: `radius >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FemurCircle {
    #[serde(alias = "center_x")]
    center_x: f64,
    #[serde(alias = "center_y")]
    center_y: f64,
    #[serde(deserialize_with = "non_negative")]
    radius: f64,
}

fn non_negative<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let r = f64::deserialize(deserializer)?;
    Ok(r.abs())
}

impl FemurCircle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center_x: center.x,
            center_y: center.y,
            radius: radius.abs(),
        }
    }

    /// Circle centered at `center` passing through `rim`.
    pub fn through(center: Point, rim: Point) -> Self {
        Self::new(center, center.distance_to(&rim))
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Sets the radius so the circumference passes through `p`; the center stays put.
    pub fn resize_to(&mut self, p: Point) {
        self.radius = self.center().distance_to(&p);
    }
}

impl AnnotationShape for FemurCircle {
    fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.center_x - self.radius,
            self.center_y - self.radius,
            self.center_x + self.radius,
            self.center_y + self.radius,
        )
    }

    // Radius is unaffected by a move.
    fn translate(&mut self, dx: f64, dy: f64) {
        self.center_x += dx;
        self.center_y += dy;
    }

    /// Hits near the circumference or on the center dot.
    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        let dist = self.center().distance_to(&p);
        (dist - self.radius).abs() <= tolerance || dist <= tolerance
    }

    fn handles(&self) -> Vec<(Handle, Point)> {
        let (cx, cy, r) = (self.center_x, self.center_y, self.radius);
        vec![
            (Handle::Cardinal(Cardinal::E), Point::new(cx + r, cy)),
            (Handle::Cardinal(Cardinal::W), Point::new(cx - r, cy)),
            (Handle::Cardinal(Cardinal::S), Point::new(cx, cy + r)),
            (Handle::Cardinal(Cardinal::N), Point::new(cx, cy - r)),
        ]
    }
}

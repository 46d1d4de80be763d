use serde::{Deserialize, Serialize};

use super::{AnnotationShape, Point};

/// Acetabulum landmark. The side is carried by the slot it is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub x: f64,
    pub y: f64,
}

impl Keypoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<Point> for Keypoint {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl AnnotationShape for Keypoint {
    fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.x, self.y)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        self.position().distance_to(&p) <= tolerance
    }
}

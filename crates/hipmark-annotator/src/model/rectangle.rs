use serde::{Deserialize, Serialize};

use super::{AnnotationShape, Corner, Handle, Point};

/// Pelvis bounding rectangle.
///
/// Invariant: `x1 <= x2` and `y1 <= y2`. Every constructor and mutator
/// re-normalizes, so the invariant holds even in the middle of a resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRect")]
pub struct PelvisRect {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

/// Unchecked wire form; normalized on the way in.
#[derive(Deserialize)]
struct RawRect {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl From<RawRect> for PelvisRect {
    fn from(raw: RawRect) -> Self {
        PelvisRect::new(raw.x1, raw.y1, raw.x2, raw.y2)
    }
}

impl PelvisRect {
    /// Builds a rectangle from any two opposite corners.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let mut rect = Self { x1, y1, x2, y2 };
        rect.normalize();
        rect
    }

    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    pub fn x1(&self) -> f64 {
        self.x1
    }

    pub fn y1(&self) -> f64 {
        self.y1
    }

    pub fn x2(&self) -> f64 {
        self.x2
    }

    pub fn y2(&self) -> f64 {
        self.y2
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    pub fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::Nw => Point::new(self.x1, self.y1),
            Corner::Ne => Point::new(self.x2, self.y1),
            Corner::Sw => Point::new(self.x1, self.y2),
            Corner::Se => Point::new(self.x2, self.y2),
        }
    }

    /// Moves the two coordinates owned by `corner` by `(dx, dy)`, then swaps
    /// any inverted pair.
    pub fn resize_corner(&mut self, corner: Corner, dx: f64, dy: f64) {
        match corner {
            Corner::Nw => {
                self.x1 += dx;
                self.y1 += dy;
            }
            Corner::Ne => {
                self.x2 += dx;
                self.y1 += dy;
            }
            Corner::Sw => {
                self.x1 += dx;
                self.y2 += dy;
            }
            Corner::Se => {
                self.x2 += dx;
                self.y2 += dy;
            }
        }
        self.normalize();
    }

    fn normalize(&mut self) {
        if self.x1 > self.x2 {
            std::mem::swap(&mut self.x1, &mut self.x2);
        }
        if self.y1 > self.y2 {
            std::mem::swap(&mut self.y1, &mut self.y2);
        }
    }
}

impl AnnotationShape for PelvisRect {
    fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x1, self.y1, self.x2, self.y2)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x1 += dx;
        self.y1 += dy;
        self.x2 += dx;
        self.y2 += dy;
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        p.x >= self.x1 - tolerance
            && p.x <= self.x2 + tolerance
            && p.y >= self.y1 - tolerance
            && p.y <= self.y2 + tolerance
    }

    fn handles(&self) -> Vec<(Handle, Point)> {
        Corner::ALL
            .iter()
            .map(|&c| (Handle::Corner(c), self.corner(c)))
            .collect()
    }
}

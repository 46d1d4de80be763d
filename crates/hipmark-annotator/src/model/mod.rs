//! Annotation primitives and slot names.

use std::fmt;

use hipmark_core::Side;
pub use hipmark_core::Point;

mod circle;
mod keypoint;
mod rectangle;

pub use circle::FemurCircle;
pub use keypoint::Keypoint;
pub use rectangle::PelvisRect;

/// Common behaviour of every user-drawn annotation.
///
/// All coordinates are image space; tolerances passed in are image-space
/// distances (display tolerance divided by zoom).
pub trait AnnotationShape {
    /// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`.
    fn bounds(&self) -> (f64, f64, f64, f64);

    /// Shift every positional field by `(dx, dy)`.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Whether `p` hits the shape, allowing `tolerance` of slack.
    fn contains_point(&self, p: Point, tolerance: f64) -> bool;

    /// Resize handles and their image-space positions.
    fn handles(&self) -> Vec<(Handle, Point)> {
        Vec::new()
    }
}

/// Rectangle corner; each corner owns one x and one y coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    Nw,
    Ne,
    Sw,
    Se,
}

impl Corner {
    pub const ALL: [Corner; 4] = [Corner::Nw, Corner::Ne, Corner::Sw, Corner::Se];
}

/// Compass point on a circle's circumference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinal {
    N,
    E,
    S,
    W,
}

/// A resize handle shown while editing a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    Corner(Corner),
    Cardinal(Cardinal),
}

/// Named, at-most-one-value field of an annotation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Rectangle,
    LeftKeypoint,
    RightKeypoint,
    LeftCircle,
    RightCircle,
    LeftNorbergAngle,
    RightNorbergAngle,
    LeftJointAngle,
    RightJointAngle,
}

impl Slot {
    /// The five user-drawn slots, in the order prerequisites are checked.
    pub const REQUIRED: [Slot; 5] = [
        Slot::Rectangle,
        Slot::LeftKeypoint,
        Slot::RightKeypoint,
        Slot::LeftCircle,
        Slot::RightCircle,
    ];

    /// The four angle slots filled by the calculator.
    pub const DERIVED: [Slot; 4] = [
        Slot::LeftNorbergAngle,
        Slot::RightNorbergAngle,
        Slot::LeftJointAngle,
        Slot::RightJointAngle,
    ];

    pub fn keypoint(side: Side) -> Slot {
        match side {
            Side::Left => Slot::LeftKeypoint,
            Side::Right => Slot::RightKeypoint,
        }
    }

    pub fn circle(side: Side) -> Slot {
        match side {
            Side::Left => Slot::LeftCircle,
            Side::Right => Slot::RightCircle,
        }
    }

    /// Angle slots are never set by the user.
    pub fn is_derived(self) -> bool {
        Self::DERIVED.contains(&self)
    }

    /// Whether editing this slot makes the stored angles stale.
    pub fn feeds_angles(self) -> bool {
        matches!(
            self,
            Slot::LeftKeypoint | Slot::RightKeypoint | Slot::LeftCircle | Slot::RightCircle
        )
    }

    /// Which side a paired slot belongs to; `None` for the rectangle.
    pub fn side(self) -> Option<Side> {
        match self {
            Slot::Rectangle => None,
            Slot::LeftKeypoint
            | Slot::LeftCircle
            | Slot::LeftNorbergAngle
            | Slot::LeftJointAngle => Some(Side::Left),
            Slot::RightKeypoint
            | Slot::RightCircle
            | Slot::RightNorbergAngle
            | Slot::RightJointAngle => Some(Side::Right),
        }
    }

    /// Stable field name used in the persisted record.
    pub fn name(self) -> &'static str {
        match self {
            Slot::Rectangle => "rectangle",
            Slot::LeftKeypoint => "leftKeypoint",
            Slot::RightKeypoint => "rightKeypoint",
            Slot::LeftCircle => "leftCircle",
            Slot::RightCircle => "rightCircle",
            Slot::LeftNorbergAngle => "leftNorbergAngle",
            Slot::RightNorbergAngle => "rightNorbergAngle",
            Slot::LeftJointAngle => "leftJointAngle",
            Slot::RightJointAngle => "rightJointAngle",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value held by a slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotValue {
    Rectangle(PelvisRect),
    Keypoint(Keypoint),
    Circle(FemurCircle),
    Angle(f64),
}

impl SlotValue {
    pub fn kind(&self) -> &'static str {
        match self {
            SlotValue::Rectangle(_) => "rectangle",
            SlotValue::Keypoint(_) => "keypoint",
            SlotValue::Circle(_) => "circle",
            SlotValue::Angle(_) => "angle",
        }
    }
}

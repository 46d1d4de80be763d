//! Per-image annotation store.
//!
//! An [`AnnotationSet`] holds at most one value per [`Slot`]. Missing slots
//! are never an error: lookups return `None` and dependent code skips the
//! element. The four angle slots are derived. They are written only by
//! [`AnnotationSet::calculate_angles`] and are cleared whenever a keypoint or
//! circle they depend on changes.

use serde::{Deserialize, Serialize};

use hipmark_core::Side;

use crate::angles::HipAngles;
use crate::error::{AnnotatorError, AnnotatorResult};
use crate::model::{AnnotationShape, Corner, FemurCircle, Keypoint, PelvisRect, Point, Slot, SlotValue};

/// Annotations of a single image.
///
/// Serializes as a record with optional camelCase fields. The snake_case
/// names of older label files are accepted when reading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rectangle: Option<PelvisRect>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "left_keypoint")]
    left_keypoint: Option<Keypoint>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "right_keypoint")]
    right_keypoint: Option<Keypoint>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "left_circle")]
    left_circle: Option<FemurCircle>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "right_circle")]
    right_circle: Option<FemurCircle>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "left_angle")]
    left_norberg_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "right_angle")]
    right_norberg_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "left_femur_angle")]
    left_joint_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "right_femur_angle")]
    right_joint_angle: Option<f64>,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no slot holds a value.
    pub fn is_empty(&self) -> bool {
        self.present_slots().next().is_none()
    }

    /// Slots that currently hold a value, in declaration order.
    pub fn present_slots(&self) -> impl Iterator<Item = Slot> + '_ {
        Slot::REQUIRED
            .into_iter()
            .chain(Slot::DERIVED)
            .filter(|&slot| self.has(slot))
    }

    pub fn has(&self, slot: Slot) -> bool {
        match slot {
            Slot::Rectangle => self.rectangle.is_some(),
            Slot::LeftKeypoint => self.left_keypoint.is_some(),
            Slot::RightKeypoint => self.right_keypoint.is_some(),
            Slot::LeftCircle => self.left_circle.is_some(),
            Slot::RightCircle => self.right_circle.is_some(),
            Slot::LeftNorbergAngle => self.left_norberg_angle.is_some(),
            Slot::RightNorbergAngle => self.right_norberg_angle.is_some(),
            Slot::LeftJointAngle => self.left_joint_angle.is_some(),
            Slot::RightJointAngle => self.right_joint_angle.is_some(),
        }
    }

    /// Value stored in `slot`, if any.
    pub fn get(&self, slot: Slot) -> Option<SlotValue> {
        match slot {
            Slot::Rectangle => self.rectangle.map(SlotValue::Rectangle),
            Slot::LeftKeypoint => self.left_keypoint.map(SlotValue::Keypoint),
            Slot::RightKeypoint => self.right_keypoint.map(SlotValue::Keypoint),
            Slot::LeftCircle => self.left_circle.map(SlotValue::Circle),
            Slot::RightCircle => self.right_circle.map(SlotValue::Circle),
            Slot::LeftNorbergAngle => self.left_norberg_angle.map(SlotValue::Angle),
            Slot::RightNorbergAngle => self.right_norberg_angle.map(SlotValue::Angle),
            Slot::LeftJointAngle => self.left_joint_angle.map(SlotValue::Angle),
            Slot::RightJointAngle => self.right_joint_angle.map(SlotValue::Angle),
        }
    }

    /// Stores a user-drawn value. Angle slots are rejected.
    pub fn set(&mut self, slot: Slot, value: SlotValue) -> AnnotatorResult<()> {
        if slot.is_derived() {
            return Err(AnnotatorError::DerivedSlot(slot));
        }
        match (slot, value) {
            (Slot::Rectangle, SlotValue::Rectangle(r)) => self.set_rectangle(r),
            (Slot::LeftKeypoint, SlotValue::Keypoint(k)) => self.set_keypoint(Side::Left, k),
            (Slot::RightKeypoint, SlotValue::Keypoint(k)) => self.set_keypoint(Side::Right, k),
            (Slot::LeftCircle, SlotValue::Circle(c)) => self.set_circle(Side::Left, c),
            (Slot::RightCircle, SlotValue::Circle(c)) => self.set_circle(Side::Right, c),
            (slot, value) => {
                return Err(AnnotatorError::SlotKindMismatch {
                    slot,
                    found: value.kind(),
                })
            }
        }
        Ok(())
    }

    /// Removes the value in `slot`. Returns whether anything was removed.
    pub fn delete(&mut self, slot: Slot) -> bool {
        let removed = match slot {
            Slot::Rectangle => self.rectangle.take().is_some(),
            Slot::LeftKeypoint => self.left_keypoint.take().is_some(),
            Slot::RightKeypoint => self.right_keypoint.take().is_some(),
            Slot::LeftCircle => self.left_circle.take().is_some(),
            Slot::RightCircle => self.right_circle.take().is_some(),
            Slot::LeftNorbergAngle => self.left_norberg_angle.take().is_some(),
            Slot::RightNorbergAngle => self.right_norberg_angle.take().is_some(),
            Slot::LeftJointAngle => self.left_joint_angle.take().is_some(),
            Slot::RightJointAngle => self.right_joint_angle.take().is_some(),
        };
        if removed {
            self.touched(slot);
        }
        removed
    }

    /// Empties every slot.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when every slot in `required` holds a value.
    pub fn is_complete(&self, required: &[Slot]) -> bool {
        self.first_missing(required).is_none()
    }

    /// First slot of `required` (in the given order) that is empty.
    pub fn first_missing(&self, required: &[Slot]) -> Option<Slot> {
        required.iter().copied().find(|&slot| !self.has(slot))
    }

    pub fn rectangle(&self) -> Option<&PelvisRect> {
        self.rectangle.as_ref()
    }

    pub fn keypoint(&self, side: Side) -> Option<&Keypoint> {
        match side {
            Side::Left => self.left_keypoint.as_ref(),
            Side::Right => self.right_keypoint.as_ref(),
        }
    }

    pub fn circle(&self, side: Side) -> Option<&FemurCircle> {
        match side {
            Side::Left => self.left_circle.as_ref(),
            Side::Right => self.right_circle.as_ref(),
        }
    }

    pub fn norberg_angle(&self, side: Side) -> Option<f64> {
        match side {
            Side::Left => self.left_norberg_angle,
            Side::Right => self.right_norberg_angle,
        }
    }

    pub fn joint_angle(&self, side: Side) -> Option<f64> {
        match side {
            Side::Left => self.left_joint_angle,
            Side::Right => self.right_joint_angle,
        }
    }

    /// All four angles, when every one of them is present.
    pub fn angles(&self) -> Option<HipAngles> {
        Some(HipAngles {
            left_norberg: self.left_norberg_angle?,
            right_norberg: self.right_norberg_angle?,
            left_joint: self.left_joint_angle?,
            right_joint: self.right_joint_angle?,
        })
    }

    pub fn set_rectangle(&mut self, rect: PelvisRect) {
        self.rectangle = Some(rect);
    }

    pub fn set_keypoint(&mut self, side: Side, keypoint: Keypoint) {
        match side {
            Side::Left => self.left_keypoint = Some(keypoint),
            Side::Right => self.right_keypoint = Some(keypoint),
        }
        self.touched(Slot::keypoint(side));
    }

    pub fn set_circle(&mut self, side: Side, circle: FemurCircle) {
        match side {
            Side::Left => self.left_circle = Some(circle),
            Side::Right => self.right_circle = Some(circle),
        }
        self.touched(Slot::circle(side));
    }

    /// Shape stored in a user-drawn slot, viewed through the common trait.
    pub fn shape(&self, slot: Slot) -> Option<&dyn AnnotationShape> {
        match slot {
            Slot::Rectangle => self.rectangle.as_ref().map(|s| s as &dyn AnnotationShape),
            Slot::LeftKeypoint => self.left_keypoint.as_ref().map(|s| s as &dyn AnnotationShape),
            Slot::RightKeypoint => self.right_keypoint.as_ref().map(|s| s as &dyn AnnotationShape),
            Slot::LeftCircle => self.left_circle.as_ref().map(|s| s as &dyn AnnotationShape),
            Slot::RightCircle => self.right_circle.as_ref().map(|s| s as &dyn AnnotationShape),
            _ => None,
        }
    }

    fn shape_mut(&mut self, slot: Slot) -> Option<&mut dyn AnnotationShape> {
        match slot {
            Slot::Rectangle => self.rectangle.as_mut().map(|s| s as &mut dyn AnnotationShape),
            Slot::LeftKeypoint => self.left_keypoint.as_mut().map(|s| s as &mut dyn AnnotationShape),
            Slot::RightKeypoint => self.right_keypoint.as_mut().map(|s| s as &mut dyn AnnotationShape),
            Slot::LeftCircle => self.left_circle.as_mut().map(|s| s as &mut dyn AnnotationShape),
            Slot::RightCircle => self.right_circle.as_mut().map(|s| s as &mut dyn AnnotationShape),
            _ => None,
        }
    }

    /// Moves the shape in `slot` by `(dx, dy)`. Returns false when the slot is empty.
    pub fn translate(&mut self, slot: Slot, dx: f64, dy: f64) -> bool {
        let Some(shape) = self.shape_mut(slot) else {
            return false;
        };
        shape.translate(dx, dy);
        self.touched(slot);
        true
    }

    /// Drags one rectangle corner by `(dx, dy)`.
    pub fn resize_rectangle(&mut self, corner: Corner, dx: f64, dy: f64) -> bool {
        match self.rectangle.as_mut() {
            Some(rect) => {
                rect.resize_corner(corner, dx, dy);
                true
            }
            None => false,
        }
    }

    /// Sets a circle's radius so that its rim passes through `p`.
    pub fn resize_circle(&mut self, side: Side, p: Point) -> bool {
        let circle = match side {
            Side::Left => self.left_circle.as_mut(),
            Side::Right => self.right_circle.as_mut(),
        };
        let Some(circle) = circle else {
            return false;
        };
        circle.resize_to(p);
        self.touched(Slot::circle(side));
        true
    }

    /// Computes the four angles and stores them together.
    ///
    /// Fails with the first missing required slot (rectangle, left keypoint,
    /// right keypoint, left circle, right circle) without writing anything.
    pub fn calculate_angles(&mut self) -> AnnotatorResult<HipAngles> {
        if let Some(missing) = self.first_missing(&Slot::REQUIRED) {
            return Err(AnnotatorError::MissingPrerequisite(missing));
        }

        let (Some(lk), Some(rk), Some(lc), Some(rc)) = (
            self.left_keypoint.as_ref(),
            self.right_keypoint.as_ref(),
            self.left_circle.as_ref(),
            self.right_circle.as_ref(),
        ) else {
            return Err(AnnotatorError::MissingPrerequisite(Slot::LeftKeypoint));
        };

        let angles = HipAngles::compute(lk, rk, lc, rc);
        self.left_norberg_angle = Some(angles.left_norberg);
        self.right_norberg_angle = Some(angles.right_norberg);
        self.left_joint_angle = Some(angles.left_joint);
        self.right_joint_angle = Some(angles.right_joint);

        tracing::debug!(
            "Calculated angles: NA {:.1}/{:.1}, JA {:.1}/{:.1}",
            angles.left_norberg,
            angles.right_norberg,
            angles.left_joint,
            angles.right_joint
        );
        Ok(angles)
    }

    /// Drops all four derived angles.
    pub fn clear_angles(&mut self) {
        self.left_norberg_angle = None;
        self.right_norberg_angle = None;
        self.left_joint_angle = None;
        self.right_joint_angle = None;
    }

    fn touched(&mut self, slot: Slot) {
        if slot.feeds_angles() && self.angles_present() {
            tracing::debug!("{} changed, clearing derived angles", slot);
            self.clear_angles();
        }
    }

    fn angles_present(&self) -> bool {
        Slot::DERIVED.iter().any(|&s| self.has(s))
    }
}

//! Geometric hit-testing and selection state.

use hipmark_core::constants::{
    HANDLE_HALF_SIZE_PX, HANDLE_TOLERANCE_PX, KEYPOINT_RADIUS_PX, SELECT_TOLERANCE_PX,
};

use crate::annotation_set::AnnotationSet;
use crate::model::{Handle, Point, Slot};

/// Hit-test order: small targets first so a keypoint sitting inside the
/// rectangle stays selectable.
const PICK_ORDER: [Slot; 5] = [
    Slot::LeftKeypoint,
    Slot::RightKeypoint,
    Slot::LeftCircle,
    Slot::RightCircle,
    Slot::Rectangle,
];

/// Topmost annotation under the image-space point `p`.
///
/// Tolerances are display pixels scaled by `zoom`, so picking feels the same
/// at every zoom level. Keypoints hit within their marker radius, circles
/// near the rim or on the center dot, the rectangle anywhere inside.
pub fn hit_test(set: &AnnotationSet, p: Point, zoom: f64) -> Option<Slot> {
    PICK_ORDER.into_iter().find(|&slot| {
        let tolerance = match slot {
            Slot::LeftKeypoint | Slot::RightKeypoint => KEYPOINT_RADIUS_PX + SELECT_TOLERANCE_PX,
            _ => SELECT_TOLERANCE_PX,
        } / zoom;
        set.shape(slot)
            .is_some_and(|shape| shape.contains_point(p, tolerance))
    })
}

/// Resize handle of `slot` under the image-space point `p`, if any.
///
/// A handle is drawn as a square of `HANDLE_HALF_SIZE_PX` half-width; the
/// pointer must land within `HANDLE_TOLERANCE_PX` of that square.
pub fn handle_at(set: &AnnotationSet, slot: Slot, p: Point, zoom: f64) -> Option<Handle> {
    let reach = (HANDLE_HALF_SIZE_PX + HANDLE_TOLERANCE_PX) / zoom;
    set.shape(slot)?
        .handles()
        .into_iter()
        .find(|(_, at)| (p.x - at.x).abs() <= reach && (p.y - at.y).abs() <= reach)
        .map(|(handle, _)| handle)
}

/// Tracks the single selected annotation.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected: Option<Slot>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self { selected: None }
    }

    pub fn selected(&self) -> Option<Slot> {
        self.selected
    }

    pub fn set_selected(&mut self, slot: Option<Slot>) {
        self.selected = slot;
    }

    /// Selects whatever lies under `p`; clears the selection on a miss.
    pub fn select_at(&mut self, set: &AnnotationSet, p: Point, zoom: f64) -> Option<Slot> {
        self.selected = hit_test(set, p, zoom);
        self.selected
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }
}

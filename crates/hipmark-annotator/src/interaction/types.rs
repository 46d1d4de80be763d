//! Types driving the pointer state machine.

use hipmark_core::Side;

use crate::model::{Corner, FemurCircle, PelvisRect, Point, Slot};

/// What the next pointer press on an empty spot will create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    #[default]
    None,
    Rectangle,
    Keypoint(Side),
    Circle(Side),
}

impl DrawingMode {
    pub fn is_armed(self) -> bool {
        self != DrawingMode::None
    }
}

/// Current gesture. Points are image space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    DrawingRectangle {
        anchor: Point,
        current: Point,
    },
    DrawingCircle {
        side: Side,
        anchor: Point,
        current: Point,
    },
    /// Waiting for a press (`last == None`) or dragging the selected slot.
    Moving { slot: Slot, last: Option<Point> },
    /// Handles shown; `grab` is set once a corner handle has been pressed.
    ResizingRectangle { grab: Option<(Corner, Point)> },
    ResizingCircle { side: Side, changed: bool },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    /// Whether the gesture has already written to the annotation set.
    pub(crate) fn has_mutated(&self) -> bool {
        match self {
            InteractionState::Moving { last, .. } => last.is_some(),
            InteractionState::ResizingRectangle { grab } => grab.is_some(),
            InteractionState::ResizingCircle { changed, .. } => *changed,
            _ => false,
        }
    }
}

/// Pointer input, already converted to image space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Drag(Point),
    Up(Point),
}

impl PointerEvent {
    pub fn point(self) -> Point {
        match self {
            PointerEvent::Down(p) | PointerEvent::Drag(p) | PointerEvent::Up(p) => p,
        }
    }
}

/// What the caller should do after an event or command.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing visible changed.
    Unchanged,
    /// Repaint; the annotation set is untouched or the change is transient.
    Redraw,
    /// Repaint and write the annotation set back to the label store.
    Persist,
}

impl Outcome {
    pub fn needs_redraw(self) -> bool {
        self != Outcome::Unchanged
    }

    pub fn needs_persist(self) -> bool {
        self == Outcome::Persist
    }
}

/// Transient shape shown while a drawing gesture is in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preview {
    Rectangle(PelvisRect),
    Circle(Side, FemurCircle),
}

//! Pointer state machine.
//!
//! Every pointer event goes through [`Interaction::dispatch`], which matches
//! on `(state, event)` and returns the next state plus an [`Outcome`]. The
//! outcome tells the caller whether to repaint and whether the annotation set
//! must be written back to the label store. Commands from menus and buttons
//! (`set_mode`, `begin_move`, `begin_edit`, `delete_selected`, `cancel`) are
//! the only other way the state changes.

mod types;

pub use types::{DrawingMode, InteractionState, Outcome, PointerEvent, Preview};

use hipmark_core::Side;
use tracing::debug;

use crate::annotation_set::AnnotationSet;
use crate::error::{AnnotatorError, AnnotatorResult};
use crate::model::{FemurCircle, Handle, PelvisRect, Point, Slot};
use crate::selection::{handle_at, SelectionManager};

/// Drawing mode, gesture state and selection of the current image.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    mode: DrawingMode,
    state: InteractionState,
    selection: SelectionManager,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state.is_idle()
    }

    pub fn selected(&self) -> Option<Slot> {
        self.selection.selected()
    }

    /// Feeds one pointer event through the state machine.
    pub fn dispatch(&mut self, event: PointerEvent, set: &mut AnnotationSet, zoom: f64) -> Outcome {
        let (next, outcome) = match (self.state, event) {
            (InteractionState::Idle, PointerEvent::Down(p)) => self.press_idle(p, set),
            (InteractionState::Idle, _) => (InteractionState::Idle, Outcome::Unchanged),

            (InteractionState::DrawingRectangle { anchor, .. }, PointerEvent::Drag(p)) => (
                InteractionState::DrawingRectangle { anchor, current: p },
                Outcome::Redraw,
            ),
            (InteractionState::DrawingRectangle { anchor, .. }, PointerEvent::Up(p)) => {
                set.set_rectangle(PelvisRect::from_corners(anchor, p));
                self.mode = DrawingMode::None;
                debug!("Committed rectangle");
                (InteractionState::Idle, Outcome::Persist)
            }

            (InteractionState::DrawingCircle { side, anchor, .. }, PointerEvent::Drag(p)) => (
                InteractionState::DrawingCircle {
                    side,
                    anchor,
                    current: p,
                },
                Outcome::Redraw,
            ),
            (InteractionState::DrawingCircle { side, anchor, .. }, PointerEvent::Up(p)) => {
                set.set_circle(side, FemurCircle::through(anchor, p));
                self.mode = DrawingMode::None;
                debug!("Committed {} circle", side);
                (InteractionState::Idle, Outcome::Persist)
            }

            (
                state @ (InteractionState::DrawingRectangle { .. }
                | InteractionState::DrawingCircle { .. }),
                PointerEvent::Down(_),
            ) => (state, Outcome::Unchanged),

            (InteractionState::Moving { slot, .. }, PointerEvent::Down(p)) => (
                InteractionState::Moving {
                    slot,
                    last: Some(p),
                },
                Outcome::Unchanged,
            ),
            (
                InteractionState::Moving {
                    slot,
                    last: Some(last),
                },
                PointerEvent::Drag(p),
            ) => {
                let (dx, dy) = p.delta_from(&last);
                if set.translate(slot, dx, dy) {
                    (
                        InteractionState::Moving {
                            slot,
                            last: Some(p),
                        },
                        Outcome::Redraw,
                    )
                } else {
                    (InteractionState::Idle, Outcome::Redraw)
                }
            }
            (InteractionState::Moving { last: Some(_), .. }, PointerEvent::Up(_)) => {
                debug!("Move finished");
                (InteractionState::Idle, Outcome::Persist)
            }
            (state @ InteractionState::Moving { last: None, .. }, _) => (state, Outcome::Unchanged),

            (InteractionState::ResizingRectangle { grab: None }, PointerEvent::Down(p)) => {
                match handle_at(set, Slot::Rectangle, p, zoom) {
                    Some(Handle::Corner(corner)) => (
                        InteractionState::ResizingRectangle {
                            grab: Some((corner, p)),
                        },
                        Outcome::Unchanged,
                    ),
                    _ => {
                        debug!("Press missed every rectangle handle");
                        (InteractionState::ResizingRectangle { grab: None }, Outcome::Unchanged)
                    }
                }
            }
            (
                InteractionState::ResizingRectangle {
                    grab: Some((corner, last)),
                },
                PointerEvent::Drag(p),
            ) => {
                let (dx, dy) = p.delta_from(&last);
                if set.resize_rectangle(corner, dx, dy) {
                    (
                        InteractionState::ResizingRectangle {
                            grab: Some((corner, p)),
                        },
                        Outcome::Redraw,
                    )
                } else {
                    (InteractionState::Idle, Outcome::Redraw)
                }
            }
            (InteractionState::ResizingRectangle { grab: Some(_) }, PointerEvent::Up(_)) => {
                debug!("Rectangle resize finished");
                (InteractionState::Idle, Outcome::Persist)
            }
            (state @ InteractionState::ResizingRectangle { .. }, _) => (state, Outcome::Unchanged),

            (InteractionState::ResizingCircle { side, changed }, PointerEvent::Drag(p)) => {
                if set.resize_circle(side, p) {
                    (
                        InteractionState::ResizingCircle {
                            side,
                            changed: true,
                        },
                        Outcome::Redraw,
                    )
                } else {
                    let outcome = if changed {
                        Outcome::Persist
                    } else {
                        Outcome::Redraw
                    };
                    (InteractionState::Idle, outcome)
                }
            }
            (InteractionState::ResizingCircle { changed, .. }, PointerEvent::Up(_)) => {
                debug!("Circle resize finished");
                let outcome = if changed {
                    Outcome::Persist
                } else {
                    Outcome::Redraw
                };
                (InteractionState::Idle, outcome)
            }
            (state @ InteractionState::ResizingCircle { .. }, PointerEvent::Down(_)) => {
                (state, Outcome::Unchanged)
            }
        };

        self.state = next;
        outcome
    }

    fn press_idle(&mut self, p: Point, set: &mut AnnotationSet) -> (InteractionState, Outcome) {
        match self.mode {
            DrawingMode::None => (InteractionState::Idle, Outcome::Unchanged),
            DrawingMode::Rectangle => (
                InteractionState::DrawingRectangle {
                    anchor: p,
                    current: p,
                },
                Outcome::Redraw,
            ),
            DrawingMode::Circle(side) => (
                InteractionState::DrawingCircle {
                    side,
                    anchor: p,
                    current: p,
                },
                Outcome::Redraw,
            ),
            DrawingMode::Keypoint(side) => {
                set.set_keypoint(side, p.into());
                self.mode = DrawingMode::None;
                debug!("Placed {} keypoint at ({:.1}, {:.1})", side, p.x, p.y);
                (InteractionState::Idle, Outcome::Persist)
            }
        }
    }

    /// Arms a drawing mode. Any unfinished gesture is abandoned first, so
    /// re-entering the same mode never leaves a stale preview behind.
    pub fn set_mode(&mut self, mode: DrawingMode) -> Outcome {
        let outcome = self.cancel();
        self.mode = mode;
        outcome
    }

    /// Abandons the current gesture and disarms the drawing mode.
    ///
    /// Edits already applied by a move or resize stay in place, so those
    /// report [`Outcome::Persist`].
    pub fn cancel(&mut self) -> Outcome {
        let outcome = match self.state {
            InteractionState::Idle => Outcome::Unchanged,
            state if state.has_mutated() => Outcome::Persist,
            _ => Outcome::Redraw,
        };
        self.state = InteractionState::Idle;
        self.mode = DrawingMode::None;
        outcome
    }

    /// Forgets mode, gesture and selection. Used when switching images.
    pub fn reset(&mut self) {
        self.state = InteractionState::Idle;
        self.mode = DrawingMode::None;
        self.selection.deselect();
    }

    /// Selects the annotation under `p`, or clears the selection on a miss.
    pub fn select_at(&mut self, set: &AnnotationSet, p: Point, zoom: f64) -> AnnotatorResult<Option<Slot>> {
        if !self.is_idle() {
            return Err(AnnotatorError::GestureInProgress);
        }
        Ok(self.selection.select_at(set, p, zoom))
    }

    fn selected_present(&self, set: &AnnotationSet) -> AnnotatorResult<Slot> {
        let slot = self.selection.selected().ok_or(AnnotatorError::NothingSelected)?;
        if !set.has(slot) {
            return Err(AnnotatorError::EmptySlot(slot));
        }
        Ok(slot)
    }

    /// Enters move mode for the selection; the next press starts the drag.
    pub fn begin_move(&mut self, set: &AnnotationSet) -> AnnotatorResult<Outcome> {
        if !self.is_idle() {
            return Err(AnnotatorError::GestureInProgress);
        }
        let slot = self.selected_present(set)?;
        self.mode = DrawingMode::None;
        self.state = InteractionState::Moving { slot, last: None };
        debug!("Moving {}", slot);
        Ok(Outcome::Unchanged)
    }

    /// Shows resize handles for the selected rectangle or circle.
    pub fn begin_edit(&mut self, set: &AnnotationSet) -> AnnotatorResult<Outcome> {
        if !self.is_idle() {
            return Err(AnnotatorError::GestureInProgress);
        }
        let slot = self.selected_present(set)?;
        self.state = match slot {
            Slot::Rectangle => InteractionState::ResizingRectangle { grab: None },
            Slot::LeftCircle => InteractionState::ResizingCircle {
                side: Side::Left,
                changed: false,
            },
            Slot::RightCircle => InteractionState::ResizingCircle {
                side: Side::Right,
                changed: false,
            },
            other => return Err(AnnotatorError::NotResizable(other)),
        };
        self.mode = DrawingMode::None;
        debug!("Editing {}", slot);
        Ok(Outcome::Redraw)
    }

    /// Deletes the selected annotation, ending whatever gesture was running.
    pub fn delete_selected(&mut self, set: &mut AnnotationSet) -> AnnotatorResult<Outcome> {
        let slot = self.selected_present(set)?;
        self.state = InteractionState::Idle;
        self.mode = DrawingMode::None;
        self.selection.deselect();
        set.delete(slot);
        debug!("Deleted {}", slot);
        Ok(Outcome::Persist)
    }

    /// Shape being drawn, if a drawing gesture is in flight.
    pub fn preview(&self) -> Option<Preview> {
        match self.state {
            InteractionState::DrawingRectangle { anchor, current } => {
                Some(Preview::Rectangle(PelvisRect::from_corners(anchor, current)))
            }
            InteractionState::DrawingCircle {
                side,
                anchor,
                current,
            } => Some(Preview::Circle(side, FemurCircle::through(anchor, current))),
            _ => None,
        }
    }

    /// Handles to draw while a shape is being edited.
    pub fn active_handles(&self, set: &AnnotationSet) -> Vec<(Handle, Point)> {
        let slot = match self.state {
            InteractionState::ResizingRectangle { .. } => Slot::Rectangle,
            InteractionState::ResizingCircle { side, .. } => Slot::circle(side),
            _ => return Vec::new(),
        };
        set.shape(slot).map(|shape| shape.handles()).unwrap_or_default()
    }
}

//! Error types for the annotator crate.
//!
//! Degenerate geometry and resize drags that miss every handle are not
//! errors: the first yields an angle of `0.0`, the second is ignored.

use thiserror::Error;

use crate::model::Slot;

/// Errors surfaced to the user by annotation commands.
#[derive(Error, Debug)]
pub enum AnnotatorError {
    /// Angle calculation requires this slot to be annotated first.
    #[error("Missing prerequisite: {0} must be annotated first")]
    MissingPrerequisite(Slot),

    /// Angle slots are only written by the calculator.
    #[error("Slot {0} is derived and cannot be set directly")]
    DerivedSlot(Slot),

    /// The value does not belong in the slot.
    #[error("Slot {slot} cannot hold a {found} value")]
    SlotKindMismatch { slot: Slot, found: &'static str },

    /// A selection command was issued with nothing selected.
    #[error("No annotation selected")]
    NothingSelected,

    /// The selected slot is empty.
    #[error("Slot {0} has no annotation")]
    EmptySlot(Slot),

    /// Edit only applies to rectangles and circles.
    #[error("Edit mode only works for rectangles and circles, not {0}")]
    NotResizable(Slot),

    /// Navigation or commands refused while a draw/move/resize is unfinished.
    #[error("A drawing gesture is in progress")]
    GestureInProgress,

    /// No working folder has been opened.
    #[error("No folder is open")]
    NoFolderOpen,

    /// The folder has no image at the current position.
    #[error("No image selected")]
    NoImageSelected,

    /// Nothing has been labeled yet.
    #[error("No labels to export")]
    NothingToExport,

    /// Persistence or image loading failed.
    #[error(transparent)]
    Storage(#[from] hipmark_core::Error),
}

/// Result type alias for annotator operations.
pub type AnnotatorResult<T> = Result<T, AnnotatorError>;

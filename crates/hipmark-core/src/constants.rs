//! Shared constants.
//!
//! Display-space sizes are expressed in screen pixels and must be divided by
//! the zoom factor before being compared with image-space distances.

/// Smallest zoom factor the zoom controller allows.
pub const ZOOM_MIN: f64 = 0.1;

/// Largest zoom factor the zoom controller allows.
pub const ZOOM_MAX: f64 = 5.0;

/// Multiplier applied by a single zoom-in step (zoom-out divides by it).
pub const ZOOM_STEP: f64 = 1.2;

/// Distance in display pixels within which a pointer-down grabs a resize handle.
pub const HANDLE_TOLERANCE_PX: f64 = 5.0;

/// Half the side length of a drawn resize handle, in display pixels.
pub const HANDLE_HALF_SIZE_PX: f64 = 6.0;

/// Radius of a keypoint marker, in display pixels.
pub const KEYPOINT_RADIUS_PX: f64 = 5.0;

/// Radius of the dot drawn at a circle center, in display pixels.
pub const CENTER_DOT_RADIUS_PX: f64 = 3.0;

/// Tolerance used when hit-testing annotations for selection, in display pixels.
pub const SELECT_TOLERANCE_PX: f64 = 5.0;

/// Length of the vertical reference vector used by the Norberg angle.
pub const NORBERG_REFERENCE_LENGTH: f64 = 100.0;

/// Name of the per-folder label store file.
pub const LABELS_FILE_NAME: &str = "norberg_olsen_labels.json";

/// File extensions (lower case, without dot) recognised as images.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tiff", "tif"];

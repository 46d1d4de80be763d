//! # HipMark Annotator
//!
//! Interactive annotation core for measuring hip conformation on canine
//! pelvic X-rays. The user draws a pelvis rectangle, places the two acetabular
//! rim keypoints and fits a circle to each femoral head; the crate derives the
//! left/right Norberg angle and the left/right joint angle.
//!
//! ## Architecture
//!
//! ```text
//! AnnotatorSession (folder, navigation, persistence)
//!   ├── Interaction (drawing mode, gesture state, selection)
//!   │     └── AnnotationSet (typed slots of one image)
//!   │           └── angles (Norberg / joint angle calculator)
//!   ├── Viewport (zoom, image <-> display transform)
//!   ├── renderer (declarative draw list)
//!   └── LabelStore / export / folder / image_source (I/O)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hipmark_annotator::{AnnotatorSession, DrawingMode};
//! use hipmark_core::{Point, Side};
//! use hipmark_settings::Config;
//!
//! let mut session = AnnotatorSession::new(&Config::default());
//! session.open_folder("xrays".as_ref())?;
//! let _ = session.set_mode(DrawingMode::Keypoint(Side::Left));
//! let _ = session.pointer_down(Point::new(120.0, 80.0));
//! session.save_labels()?;
//! ```

pub mod angles;
pub mod annotation_set;
pub mod error;
pub mod export;
pub mod folder;
pub mod image_source;
pub mod interaction;
pub mod label_store;
pub mod model;
pub mod renderer;
pub mod selection;
pub mod session;
pub mod viewport;

pub use angles::{joint_angle, norberg_angle, HipAngles};
pub use annotation_set::AnnotationSet;
pub use error::{AnnotatorError, AnnotatorResult};
pub use export::{export_csv, write_csv};
pub use folder::list_images;
pub use image_source::{FsImageSource, ImageSource, LoadedImage};
pub use interaction::{DrawingMode, Interaction, InteractionState, Outcome, PointerEvent, Preview};
pub use label_store::LabelStore;
pub use model::{
    AnnotationShape, Cardinal, Corner, FemurCircle, Handle, Keypoint, PelvisRect, Slot, SlotValue,
};
pub use renderer::{render_annotations, render_interaction, render_scene, Color, DrawItem, Layer, Primitive, RenderOptions};
pub use selection::{hit_test, SelectionManager};
pub use session::AnnotatorSession;
pub use viewport::{to_display, to_image, Viewport};

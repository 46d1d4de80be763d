//! # HipMark
//!
//! Labeling core for canine hip X-rays. A user marks the pelvis, both
//! acetabular rims and both femoral heads on each image of a folder; HipMark
//! derives the Norberg angle and the joint angle of each hip, keeps the labels
//! in a JSON file next to the images and exports a CSV report.
//!
//! ## Architecture
//!
//! HipMark is organized as a workspace with multiple crates:
//!
//! 1. **hipmark-core** - Point and side types, constants, I/O error type
//! 2. **hipmark-settings** - View defaults and last-session persistence
//! 3. **hipmark-annotator** - Annotation model, angle calculator, interaction
//!    state machine, render adapter, label store and CSV export
//! 4. **hipmark** - Logging setup and re-exports for front ends

pub use hipmark_annotator as annotator;
pub use hipmark_settings as settings;

pub use hipmark_annotator::{
    AnnotationSet, AnnotatorError, AnnotatorResult, AnnotatorSession, DrawItem, DrawingMode,
    HipAngles, LabelStore, Outcome, RenderOptions, Slot,
};
pub use hipmark_core::{Error, Point, Result, Side};
pub use hipmark_settings::{Config, SessionInfo, ViewSettings};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date and time (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize structured logging
///
/// Respects `RUST_LOG`; defaults to INFO. Fails if a global subscriber is
/// already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    tracing::info!("HipMark {} (built {})", VERSION, BUILD_DATE);
    Ok(())
}

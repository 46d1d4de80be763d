//! # HipMark Core
//!
//! Core types and utilities shared by the HipMark crates.
//! Provides the image-space point type, the left/right side tag used by
//! paired annotations, the numeric and file-name constants, and the unified
//! I/O error type.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Point, Side};

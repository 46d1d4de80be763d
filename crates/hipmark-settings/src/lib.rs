//! HipMark Settings Crate
//!
//! Handles application configuration: view defaults (zoom limits, visibility
//! flags) and the last-session information used to resume work.

pub mod config;
pub mod error;

pub use config::{Config, SessionInfo, ViewSettings};
pub use error::{SettingsError, SettingsResult};

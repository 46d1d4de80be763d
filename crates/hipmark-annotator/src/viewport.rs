//! Zoom state and coordinate transformation between image and display space.
//!
//! Stored annotations always live in image space (unscaled pixels of the
//! X-ray). Display space is image space multiplied by the zoom factor.
//! The conversion functions never clamp; only the zoom controller methods
//! on [`Viewport`] keep the factor inside the configured range.

use std::fmt;

use hipmark_core::constants::{ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};
use hipmark_settings::ViewSettings;

use crate::model::Point;

/// Converts an image-space point to display space.
pub fn to_display(p: Point, zoom: f64) -> Point {
    Point::new(p.x * zoom, p.y * zoom)
}

/// Converts a display-space point to image space.
pub fn to_image(p: Point, zoom: f64) -> Point {
    Point::new(p.x / zoom, p.y / zoom)
}

/// Represents the zoom controller state.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    zoom_min: f64,
    zoom_max: f64,
    zoom_step: f64,
}

impl Viewport {
    /// Creates a viewport at 100% with the default zoom range.
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            zoom_step: ZOOM_STEP,
        }
    }

    /// Creates a viewport using the configured zoom range and step.
    pub fn from_settings(view: &ViewSettings) -> Self {
        Self {
            zoom: 1.0,
            zoom_min: view.zoom_min,
            zoom_max: view.zoom_max,
            zoom_step: view.zoom_step,
        }
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn zoom_range(&self) -> (f64, f64) {
        (self.zoom_min, self.zoom_max)
    }

    /// Sets the zoom level, clamped to the configured range.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() && zoom > 0.0 {
            self.zoom = zoom.clamp(self.zoom_min, self.zoom_max);
        }
    }

    /// Zooms in by one step. Returns whether the zoom changed.
    pub fn zoom_in(&mut self) -> bool {
        if self.zoom >= self.zoom_max {
            return false;
        }
        self.set_zoom(self.zoom * self.zoom_step);
        true
    }

    /// Zooms out by one step. Returns whether the zoom changed.
    pub fn zoom_out(&mut self) -> bool {
        if self.zoom <= self.zoom_min {
            return false;
        }
        self.set_zoom(self.zoom / self.zoom_step);
        true
    }

    /// Resets zoom to 1.0 (100%).
    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }

    /// Zoom as a whole percentage, truncated the way the status bar shows it.
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0) as u32
    }

    /// Converts display coordinates (pointer position) to image coordinates.
    pub fn display_to_image(&self, p: Point) -> Point {
        to_image(p, self.zoom)
    }

    /// Converts image coordinates to display coordinates.
    pub fn image_to_display(&self, p: Point) -> Point {
        to_display(p, self.zoom)
    }

    /// Converts a display-space length (e.g. a pixel tolerance) to image space.
    pub fn display_len_to_image(&self, len: f64) -> f64 {
        len / self.zoom
    }

    /// Display size of an image with the given pixel dimensions.
    pub fn scaled_size(&self, width: u32, height: u32) -> (u32, u32) {
        (
            (width as f64 * self.zoom) as u32,
            (height as f64 * self.zoom) as u32,
        )
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zoom: {}%", self.zoom_percent())
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

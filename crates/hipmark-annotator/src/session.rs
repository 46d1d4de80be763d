//! Session controller.
//!
//! [`AnnotatorSession`] owns everything one labeling session mutates: the
//! working folder and its image list, the label store, the annotations of the
//! displayed image, the interaction state machine, the zoom controller and the
//! visibility toggles. A UI forwards pointer input in display coordinates and
//! menu commands; every store-mutating step writes the current annotations
//! back into the label store exactly once.

use std::path::{Path, PathBuf};

use hipmark_settings::{Config, SessionInfo};
use tracing::{debug, info, warn};

use crate::angles::HipAngles;
use crate::annotation_set::AnnotationSet;
use crate::error::{AnnotatorError, AnnotatorResult};
use crate::export::export_csv;
use crate::folder::list_images;
use crate::image_source::{FsImageSource, ImageSource, LoadedImage};
use crate::interaction::{DrawingMode, Interaction, Outcome, PointerEvent};
use crate::label_store::LabelStore;
use crate::model::{Point, Slot};
use crate::renderer::{render_scene, DrawItem, RenderOptions};
use crate::viewport::Viewport;

/// State of one labeling session.
#[derive(Debug)]
pub struct AnnotatorSession<S: ImageSource = FsImageSource> {
    folder: Option<PathBuf>,
    images: Vec<String>,
    index: Option<usize>,
    labels: LabelStore,
    current: AnnotationSet,
    interaction: Interaction,
    viewport: Viewport,
    options: RenderOptions,
    source: S,
}

impl AnnotatorSession<FsImageSource> {
    /// Creates a session reading images from disk.
    pub fn new(config: &Config) -> Self {
        Self::with_source(config, FsImageSource)
    }
}

impl<S: ImageSource> AnnotatorSession<S> {
    /// Creates a session with a custom image provider.
    pub fn with_source(config: &Config, source: S) -> Self {
        Self {
            folder: None,
            images: Vec::new(),
            index: None,
            labels: LabelStore::new(),
            current: AnnotationSet::new(),
            interaction: Interaction::new(),
            viewport: Viewport::from_settings(&config.view),
            options: RenderOptions::from(&config.view),
            source,
        }
    }

    // Accessors

    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn current_index(&self) -> Option<usize> {
        self.index
    }

    /// Identifier (file name) of the displayed image.
    pub fn current_image(&self) -> Option<&str> {
        self.index
            .and_then(|i| self.images.get(i))
            .map(String::as_str)
    }

    pub fn current_image_path(&self) -> Option<PathBuf> {
        Some(self.folder.as_ref()?.join(self.current_image()?))
    }

    pub fn annotations(&self) -> &AnnotationSet {
        &self.current
    }

    pub fn labels(&self) -> &LabelStore {
        &self.labels
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn render_options(&self) -> RenderOptions {
        self.options
    }

    /// "Image: name (3/12)" style status line.
    pub fn status(&self) -> String {
        match (self.current_image(), self.index) {
            (Some(name), Some(i)) => format!("Image: {} ({}/{})", name, i + 1, self.images.len()),
            _ => "No image loaded".to_string(),
        }
    }

    // Folder and navigation

    /// Opens `folder`: scans its images, loads its label store and shows the
    /// first image. Returns the number of images found.
    ///
    /// An unreadable label store is logged and replaced by an empty one.
    pub fn open_folder(&mut self, folder: &Path) -> AnnotatorResult<usize> {
        self.ensure_idle()?;
        let images = list_images(folder)?;
        let labels = LabelStore::load(folder).unwrap_or_else(|e| {
            warn!("Could not load labels from {:?}: {}", folder, e);
            LabelStore::new()
        });

        self.folder = Some(folder.to_path_buf());
        self.images = images;
        self.labels = labels;
        self.index = if self.images.is_empty() { None } else { Some(0) };
        if self.images.is_empty() {
            warn!("No image files found in {:?}", folder);
        }
        info!("Opened {:?} with {} images", folder, self.images.len());
        self.show_current();
        Ok(self.images.len())
    }

    /// Reopens the folder of a previous session and jumps to its image.
    ///
    /// Returns false when there is nothing to resume. The stored index is
    /// clamped to the images currently in the folder.
    pub fn resume(&mut self, session: &SessionInfo) -> AnnotatorResult<bool> {
        let Some(folder) = session.last_folder.as_deref() else {
            return Ok(false);
        };
        if !folder.is_dir() {
            debug!("Last folder {:?} no longer exists", folder);
            return Ok(false);
        }
        if self.open_folder(folder)? == 0 {
            return Ok(true);
        }
        let index = session.last_image_index.min(self.images.len() - 1);
        self.switch_to(index);
        Ok(true)
    }

    /// Session info to store in the configuration.
    pub fn session_info(&self) -> SessionInfo {
        SessionInfo {
            last_folder: self.folder.clone(),
            last_image_index: self.index.unwrap_or(0),
        }
    }

    pub fn next_image(&mut self) -> AnnotatorResult<bool> {
        let index = self.navigable()?;
        if index + 1 >= self.images.len() {
            return Ok(false);
        }
        self.switch_to(index + 1);
        Ok(true)
    }

    pub fn prev_image(&mut self) -> AnnotatorResult<bool> {
        let index = self.navigable()?;
        if index == 0 {
            return Ok(false);
        }
        self.switch_to(index - 1);
        Ok(true)
    }

    /// Jumps to image `index`; out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> AnnotatorResult<bool> {
        self.navigable()?;
        if index >= self.images.len() {
            return Ok(false);
        }
        self.switch_to(index);
        Ok(true)
    }

    /// Decodes the displayed image.
    pub fn load_current_image(&self) -> AnnotatorResult<LoadedImage> {
        let path = self.current_image_path().ok_or(AnnotatorError::NoImageSelected)?;
        Ok(self.source.load_image(&path)?)
    }

    fn navigable(&self) -> AnnotatorResult<usize> {
        if self.folder.is_none() {
            return Err(AnnotatorError::NoFolderOpen);
        }
        if !self.interaction.is_idle() {
            warn!("Navigation refused while a gesture is in progress");
            return Err(AnnotatorError::GestureInProgress);
        }
        self.index.ok_or(AnnotatorError::NoImageSelected)
    }

    fn ensure_idle(&self) -> AnnotatorResult<()> {
        if self.interaction.is_idle() {
            Ok(())
        } else {
            Err(AnnotatorError::GestureInProgress)
        }
    }

    fn switch_to(&mut self, index: usize) {
        self.write_back();
        self.index = Some(index);
        self.show_current();
    }

    fn show_current(&mut self) {
        self.interaction.reset();
        self.current = match self.current_image() {
            Some(name) => self.labels.checkout(name),
            None => AnnotationSet::new(),
        };
        debug!("{}", self.status());
    }

    fn write_back(&mut self) {
        if let Some(name) = self.index.and_then(|i| self.images.get(i)) {
            self.labels.check_in(name, &self.current);
            debug!("Wrote annotations of {} back to the label store", name);
        }
    }

    fn apply(&mut self, outcome: Outcome) -> Outcome {
        if outcome.needs_persist() {
            self.write_back();
        }
        outcome
    }

    // Pointer input (display coordinates)

    pub fn pointer_down(&mut self, display: Point) -> Outcome {
        self.pointer(PointerEvent::Down(self.viewport.display_to_image(display)))
    }

    pub fn pointer_drag(&mut self, display: Point) -> Outcome {
        self.pointer(PointerEvent::Drag(self.viewport.display_to_image(display)))
    }

    pub fn pointer_up(&mut self, display: Point) -> Outcome {
        self.pointer(PointerEvent::Up(self.viewport.display_to_image(display)))
    }

    fn pointer(&mut self, event: PointerEvent) -> Outcome {
        let outcome = self
            .interaction
            .dispatch(event, &mut self.current, self.viewport.zoom());
        self.apply(outcome)
    }

    // Commands

    pub fn set_mode(&mut self, mode: DrawingMode) -> Outcome {
        let outcome = self.interaction.set_mode(mode);
        self.apply(outcome)
    }

    pub fn cancel(&mut self) -> Outcome {
        let outcome = self.interaction.cancel();
        self.apply(outcome)
    }

    /// Selects the annotation under a display-space point.
    pub fn select_at(&mut self, display: Point) -> AnnotatorResult<Option<Slot>> {
        let p = self.viewport.display_to_image(display);
        self.interaction.select_at(&self.current, p, self.viewport.zoom())
    }

    pub fn begin_move(&mut self) -> AnnotatorResult<Outcome> {
        self.interaction.begin_move(&self.current)
    }

    pub fn begin_edit(&mut self) -> AnnotatorResult<Outcome> {
        self.interaction.begin_edit(&self.current)
    }

    pub fn delete_selected(&mut self) -> AnnotatorResult<Outcome> {
        let outcome = self.interaction.delete_selected(&mut self.current)?;
        Ok(self.apply(outcome))
    }

    /// Removes every annotation of the displayed image.
    pub fn clear_current(&mut self) -> AnnotatorResult<Outcome> {
        self.ensure_idle()?;
        self.interaction.reset();
        self.current.clear();
        info!("Cleared all labels for the current image");
        Ok(self.apply(Outcome::Persist))
    }

    /// Computes and stores the four angles of the displayed image.
    pub fn calculate_angles(&mut self) -> AnnotatorResult<HipAngles> {
        self.ensure_idle()?;
        let angles = self.current.calculate_angles()?;
        self.write_back();
        Ok(angles)
    }

    // Zoom and visibility

    pub fn zoom_in(&mut self) -> bool {
        self.viewport.zoom_in()
    }

    pub fn zoom_out(&mut self) -> bool {
        self.viewport.zoom_out()
    }

    pub fn reset_zoom(&mut self) {
        self.viewport.reset_zoom();
    }

    /// Toggles every annotation visual; returns the new state.
    pub fn toggle_shapes(&mut self) -> bool {
        self.options.show_shapes = !self.options.show_shapes;
        self.options.show_shapes
    }

    /// Toggles the shape name labels; returns the new state.
    pub fn toggle_text(&mut self) -> bool {
        self.options.show_text = !self.options.show_text;
        self.options.show_text
    }

    /// Draw list for the current frame.
    pub fn render(&self) -> Vec<DrawItem> {
        render_scene(
            &self.current,
            &self.interaction,
            self.viewport.zoom(),
            self.options,
        )
    }

    // Persistence

    /// Writes the label store into the working folder and returns its path.
    pub fn save_labels(&mut self) -> AnnotatorResult<PathBuf> {
        let folder = self.folder.clone().ok_or(AnnotatorError::NoFolderOpen)?;
        self.write_back();
        self.labels.save(&folder)?;
        Ok(LabelStore::path_in(&folder))
    }

    /// Writes the CSV report of every labeled image to `path`.
    pub fn export_csv(&mut self, path: &Path) -> AnnotatorResult<()> {
        self.write_back();
        if self.labels.is_empty() {
            return Err(AnnotatorError::NothingToExport);
        }
        export_csv(path, &self.labels)?;
        Ok(())
    }
}

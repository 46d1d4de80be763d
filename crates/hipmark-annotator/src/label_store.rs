//! Per-folder label store.
//!
//! All annotations of a working folder live in one JSON object keyed by image
//! file name, stored as `norberg_olsen_labels.json` next to the images.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use hipmark_core::constants::LABELS_FILE_NAME;
use hipmark_core::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::annotation_set::AnnotationSet;

/// Mapping from image identifier to its annotations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelStore {
    entries: BTreeMap<String, AnnotationSet>,
}

impl LabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Location of the store file inside `folder`.
    pub fn path_in(folder: &Path) -> PathBuf {
        folder.join(LABELS_FILE_NAME)
    }

    /// Reads the store of `folder`. A missing file yields an empty store.
    pub fn load(folder: &Path) -> Result<Self> {
        let path = Self::path_in(folder);
        if !path.exists() {
            debug!("No label store at {:?}, starting empty", path);
            return Ok(Self::new());
        }
        let content = fs::read_to_string(&path)?;
        let store: LabelStore = serde_json::from_str(&content)?;
        info!("Loaded labels for {} images from {:?}", store.len(), path);
        Ok(store)
    }

    /// Writes the store into `folder`, pretty-printed.
    pub fn save(&self, folder: &Path) -> Result<()> {
        let path = Self::path_in(folder);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved labels for {} images to {:?}", self.len(), path);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, image: &str) -> Option<&AnnotationSet> {
        self.entries.get(image)
    }

    /// Copy of the annotations for `image`; empty when none are stored.
    pub fn checkout(&self, image: &str) -> AnnotationSet {
        self.entries.get(image).cloned().unwrap_or_default()
    }

    /// Stores `set` under `image`. An empty set removes the entry.
    pub fn check_in(&mut self, image: &str, set: &AnnotationSet) {
        if set.is_empty() {
            self.entries.remove(image);
        } else {
            self.entries.insert(image.to_string(), set.clone());
        }
    }

    pub fn remove(&mut self, image: &str) -> Option<AnnotationSet> {
        self.entries.remove(image)
    }

    /// Entries in image-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnnotationSet)> {
        self.entries.iter().map(|(name, set)| (name.as_str(), set))
    }
}

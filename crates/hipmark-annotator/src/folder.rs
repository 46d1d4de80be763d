//! Working-folder scan.

use std::fs;
use std::path::Path;

use hipmark_core::constants::IMAGE_EXTENSIONS;
use hipmark_core::Result;
use tracing::debug;

/// Whether `name` carries one of the recognised image extensions.
pub fn is_image_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// File names of the images directly inside `folder`, sorted.
pub fn list_images(folder: &Path) -> Result<Vec<String>> {
    let mut images = Vec::new();
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if is_image_file(name) {
                images.push(name.to_string());
            }
        }
    }
    images.sort();
    debug!("Found {} images in {:?}", images.len(), folder);
    Ok(images)
}

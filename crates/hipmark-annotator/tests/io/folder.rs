use std::fs;

use hipmark_annotator::list_images;
use tempfile::TempDir;

#[test]
fn test_lists_images_sorted() {
    let dir = TempDir::new().unwrap();
    for name in ["b.png", "a.JPG", "c.tiff", "notes.txt", "norberg_olsen_labels.json"] {
        fs::write(dir.path().join(name), b"").unwrap();
    }
    fs::create_dir(dir.path().join("sub.png")).unwrap();

    let images = list_images(dir.path()).unwrap();
    assert_eq!(images, vec!["a.JPG", "b.png", "c.tiff"]);
}

#[test]
fn test_missing_folder_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(list_images(&dir.path().join("nope")).is_err());
}

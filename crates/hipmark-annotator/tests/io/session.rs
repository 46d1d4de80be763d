use std::fs;
use std::path::Path;

use hipmark_annotator::{
    AnnotatorError, AnnotatorSession, DrawingMode, ImageSource, LabelStore, LoadedImage, Outcome,
    PelvisRect, Slot,
};
use hipmark_core::{Point, Side};
use hipmark_settings::{Config, SessionInfo};
use tempfile::TempDir;

fn folder_with(names: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in names {
        image::RgbImage::new(4, 3).save(dir.path().join(name)).unwrap();
    }
    dir
}

fn place(session: &mut AnnotatorSession, side: Side, x: f64, y: f64) {
    let _ = session.set_mode(DrawingMode::Keypoint(side));
    assert_eq!(session.pointer_down(Point::new(x, y)), Outcome::Persist);
}

#[test]
fn test_open_folder_and_load_image() {
    let dir = folder_with(&["b.png", "a.png"]);
    let mut session = AnnotatorSession::new(&Config::default());
    assert_eq!(session.open_folder(dir.path()).unwrap(), 2);
    assert_eq!(session.current_image(), Some("a.png"));
    assert_eq!(session.status(), "Image: a.png (1/2)");

    let image = session.load_current_image().unwrap();
    assert_eq!((image.width, image.height), (4, 3));
    assert_eq!(image.pixels.len(), 4 * 3 * 4);
}

#[test]
fn test_annotations_follow_their_image() {
    let dir = folder_with(&["a.png", "b.png"]);
    let mut session = AnnotatorSession::new(&Config::default());
    session.open_folder(dir.path()).unwrap();

    place(&mut session, Side::Left, 10.0, 20.0);
    assert!(session.labels().get("a.png").is_some());

    assert!(session.next_image().unwrap());
    assert!(session.annotations().is_empty());
    assert!(!session.next_image().unwrap());

    assert!(session.prev_image().unwrap());
    assert!(session.annotations().keypoint(Side::Left).is_some());
}

#[test]
fn test_pointer_input_uses_zoom() {
    let mut session = AnnotatorSession::new(&Config::default());
    session.zoom_in();
    session.zoom_in();
    let zoom = session.viewport().zoom();

    place(&mut session, Side::Right, 144.0, 72.0);
    let kp = session.annotations().keypoint(Side::Right).unwrap();
    assert!((kp.x - 144.0 / zoom).abs() < 1e-9);
    assert!((kp.y - 72.0 / zoom).abs() < 1e-9);
}

#[test]
fn test_navigation_refused_mid_gesture() {
    let dir = folder_with(&["a.png", "b.png"]);
    let mut session = AnnotatorSession::new(&Config::default());
    session.open_folder(dir.path()).unwrap();

    let _ = session.set_mode(DrawingMode::Rectangle);
    let _ = session.pointer_down(Point::new(0.0, 0.0));
    assert!(matches!(
        session.next_image(),
        Err(AnnotatorError::GestureInProgress)
    ));
    assert_eq!(session.current_index(), Some(0));

    let _ = session.pointer_up(Point::new(20.0, 30.0));
    assert!(session.next_image().unwrap());
}

#[test]
fn test_calculate_requires_all_shapes() {
    let mut session = AnnotatorSession::new(&Config::default());
    assert!(matches!(
        session.calculate_angles(),
        Err(AnnotatorError::MissingPrerequisite(Slot::Rectangle))
    ));
}

#[test]
fn test_full_measurement_saved_and_exported() {
    let dir = folder_with(&["hip.png"]);
    let mut session = AnnotatorSession::new(&Config::default());
    session.open_folder(dir.path()).unwrap();

    let _ = session.set_mode(DrawingMode::Rectangle);
    let _ = session.pointer_down(Point::new(0.0, 0.0));
    let _ = session.pointer_up(Point::new(300.0, 200.0));
    place(&mut session, Side::Left, 50.0, 50.0);
    place(&mut session, Side::Right, 250.0, 50.0);
    for (side, x) in [(Side::Left, 100.0), (Side::Right, 200.0)] {
        let _ = session.set_mode(DrawingMode::Circle(side));
        let _ = session.pointer_down(Point::new(x, 100.0));
        let _ = session.pointer_up(Point::new(x + 40.0, 100.0));
    }

    let angles = session.calculate_angles().unwrap();
    assert!((angles.left_norberg - 135.0).abs() < 1e-9);
    assert_eq!(
        session.labels().get("hip.png").unwrap().angles(),
        Some(angles)
    );

    let saved = session.save_labels().unwrap();
    assert_eq!(saved, dir.path().join("norberg_olsen_labels.json"));
    let reloaded = LabelStore::load(dir.path()).unwrap();
    assert_eq!(reloaded.get("hip.png"), Some(session.annotations()));

    let csv = dir.path().join("out.csv");
    session.export_csv(&csv).unwrap();
    assert!(fs::read_to_string(csv).unwrap().contains("hip.png,135.00,45.00"));
}

#[test]
fn test_delete_and_clear_write_back() {
    let dir = folder_with(&["a.png"]);
    let mut session = AnnotatorSession::new(&Config::default());
    session.open_folder(dir.path()).unwrap();
    place(&mut session, Side::Left, 10.0, 10.0);
    place(&mut session, Side::Right, 90.0, 10.0);

    assert_eq!(
        session.select_at(Point::new(10.0, 10.0)).unwrap(),
        Some(Slot::LeftKeypoint)
    );
    assert_eq!(session.delete_selected().unwrap(), Outcome::Persist);
    let stored = session.labels().get("a.png").unwrap();
    assert!(stored.keypoint(Side::Left).is_none());

    assert_eq!(session.clear_current().unwrap(), Outcome::Persist);
    assert!(session.labels().is_empty());
    assert!(matches!(
        session.export_csv(&dir.path().join("x.csv")),
        Err(AnnotatorError::NothingToExport)
    ));
}

#[test]
fn test_resume_clamps_index() {
    let dir = folder_with(&["a.png", "b.png", "c.png"]);
    let mut session = AnnotatorSession::new(&Config::default());
    let info = SessionInfo {
        last_folder: Some(dir.path().to_path_buf()),
        last_image_index: 7,
    };
    assert!(session.resume(&info).unwrap());
    assert_eq!(session.current_image(), Some("c.png"));
    assert_eq!(session.session_info().last_image_index, 2);

    let mut fresh = AnnotatorSession::new(&Config::default());
    assert!(!fresh.resume(&SessionInfo::default()).unwrap());
}

#[test]
fn test_corrupt_label_store_starts_empty() {
    let dir = folder_with(&["a.png"]);
    fs::write(dir.path().join("norberg_olsen_labels.json"), "[1, 2").unwrap();
    let mut session = AnnotatorSession::new(&Config::default());
    assert_eq!(session.open_folder(dir.path()).unwrap(), 1);
    assert!(session.labels().is_empty());
}

#[test]
fn test_visibility_toggles_affect_render() {
    let mut session = AnnotatorSession::new(&Config::default());
    let _ = session.set_mode(DrawingMode::Rectangle);
    let _ = session.pointer_down(Point::new(0.0, 0.0));
    let _ = session.pointer_up(Point::new(10.0, 10.0));
    assert_eq!(session.render().len(), 2);

    assert!(!session.toggle_text());
    assert_eq!(session.render().len(), 1);
    assert!(!session.toggle_shapes());
    assert!(session.render().is_empty());
    assert_eq!(
        session.annotations().rectangle(),
        Some(&PelvisRect::new(0.0, 0.0, 10.0, 10.0))
    );
}

struct FailingSource;

impl ImageSource for FailingSource {
    fn load_image(&self, path: &Path) -> hipmark_core::Result<LoadedImage> {
        Err(hipmark_core::Error::ImageLoad {
            path: path.to_path_buf(),
            reason: "unsupported".to_string(),
        })
    }
}

#[test]
fn test_image_load_failure_is_reported() {
    let dir = folder_with(&["a.png"]);
    let mut session = AnnotatorSession::with_source(&Config::default(), FailingSource);
    assert!(matches!(
        session.load_current_image(),
        Err(AnnotatorError::NoImageSelected)
    ));
    session.open_folder(dir.path()).unwrap();
    match session.load_current_image() {
        Err(AnnotatorError::Storage(e)) => assert!(e.is_image_load()),
        other => panic!("unexpected {:?}", other),
    }
}

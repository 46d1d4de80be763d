use std::fs;

use hipmark_annotator::{export_csv, write_csv, AnnotationSet, FemurCircle, Keypoint, LabelStore, PelvisRect};
use hipmark_core::{Point, Side};
use tempfile::TempDir;

fn measured() -> AnnotationSet {
    let mut set = AnnotationSet::new();
    set.set_rectangle(PelvisRect::new(0.0, 0.0, 300.0, 200.0));
    set.set_keypoint(Side::Left, Keypoint::new(50.0, 50.0));
    set.set_keypoint(Side::Right, Keypoint::new(250.0, 50.0));
    set.set_circle(Side::Left, FemurCircle::new(Point::new(100.0, 100.0), 40.0));
    set.set_circle(Side::Right, FemurCircle::new(Point::new(200.0, 100.0), 40.0));
    set.calculate_angles().unwrap();
    set
}

#[test]
fn test_csv_rows() {
    let mut store = LabelStore::new();
    store.check_in("b.png", &measured());
    let mut partial = AnnotationSet::new();
    partial.set_keypoint(Side::Left, Keypoint::new(1.0, 1.0));
    store.check_in("a, first.png", &partial);

    let mut out = Vec::new();
    write_csv(&mut out, &store).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(
        lines[0],
        "Image,Left_Norberg_Angle,Right_Norberg_Angle,Left_Joint_Angle,Right_Joint_Angle,Avg_Norberg_Angle,Avg_Joint_Angle"
    );
    assert_eq!(lines[1], "\"a, first.png\",,,,,,");
    assert_eq!(lines[2], "b.png,135.00,45.00,135.00,135.00,90.00,135.00");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_export_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.csv");
    let mut store = LabelStore::new();
    store.check_in("hip.png", &measured());

    export_csv(&path, &store).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Image,"));
    assert!(content.contains("hip.png,135.00"));
}

use hipmark_annotator::{
    AnnotationSet, AnnotatorError, FemurCircle, Keypoint, PelvisRect, Slot, SlotValue,
};
use hipmark_core::{Point, Side};

fn complete_set() -> AnnotationSet {
    let mut set = AnnotationSet::new();
    set.set_rectangle(PelvisRect::new(0.0, 0.0, 300.0, 200.0));
    set.set_keypoint(Side::Left, Keypoint::new(60.0, 50.0));
    set.set_keypoint(Side::Right, Keypoint::new(240.0, 50.0));
    set.set_circle(Side::Left, FemurCircle::new(Point::new(100.0, 100.0), 30.0));
    set.set_circle(Side::Right, FemurCircle::new(Point::new(200.0, 100.0), 30.0));
    set
}

#[test]
fn test_missing_prerequisite_in_order() {
    let mut set = AnnotationSet::new();
    set.set_rectangle(PelvisRect::new(0.0, 0.0, 10.0, 10.0));
    set.set_keypoint(Side::Left, Keypoint::new(1.0, 1.0));

    let err = set.calculate_angles().unwrap_err();
    assert!(matches!(
        err,
        AnnotatorError::MissingPrerequisite(Slot::RightKeypoint)
    ));
    assert!(Slot::DERIVED.iter().all(|&s| !set.has(s)));
}

#[test]
fn test_calculate_fills_all_four() {
    let mut set = complete_set();
    let angles = set.calculate_angles().unwrap();
    assert_eq!(set.norberg_angle(Side::Left), Some(angles.left_norberg));
    assert_eq!(set.joint_angle(Side::Right), Some(angles.right_joint));
    assert_eq!(set.angles(), Some(angles));
}

#[test]
fn test_move_circle_keeps_radius() {
    let mut set = complete_set();
    assert!(set.translate(Slot::LeftCircle, 5.0, -3.0));
    let circle = set.circle(Side::Left).unwrap();
    assert_eq!(circle.center(), Point::new(105.0, 97.0));
    assert_eq!(circle.radius(), 30.0);
}

#[test]
fn test_editing_inputs_clears_angles() {
    let mut set = complete_set();
    set.calculate_angles().unwrap();
    set.translate(Slot::RightKeypoint, 1.0, 1.0);
    assert!(set.angles().is_none());

    set.calculate_angles().unwrap();
    set.delete(Slot::LeftCircle);
    assert!(set.norberg_angle(Side::Left).is_none());
}

#[test]
fn test_rectangle_edit_keeps_angles() {
    let mut set = complete_set();
    set.calculate_angles().unwrap();
    set.translate(Slot::Rectangle, 10.0, 10.0);
    assert!(set.angles().is_some());
}

#[test]
fn test_generic_set_rejects_derived_and_mismatch() {
    let mut set = AnnotationSet::new();
    assert!(matches!(
        set.set(Slot::LeftJointAngle, SlotValue::Angle(10.0)),
        Err(AnnotatorError::DerivedSlot(Slot::LeftJointAngle))
    ));
    assert!(matches!(
        set.set(Slot::Rectangle, SlotValue::Keypoint(Keypoint::new(0.0, 0.0))),
        Err(AnnotatorError::SlotKindMismatch { .. })
    ));
    set.set(Slot::RightKeypoint, SlotValue::Keypoint(Keypoint::new(2.0, 3.0)))
        .unwrap();
    assert_eq!(
        set.get(Slot::RightKeypoint),
        Some(SlotValue::Keypoint(Keypoint::new(2.0, 3.0)))
    );
}

#[test]
fn test_json_field_names() {
    let mut set = AnnotationSet::new();
    set.set_rectangle(PelvisRect::new(1.0, 2.0, 3.0, 4.0));
    set.set_circle(Side::Right, FemurCircle::new(Point::new(5.0, 6.0), 7.0));
    let json = serde_json::to_value(&set).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "rectangle": {"x1": 1.0, "y1": 2.0, "x2": 3.0, "y2": 4.0},
            "rightCircle": {"centerX": 5.0, "centerY": 6.0, "radius": 7.0}
        })
    );
}

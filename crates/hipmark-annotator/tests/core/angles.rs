use hipmark_annotator::{joint_angle, norberg_angle, FemurCircle, HipAngles, Keypoint};
use hipmark_core::{Point, Side};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_norberg_point_left_of_center_is_mirrored() {
    let angle = norberg_angle(Point::new(100.0, 100.0), Point::new(0.0, 100.0));
    assert!(approx(angle, 90.0));
}

#[test]
fn test_norberg_right_side_unmirrored() {
    let angle = norberg_angle(Point::new(100.0, 100.0), Point::new(200.0, 0.0));
    assert!(approx(angle, 45.0));
}

#[test]
fn test_joint_coincident_vertex_is_zero() {
    let angle = joint_angle(Point::new(0.0, 0.0), Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    assert_eq!(angle, 0.0);
}

#[test]
fn test_joint_right_angle() {
    let angle = joint_angle(Point::new(0.0, -10.0), Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    assert!(approx(angle, 90.0));
}

#[test]
fn test_hip_angles_report() {
    let angles = HipAngles::compute(
        &Keypoint::new(50.0, 50.0),
        &Keypoint::new(250.0, 50.0),
        &FemurCircle::new(Point::new(100.0, 100.0), 40.0),
        &FemurCircle::new(Point::new(200.0, 100.0), 40.0),
    );
    assert!(approx(angles.norberg(Side::Left), 135.0));
    assert!(approx(angles.norberg(Side::Right), 45.0));
    assert!(approx(angles.joint(Side::Left), 135.0));
    assert!(approx(angles.joint(Side::Right), 135.0));
    assert!(approx(angles.average_norberg(), 90.0));

    let report = angles.to_string();
    assert!(report.contains("LEFT: Norberg 135.0°, Joint 135.0°"));
    assert!(report.contains("AVERAGE: Norberg 90.0°"));
}

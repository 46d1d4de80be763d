use hipmark_annotator::{
    joint_angle, norberg_angle, AnnotationSet, Corner, FemurCircle, Keypoint, PelvisRect, Slot,
};
use hipmark_core::{Point, Side};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -5000.0..5000.0f64
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

fn corner() -> impl Strategy<Value = Corner> {
    prop::sample::select(Corner::ALL.to_vec())
}

fn assert_normalized(rect: &PelvisRect) {
    assert!(rect.x1() <= rect.x2());
    assert!(rect.y1() <= rect.y2());
}

proptest! {
    #[test]
    fn rectangle_stays_normalized(
        a in point(),
        b in point(),
        steps in prop::collection::vec((corner(), -500.0..500.0f64, -500.0..500.0f64), 0..20),
    ) {
        let mut set = AnnotationSet::new();
        set.set_rectangle(PelvisRect::from_corners(a, b));
        assert_normalized(set.rectangle().unwrap());
        for (corner, dx, dy) in steps {
            set.resize_rectangle(corner, dx, dy);
            assert_normalized(set.rectangle().unwrap());
        }
    }

    #[test]
    fn circle_radius_never_negative(
        center in point(),
        radius in -1000.0..1000.0f64,
        targets in prop::collection::vec(point(), 0..10),
        moves in prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64), 0..10),
    ) {
        let mut set = AnnotationSet::new();
        set.set_circle(Side::Left, FemurCircle::new(center, radius));
        prop_assert!(set.circle(Side::Left).unwrap().radius() >= 0.0);
        for p in targets {
            set.resize_circle(Side::Left, p);
            prop_assert!(set.circle(Side::Left).unwrap().radius() >= 0.0);
        }
        for (dx, dy) in moves {
            set.translate(Slot::LeftCircle, dx, dy);
            prop_assert!(set.circle(Side::Left).unwrap().radius() >= 0.0);
        }
    }

    #[test]
    fn norberg_invariant_under_translation(
        center in point(),
        point in point(),
        dx in -1000.0..1000.0f64,
        dy in -1000.0..1000.0f64,
    ) {
        prop_assume!((point.x - center.x).abs() > 1e-3);
        prop_assume!(center.distance_to(&point) > 1e-3);
        let before = norberg_angle(center, point);
        let after = norberg_angle(
            Point::new(center.x + dx, center.y + dy),
            Point::new(point.x + dx, point.y + dy),
        );
        prop_assert!((before - after).abs() < 1e-6, "{} vs {}", before, after);
    }

    #[test]
    fn joint_angle_in_range(a in point(), v in point(), b in point()) {
        let angle = joint_angle(a, v, b);
        prop_assert!(!angle.is_nan());
        prop_assert!((0.0..=180.0).contains(&angle));
    }

    #[test]
    fn annotation_set_round_trips_exactly(
        rect in prop::option::of((point(), point())),
        left_kp in prop::option::of(point()),
        right_kp in prop::option::of(point()),
        left_circle in prop::option::of((point(), 0.0..500.0f64)),
        right_circle in prop::option::of((point(), 0.0..500.0f64)),
        calculate in any::<bool>(),
    ) {
        let mut set = AnnotationSet::new();
        if let Some((a, b)) = rect {
            set.set_rectangle(PelvisRect::from_corners(a, b));
        }
        if let Some(p) = left_kp {
            set.set_keypoint(Side::Left, Keypoint::from(p));
        }
        if let Some(p) = right_kp {
            set.set_keypoint(Side::Right, Keypoint::from(p));
        }
        if let Some((c, r)) = left_circle {
            set.set_circle(Side::Left, FemurCircle::new(c, r));
        }
        if let Some((c, r)) = right_circle {
            set.set_circle(Side::Right, FemurCircle::new(c, r));
        }
        if calculate {
            let _ = set.calculate_angles();
        }

        let json = serde_json::to_string(&set).unwrap();
        let back: AnnotationSet = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, set);
    }
}

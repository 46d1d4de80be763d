use hipmark_annotator::{to_display, to_image, Viewport};
use hipmark_core::Point;
use hipmark_settings::ViewSettings;

#[test]
fn test_transform_is_unclamped() {
    let p = Point::new(10.0, 20.0);
    assert_eq!(to_display(p, 8.0), Point::new(80.0, 160.0));
    assert_eq!(to_image(Point::new(80.0, 160.0), 8.0), p);
}

#[test]
fn test_zoom_steps_and_limits() {
    let mut vp = Viewport::new();
    assert!(vp.zoom_in());
    assert!((vp.zoom() - 1.2).abs() < 1e-12);
    assert_eq!(vp.to_string(), "Zoom: 120%");

    for _ in 0..50 {
        vp.zoom_in();
    }
    assert_eq!(vp.zoom(), 5.0);
    assert!(!vp.zoom_in());

    for _ in 0..100 {
        vp.zoom_out();
    }
    assert_eq!(vp.zoom(), 0.1);
    assert!(!vp.zoom_out());

    vp.reset_zoom();
    assert_eq!(vp.zoom(), 1.0);
}

#[test]
fn test_settings_drive_range() {
    let view = ViewSettings {
        zoom_min: 0.5,
        zoom_max: 2.0,
        ..ViewSettings::default()
    };
    let mut vp = Viewport::from_settings(&view);
    vp.set_zoom(10.0);
    assert_eq!(vp.zoom(), 2.0);
    assert_eq!(vp.zoom_range(), (0.5, 2.0));
}

#[test]
fn test_pointer_mapping_round_trip() {
    let mut vp = Viewport::new();
    vp.set_zoom(2.5);
    let display = Point::new(250.0, 125.0);
    let image = vp.display_to_image(display);
    assert_eq!(image, Point::new(100.0, 50.0));
    assert_eq!(vp.image_to_display(image), display);
    assert_eq!(vp.scaled_size(400, 300), (1000, 750));
}

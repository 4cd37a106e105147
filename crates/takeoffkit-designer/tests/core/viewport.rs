use proptest::prelude::*;
use takeoffkit_designer::viewport::Viewport;

#[test]
fn test_viewport_identity() {
    let vp = Viewport::new();
    assert_eq!(vp.scale(), 1.0);
    assert_eq!(vp.offset_x(), 0.0);
    assert_eq!(vp.offset_y(), 0.0);

    let p = vp.to_document(123.0, 45.0);
    assert_eq!((p.x, p.y), (123.0, 45.0));
}

#[test]
fn test_to_document_with_scale_and_offset() {
    let mut vp = Viewport::new();
    vp.set_scale(2.0);
    vp.set_offset(10.0, 20.0);

    let doc = vp.to_document(30.0, 60.0);
    assert_eq!((doc.x, doc.y), (10.0, 20.0));

    let view = vp.to_view(10.0, 20.0);
    assert_eq!((view.x, view.y), (30.0, 60.0));
}

#[test]
fn test_zoom_steps_are_multiplicative() {
    let mut vp = Viewport::new();
    vp.zoom_in();
    assert_eq!(vp.scale(), 1.25);
    vp.zoom_in();
    assert_eq!(vp.scale(), 1.5625);
    vp.zoom_out();
    vp.zoom_out();
    assert_eq!(vp.scale(), 1.0);
}

#[test]
fn test_zoom_is_unbounded() {
    let mut vp = Viewport::new();
    for _ in 0..60 {
        vp.zoom_out();
    }
    assert!(vp.scale() > 0.0);
    assert!(vp.scale() < 1e-5);
}

#[test]
fn test_set_scale_rejects_invalid() {
    let mut vp = Viewport::new();
    vp.set_scale(0.0);
    vp.set_scale(-2.0);
    vp.set_scale(f64::NAN);
    assert_eq!(vp.scale(), 1.0);
}

#[test]
fn test_pan_and_reset() {
    let mut vp = Viewport::with_zoom_step(2.0);
    vp.pan_by(15.0, -5.0);
    vp.zoom_in();
    assert_eq!(vp.scale(), 2.0);
    assert_eq!((vp.offset_x(), vp.offset_y()), (15.0, -5.0));

    vp.reset();
    assert_eq!(vp.scale(), 1.0);
    assert_eq!((vp.offset_x(), vp.offset_y()), (0.0, 0.0));
    assert_eq!(vp.zoom_step(), 2.0);
}

proptest! {
    #[test]
    fn prop_view_document_round_trip(
        scale in 0.05f64..20.0,
        ox in -2000.0f64..2000.0,
        oy in -2000.0f64..2000.0,
        x in -5000.0f64..5000.0,
        y in -5000.0f64..5000.0,
    ) {
        let mut vp = Viewport::new();
        vp.set_scale(scale);
        vp.set_offset(ox, oy);

        let back = vp.point_to_view(vp.to_document(x, y));
        prop_assert!((back.x - x).abs() < 1e-6);
        prop_assert!((back.y - y).abs() < 1e-6);
    }
}

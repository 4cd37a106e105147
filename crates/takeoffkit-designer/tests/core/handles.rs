use takeoffkit_designer::collaborators::NominalTextMetrics;
use takeoffkit_designer::handles::resize_by_handle;
use takeoffkit_designer::hit_test::HitTester;
use takeoffkit_designer::model::{
    DesignEllipse, DesignLine, DesignRectangle, DesignText, DesignTriangle, DrawingObject, Point,
    Shape,
};
use takeoffkit_designer::viewport::Viewport;
use takeoffkit_settings::CanvasSettings;

fn rect_object(x: f64, y: f64, w: f64, h: f64) -> DrawingObject {
    let mut obj = DrawingObject::new(Shape::Rectangle(DesignRectangle::new(x, y, w, h)));
    takeoffkit_designer::derive_value(&mut obj);
    obj
}

fn as_rect(obj: &DrawingObject) -> &DesignRectangle {
    match &obj.shape {
        Shape::Rectangle(r) => r,
        other => panic!("expected rectangle, got {:?}", other),
    }
}

#[test]
fn test_rect_handle_positions_follow_view() {
    let mut vp = Viewport::new();
    vp.set_scale(2.0);
    vp.set_offset(10.0, 10.0);
    let canvas = CanvasSettings::default();
    let tester = HitTester::new(&vp, &canvas, &NominalTextMetrics);

    let obj = rect_object(0.0, 0.0, 50.0, 20.0);
    assert_eq!(
        tester.handle_positions(&obj),
        vec![
            Point::new(10.0, 10.0),
            Point::new(110.0, 10.0),
            Point::new(110.0, 50.0),
            Point::new(10.0, 50.0),
        ]
    );
}

#[test]
fn test_detect_handle_square() {
    let vp = Viewport::new();
    let canvas = CanvasSettings::default();
    let tester = HitTester::new(&vp, &canvas, &NominalTextMetrics);
    let obj = rect_object(0.0, 0.0, 100.0, 100.0);

    assert_eq!(tester.detect_handle(&obj, 104.0, 104.0), Some(2));
    assert_eq!(tester.detect_handle(&obj, 100.0, 106.0), Some(2));
    assert_eq!(tester.detect_handle(&obj, 107.0, 100.0), None);
    assert_eq!(tester.detect_handle(&obj, -3.0, 2.0), Some(0));
    assert_eq!(tester.detect_handle(&obj, 50.0, 50.0), None);
}

#[test]
fn test_ellipse_and_line_handle_order() {
    let vp = Viewport::new();
    let canvas = CanvasSettings::default();
    let tester = HitTester::new(&vp, &canvas, &NominalTextMetrics);

    let ellipse = DrawingObject::new(Shape::Ellipse(DesignEllipse::new(0.0, 0.0, 100.0, 50.0)));
    assert_eq!(
        tester.handle_positions(&ellipse),
        vec![
            Point::new(50.0, 0.0),
            Point::new(100.0, 25.0),
            Point::new(50.0, 50.0),
            Point::new(0.0, 25.0),
        ]
    );

    let line = DrawingObject::new(Shape::Line(DesignLine::new(
        Point::new(5.0, 5.0),
        Point::new(80.0, 40.0),
    )));
    assert_eq!(tester.detect_handle(&line, 80.0, 40.0), Some(1));
}

#[test]
fn test_text_handles_use_measured_box() {
    let vp = Viewport::new();
    let canvas = CanvasSettings::default();
    let tester = HitTester::new(&vp, &canvas, &NominalTextMetrics);

    let text = DrawingObject::new(Shape::Text(DesignText::new(10.0, 10.0, "note")));
    assert_eq!(
        tester.handle_positions(&text),
        vec![
            Point::new(10.0, 10.0),
            Point::new(70.0, 10.0),
            Point::new(70.0, 35.0),
            Point::new(10.0, 35.0),
        ]
    );
}

#[test]
fn test_resize_bottom_right_keeps_origin() {
    let vp = Viewport::new();
    let mut obj = rect_object(10.0, 20.0, 30.0, 40.0);

    resize_by_handle(&mut obj, 2, &vp, 150.0, 120.0);
    assert_eq!(as_rect(&obj), &DesignRectangle::new(10.0, 20.0, 140.0, 100.0));
    assert_eq!(obj.value, Some(14000.0));
}

#[test]
fn test_resize_top_left_moves_origin() {
    let vp = Viewport::new();
    let mut obj = rect_object(0.0, 0.0, 100.0, 100.0);

    resize_by_handle(&mut obj, 0, &vp, 20.0, 30.0);
    assert_eq!(as_rect(&obj), &DesignRectangle::new(20.0, 30.0, 80.0, 70.0));
    assert_eq!(obj.value, Some(5600.0));
}

#[test]
fn test_resize_past_opposite_corner() {
    let vp = Viewport::new();
    let mut obj = rect_object(0.0, 0.0, 100.0, 100.0);

    resize_by_handle(&mut obj, 2, &vp, -20.0, 50.0);
    let r = as_rect(&obj);
    assert_eq!((r.w, r.h), (-20.0, 50.0));
    assert_eq!(obj.value, Some(1000.0));
}

#[test]
fn test_resize_converts_view_to_document() {
    let mut vp = Viewport::new();
    vp.set_scale(2.0);
    let mut obj = rect_object(0.0, 0.0, 10.0, 10.0);

    resize_by_handle(&mut obj, 2, &vp, 300.0, 200.0);
    assert_eq!(as_rect(&obj), &DesignRectangle::new(0.0, 0.0, 150.0, 100.0));
}

#[test]
fn test_resize_is_absolute_per_event() {
    let vp = Viewport::new();
    let mut obj = rect_object(0.0, 0.0, 10.0, 10.0);

    for x in [20.0, 35.0, 50.0, 40.0] {
        resize_by_handle(&mut obj, 2, &vp, x, 40.0);
    }
    assert_eq!(as_rect(&obj), &DesignRectangle::new(0.0, 0.0, 40.0, 40.0));
}

#[test]
fn test_ellipse_handle_moves_one_axis() {
    let vp = Viewport::new();
    let mut obj = DrawingObject::new(Shape::Ellipse(DesignEllipse::new(0.0, 0.0, 100.0, 50.0)));

    resize_by_handle(&mut obj, 1, &vp, 140.0, 999.0);
    assert_eq!(obj.shape, Shape::Ellipse(DesignEllipse::new(0.0, 0.0, 140.0, 50.0)));

    resize_by_handle(&mut obj, 0, &vp, 999.0, -10.0);
    assert_eq!(obj.shape, Shape::Ellipse(DesignEllipse::new(0.0, -10.0, 140.0, 60.0)));
}

#[test]
fn test_line_and_triangle_handles_move_single_points() {
    let vp = Viewport::new();

    let mut line = DrawingObject::new(Shape::Line(DesignLine::new(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
    )));
    resize_by_handle(&mut line, 1, &vp, 0.0, 20.0);
    assert_eq!(
        line.shape,
        Shape::Line(DesignLine::new(Point::new(0.0, 0.0), Point::new(0.0, 20.0)))
    );
    assert_eq!(line.value, Some(20.0));

    let mut tri = DrawingObject::new(Shape::Triangle(DesignTriangle::new(
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(0.0, 3.0),
    )));
    resize_by_handle(&mut tri, 1, &vp, 8.0, 0.0);
    assert_eq!(tri.value, Some(12.0));
}

#[test]
fn test_manual_value_survives_resize() {
    let vp = Viewport::new();
    let mut obj = rect_object(0.0, 0.0, 10.0, 10.0);
    obj.value = Some(42.0);
    obj.manual_value = true;

    resize_by_handle(&mut obj, 2, &vp, 50.0, 50.0);
    assert_eq!(as_rect(&obj).w, 50.0);
    assert_eq!(obj.value, Some(42.0));
}

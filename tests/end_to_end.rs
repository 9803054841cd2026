use approx::{assert_abs_diff_eq, assert_relative_eq};
use tcb::{
    evaluate, rotate, translate2, DrawList, Layer, Mat3, Mat4, PointerAction, Session, Settings,
    ShapeParameters, Spline, SplineError, TcbCurve, Vec2, Vec3, Vector,
};

fn square<T: tcb::Scalar>() -> Vec<Vec2<T>> {
    [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0), (0.0, 0.0)]
        .iter()
        .map(|&(x, y)| Vec2::new(tcb::cast(x), tcb::cast(y)))
        .collect()
}

#[test]
fn square_polyline_layout() {
    let points = square::<f64>();
    let line = evaluate(ShapeParameters::catmull_rom(), &points, 0.05).unwrap();
    assert_eq!(line.len(), 44);

    // first segment starts on the second control point and ends on the third
    assert_eq!(line[0], Vec2::new(100.0, 0.0));
    assert_abs_diff_eq!(line[20].x, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(line[20].y, 100.0, epsilon = 1e-9);

    // halfway along the first segment
    assert_abs_diff_eq!(line[10].x, 112.5, epsilon = 1e-9);
    assert_abs_diff_eq!(line[10].y, 50.0, epsilon = 1e-9);

    // second segment runs from (100, 100) to (0, 100)
    assert_abs_diff_eq!(line[22].x, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(line[22].y, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(line[42].x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(line[42].y, 100.0, epsilon = 1e-9);
}

#[test]
fn square_in_single_precision() {
    let points = square::<f32>();
    let line = evaluate(ShapeParameters::catmull_rom(), &points, 0.05).unwrap();
    assert_eq!(line.len(), 44);
    assert_abs_diff_eq!(line[20].x, 100.0, epsilon = 1e-3);
    assert_abs_diff_eq!(line[20].y, 100.0, epsilon = 1e-3);
}

#[test]
fn full_tension_midpoint_is_chord_midpoint() {
    let points = square::<f64>();
    let curve = TcbCurve::new(ShapeParameters::new(1.0, 0.3, -0.6), &points).unwrap();
    let mid = curve.segment(0).eval(0.5);
    assert_abs_diff_eq!(mid.x, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(mid.y, 50.0, epsilon = 1e-9);
}

#[test]
fn too_few_points() {
    let points = &square::<f32>()[..3];
    let err = evaluate(ShapeParameters::catmull_rom(), points, 0.05).unwrap_err();
    assert_eq!(err.to_string(), "insufficient control points: need at least 4, got 3");
    assert_eq!(
        evaluate(ShapeParameters::catmull_rom(), &square::<f32>(), f32::NAN),
        Err(SplineError::InvalidStep)
    );
}

#[test]
fn drag_session() {
    let mut session = Session::<f32>::new();
    session.pointer_down(Vec2::new(0.0, 0.0));
    session.pointer_up();
    session.pointer_down(Vec2::new(50.0, 50.0));
    session.pointer_up();

    assert_eq!(session.pointer_down(Vec2::new(51.0, 51.0)), PointerAction::Grabbed(1));
    session.pointer_moved(Vec2::new(70.0, 20.0));
    session.pointer_up();
    assert_eq!(session.pointer_down(Vec2::new(200.0, 200.0)), PointerAction::Appended(2));
    session.pointer_up();
    assert_eq!(
        session.control_points(),
        &[Vec2::new(0.0, 0.0), Vec2::new(70.0, 20.0), Vec2::new(200.0, 200.0)]
    );

    let mut frame = DrawList::new();
    session.render(&mut frame).unwrap();
    assert!(frame.find(Layer::Curve).is_none());

    session.pointer_down(Vec2::new(300.0, 0.0));
    session.pointer_up();
    frame.clear();
    session.render(&mut frame).unwrap();
    let curve = frame.find(Layer::Curve).unwrap();
    assert_eq!(curve.points().len(), 22);
    assert_eq!(curve.points()[0], Vec2::new(70.0, 20.0));
}

#[test]
fn custom_settings() {
    let settings = Settings::default()
        .with_click_threshold(1.0f64)
        .with_tension_range(-1.0, 1.0);
    let mut session = Session::with_settings(settings);
    session.pointer_down(Vec2::new(0.0, 0.0));
    session.pointer_up();
    assert_eq!(session.pointer_down(Vec2::new(2.0, 0.0)), PointerAction::Appended(1));
    session.pointer_up();
    assert_eq!(session.set_tension(3.0), 1.0);
}

#[test]
fn normalize_gives_unit_length() {
    for v in [Vec3::new(3.0f64, -4.0, 12.0), Vec3::new(1e-3, 2e-3, -5e-4), Vec3::new(-7.0, 0.0, 0.0)] {
        assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-12);
    }
    let zero = Vec2::<f32>::new(0.0, 0.0).normalize();
    assert!(zero.x.is_nan() && zero.y.is_nan());
}

#[test]
fn inverse_undoes_transforms() {
    let m: Mat3<f64> = translate2(Vec2::new(5.0, -2.0)) * rotate(0.7);
    let p = Vec3::new(3.0, 1.0, 1.0);
    let back = m.inverse() * (m * p);
    assert_abs_diff_eq!(back.x, p.x, epsilon = 1e-12);
    assert_abs_diff_eq!(back.y, p.y, epsilon = 1e-12);
    assert_abs_diff_eq!(back.z, p.z, epsilon = 1e-12);

    let a = Mat4::from_rows([
        [2.0f64, 0.0, 1.0, 3.0],
        [1.0, 4.0, 0.0, -1.0],
        [0.0, 1.0, 3.0, 2.0],
        [1.0, 0.0, 2.0, 5.0],
    ]);
    let product = a * a.inverse();
    for i in 0..4 {
        for j in 0..4 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(product[i][j], expected, epsilon = 1e-12);
        }
    }
}

use tcb::{PointerAction, Session, Spline, Vec2};

/// Replays a short scripted editing session and prints what the input handler did
/// and the resulting polyline.
fn main() {
    let mut session = Session::<f32>::new();

    for (x, y) in [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0), (0.0, 0.0)] {
        let action = session.pointer_down(Vec2::new(x, y));
        session.pointer_up();
        println!("click ({}, {}) -> {:?}", x, y, action);
    }

    // drag the third point outwards
    if let PointerAction::Grabbed(index) = session.pointer_down(Vec2::new(104.0, 97.0)) {
        for step in 1..=4 {
            let d = 10.0 * step as f32;
            session.pointer_moved(Vec2::new(100.0 + d, 100.0 + d));
        }
        session.pointer_up();
        println!("moved point {} to {}", index, session.control_points()[index]);
    }

    let stored = session.set_tension(7.0);
    println!("tension request 7 stored as {}", stored);
    session.set_tension(0.3);
    session.set_bias(-0.2);

    match session.polyline() {
        Ok(line) => {
            println!("{} samples", line.len());
            for (i, p) in line.iter().enumerate() {
                println!("{:3}: {:.3}", i, p);
            }
        }
        Err(e) => eprintln!("cannot sample curve: {}", e),
    }

    if let Some(curve) = session.curve() {
        println!("curve midpoint: {:.3}", curve.eval(0.5));
    }
}

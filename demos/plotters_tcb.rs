extern crate plotters;
use plotters::prelude::*;

use tcb::{DrawCommand, DrawList, Layer, Session, Vec2};

/// Renders one frame of an editing session (curve, control polygon, control points)
/// into `tcb_curve.png`, once per tension value so the effect is visible side by side.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let clicks = [
        (60.0, 400.0),
        (120.0, 120.0),
        (300.0, 80.0),
        (420.0, 360.0),
        (560.0, 300.0),
        (600.0, 60.0),
    ];

    let mut session = Session::<f64>::new();
    for (x, y) in clicks {
        session.pointer_down(Vec2::new(x, y));
        session.pointer_up();
    }

    let root = BitMapBackend::new("tcb_curve.png", (1280, 480)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));

    for (panel, tension) in panels.iter().zip([0.0, 0.8]) {
        session.set_tension(tension);
        let mut frame = DrawList::new();
        session.render(&mut frame)?;

        // screen space: y grows downwards
        let mut chart = ChartBuilder::on(panel)
            .caption(format!("TCB spline, tension {}", tension), ("sans-serif", 21).into_font())
            .margin(5)
            .x_label_area_size(30)
            .y_label_area_size(30)
            .build_cartesian_2d(0f64..640f64, 480f64..0f64)?;

        chart.configure_mesh().draw()?;

        for command in frame.commands() {
            let coords: Vec<(f64, f64)> = command.points().iter().map(|p| (p.x, p.y)).collect();
            match (command, command.layer()) {
                (DrawCommand::LineStrip { .. }, Layer::Curve) => {
                    chart
                        .draw_series(LineSeries::new(coords, &RED))?
                        .label("P(t)")
                        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));
                }
                (DrawCommand::LineStrip { .. }, _) => {
                    chart
                        .draw_series(LineSeries::new(coords, &BLUE.mix(0.5)))?
                        .label("Control Polygon")
                        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
                }
                (DrawCommand::Points { .. }, _) => {
                    chart
                        .draw_series(PointSeries::of_element(coords, 5, &BLUE, &|coord, size, style| {
                            EmptyElement::at(coord) + Circle::new((0, 0), size, style)
                        }))?
                        .label("Control Points");
                }
            }
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

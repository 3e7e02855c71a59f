use super::*;

fn linear() -> PlotFn {
    PlotFn::Polynomial {
        coeffs: vec![0.0, 1.0],
    }
}

#[test]
fn polynomial_samples_each_unit() {
    let plot = FunctionPlot::new(
        PlotFn::Polynomial {
            coeffs: vec![0.0, 0.0, 1.0],
        },
        (0, 4),
    );
    let c = plot.samples().value;
    assert!(!c.closed);
    assert_eq!(c, Contour::from_pairs(&[(0, 0), (1, 1), (4, 2), (9, 3)], false));

    let reversed = FunctionPlot::new(
        PlotFn::Polynomial {
            coeffs: vec![0.0, 0.0, 1.0],
        },
        (4, 0),
    );
    assert_eq!(reversed.samples().value, c);
}

#[test]
fn scaling_multiplies_sample_density() {
    let plot = FunctionPlot::new(linear(), (0, 2)).with_scaling(2.0);
    assert_eq!(
        plot.samples().value,
        Contour::from_pairs(&[(0, 0), (1, 1), (2, 2), (3, 3)], false)
    );
}

#[test]
fn invalid_ranges_are_rejected() {
    for plot in [
        FunctionPlot::new(linear(), (0, 10)).with_scaling(0.0),
        FunctionPlot::new(linear(), (0, 10)).with_scaling(f64::NAN),
        FunctionPlot::new(linear(), (3, 3)),
        FunctionPlot::new(linear(), (0, 1_000_000)).with_scaling(1000.0),
    ] {
        assert!(matches!(plot.render(), Err(InkError::InvalidRange(_))));
    }
}

#[test]
fn non_finite_samples_are_dropped() {
    let plot = FunctionPlot::new(PlotFn::custom(|x| 1.0 / x), (-2, 3));
    let out = plot.samples();
    assert_eq!(out.value.len(), 4);
    assert_eq!(
        out.warnings,
        vec![Warning::NonFiniteSample {
            name: "func".into(),
            x: 0.0
        }]
    );
}

#[test]
fn y_range_crops_rows_and_trims_columns() {
    let sine = PlotFn::Sine {
        amplitude: 10.0,
        frequency: 1.0,
        phase: 0.0,
    };
    let full = FunctionPlot::new(sine.clone(), (0, 100)).render().unwrap().value;
    assert_eq!(full.origin().y, -10);
    assert_eq!(full.extent().height, 21);

    let out = FunctionPlot::new(sine, (0, 100))
        .with_y_range((5, -5))
        .render()
        .unwrap();
    assert!(out.warnings.is_empty());
    let c = out.value;
    assert_eq!(c.origin().y, -5);
    assert_eq!(c.extent().height, 11);
    let (_, cols) = c.inked_bounds().unwrap();
    assert_eq!(cols, 0..c.extent().width);
}

#[test]
fn y_range_outside_function_gives_empty_canvas() {
    let out = FunctionPlot::new(linear(), (0, 10))
        .with_y_range((50, 60))
        .render()
        .unwrap();
    assert_eq!(
        out.warnings,
        vec![Warning::OutOfBounds {
            name: "func".into()
        }]
    );
    assert_eq!(out.value, Canvas::empty());
}

#[test]
fn origin_override_moves_canvas() {
    let c = FunctionPlot::new(linear(), (0, 10))
        .with_origin(Point::new(100, 200))
        .render()
        .unwrap()
        .value;
    assert_eq!(c.origin(), Point::new(100, 200));
}

#[test]
fn axes_grow_the_canvas() {
    let bare = FunctionPlot::new(linear(), (0, 50)).render().unwrap().value;
    let framed = FunctionPlot::new(linear(), (0, 50))
        .with_axes(true)
        .render()
        .unwrap()
        .value;
    assert!(framed.extent().height > bare.extent().height);
    assert!(framed.extent().width > bare.extent().width);
}

#[test]
fn serde_shape() {
    let plot: FunctionPlot = serde_json::from_str(
        r#"{"function":{"kind":"sine","amplitude":2.0},"x_range":[0,10],"axes":true}"#,
    )
    .unwrap();
    assert_eq!(plot.scaling, 1.0);
    assert!(plot.axes);
    assert_eq!(plot.function.eval(0.0), 0.0);
    assert!(serde_json::to_string(&PlotFn::custom(|x| x)).is_err());
}

#[test]
fn astronomical_amplitude_is_too_large() {
    let plot = FunctionPlot::new(
        PlotFn::Sine {
            amplitude: 1e300,
            frequency: 1.0,
            phase: 0.0,
        },
        (0, 10),
    );
    assert!(matches!(
        plot.render(),
        Err(InkError::ExtentTooLarge { .. })
    ));
}

#[test]
fn full_width_x_range_is_rejected_not_overflowed() {
    let plot = FunctionPlot::new(linear(), (i64::MIN, i64::MAX));
    assert!(matches!(plot.render(), Err(InkError::InvalidRange(_))));
}

#[test]
fn axes_need_room_below_the_plot() {
    let edge = FunctionPlot::new(PlotFn::custom(|_| -1e30), (0, 10)).with_axes(true);
    assert!(matches!(edge.render(), Err(InkError::InvalidRange(_))));
}

#[test]
fn origin_override_past_coordinate_limit_is_an_error() {
    let plot = FunctionPlot::new(linear(), (0, 10)).with_origin(Point::new(i64::MAX, 0));
    assert!(matches!(plot.render(), Err(InkError::InvalidRange(_))));
}

use super::*;
use crate::foundation::diag::Warning;

#[test]
fn tagged_json_round_trips_each_kind() {
    let json = r#"[
        {"kind": "polygon", "contour": {"points": [[0, 0], [0, 10], [10, 10]]},
         "style": {"name": "tri", "thickness": 1}},
        {"kind": "regular_polygon", "corners": 6, "side_len": 12, "placement": "center",
         "anchor": [30, 30]},
        {"kind": "function_plot", "function": {"kind": "polynomial", "coeffs": [1.0, 0.5]},
         "x_range": [0, 20]},
        {"kind": "animated", "contour": {"points": [[0, 0], [0, 20], [20, 20]], "closed": false},
         "frames": 6, "tail": true},
        {"kind": "cube", "side": 10, "frames": 2},
        {"kind": "circle", "radius": 4, "center": [10, 10]},
        {"kind": "triangulated_grid", "width": 30, "height": 20, "side_len": 8}
    ]"#;
    let shapes: Vec<ShapeDescriptor> = serde_json::from_str(json).unwrap();
    assert_eq!(shapes.len(), 7);
    assert_eq!(shapes[5].name(), "circle");
    assert_eq!(shapes[6].name(), "triangulated");
    assert_eq!(shapes[6].frames(), None);
    assert_eq!(shapes[0].name(), "tri");
    assert_eq!(shapes[3].frames(), Some(6));
    assert_eq!(shapes[4].frames(), Some(2));
    assert_eq!(shapes[1].frames(), None);

    let ShapeDescriptor::Polygon { contour, style } = &shapes[0] else {
        panic!("expected polygon");
    };
    assert!(contour.closed);
    assert_eq!(style.opacity.percent(), 100);

    let ShapeDescriptor::Animated(spec) = &shapes[3] else {
        panic!("expected animation");
    };
    assert_eq!(spec.points_per_frame, 4);
    assert_eq!(spec.loop_steps, 1);
    assert!(!spec.contour.closed);

    let again: Vec<ShapeDescriptor> =
        serde_json::from_str(&serde_json::to_string(&shapes).unwrap()).unwrap();
    assert_eq!(again.len(), shapes.len());
}

#[test]
fn render_dispatches_by_kind() {
    let still = render_shape(&ShapeDescriptor::RegularPolygon(RegularPolygon::new(3, 9)))
        .unwrap()
        .value;
    assert!(matches!(still, Artwork::Still(_)));
    assert_eq!(still.frames(), 1);

    let anim = render_shape(&ShapeDescriptor::Animated(AnimationSpec::new(
        Contour::from_pairs(&[(0, 0), (0, 30), (30, 30), (30, 0)], true),
        5,
    )))
    .unwrap()
    .value;
    assert_eq!(anim.frames(), 5);

    let cube = render_shape(&ShapeDescriptor::Cube(Cube::new(8, 3))).unwrap().value;
    assert_eq!(cube.frames(), 3);

    let circle = render_shape(&ShapeDescriptor::Circle(Circle::new(6))).unwrap().value;
    assert!(matches!(circle, Artwork::Still(_)));

    let grid = render_shape(&ShapeDescriptor::TriangulatedGrid(TriangulatedGrid::new(
        24, 24, 8,
    )))
    .unwrap()
    .value;
    assert_eq!(grid.frames(), 1);
}

#[test]
fn empty_polygon_degrades_with_warning() {
    let out = render_shape(&ShapeDescriptor::Polygon {
        contour: Contour::default(),
        style: Style::named("nothing"),
    })
    .unwrap();
    assert_eq!(out.value, Artwork::Still(Canvas::empty()));
    assert_eq!(
        out.warnings,
        vec![Warning::EmptyContour {
            name: "nothing".into()
        }]
    );
}

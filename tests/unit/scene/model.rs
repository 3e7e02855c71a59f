use super::*;

#[test]
fn minimal_scene_takes_defaults() {
    let s = Scene::from_json(r#"{"canvas": {"height": 10, "width": 20}}"#).unwrap();
    assert_eq!(s.name, "scene");
    assert_eq!(
        s.canvas,
        CanvasDef {
            height: 10,
            width: 20,
            y0: 0,
            x0: 0
        }
    );
    assert_eq!(s.blend, BlendRule::PreserveMax);
    assert!(s.shapes.is_empty());
    assert_eq!(s.frame_count(), None);
    s.validate().unwrap();
}

#[test]
fn blend_rule_is_configurable() {
    let s = Scene::from_json(r#"{"canvas": {"height": 1, "width": 1}, "blend": "saturate"}"#)
        .unwrap();
    assert_eq!(s.blend, BlendRule::Saturate);
}

#[test]
fn parse_errors_are_serde_errors() {
    assert!(matches!(
        Scene::from_json(r#"{"canvas": {"height": "tall"}}"#),
        Err(InkError::Serde(_))
    ));
    assert!(matches!(
        Scene::from_json(r#"{"canvas": {"height": 5, "width": 5}, "shapes": [{"kind": "blob"}]}"#),
        Err(InkError::Serde(_))
    ));
    assert!(matches!(
        Scene::from_path("/definitely/not/here.json"),
        Err(InkError::Validation(_))
    ));
}

#[test]
fn validate_rejects_bad_canvas_and_frames() {
    let s = Scene::from_json(r#"{"canvas": {"height": 0, "width": 5}}"#).unwrap();
    assert!(matches!(s.validate(), Err(InkError::InvalidExtent { .. })));

    let s = Scene::from_json(r#"{"canvas": {"height": 5, "width": 5}, "frames": 0}"#).unwrap();
    assert!(matches!(s.validate(), Err(InkError::InvalidRange(_))));
}

#[test]
fn animated_shapes_must_agree_on_frames() {
    let json = r#"{
        "canvas": {"height": 50, "width": 50},
        "shapes": [
            {"kind": "animated", "contour": {"points": [[0, 0], [0, 20]]}, "frames": 8},
            {"kind": "cube", "side": 10, "frames": 8}
        ]
    }"#;
    let s = Scene::from_json(json).unwrap();
    assert_eq!(s.frame_count(), Some(8));
    s.validate().unwrap();

    let mut clash = s.clone();
    clash.frames = Some(9);
    assert!(matches!(clash.validate(), Err(InkError::Validation(_))));
}

#[test]
fn json_round_trip() {
    let json = r#"{
        "name": "pair",
        "canvas": {"height": 40, "width": 40, "y0": -5, "x0": -5},
        "shapes": [
            {"kind": "regular_polygon", "corners": 5, "side_len": 10},
            {"kind": "polygon", "contour": {"points": [[0, 0], [30, 30]], "closed": false}}
        ]
    }"#;
    let s = Scene::from_json(json).unwrap();
    let back = Scene::from_json(&s.to_json().unwrap()).unwrap();
    assert_eq!(back.name, "pair");
    assert_eq!(back.canvas, s.canvas);
    assert_eq!(back.shapes.len(), 2);
}

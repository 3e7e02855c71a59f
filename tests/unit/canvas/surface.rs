use super::*;

fn filled(height: i64, width: i64, y0: i64, x0: i64, v: u16) -> Canvas {
    let mut c = Canvas::new(height, width, y0, x0).unwrap();
    c.data_mut().fill(v);
    c
}

#[test]
fn construction_rejects_bad_extents() {
    assert!(matches!(
        Canvas::new(-1, 3, 0, 0),
        Err(InkError::InvalidExtent { .. })
    ));
    assert!(matches!(
        Canvas::new(100_000, 100_000, 0, 0),
        Err(InkError::ExtentTooLarge { .. })
    ));
    let c = Canvas::new(2, 3, 7, -1).unwrap();
    assert_eq!(c.data().len(), 6);
    assert!(c.is_blank());
    assert_eq!(c.origin(), Point::new(7, -1));
}

#[test]
fn placement_must_fit_coordinate_range() {
    assert!(matches!(
        Canvas::new(3, 3, i64::MAX - 1, 0),
        Err(InkError::InvalidRange(_))
    ));
    let mut c = Canvas::new(3, 3, i64::MAX - 2, i64::MIN).unwrap();
    assert_eq!(c.get_world(Point::new(i64::MAX, i64::MIN + 2)), Some(0));
    assert_eq!(c.get_world(Point::new(i64::MIN, i64::MIN)), None);

    assert!(matches!(
        c.set_origin(Point::new(0, i64::MAX)),
        Err(InkError::InvalidRange(_))
    ));
    assert_eq!(c.origin(), Point::new(i64::MAX - 2, i64::MIN));
    c.set_origin(Point::new(4, 5)).unwrap();
    assert_eq!(c.origin(), Point::new(4, 5));
}

#[test]
fn covering_matches_bounds() {
    let b = Bounds::of(&[Point::new(-2, 3), Point::new(4, 5)]).unwrap();
    let c = Canvas::covering(b).unwrap();
    assert_eq!(c.origin(), Point::new(-2, 3));
    assert_eq!(c.extent(), Extent { height: 7, width: 3 });
}

#[test]
fn disjoint_composite_is_a_noop() {
    let mut base = filled(3, 3, 0, 0, 40);
    let before = base.clone();
    let shifted = filled(3, 3, 5, 5, 200);
    base.composite(&shifted);
    assert_eq!(base, before);
}

#[test]
fn composite_aligns_by_world_origin_and_clips() {
    let mut base = Canvas::new(4, 4, 10, 10).unwrap();
    let stamp = filled(2, 2, 13, 9, 100);
    base.composite(&stamp);
    // Only the cell at world (13, 10) overlaps: local (3, 0).
    assert_eq!(base.get(3, 0), Some(100));
    assert_eq!(base.inked_cells(), 1);
    assert_eq!(base.get_world(Point::new(13, 10)), Some(100));
    assert_eq!(base.get_world(Point::new(14, 10)), None);
}

#[test]
fn overlap_is_capped_at_local_maximum() {
    let mut a = filled(2, 2, 0, 0, 128);
    let b = filled(2, 2, 0, 1, 200);
    a.composite(&b);
    assert_eq!(a.get(0, 0), Some(128));
    assert_eq!(a.get(0, 1), Some(200));
    assert!(a.data().iter().all(|&v| v <= 255));
}

#[test]
fn saturate_rule_accumulates_until_finalize() {
    let mut a = filled(1, 1, 0, 0, 200);
    let b = filled(1, 1, 0, 0, 200);
    a.composite_with(&b, BlendRule::Saturate);
    assert_eq!(a.get(0, 0), Some(400));
    assert_eq!(a.finalize().get_pixel(0, 0).0[0], 0);
}

#[test]
fn finalize_flips_rows_and_inverts() {
    let mut c = Canvas::new(2, 2, 0, 0).unwrap();
    // Bottom-left world cell.
    c.data_mut()[0] = 255;
    let img = c.finalize();
    assert_eq!(img.dimensions(), (2, 2));
    assert_eq!(img.get_pixel(0, 1).0[0], 0);
    assert_eq!(img.get_pixel(0, 0).0[0], 255);
    assert_eq!(img.get_pixel(1, 1).0[0], 255);
}

#[test]
fn clear_keeps_extent() {
    let mut c = filled(3, 5, 1, 1, 9);
    c.clear();
    assert!(c.is_blank());
    assert_eq!(
        c.extent(),
        Extent {
            height: 3,
            width: 5
        }
    );
}

#[test]
fn crop_keeps_world_position() {
    let mut c = Canvas::new(5, 5, 100, 200).unwrap();
    c.data_mut()[2 * 5 + 3] = 77;
    let (rows, cols) = c.inked_bounds().unwrap();
    assert_eq!((rows.clone(), cols.clone()), (2..3, 3..4));
    let cropped = c.crop(rows, cols).unwrap();
    assert_eq!(cropped.origin(), Point::new(102, 203));
    assert_eq!(cropped.get_world(Point::new(102, 203)), Some(77));
    assert!(c.crop(0..6, 0..1).is_err());
    assert!(Canvas::empty().inked_bounds().is_none());
}

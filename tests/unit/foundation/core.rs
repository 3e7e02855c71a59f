use super::*;

#[test]
fn opacity_maps_to_rounded_density() {
    assert_eq!(Opacity::new(100).density(), 255);
    assert_eq!(Opacity::new(0).density(), 0);
    // 127.5 and 25.5 round to the even neighbour.
    assert_eq!(Opacity::new(50).density(), 128);
    assert_eq!(Opacity::new(10).density(), 26);
    assert_eq!(Opacity::new(30).density(), 76);
}

#[test]
fn opacity_is_clamped() {
    assert_eq!(Opacity::new(250).percent(), 100);
    assert_eq!(Opacity::new(-3).percent(), 0);
    assert_eq!(Opacity::new(55).fraction(2).percent(), 27);
    assert_eq!(Opacity::new(55).fraction(10).percent(), 5);
}

#[test]
fn bounds_expand_by_thickness() {
    let c = Contour::from_pairs(&[(0, 0), (0, 10), (10, 10)], true);
    let b = c.bounds().unwrap().expand(2).unwrap();
    assert_eq!(b.origin(), Point::new(-2, -2));
    assert_eq!(b.height(), 15);
    assert_eq!(b.width(), 15);
    assert_eq!(b.extent().unwrap(), Extent { height: 15, width: 15 });
    assert!(Contour::default().bounds().is_none());
}

#[test]
fn bounds_at_coordinate_limits() {
    let edge = Bounds::of(&[Point::new(i64::MAX, 0)]).unwrap();
    assert!(matches!(edge.expand(1), Err(InkError::InvalidRange(_))));
    assert_eq!(edge.expand(0).unwrap(), edge);

    let full = Bounds::of(&[Point::new(i64::MIN, 0), Point::new(i64::MAX, 0)]).unwrap();
    assert_eq!(full.height(), 1u128 << 64);
    assert!(matches!(full.extent(), Err(InkError::ExtentTooLarge { .. })));

    let inverted = Bounds {
        min_y: 3,
        min_x: 0,
        max_y: 1,
        max_x: 0,
    };
    assert_eq!(inverted.height(), 0);
    assert!(matches!(inverted.extent(), Err(InkError::InvalidExtent { .. })));
}

#[test]
fn far_corner_must_be_representable() {
    let e = Extent { height: 3, width: 2 };
    assert_eq!(e.far_corner(Point::new(10, -4)).unwrap(), Point::new(12, -3));
    assert_eq!(
        e.far_corner(Point::new(i64::MAX - 2, 0)).unwrap(),
        Point::new(i64::MAX, 1)
    );
    assert!(matches!(
        e.far_corner(Point::new(i64::MAX - 1, 0)),
        Err(InkError::InvalidRange(_))
    ));
}

#[test]
fn checked_offset_reports_overflow() {
    assert_eq!(Point::new(1, 2).checked_offset(-3, 4).unwrap(), Point::new(-2, 6));
    assert!(matches!(
        Point::new(i64::MIN, 0).checked_offset(-1, 0),
        Err(InkError::InvalidRange(_))
    ));
}

#[test]
fn extent_rejects_non_positive_and_oversized() {
    assert!(matches!(
        Extent::checked(0, 4),
        Err(InkError::InvalidExtent { .. })
    ));
    assert!(matches!(
        Extent::checked(3, -1),
        Err(InkError::InvalidExtent { .. })
    ));
    assert!(matches!(
        Extent::checked(10_000, 8_001),
        Err(InkError::ExtentTooLarge { .. })
    ));
    assert_eq!(Extent::checked(10_000, 8_000).unwrap().cells(), 80_000_000);
}

#[test]
fn half_even_division() {
    assert_eq!(div_round_half_even(3, 2), 2);
    assert_eq!(div_round_half_even(1, 2), 0);
    assert_eq!(div_round_half_even(-1, 2), 0);
    assert_eq!(div_round_half_even(-3, 2), -2);
    assert_eq!(div_round_half_even(7, 3), 2);
}

#[test]
fn point_serializes_as_pair() {
    let p = Point::new(3, -4);
    assert_eq!(serde_json::to_string(&p).unwrap(), "[3,-4]");
    let back: Point = serde_json::from_str("[3,-4]").unwrap();
    assert_eq!(back, p);
}

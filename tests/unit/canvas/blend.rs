use super::*;

#[test]
fn preserve_max_keeps_denser_input() {
    let rule = BlendRule::PreserveMax;
    assert_eq!(rule.apply(0, 200), 200);
    assert_eq!(rule.apply(200, 0), 200);
    assert_eq!(rule.apply(128, 128), 128);
    assert_eq!(rule.apply(26, 255), 255);
    for (dst, src) in [(0, 0), (7, 3), (300, 299), (u16::MAX, u16::MAX), (1, u16::MAX)] {
        assert_eq!(rule.apply(dst, src), dst.max(src));
    }
}

#[test]
fn saturate_accumulates() {
    let rule = BlendRule::Saturate;
    assert_eq!(rule.apply(128, 128), 256);
    assert_eq!(rule.apply(u16::MAX, 10), u16::MAX);
}

#[test]
fn overlap_of_partially_shifted_buffers() {
    let dst = Extent {
        height: 10,
        width: 10,
    };
    let src = Extent {
        height: 4,
        width: 4,
    };
    let ov = Overlap::between(Point::new(0, 0), dst, Point::new(8, -2), src).unwrap();
    assert_eq!(
        ov,
        Overlap {
            dst_y: 8,
            dst_x: 0,
            src_y: 0,
            src_x: 2,
            rows: 2,
            cols: 2,
        }
    );
}

#[test]
fn disjoint_buffers_do_not_overlap() {
    let e = Extent {
        height: 3,
        width: 3,
    };
    assert!(Overlap::between(Point::new(0, 0), e, Point::new(5, 5), e).is_none());
    assert!(Overlap::between(Point::new(0, 0), e, Point::new(3, 0), e).is_none());
}

#[test]
fn overlap_near_coordinate_limits() {
    let e = Extent {
        height: 3,
        width: 3,
    };
    let ov = Overlap::between(Point::new(i64::MAX - 2, 0), e, Point::new(i64::MAX - 1, 1), e)
        .unwrap();
    assert_eq!((ov.dst_y, ov.src_y, ov.rows, ov.cols), (1, 0, 2, 2));
    assert!(Overlap::between(Point::new(i64::MIN, 0), e, Point::new(i64::MAX - 2, 0), e).is_none());
}

#[test]
fn ink_is_inverted_and_clamped() {
    assert_eq!(ink_to_luma(0), 255);
    assert_eq!(ink_to_luma(255), 0);
    assert_eq!(ink_to_luma(900), 0);
    assert_eq!(ink_to_luma(100), 155);
}

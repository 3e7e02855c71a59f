use super::*;
use crate::foundation::core::{Extent, Point};

fn row_bits(c: &Canvas, row: usize) -> String {
    (0..c.extent().width)
        .map(|x| if c.get(row, x) == Some(255) { '#' } else { '.' })
        .collect()
}

#[test]
fn width_is_four_per_glyph_minus_gap() {
    let c = stamp_digits("2024", 0, 0).unwrap();
    assert_eq!(c.extent(), Extent { height: 5, width: 15 });
    assert_eq!(text_width(1), 3);
    assert_eq!(text_width(0), 0);
}

#[test]
fn glyphs_are_stored_with_world_up() {
    let c = stamp_digits("1", 0, 0).unwrap();
    // Top row of the glyph is the highest world row.
    assert_eq!(row_bits(&c, 4), "..#");
    assert_eq!(row_bits(&c, 3), ".##");
    assert_eq!(row_bits(&c, 0), "..#");

    let six = stamp_digits("6", 0, 0).unwrap();
    assert_eq!(row_bits(&six, 4), "#..");
    assert_eq!(row_bits(&six, 1), "#.#");
    assert_eq!(row_bits(&six, 0), "###");
}

#[test]
fn minus_is_a_middle_bar() {
    let c = stamp_digits("-7", 10, -3).unwrap();
    assert_eq!(c.origin(), Point::new(10, -3));
    assert_eq!(row_bits(&c, 2), "###...#");
    assert_eq!(row_bits(&c, 4), "....###");
    assert_eq!(row_bits(&c, 0), "......#");
}

#[test]
fn unsupported_text_is_rejected() {
    assert!(matches!(
        stamp_digits("1.5", 0, 0),
        Err(InkError::Validation(_))
    ));
    assert!(matches!(stamp_digits("", 0, 0), Err(InkError::Validation(_))));
}

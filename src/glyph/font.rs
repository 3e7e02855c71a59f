use crate::canvas::surface::Canvas;
use crate::foundation::error::{InkError, InkResult};

/// Glyph height in pixels.
pub const GLYPH_HEIGHT: usize = 5;
/// Horizontal distance between glyph origins (3 px glyph + 1 px gap).
pub const GLYPH_ADVANCE: usize = 4;

const GLYPH_WIDTH: usize = 3;
const INK: u16 = 255;

// Rows top first; bit 2 is the leftmost column.
fn pattern(c: char) -> Option<[u8; GLYPH_HEIGHT]> {
    let rows = match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b001, 0b011, 0b001, 0b001, 0b001],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b100, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b001],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        _ => return None,
    };
    Some(rows)
}

/// Width in pixels of `len` glyphs set side by side.
pub fn text_width(len: usize) -> usize {
    (GLYPH_ADVANCE * len).saturating_sub(1)
}

/// Stamp a string of digits and minus signs into a canvas whose bottom-left cell is `(y0, x0)`.
///
/// Ink is written at full density. Only `0-9` and `-` are supported.
pub fn stamp_digits(text: &str, y0: i64, x0: i64) -> InkResult<Canvas> {
    let glyphs = text
        .chars()
        .map(|c| pattern(c).ok_or_else(|| InkError::validation(format!("no glyph for {c:?}"))))
        .collect::<InkResult<Vec<_>>>()?;
    if glyphs.is_empty() {
        return Err(InkError::validation("cannot stamp empty text"));
    }

    let width = text_width(glyphs.len());
    let mut canvas = Canvas::new(GLYPH_HEIGHT as i64, width as i64, y0, x0)?;
    let data = canvas.data_mut();
    for (i, rows) in glyphs.iter().enumerate() {
        for (from_top, bits) in rows.iter().enumerate() {
            let row = GLYPH_HEIGHT - 1 - from_top;
            for col in 0..GLYPH_WIDTH {
                if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                    data[row * width + i * GLYPH_ADVANCE + col] = INK;
                }
            }
        }
    }
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/font.rs"]
mod tests;

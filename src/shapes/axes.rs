use crate::canvas::surface::Canvas;
use crate::foundation::core::{Bounds, Point, Style};
use crate::foundation::error::{InkError, InkResult};
use crate::glyph::font::{GLYPH_HEIGHT, stamp_digits, text_width};
use crate::raster::rasterize::draw_segment;

/// Tick length in pixels.
const NOTCH: i64 = 3;
/// Blank pixels between the plot's ink and each axis line.
const GAP: i64 = 5;
/// Widest label: `i64::MIN` printed in full.
const MAX_LABEL_LEN: usize = 20;

/// Frame `plot` with labelled axes below and to the left of its ink.
///
/// Ticks mark both ends of the inked range and every `20 * max(1, digits - 3)` pixels in
/// between; labels are the tick position divided by `scaling`, rounded. A blank plot is
/// returned unchanged.
pub(crate) fn with_axes(plot: &Canvas, scaling: f64) -> InkResult<Canvas> {
    let Some((rows, cols)) = plot.inked_bounds() else {
        return Ok(plot.clone());
    };
    let o = plot.origin();
    let (y_lo, y_hi) = (o.y + rows.start as i64, o.y + (rows.end - 1) as i64);
    let (x_lo, x_hi) = (o.x + cols.start as i64, o.x + (cols.end - 1) as i64);
    let margin = GAP + 1 + NOTCH + 1 + (GLYPH_HEIGHT + text_width(MAX_LABEL_LEN)) as i64;
    if y_lo.checked_sub(margin).zip(x_lo.checked_sub(margin)).is_none() {
        return Err(InkError::invalid_range(format!(
            "no room for axes below or left of ({y_lo}, {x_lo})"
        )));
    }
    let axis_y = y_lo - GAP - 1;
    let axis_x = x_lo - GAP - 1;
    let label = |v: i64| ((v as f64 / scaling).round_ties_even() as i64).to_string();

    let corner = Point::new(axis_y, axis_x);
    let mut segments = vec![
        (corner, Point::new(axis_y, x_hi)),
        (corner, Point::new(y_hi, axis_x)),
    ];
    let mut labels = Vec::new();

    for x in ticks(x_lo, x_hi, &label) {
        segments.push((Point::new(axis_y - NOTCH, x), Point::new(axis_y - 1, x)));
        let text = label(x);
        let w = text_width(text.len()) as i64;
        let y0 = axis_y - NOTCH - 1 - GLYPH_HEIGHT as i64;
        labels.push(stamp_digits(&text, y0, x - w / 2)?);
    }
    for y in ticks(y_lo, y_hi, &label) {
        segments.push((Point::new(y, axis_x - NOTCH), Point::new(y, axis_x - 1)));
        let text = label(y);
        let w = text_width(text.len()) as i64;
        let x0 = axis_x - NOTCH - 1 - w;
        labels.push(stamp_digits(&text, y - GLYPH_HEIGHT as i64 / 2, x0)?);
    }

    let mut corners: Vec<Point> = segments.iter().flat_map(|&(a, b)| [a, b]).collect();
    for c in std::iter::once(plot).chain(labels.iter()) {
        corners.push(c.origin());
        corners.push(c.extent().far_corner(c.origin())?);
    }
    let Some(area) = Bounds::of(&corners) else {
        return Ok(plot.clone());
    };

    let mut out = Canvas::covering(area)?;
    out.composite(plot);
    let stroke = Style::named("axes");
    for (a, b) in segments {
        draw_segment(&mut out, a, b, &stroke)?;
    }
    for l in &labels {
        out.composite(l);
    }
    Ok(out)
}

// Both ends plus interior multiples of the tick step that keep clear of the ends.
fn ticks(lo: i64, hi: i64, label: impl Fn(i64) -> String) -> Vec<i64> {
    let digits = label(lo).len().max(label(hi).len()) as i128;
    let step = 20 * (digits - 3).max(1);
    let mut out = vec![lo];
    let mut t = ((i128::from(lo) + step / 2).div_euclid(step) + 1) * step;
    while t < i128::from(hi) - step / 2 {
        out.push(t as i64);
        t += step;
    }
    if hi != lo {
        out.push(hi);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/axes.rs"]
mod tests;

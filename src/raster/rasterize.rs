use crate::canvas::surface::Canvas;
use crate::foundation::core::{Contour, Point, Style};
use crate::foundation::diag::{Rendered, Warning};
use crate::foundation::error::InkResult;
use crate::raster::line::SegmentWalk;
use crate::raster::mask::Mask;

/// Render a contour outline into a canvas that exactly covers its bounding box plus a
/// `thickness` margin on every side.
///
/// Masked pixels hold the style's density, all others stay 0. An empty contour produces
/// [`Canvas::empty`] and a [`Warning::EmptyContour`]; a contour entirely in the negative
/// quadrant is still rendered but reported with [`Warning::OutOfBounds`].
#[tracing::instrument(skip_all, fields(name = %style.name, points = contour.len()))]
pub fn rasterize(contour: &Contour, style: &Style) -> InkResult<Rendered<Canvas>> {
    let Some(bounds) = contour.bounds() else {
        return Ok(Rendered::warned(
            Canvas::empty(),
            Warning::EmptyContour {
                name: style.name.clone(),
            },
        ));
    };

    let mut out = Rendered::clean(outline(contour, style)?);
    if bounds.is_negative() {
        out.warn(Warning::OutOfBounds {
            name: style.name.clone(),
        });
    }
    Ok(out)
}

/// [`rasterize`] without diagnostics; an empty contour yields [`Canvas::empty`].
pub(crate) fn outline(contour: &Contour, style: &Style) -> InkResult<Canvas> {
    let Some(bounds) = contour.bounds() else {
        return Ok(Canvas::empty());
    };

    let t = i64::from(style.thickness);
    let frame = bounds.expand(t)?;
    let mut canvas = Canvas::covering(frame)?;

    let local: Vec<Point> = contour
        .points
        .iter()
        .map(|p| Point::new(p.y - frame.min_y, p.x - frame.min_x))
        .collect();

    let mut mask = Mask::new(canvas.extent());
    match local.as_slice() {
        [] => {}
        [only] => mask.dot(*only, t),
        [a, b] => draw_line(&mut mask, *a, *b, t),
        pts => {
            for pair in pts.windows(2) {
                draw_line(&mut mask, pair[0], pair[1], t);
            }
            if contour.closed {
                draw_line(&mut mask, pts[pts.len() - 1], pts[0], t);
            }
        }
    }

    let density = style.density();
    for (px, &hit) in canvas.data_mut().iter_mut().zip(mask.cells()) {
        if hit {
            *px = density;
        }
    }
    Ok(canvas)
}

fn draw_line(mask: &mut Mask, a: Point, b: Point, thickness: i64) {
    mask.dot(a, thickness);
    mask.dot(b, thickness);
    for p in SegmentWalk::new(a, b) {
        mask.crest(p, thickness);
    }
}

/// Stroke many segments, given in `target`'s local coordinates, through one shared mask.
///
/// Covered cells take the denser of their value and the style's density.
pub(crate) fn stroke_local(target: &mut Canvas, segments: &[(Point, Point)], style: &Style) {
    let extent = target.extent();
    let reach = (extent.height + extent.width) as i64;
    let t = i64::from(style.thickness).min(reach);
    let mut mask = Mask::new(extent);
    for &(a, b) in segments {
        draw_line(&mut mask, a, b, t);
    }
    let density = style.density();
    for (px, &hit) in target.data_mut().iter_mut().zip(mask.cells()) {
        if hit {
            *px = (*px).max(density);
        }
    }
}

/// Rasterize the segment `a -> b` and composite it into `target`.
pub fn draw_segment(target: &mut Canvas, a: Point, b: Point, style: &Style) -> InkResult<()> {
    let seg = outline(&Contour::open([a, b]), style)?;
    target.composite(&seg);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/raster/rasterize.rs"]
mod tests;

use crate::foundation::core::{Contour, Point};
use crate::foundation::diag::{Rendered, Warning};
use crate::foundation::error::{InkError, InkResult};

/// Largest point count [`densify`] and [`resample`] will produce.
pub const MAX_RESAMPLE_POINTS: usize = 1 << 24;

/// Per-axis average of two points, halves rounded to even.
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new(half_even(a.y, b.y), half_even(a.x, b.x))
}

fn half_even(a: i64, b: i64) -> i64 {
    let sum = i128::from(a) + i128::from(b);
    let q = sum.div_euclid(2);
    let up = sum.rem_euclid(2) == 1 && q.rem_euclid(2) == 1;
    (q + i128::from(up)) as i64
}

fn check_target(target: usize) -> InkResult<()> {
    if target > MAX_RESAMPLE_POINTS {
        return Err(InkError::invalid_range(format!(
            "{target} resampled points exceed the limit of {MAX_RESAMPLE_POINTS}"
        )));
    }
    Ok(())
}

/// One densify pass: every point followed by the midpoint to its successor.
///
/// Open contours grow from `n` to `2n - 1`; closed ones also get the closing midpoint (`2n`).
fn double(points: &[Point], closed: bool) -> Vec<Point> {
    let mut out = Vec::with_capacity(points.len() * 2);
    for pair in points.windows(2) {
        out.push(pair[0]);
        out.push(midpoint(pair[0], pair[1]));
    }
    if let (Some(&last), Some(&first)) = (points.last(), points.first()) {
        out.push(last);
        if closed {
            out.push(midpoint(last, first));
        }
    }
    out
}

/// Insert midpoints until the contour holds at least `target_min_points` points.
///
/// Contours of 0 or 1 points cannot grow; they come back unchanged with a
/// [`Warning::DegenerateContour`]. Targets above [`MAX_RESAMPLE_POINTS`] are rejected with
/// [`InkError::InvalidRange`].
pub fn densify(contour: &Contour, target_min_points: usize) -> InkResult<Rendered<Contour>> {
    check_target(target_min_points)?;
    if contour.len() >= target_min_points {
        return Ok(Rendered::clean(contour.clone()));
    }
    if contour.len() <= 1 {
        return Ok(Rendered::warned(
            contour.clone(),
            Warning::DegenerateContour { len: contour.len() },
        ));
    }

    let mut points = contour.points.clone();
    let mut passes = 0u32;
    while points.len() < target_min_points {
        points = double(&points, contour.closed);
        passes += 1;
    }
    tracing::debug!(
        from = contour.len(),
        to = points.len(),
        passes,
        "densified contour"
    );
    Ok(Rendered::clean(Contour {
        points,
        closed: contour.closed,
    }))
}

/// Keep exactly `keep_count` points, spread evenly over the input and in input order.
///
/// Rational stride sampling: an accumulator starts at `keep / (2 len)` and grows by
/// `keep / len` per input index; a point is taken each time it passes 1. The arithmetic is done
/// on integers scaled by `2 len`, so the selection is exact for any length.
pub fn decimate(points: &[Point], keep_count: usize) -> InkResult<Vec<Point>> {
    let len = points.len();
    if keep_count > len {
        return Err(InkError::invalid_range(format!(
            "cannot keep {keep_count} of {len} points"
        )));
    }

    let keep = keep_count as u128;
    let whole = 2 * len as u128;
    let mut acc = keep;
    let mut out = Vec::with_capacity(keep_count);
    for &p in points {
        if out.len() == keep_count {
            break;
        }
        acc += 2 * keep;
        if acc > whole {
            acc -= whole;
            out.push(p);
        }
    }
    Ok(out)
}

/// Densify then decimate so the contour has exactly `target` points when possible.
pub fn resample(contour: &Contour, target: usize) -> InkResult<Rendered<Contour>> {
    let mut out = densify(contour, target)?;
    if out.value.len() > target {
        out.value.points = decimate(&out.value.points, target)?;
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/resample/contour.rs"]
mod tests;

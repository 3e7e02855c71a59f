use crate::canvas::surface::Canvas;
use crate::foundation::core::{Contour, Extent, Point, Style};
use crate::foundation::diag::Rendered;
use crate::foundation::error::{InkError, InkResult};
use crate::raster::rasterize::rasterize;

/// Circle outline traced through whole-pixel points.
///
/// The first octant is sampled by column, the second by mirroring the first across the diagonal,
/// and the other three quadrants by reflection. Consecutive points are joined by straight
/// segments when rendered.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Circle {
    /// Radius in pixels, at least 1.
    pub radius: i64,
    /// World position of the centre.
    #[serde(default)]
    pub center: Point,
    /// Stroke style.
    #[serde(default = "default_style")]
    pub style: Style,
}

fn default_style() -> Style {
    Style::named("circle")
}

impl Circle {
    /// Circle of `radius` centred on the world origin.
    pub fn new(radius: i64) -> Self {
        Self {
            radius,
            center: Point::default(),
            style: default_style(),
        }
    }

    /// Move the centre.
    pub fn centered_at(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    /// Replace the stroke style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Reject radii below 1 and circles whose box exceeds the cell ceiling.
    pub fn validate(&self) -> InkResult<()> {
        if self.radius < 1 {
            return Err(InkError::validation(format!(
                "circle '{}' needs a radius of at least 1, got {}",
                self.style.name, self.radius
            )));
        }
        let side = self
            .radius
            .checked_mul(2)
            .and_then(|d| d.checked_add(1))
            .unwrap_or(i64::MAX);
        Extent::checked(side, side)?;
        Ok(())
    }

    /// Outline points, starting just right of the top and running clockwise.
    pub fn contour(&self) -> InkResult<Contour> {
        self.validate()?;
        let r = self.radius;
        let half_even = |v: f64| v.round_ties_even() as usize;

        // (y, x) for x in 1..=r: the top-right arc down to the horizontal axis.
        let column: Vec<(i64, i64)> = (1..=r)
            .map(|x| (((r * r - x * x) as f64).sqrt().round_ties_even() as i64, x))
            .collect();
        let keep = half_even(r as f64 * 3f64.sqrt() / 2.0).min(column.len());
        let pivot = half_even(r as f64 / 2.0).min(column.len() - 1);
        let mut quarter: Vec<(i64, i64)> = column[..keep].to_vec();
        quarter.extend(column[..=pivot].iter().rev().map(|&(y, x)| (x, y)));

        let right_low = quarter.iter().rev().map(|&(y, x)| (-y, x));
        let left_low = quarter.iter().map(|&(y, x)| (-y, -x));
        let left_high = quarter.iter().rev().map(|&(y, x)| (y, -x));
        let points = quarter
            .iter()
            .copied()
            .chain(right_low)
            .chain(left_low)
            .chain(left_high)
            .map(|(y, x)| self.center.checked_offset(y, x))
            .collect::<InkResult<Vec<Point>>>()?;
        Ok(Contour::closed(points))
    }

    /// Rasterize the outline.
    #[tracing::instrument(skip_all, fields(name = %self.style.name, radius = self.radius))]
    pub fn render(&self) -> InkResult<Rendered<Canvas>> {
        rasterize(&self.contour()?, &self.style)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/circle.rs"]
mod tests;

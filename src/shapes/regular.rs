use kurbo::Vec2;

use crate::canvas::surface::Canvas;
use crate::foundation::core::{Contour, Point, Style};
use crate::foundation::diag::Rendered;
use crate::foundation::error::{InkError, InkResult};
use crate::raster::rasterize::rasterize;

/// How [`RegularPolygon::anchor`] positions the polygon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Anchor is the lower-left corner of the bounding box.
    #[default]
    Corner,
    /// Anchor is the centre of the circumscribed circle.
    Center,
    /// Anchor is the first vertex.
    FirstPoint,
}

const MAX_CORNERS: i64 = 1 << 16;

fn default_corners() -> i64 {
    4
}

fn default_side_len() -> i64 {
    10
}

/// Equal-sided closed polygon.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RegularPolygon {
    /// Number of vertices, at least 3.
    #[serde(default = "default_corners")]
    pub corners: i64,
    /// Side length in pixels, at least 1.
    #[serde(default = "default_side_len")]
    pub side_len: i64,
    /// Rotation of the first vertex around the centre, in degrees.
    #[serde(default)]
    pub shift_degree: f64,
    /// Meaning of `anchor`.
    #[serde(default)]
    pub placement: Placement,
    /// World position the polygon is pinned to.
    #[serde(default)]
    pub anchor: Point,
    /// Stroke style.
    #[serde(default)]
    pub style: Style,
}

impl Default for RegularPolygon {
    fn default() -> Self {
        Self::new(default_corners(), default_side_len())
    }
}

impl RegularPolygon {
    /// Polygon with `corners` vertices and the given side length, corner-anchored at the origin.
    pub fn new(corners: i64, side_len: i64) -> Self {
        Self {
            corners,
            side_len,
            shift_degree: 0.0,
            placement: Placement::Corner,
            anchor: Point::default(),
            style: Style::named("polygon"),
        }
    }

    /// Rotate the polygon by `degrees`.
    pub fn with_shift(mut self, degrees: f64) -> Self {
        self.shift_degree = degrees;
        self
    }

    /// Pin the polygon to `anchor` using `placement`.
    pub fn placed(mut self, placement: Placement, anchor: Point) -> Self {
        self.placement = placement;
        self.anchor = anchor;
        self
    }

    /// Replace the stroke style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Reject polygons with fewer than 3 corners or a side shorter than 1 px.
    pub fn validate(&self) -> InkResult<()> {
        if !(3..=MAX_CORNERS).contains(&self.corners) || self.side_len < 1 {
            return Err(InkError::validation(format!(
                "cannot build '{}' with {} corners and side {}",
                self.style.name, self.corners, self.side_len
            )));
        }
        if !self.shift_degree.is_finite() {
            return Err(InkError::validation(format!(
                "shift_degree of '{}' must be finite",
                self.style.name
            )));
        }
        Ok(())
    }

    /// Circumradius rounded to whole pixels.
    pub fn radius(&self) -> i64 {
        let n = self.corners as f64;
        (self.side_len as f64 / (2.0 * (std::f64::consts::PI / n).sin())).round_ties_even() as i64
    }

    /// Vertex positions as a closed contour.
    ///
    /// Vertices sit at whole-degree steps of `round(360 / corners)` starting at `shift_degree`;
    /// coordinates are truncated toward zero.
    pub fn contour(&self) -> InkResult<Contour> {
        self.validate()?;
        let r = self.radius();
        let rf = r as f64;
        let step = (360.0 / self.corners as f64).round_ties_even();
        // Polar offsets put the cosine term on world y and the sine term on world x.
        let polar = |degrees: f64| Vec2::from_angle(degrees.to_radians()) * rf;
        let vertex = |mid: Point, i: i64| {
            let v = polar(self.shift_degree + i as f64 * step);
            Point::new((mid.y as f64 + v.x) as i64, (mid.x as f64 + v.y) as i64)
        };

        let points: Vec<Point> = match self.placement {
            Placement::Corner => {
                let mid = self.anchor.checked_offset(r, r)?;
                let raw: Vec<Point> = (0..self.corners).map(|i| vertex(mid, i)).collect();
                let min_y = raw.iter().map(|p| p.y).min().unwrap_or(self.anchor.y);
                let min_x = raw.iter().map(|p| p.x).min().unwrap_or(self.anchor.x);
                raw.into_iter()
                    .map(|p| match p.y.checked_sub(min_y).zip(p.x.checked_sub(min_x)) {
                        Some((dy, dx)) => self.anchor.checked_offset(dy, dx),
                        None => Err(InkError::invalid_range(format!(
                            "'{}' spans more than the coordinate range",
                            self.style.name
                        ))),
                    })
                    .collect::<InkResult<_>>()?
            }
            Placement::Center => (0..self.corners).map(|i| vertex(self.anchor, i)).collect(),
            Placement::FirstPoint => {
                let lead = polar(self.shift_degree);
                let mid = self.anchor.checked_offset(
                    -lead.x.round_ties_even() as i64,
                    -lead.y.round_ties_even() as i64,
                )?;
                std::iter::once(self.anchor)
                    .chain((1..self.corners).map(|i| vertex(mid, i)))
                    .collect()
            }
        };
        Ok(Contour::closed(points))
    }

    /// Rasterize the outline.
    pub fn render(&self) -> InkResult<Rendered<Canvas>> {
        rasterize(&self.contour()?, &self.style)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/regular.rs"]
mod tests;

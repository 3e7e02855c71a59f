use crate::canvas::surface::Canvas;
use crate::foundation::core::{Point, Style};
use crate::foundation::diag::Rendered;
use crate::foundation::error::{InkError, InkResult};
use crate::raster::rasterize::stroke_local;

fn default_style() -> Style {
    Style::named("triangulated")
}

/// Field tiled with equilateral triangles of side `side_len`.
///
/// Rows of height `side_len * sqrt(3) / 2` are drawn as horizontal lines, and alternating rows
/// are offset by half a side so the two diagonal families meet on the row lines. The field is
/// trimmed to whole sides horizontally and whole rows vertically.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TriangulatedGrid {
    /// Requested field width in pixels.
    pub width: i64,
    /// Requested field height in pixels.
    pub height: i64,
    /// Triangle side in pixels.
    pub side_len: i64,
    /// World position of the field's bottom-left corner.
    #[serde(default)]
    pub origin: Point,
    /// Stroke style.
    #[serde(default = "default_style")]
    pub style: Style,
}

// Lattice points on the four edges of the field, in local `(y, x)`.
struct Edges {
    left: Vec<Point>,
    right: Vec<Point>,
    bottom: Vec<Point>,
    top: Vec<Point>,
    rows: usize,
}

impl TriangulatedGrid {
    /// Grid of `width x height` pixels with the given triangle side, at the world origin.
    pub fn new(width: i64, height: i64, side_len: i64) -> Self {
        Self {
            width,
            height,
            side_len,
            origin: Point::default(),
            style: default_style(),
        }
    }

    /// Move the field.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Replace the stroke style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Reject non-positive sizes and sides longer than either field dimension.
    pub fn validate(&self) -> InkResult<()> {
        let (w, h, side) = (self.width, self.height, self.side_len);
        if w < 1 || h < 1 || side < 1 || side > w || side > h {
            return Err(InkError::validation(format!(
                "cannot tile '{}' of {w}x{h} with side {side}",
                self.style.name
            )));
        }
        Ok(())
    }

    fn row_height(&self) -> f64 {
        3f64.sqrt() / 2.0 * self.side_len as f64
    }

    /// Local y of the topmost row line.
    fn top_row(&self) -> i64 {
        let h = self.height as f64;
        (h - h % self.row_height()).round_ties_even() as i64
    }

    /// Local x of the rightmost whole side.
    fn right_col(&self) -> i64 {
        self.width - self.width % self.side_len
    }

    fn edges(&self) -> Edges {
        let tri_h = self.row_height();
        let half = self.side_len / 2;
        let rows = (self.height as f64 / tri_h).floor() as usize;
        let cols = (self.width / self.side_len) as usize;
        let row_y = |n: usize| (n as f64 * tri_h).round_ties_even() as i64;
        let indent = |n: usize| if n % 2 == 0 { half } else { 0 };
        let top_indent = if rows % 2 == 0 { half } else { 0 };

        Edges {
            left: (0..=rows).map(|n| Point::new(row_y(n), indent(n))).collect(),
            right: (0..=rows)
                .map(|n| Point::new(row_y(n), self.right_col() - indent(n)))
                .collect(),
            bottom: (0..cols)
                .map(|n| Point::new(0, half + self.side_len * n as i64))
                .collect(),
            top: (0..cols + rows % 2)
                .map(|n| Point::new(self.top_row(), top_indent + self.side_len * n as i64))
                .collect(),
            rows,
        }
    }

    /// Segment endpoints in local coordinates: row lines, then rising diagonals, then falling.
    fn segments(&self) -> Vec<(Point, Point)> {
        let Edges {
            left,
            right,
            bottom,
            top,
            rows,
        } = self.edges();
        let last = left.len().saturating_sub(1);
        let odd_inner = |side: &[Point]| -> Vec<Point> {
            (1..last).step_by(2).map(|i| side[i]).collect()
        };
        let skip = rows % 2;
        let falling_rows = |side: &[Point]| -> Vec<Point> {
            let from = left.len() as i64 - 2 - skip as i64;
            (1..=from.max(0))
                .rev()
                .step_by(2)
                .map(|i| side[i as usize])
                .collect()
        };

        let mut out: Vec<(Point, Point)> = left.iter().copied().zip(right.iter().copied()).collect();

        let rising_top = odd_inner(&left).into_iter().chain(top.iter().copied());
        let rising_bottom = bottom.iter().copied().chain(odd_inner(&right));
        out.extend(rising_top.zip(rising_bottom));

        let falling_top = top.iter().skip(skip).copied().chain(falling_rows(&right));
        let falling_bottom = falling_rows(&left).into_iter().chain(bottom.iter().copied());
        out.extend(falling_bottom.zip(falling_top));
        out
    }

    /// Rasterize the lattice onto a canvas of the trimmed field size.
    #[tracing::instrument(skip_all, fields(name = %self.style.name, side = self.side_len))]
    pub fn render(&self) -> InkResult<Rendered<Canvas>> {
        self.validate()?;
        let height = self.top_row().saturating_add(1);
        let width = self.right_col().saturating_add(1);
        let mut canvas = Canvas::new(height, width, self.origin.y, self.origin.x)?;
        let segments = self.segments();
        tracing::debug!(segments = segments.len(), "tiling field");
        stroke_local(&mut canvas, &segments, &self.style);
        Ok(Rendered::clean(canvas))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/grid.rs"]
mod tests;

use crate::foundation::error::{InkError, InkResult};

/// Integer world coordinate, stored `(y, x)`. World Y grows upward.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct Point {
    /// Vertical coordinate.
    pub y: i64,
    /// Horizontal coordinate.
    pub x: i64,
}

impl Point {
    /// Create a point from `(y, x)`.
    pub const fn new(y: i64, x: i64) -> Self {
        Self { y, x }
    }

    /// Translate by `(dy, dx)`.
    pub const fn offset(self, dy: i64, dx: i64) -> Self {
        Self {
            y: self.y + dy,
            x: self.x + dx,
        }
    }

    /// Translate by `(dy, dx)`, failing with [`InkError::InvalidRange`] on overflow.
    pub fn checked_offset(self, dy: i64, dx: i64) -> InkResult<Self> {
        self.y
            .checked_add(dy)
            .zip(self.x.checked_add(dx))
            .map(|(y, x)| Self { y, x })
            .ok_or_else(|| {
                InkError::invalid_range(format!("{self:?} offset by ({dy}, {dx}) overflows"))
            })
    }
}

impl From<(i64, i64)> for Point {
    fn from((y, x): (i64, i64)) -> Self {
        Self { y, x }
    }
}

impl From<Point> for (i64, i64) {
    fn from(p: Point) -> Self {
        (p.y, p.x)
    }
}

/// Ordered point sequence. A closed contour implicitly joins its last point to its first.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Contour {
    /// Vertices in drawing order.
    pub points: Vec<Point>,
    /// Whether the last point connects back to the first.
    #[serde(default = "default_closed")]
    pub closed: bool,
}

fn default_closed() -> bool {
    true
}

impl Contour {
    /// Closed contour over `points`.
    pub fn closed(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
            closed: true,
        }
    }

    /// Open polyline over `points`.
    pub fn open(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
            closed: false,
        }
    }

    /// Build from `(y, x)` pairs.
    pub fn from_pairs(pairs: &[(i64, i64)], closed: bool) -> Self {
        Self {
            points: pairs.iter().copied().map(Point::from).collect(),
            closed,
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the contour has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Tight bounds of the vertices, or `None` for an empty contour.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(&self.points)
    }
}

/// Inclusive axis-aligned bounds in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    /// Smallest Y.
    pub min_y: i64,
    /// Smallest X.
    pub min_x: i64,
    /// Largest Y.
    pub max_y: i64,
    /// Largest X.
    pub max_x: i64,
}

impl Bounds {
    /// Bounds of a point set, `None` when empty.
    pub fn of(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut b = Self {
            min_y: first.y,
            min_x: first.x,
            max_y: first.y,
            max_x: first.x,
        };
        for p in &points[1..] {
            b.min_y = b.min_y.min(p.y);
            b.min_x = b.min_x.min(p.x);
            b.max_y = b.max_y.max(p.y);
            b.max_x = b.max_x.max(p.x);
        }
        Some(b)
    }

    /// Grow by `margin` on all four sides.
    ///
    /// Fails with [`InkError::InvalidRange`] when a grown edge leaves the `i64` coordinate range.
    pub fn expand(self, margin: i64) -> InkResult<Self> {
        let grow = |lo: i64, hi: i64| Some((lo.checked_sub(margin)?, hi.checked_add(margin)?));
        let ((min_y, max_y), (min_x, max_x)) = grow(self.min_y, self.max_y)
            .zip(grow(self.min_x, self.max_x))
            .ok_or_else(|| {
                InkError::invalid_range(format!(
                    "bounds {self:?} grown by {margin} leave the coordinate range"
                ))
            })?;
        Ok(Self {
            min_y,
            min_x,
            max_y,
            max_x,
        })
    }

    /// Number of rows covered; 0 for inverted bounds.
    pub fn height(self) -> u128 {
        span(self.min_y, self.max_y)
    }

    /// Number of columns covered; 0 for inverted bounds.
    pub fn width(self) -> u128 {
        span(self.min_x, self.max_x)
    }

    /// Pixel extent of the box, subject to the cell ceiling.
    pub fn extent(self) -> InkResult<Extent> {
        let (height, width) = (self.height(), self.width());
        if height == 0 || width == 0 {
            return Err(InkError::InvalidExtent {
                height: i64::try_from(height).unwrap_or(i64::MAX),
                width: i64::try_from(width).unwrap_or(i64::MAX),
            });
        }
        Extent::bounded(height, width)
    }

    /// Bottom-left world corner.
    pub fn origin(self) -> Point {
        Point::new(self.min_y, self.min_x)
    }

    /// Whether the whole box lies in the negative quadrant.
    pub fn is_negative(self) -> bool {
        self.max_y < 0 && self.max_x < 0
    }
}

fn span(lo: i64, hi: i64) -> u128 {
    (i128::from(hi) - i128::from(lo) + 1).max(0) as u128
}

/// Opacity percentage, clamped to `0..=100` on construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Opacity(u8);

impl Opacity {
    /// Fully opaque.
    pub const FULL: Self = Self(100);

    /// Clamp any integer percentage into range.
    pub fn new(percent: i64) -> Self {
        Self(percent.clamp(0, 100) as u8)
    }

    /// Percentage value.
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Ink density for this opacity: `round(255 * opacity / 100)`.
    pub fn density(self) -> u16 {
        div_round_half_even(255 * i64::from(self.0), 100) as u16
    }

    /// Integer fraction of this opacity, `opacity / divisor` rounded down.
    pub fn fraction(self, divisor: u8) -> Self {
        Self(self.0 / divisor.max(1))
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<i64> for Opacity {
    fn from(v: i64) -> Self {
        Self::new(v)
    }
}

impl From<Opacity> for u8 {
    fn from(v: Opacity) -> Self {
        v.0
    }
}

/// Stroke parameters shared by every shape kind.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Style {
    /// Stroke half-width in pixels; 0 draws single-pixel lines.
    pub thickness: u32,
    /// Ink opacity.
    pub opacity: Opacity,
    /// Label used in diagnostics and default output names.
    pub name: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            thickness: 0,
            opacity: Opacity::FULL,
            name: "shape".to_string(),
        }
    }
}

impl Style {
    /// Default style carrying `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Replace the thickness.
    pub fn with_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Replace the opacity.
    pub fn with_opacity(mut self, opacity: impl Into<Opacity>) -> Self {
        self.opacity = opacity.into();
        self
    }

    /// Ink density written for masked pixels.
    pub fn density(&self) -> u16 {
        self.opacity.density()
    }
}

/// Canvas size in pixels, `(height, width)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Extent {
    /// Rows.
    pub height: usize,
    /// Columns.
    pub width: usize,
}

impl Extent {
    /// Hard ceiling on cells per canvas (or per frame of an animated canvas).
    pub const MAX_CELLS: u64 = 80_000_000;

    /// Hard ceiling on cells across all frames of an animated canvas.
    pub const MAX_STACK_CELLS: u64 = 5 * Self::MAX_CELLS;

    /// Validate signed dimensions into an extent.
    pub fn checked(height: i64, width: i64) -> InkResult<Self> {
        if height <= 0 || width <= 0 {
            return Err(InkError::InvalidExtent { height, width });
        }
        Self::bounded(height.unsigned_abs().into(), width.unsigned_abs().into())
    }

    fn bounded(height: u128, width: u128) -> InkResult<Self> {
        let cells = height.saturating_mul(width);
        if cells > u128::from(Self::MAX_CELLS) {
            return Err(InkError::ExtentTooLarge {
                cells,
                limit: Self::MAX_CELLS,
            });
        }
        Ok(Self {
            height: height as usize,
            width: width as usize,
        })
    }

    /// World coordinate of the top-right cell when the bottom-left cell sits at `origin`.
    ///
    /// Fails with [`InkError::InvalidRange`] when that cell is not representable.
    pub fn far_corner(self, origin: Point) -> InkResult<Point> {
        let reach = |o: i64, len: usize| o.checked_add(i64::try_from(len).ok()? - 1);
        reach(origin.y, self.height)
            .zip(reach(origin.x, self.width))
            .map(|(y, x)| Point::new(y, x))
            .ok_or_else(|| {
                InkError::invalid_range(format!(
                    "{}x{} canvas at {origin:?} leaves the coordinate range",
                    self.height, self.width
                ))
            })
    }

    /// Number of cells.
    pub fn cells(self) -> usize {
        self.height * self.width
    }
}

/// `num / den` rounded half-to-even; `den` must be positive.
pub(crate) fn div_round_half_even(num: i64, den: i64) -> i64 {
    let q = num.div_euclid(den);
    let r2 = 2 * num.rem_euclid(den);
    if r2 > den || (r2 == den && q.rem_euclid(2) == 1) {
        q + 1
    } else {
        q
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

use std::ops::Range;

use image::{GrayImage, Luma};

use crate::canvas::blend::{BlendRule, Overlap, blend_region, ink_to_luma};
use crate::foundation::core::{Bounds, Extent, Point};
use crate::foundation::error::{InkError, InkResult};

/// Density accumulator anchored at a world origin.
///
/// Row 0 holds world row `origin.y` and rows grow upward in world space. Values are ink amounts,
/// allowed to exceed 255 until [`Canvas::finalize`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    origin: Point,
    extent: Extent,
    data: Vec<u16>,
}

impl Canvas {
    /// Zero-filled canvas of `height x width` with its bottom-left cell at world `(y0, x0)`.
    pub fn new(height: i64, width: i64, y0: i64, x0: i64) -> InkResult<Self> {
        let origin = Point::new(y0, x0);
        let extent = Extent::checked(height, width)?;
        extent.far_corner(origin)?;
        Ok(Self::with_extent(origin, extent))
    }

    /// Zero-filled canvas covering `bounds` exactly.
    pub fn covering(bounds: Bounds) -> InkResult<Self> {
        Ok(Self::with_extent(bounds.origin(), bounds.extent()?))
    }

    pub(crate) fn with_extent(origin: Point, extent: Extent) -> Self {
        Self {
            origin,
            extent,
            data: vec![0; extent.cells()],
        }
    }

    /// The degenerate 1x1 blank canvas at the world origin.
    pub fn empty() -> Self {
        Self::with_extent(
            Point::default(),
            Extent {
                height: 1,
                width: 1,
            },
        )
    }

    /// Bottom-left world coordinate of cell `(0, 0)`.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Move the canvas in world space without touching its pixels.
    ///
    /// Fails with [`InkError::InvalidRange`] when the moved canvas would reach past `i64`.
    pub fn set_origin(&mut self, origin: Point) -> InkResult<()> {
        self.extent.far_corner(origin)?;
        self.origin = origin;
        Ok(())
    }

    /// Size in pixels.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Raw row-major accumulators.
    pub fn data(&self) -> &[u16] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u16] {
        &mut self.data
    }

    /// Accumulator at local `(y, x)`.
    pub fn get(&self, y: usize, x: usize) -> Option<u16> {
        if y >= self.extent.height || x >= self.extent.width {
            return None;
        }
        Some(self.data[y * self.extent.width + x])
    }

    /// Accumulator at a world coordinate, `None` outside the canvas.
    pub fn get_world(&self, p: Point) -> Option<u16> {
        let y = usize::try_from(p.y.checked_sub(self.origin.y)?).ok()?;
        let x = usize::try_from(p.x.checked_sub(self.origin.x)?).ok()?;
        self.get(y, x)
    }

    /// Largest accumulator value.
    pub fn peak(&self) -> u16 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Whether no ink has been written.
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|&v| v == 0)
    }

    /// Number of inked cells.
    pub fn inked_cells(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Reset every cell to zero, keeping extent and origin.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Add `other` into `self` at its world position using [`BlendRule::PreserveMax`].
    ///
    /// Cells of `other` outside `self` are dropped; disjoint placement is a no-op.
    pub fn composite(&mut self, other: &Canvas) -> &mut Self {
        self.composite_with(other, BlendRule::PreserveMax)
    }

    /// Add `other` into `self` at its world position with an explicit rule.
    pub fn composite_with(&mut self, other: &Canvas, rule: BlendRule) -> &mut Self {
        if let Some(ov) = Overlap::between(self.origin, self.extent, other.origin, other.extent) {
            blend_region(
                &mut self.data,
                self.extent.width,
                &other.data,
                other.extent.width,
                ov,
                rule,
            );
        }
        self
    }

    /// Display image: clamped to 255, Y flipped so world-up is image-up, ink inverted to
    /// brightness (blank cells are white).
    pub fn finalize(&self) -> GrayImage {
        let Extent { height, width } = self.extent;
        GrayImage::from_fn(width as u32, height as u32, |x, y| {
            let row = height - 1 - y as usize;
            Luma([ink_to_luma(self.data[row * width + x as usize])])
        })
    }

    /// Local row and column ranges that contain ink, `None` for a blank canvas.
    pub fn inked_bounds(&self) -> Option<(Range<usize>, Range<usize>)> {
        let w = self.extent.width;
        let mut rows: Option<(usize, usize)> = None;
        let mut cols: Option<(usize, usize)> = None;
        for (i, _) in self.data.iter().enumerate().filter(|(_, v)| **v != 0) {
            let (y, x) = (i / w, i % w);
            rows = Some(rows.map_or((y, y), |(a, b)| (a.min(y), b.max(y))));
            cols = Some(cols.map_or((x, x), |(a, b)| (a.min(x), b.max(x))));
        }
        let (rows, cols) = (rows?, cols?);
        Some((rows.0..rows.1 + 1, cols.0..cols.1 + 1))
    }

    /// Copy a local sub-rectangle into a new canvas whose origin keeps it in place in world space.
    pub fn crop(&self, rows: Range<usize>, cols: Range<usize>) -> InkResult<Canvas> {
        if rows.is_empty()
            || cols.is_empty()
            || rows.end > self.extent.height
            || cols.end > self.extent.width
        {
            return Err(InkError::invalid_range(format!(
                "crop {rows:?}x{cols:?} outside {}x{} canvas",
                self.extent.height, self.extent.width
            )));
        }
        let extent = Extent {
            height: rows.len(),
            width: cols.len(),
        };
        let mut out = Canvas::with_extent(
            self.origin.offset(rows.start as i64, cols.start as i64),
            extent,
        );
        for (dst_row, src_row) in rows.enumerate() {
            let s0 = src_row * self.extent.width + cols.start;
            let d0 = dst_row * extent.width;
            out.data[d0..d0 + extent.width].copy_from_slice(&self.data[s0..s0 + extent.width]);
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/surface.rs"]
mod tests;

use image::{GrayImage, Luma};

use crate::canvas::blend::{BlendRule, Overlap, blend_region, ink_to_luma};
use crate::canvas::surface::Canvas;
use crate::foundation::core::{Extent, Point};
use crate::foundation::error::{InkError, InkResult};

/// A stack of equally sized canvases sharing one world origin, indexed by frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimatedCanvas {
    origin: Point,
    extent: Extent,
    frames: u32,
    data: Vec<u16>,
}

impl AnimatedCanvas {
    /// Zero-filled stack of `frames` canvases of `height x width` at world `(y0, x0)`.
    ///
    /// The stack as a whole is held to [`Extent::MAX_STACK_CELLS`].
    pub fn new(frames: u32, height: i64, width: i64, y0: i64, x0: i64) -> InkResult<Self> {
        let extent = Extent::checked(height, width)?;
        Self::with_extent(frames, Point::new(y0, x0), extent)
    }

    pub(crate) fn with_extent(frames: u32, origin: Point, extent: Extent) -> InkResult<Self> {
        if frames == 0 {
            return Err(InkError::invalid_range("animated canvas needs at least one frame"));
        }
        extent.far_corner(origin)?;
        let total = extent.cells() as u128 * u128::from(frames);
        if total > u128::from(Extent::MAX_STACK_CELLS) {
            return Err(InkError::ExtentTooLarge {
                cells: total,
                limit: Extent::MAX_STACK_CELLS,
            });
        }
        let cells = total as usize;
        Ok(Self {
            origin,
            extent,
            frames,
            data: vec![0; cells],
        })
    }

    /// Blank 1x1 stack at the world origin.
    pub fn empty(frames: u32) -> InkResult<Self> {
        Self::with_extent(
            frames,
            Point::default(),
            Extent {
                height: 1,
                width: 1,
            },
        )
    }

    /// Number of frames.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Shared world origin.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Per-frame size.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Accumulators of one frame, row-major.
    pub fn frame_data(&self, frame: u32) -> Option<&[u16]> {
        let range = self.frame_range(frame)?;
        Some(&self.data[range])
    }

    /// Copy one frame out as a standalone canvas.
    pub fn frame(&self, frame: u32) -> Option<Canvas> {
        let data = self.frame_data(frame)?;
        let mut c = Canvas::with_extent(self.origin, self.extent);
        c.data_mut().copy_from_slice(data);
        Some(c)
    }

    fn frame_range(&self, frame: u32) -> Option<std::ops::Range<usize>> {
        if frame >= self.frames {
            return None;
        }
        let n = self.extent.cells();
        let start = frame as usize * n;
        Some(start..start + n)
    }

    /// Reset all frames to zero.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Composite `canvas` into one frame with [`BlendRule::PreserveMax`].
    ///
    /// Frame indices outside `0..frames` are ignored.
    pub fn place(&mut self, frame: u32, canvas: &Canvas) -> &mut Self {
        self.place_with(frame, canvas, BlendRule::PreserveMax)
    }

    /// Composite `canvas` into one frame with an explicit rule.
    pub fn place_with(&mut self, frame: u32, canvas: &Canvas, rule: BlendRule) -> &mut Self {
        let Some(range) = self.frame_range(frame) else {
            tracing::debug!(frame, frames = self.frames, "placement outside frame stack");
            return self;
        };
        if let Some(ov) =
            Overlap::between(self.origin, self.extent, canvas.origin(), canvas.extent())
        {
            blend_region(
                &mut self.data[range],
                self.extent.width,
                canvas.data(),
                canvas.extent().width,
                ov,
                rule,
            );
        }
        self
    }

    /// Composite `canvas` into every frame.
    pub fn place_all(&mut self, canvas: &Canvas, rule: BlendRule) -> &mut Self {
        for f in 0..self.frames {
            self.place_with(f, canvas, rule);
        }
        self
    }

    /// Frame-wise composite of another stack; frames beyond the shorter stack are untouched.
    pub fn composite_with(&mut self, other: &AnimatedCanvas, rule: BlendRule) -> &mut Self {
        let Some(ov) = Overlap::between(self.origin, self.extent, other.origin, other.extent)
        else {
            return self;
        };
        for f in 0..self.frames.min(other.frames) {
            let (Some(dst), Some(src)) = (self.frame_range(f), other.frame_range(f)) else {
                continue;
            };
            blend_region(
                &mut self.data[dst],
                self.extent.width,
                &other.data[src],
                other.extent.width,
                ov,
                rule,
            );
        }
        self
    }

    /// Frame-wise composite with [`BlendRule::PreserveMax`].
    pub fn composite(&mut self, other: &AnimatedCanvas) -> &mut Self {
        self.composite_with(other, BlendRule::PreserveMax)
    }

    /// Index of the last frame holding any ink.
    pub fn last_inked_frame(&self) -> Option<u32> {
        (0..self.frames)
            .rev()
            .find(|&f| self.frame_data(f).is_some_and(|d| d.iter().any(|&v| v != 0)))
    }

    /// Display images for every frame (see [`Canvas::finalize`]).
    pub fn finalize(&self) -> Vec<GrayImage> {
        let Extent { height, width } = self.extent;
        (0..self.frames)
            .filter_map(|f| self.frame_data(f))
            .map(|d| {
                GrayImage::from_fn(width as u32, height as u32, |x, y| {
                    let row = height - 1 - y as usize;
                    Luma([ink_to_luma(d[row * width + x as usize])])
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/animated.rs"]
mod tests;

use crate::foundation::core::{Extent, Point};

/// Per-pixel rule applied where a composited buffer overlaps the destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendRule {
    /// Keep the denser of the two inputs at each pixel; nothing accumulates.
    ///
    /// Overlapping strokes come out no darker than the darker stroke alone, so self-intersecting
    /// thick outlines show no seams.
    #[default]
    PreserveMax,
    /// Plain additive accumulation; the 255 ceiling is only applied at finalize.
    Saturate,
}

impl BlendRule {
    #[inline]
    pub(crate) fn apply(self, dst: u16, src: u16) -> u16 {
        match self {
            Self::PreserveMax => dst.max(src),
            Self::Saturate => dst.saturating_add(src),
        }
    }
}

/// Intersection of a source buffer placed over a destination buffer, in local coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Overlap {
    pub(crate) dst_y: usize,
    pub(crate) dst_x: usize,
    pub(crate) src_y: usize,
    pub(crate) src_x: usize,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl Overlap {
    /// World-aligned intersection of `src` (at `src_origin`) with `dst` (at `dst_origin`).
    pub(crate) fn between(
        dst_origin: Point,
        dst: Extent,
        src_origin: Point,
        src: Extent,
    ) -> Option<Self> {
        let (dst_y, src_y, rows) = axis(dst_origin.y, dst.height, src_origin.y, src.height)?;
        let (dst_x, src_x, cols) = axis(dst_origin.x, dst.width, src_origin.x, src.width)?;
        Some(Self {
            dst_y,
            dst_x,
            src_y,
            src_x,
            rows,
            cols,
        })
    }
}

fn axis(dst0: i64, dst_len: usize, src0: i64, src_len: usize) -> Option<(usize, usize, usize)> {
    let (dst0, src0) = (i128::from(dst0), i128::from(src0));
    let lo = dst0.max(src0);
    let hi = (dst0 + dst_len as i128).min(src0 + src_len as i128);
    if hi <= lo {
        return None;
    }
    Some(((lo - dst0) as usize, (lo - src0) as usize, (hi - lo) as usize))
}

/// Blend the overlapping rectangle of `src` into `dst`. Both are row-major with the given widths.
pub(crate) fn blend_region(
    dst: &mut [u16],
    dst_width: usize,
    src: &[u16],
    src_width: usize,
    ov: Overlap,
    rule: BlendRule,
) {
    for row in 0..ov.rows {
        let d0 = (ov.dst_y + row) * dst_width + ov.dst_x;
        let s0 = (ov.src_y + row) * src_width + ov.src_x;
        let d_row = &mut dst[d0..d0 + ov.cols];
        let s_row = &src[s0..s0 + ov.cols];
        for (d, &s) in d_row.iter_mut().zip(s_row) {
            *d = rule.apply(*d, s);
        }
    }
}

/// Clamp a density accumulator to the display range and convert ink to brightness.
#[inline]
pub(crate) fn ink_to_luma(v: u16) -> u8 {
    255 - v.min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/blend.rs"]
mod tests;

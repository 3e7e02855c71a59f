use crate::foundation::core::Point;

/// The slice of a resampled contour drawn in one animation frame.
///
/// Indices refer to the resampled point list; `end` is inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Window {
    /// `points[start..=end]`.
    Span {
        /// First index.
        start: usize,
        /// Last index (inclusive).
        end: usize,
    },
    /// `points[start..]` followed by `points[..=end]`, drawn as one polyline (closed contours).
    Wrapped {
        /// First index of the tail-of-array part.
        start: usize,
        /// Last index of the head-of-array part (inclusive).
        end: usize,
    },
    /// `points[start..]` and `points[..=end]` drawn as two separate polylines (open contours).
    Split {
        /// First index of the tail-of-array part.
        start: usize,
        /// Last index of the head-of-array part (inclusive).
        end: usize,
    },
}

impl Window {
    /// Window for `frame` when `step` points advance per frame over `len` points, or `None`
    /// when there are no points.
    pub fn select(step: usize, frame: usize, len: usize, closed: bool) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let at = |f: usize| (step as u128 * f as u128 % len as u128) as usize;
        let (start, end) = (at(frame), at(frame.saturating_add(1)));
        Some(if end > start {
            Self::Span { start, end }
        } else if closed {
            Self::Wrapped { start, end }
        } else {
            Self::Split { start, end }
        })
    }

    /// Open polylines to rasterize for this window.
    ///
    /// Indices past the end of `points` yield no polylines.
    pub fn polylines(self, points: &[Point]) -> Vec<Vec<Point>> {
        let parts = match self {
            Self::Span { start, end } => points.get(start..=end).zip(Some(&[][..])),
            Self::Wrapped { start, end } | Self::Split { start, end } => {
                points.get(start..).zip(points.get(..=end))
            }
        };
        let Some((head, tail)) = parts else {
            return Vec::new();
        };
        match self {
            Self::Span { .. } => vec![head.to_vec()],
            Self::Wrapped { .. } => vec![[head, tail].concat()],
            Self::Split { .. } => vec![head.to_vec(), tail.to_vec()],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/window.rs"]
mod tests;

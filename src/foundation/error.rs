/// Convenience result type used across inkfield.
pub type InkResult<T> = Result<T, InkError>;

/// Fatal error taxonomy used by engine APIs.
///
/// Recoverable conditions (empty contours, shapes outside the addressable area) are not errors;
/// they are reported as [`Warning`](crate::Warning)s next to a degenerate result.
#[derive(thiserror::Error, Debug)]
pub enum InkError {
    /// A canvas was requested with a non-positive height or width.
    #[error("invalid extent: {height}x{width}")]
    InvalidExtent {
        /// Requested height in pixels.
        height: i64,
        /// Requested width in pixels.
        width: i64,
    },

    /// A canvas was requested with more cells than the allocation ceiling allows.
    #[error("extent too large: {cells} cells exceeds the limit of {limit}")]
    ExtentTooLarge {
        /// Requested number of cells.
        cells: u128,
        /// Allocation ceiling in cells.
        limit: u64,
    },

    /// Malformed numeric range arguments (plot ranges, resample counts, frame settings).
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Two animations with different frame counts were combined.
    #[error("incompatible frame counts: {left} vs {right}")]
    IncompatibleFrameCounts {
        /// Frame count of the left-hand animation.
        left: u32,
        /// Frame count of the right-hand animation.
        right: u32,
    },

    /// Invalid user-provided shape or scene data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while writing images or animations.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing scene files.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InkError {
    /// Build an [`InkError::InvalidRange`] value.
    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }

    /// Build an [`InkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`InkError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build an [`InkError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

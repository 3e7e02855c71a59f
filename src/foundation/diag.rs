/// Recoverable condition reported next to a degenerate but safe result.
#[derive(Clone, Debug, PartialEq)]
pub enum Warning {
    /// A shape had no points; an empty 1x1 canvas was produced instead.
    EmptyContour {
        /// Shape name.
        name: String,
    },
    /// A shape lies outside any addressable area; it will composite as a no-op.
    OutOfBounds {
        /// Shape name.
        name: String,
    },
    /// A resample request could not grow a contour of 0 or 1 points.
    DegenerateContour {
        /// Number of points the contour had.
        len: usize,
    },
    /// A plotted function produced NaN or infinity at some sample.
    NonFiniteSample {
        /// Shape name.
        name: String,
        /// Sample abscissa.
        x: f64,
    },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContour { name } => write!(f, "points list is empty in '{name}'"),
            Self::OutOfBounds { name } => write!(f, "shape '{name}' is out of field bounds"),
            Self::DegenerateContour { len } => {
                write!(f, "cannot resample a contour of {len} point(s)")
            }
            Self::NonFiniteSample { name, x } => {
                write!(f, "function '{name}' is not finite at x={x}")
            }
        }
    }
}

impl Warning {
    /// Emit this warning as a `tracing` event and hand it back.
    pub(crate) fn logged(self) -> Self {
        tracing::warn!(warning = %self, "recoverable render condition");
        self
    }
}

/// Value produced by an operation that may degrade instead of failing.
#[derive(Clone, Debug)]
pub struct Rendered<T> {
    /// The (possibly degenerate) result.
    pub value: T,
    /// Conditions encountered while producing `value`, in order.
    pub warnings: Vec<Warning>,
}

impl<T> Rendered<T> {
    /// Result without warnings.
    pub fn clean(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Result carrying a single warning.
    pub fn warned(value: T, warning: Warning) -> Self {
        Self {
            value,
            warnings: vec![warning.logged()],
        }
    }

    /// Record a warning.
    pub fn warn(&mut self, warning: Warning) {
        self.warnings.push(warning.logged());
    }

    /// Move `other`'s warnings into `self` and return `other`'s value.
    pub fn absorb<U>(&mut self, other: Rendered<U>) -> U {
        self.warnings.extend(other.warnings);
        other.value
    }

    /// Transform the value, keeping warnings.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Rendered<U> {
        Rendered {
            value: f(self.value),
            warnings: self.warnings,
        }
    }

    /// Split into value and warnings.
    pub fn into_parts(self) -> (T, Vec<Warning>) {
        (self.value, self.warnings)
    }
}

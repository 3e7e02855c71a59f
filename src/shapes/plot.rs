use std::sync::Arc;

use crate::canvas::surface::Canvas;
use crate::foundation::core::{Bounds, Contour, Extent, Point, Style};
use crate::foundation::diag::{Rendered, Warning};
use crate::foundation::error::{InkError, InkResult};
use crate::raster::rasterize::rasterize;
use crate::shapes::axes::with_axes;

/// Function of `x` sampled by a [`FunctionPlot`].
#[derive(Clone, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlotFn {
    /// `coeffs[0] + coeffs[1] x + coeffs[2] x^2 + ...`
    Polynomial {
        /// Coefficients, constant term first.
        coeffs: Vec<f64>,
    },
    /// `amplitude * sin(frequency * x + phase)`
    Sine {
        /// Peak value.
        amplitude: f64,
        /// Angular frequency.
        #[serde(default = "one")]
        frequency: f64,
        /// Phase offset in radians.
        #[serde(default)]
        phase: f64,
    },
    /// Arbitrary closure; only available programmatically.
    #[serde(skip)]
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

fn one() -> f64 {
    1.0
}

impl std::fmt::Debug for PlotFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Polynomial { coeffs } => f.debug_struct("Polynomial").field("coeffs", coeffs).finish(),
            Self::Sine {
                amplitude,
                frequency,
                phase,
            } => f
                .debug_struct("Sine")
                .field("amplitude", amplitude)
                .field("frequency", frequency)
                .field("phase", phase)
                .finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl PlotFn {
    /// Wrap a closure.
    pub fn custom(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Evaluate at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Polynomial { coeffs } => coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c),
            Self::Sine {
                amplitude,
                frequency,
                phase,
            } => amplitude * (frequency * x + phase).sin(),
            Self::Custom(f) => f(x),
        }
    }
}

/// Plot of `y = f(x)` over an integer `x` range, drawn as an open polyline.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct FunctionPlot {
    /// Plotted function.
    pub function: PlotFn,
    /// Sampled `x` interval, end exclusive. Reversed bounds are swapped.
    pub x_range: (i64, i64),
    /// Optional visible `y` interval (unscaled, inclusive).
    #[serde(default)]
    pub y_range: Option<(i64, i64)>,
    /// Pixels per unit on both axes.
    #[serde(default = "one")]
    pub scaling: f64,
    /// Draw labelled axes around the plot.
    #[serde(default)]
    pub axes: bool,
    /// Place the finished canvas at this world origin instead of where the samples fall.
    #[serde(default)]
    pub origin: Option<Point>,
    /// Stroke style.
    #[serde(default)]
    pub style: Style,
}

impl FunctionPlot {
    /// Plot `function` over `x_range` at unit scale.
    pub fn new(function: PlotFn, x_range: (i64, i64)) -> Self {
        Self {
            function,
            x_range,
            y_range: None,
            scaling: 1.0,
            axes: false,
            origin: None,
            style: Style::named("func"),
        }
    }

    /// Restrict the visible `y` interval.
    pub fn with_y_range(mut self, y_range: (i64, i64)) -> Self {
        self.y_range = Some(y_range);
        self
    }

    /// Set pixels per unit.
    pub fn with_scaling(mut self, scaling: f64) -> Self {
        self.scaling = scaling;
        self
    }

    /// Enable or disable axes.
    pub fn with_axes(mut self, axes: bool) -> Self {
        self.axes = axes;
        self
    }

    /// Override the output origin.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Replace the stroke style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn x_span(&self) -> (i64, i64) {
        let (a, b) = self.x_range;
        if a <= b { (a, b) } else { (b, a) }
    }

    fn sample_count(&self) -> f64 {
        let (a, b) = self.x_span();
        ((i128::from(b) - i128::from(a)) as f64 / (1.0 / self.scaling)).ceil()
    }

    /// Reject non-positive scaling, empty `x` ranges and sample counts past the cell ceiling.
    pub fn validate(&self) -> InkResult<()> {
        if !self.scaling.is_finite() || self.scaling <= 0.0 {
            return Err(InkError::invalid_range(format!(
                "scaling of '{}' must be positive, got {}",
                self.style.name, self.scaling
            )));
        }
        let (a, b) = self.x_span();
        if a == b {
            return Err(InkError::invalid_range(format!(
                "x range of '{}' is empty",
                self.style.name
            )));
        }
        if self.sample_count() > Extent::MAX_CELLS as f64 {
            return Err(InkError::invalid_range(format!(
                "'{}' would take more than {} samples",
                self.style.name,
                Extent::MAX_CELLS
            )));
        }
        Ok(())
    }

    /// Sample the function into scaled pixel coordinates, dropping non-finite values.
    pub fn samples(&self) -> Rendered<Contour> {
        let (a, _) = self.x_span();
        let s = self.scaling;
        let step = 1.0 / s;
        let count = self.sample_count() as usize;

        let mut out = Rendered::clean(());
        let mut points = Vec::with_capacity(count);
        for k in 0..count {
            let x = a as f64 + k as f64 * step;
            let y = self.function.eval(x);
            if !y.is_finite() {
                out.warn(Warning::NonFiniteSample {
                    name: self.style.name.clone(),
                    x,
                });
                continue;
            }
            points.push(Point::new(
                (y * s).round_ties_even() as i64,
                (x * s).round_ties_even() as i64,
            ));
        }
        out.map(|()| Contour::open(points))
    }

    /// Rasterize the plot, crop it to `y_range`, add axes and apply the origin override.
    #[tracing::instrument(skip_all, fields(name = %self.style.name))]
    pub fn render(&self) -> InkResult<Rendered<Canvas>> {
        self.validate()?;
        let mut out = Rendered::clean(());
        let contour = out.absorb(self.samples());
        let mut canvas = out.absorb(rasterize(&contour, &self.style)?);
        let Some(bounds) = contour.bounds() else {
            return Ok(out.map(|()| canvas));
        };

        if let Some(range) = self.y_range {
            match self.crop_to_y_range(&canvas, bounds, range)? {
                Some(cropped) => canvas = cropped,
                None => {
                    out.warn(Warning::OutOfBounds {
                        name: self.style.name.clone(),
                    });
                    return Ok(out.map(|()| Canvas::empty()));
                }
            }
        }
        if self.axes {
            canvas = with_axes(&canvas, self.scaling)?;
        }
        if let Some(origin) = self.origin {
            canvas.set_origin(origin)?;
        }
        Ok(out.map(|()| canvas))
    }

    // Keeps rows whose world y lies in the scaled range, then trims blank columns.
    fn crop_to_y_range(
        &self,
        canvas: &Canvas,
        bounds: Bounds,
        (lo, hi): (i64, i64),
    ) -> InkResult<Option<Canvas>> {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let (lo, hi) = (lo as f64 * self.scaling, hi as f64 * self.scaling);
        if hi < bounds.min_y as f64 || lo > bounds.max_y as f64 {
            return Ok(None);
        }

        let oy = canvas.origin().y;
        let Extent { height, width } = canvas.extent();
        let h = height as i64;
        let first = (lo.ceil() as i64).saturating_sub(oy).clamp(0, h);
        let last = (hi.floor() as i64).saturating_sub(oy).saturating_add(1).clamp(0, h);
        if first >= last {
            return Ok(None);
        }

        let rows = canvas.crop(first as usize..last as usize, 0..width)?;
        let Some((_, cols)) = rows.inked_bounds() else {
            return Ok(None);
        };
        rows.crop(0..rows.extent().height, cols).map(Some)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/plot.rs"]
mod tests;

use crate::animation::window::Window;
use crate::canvas::animated::AnimatedCanvas;
use crate::canvas::blend::BlendRule;
use crate::foundation::core::{Contour, Point, Style, div_round_half_even};
use crate::foundation::diag::{Rendered, Warning};
use crate::foundation::error::{InkError, InkResult};
use crate::raster::rasterize::outline;
use crate::resample::contour::{MAX_RESAMPLE_POINTS, midpoint, resample};

fn default_frames() -> u32 {
    60
}

fn default_points_per_frame() -> u32 {
    4
}

fn default_loop_steps() -> u32 {
    1
}

/// Parameters of a traced-contour animation.
///
/// Each frame draws a window of `points_per_frame * loop_steps` consecutive points of the
/// resampled contour; the windows advance so that the contour is covered `loop_steps` times over
/// `frames` frames.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnimationSpec {
    /// Contour being traced.
    pub contour: Contour,
    /// Number of frames.
    #[serde(default = "default_frames")]
    pub frames: u32,
    /// Resampled points per frame.
    #[serde(default = "default_points_per_frame")]
    pub points_per_frame: u32,
    /// How many times the contour is traced over the whole animation.
    #[serde(default = "default_loop_steps")]
    pub loop_steps: u32,
    /// Also draw the previous frame's window at half opacity.
    #[serde(default)]
    pub tail: bool,
    /// Draw the whole contour at a tenth of the opacity under every frame.
    #[serde(default)]
    pub shadow: bool,
    /// Stroke style.
    #[serde(default)]
    pub style: Style,
}

impl AnimationSpec {
    /// Animation of `contour` over `frames` frames with default pacing and style.
    pub fn new(contour: Contour, frames: u32) -> Self {
        Self {
            contour,
            frames,
            points_per_frame: default_points_per_frame(),
            loop_steps: default_loop_steps(),
            tail: false,
            shadow: false,
            style: Style::default(),
        }
    }

    /// Set the resampled points per frame.
    pub fn with_points_per_frame(mut self, n: u32) -> Self {
        self.points_per_frame = n;
        self
    }

    /// Set how many times the contour is traced.
    pub fn with_loop_steps(mut self, n: u32) -> Self {
        self.loop_steps = n;
        self
    }

    /// Enable or disable the trailing half-opacity window.
    pub fn with_tail(mut self, tail: bool) -> Self {
        self.tail = tail;
        self
    }

    /// Enable or disable the full-contour shadow.
    pub fn with_shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    /// Replace the stroke style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Reject zero frame counts and pacing, and sample counts or steps above
    /// [`MAX_RESAMPLE_POINTS`].
    pub fn validate(&self) -> InkResult<()> {
        for (what, v) in [
            ("frames", self.frames),
            ("points_per_frame", self.points_per_frame),
            ("loop_steps", self.loop_steps),
        ] {
            if v == 0 {
                return Err(InkError::invalid_range(format!(
                    "{what} must be at least 1 in '{}'",
                    self.style.name
                )));
            }
        }
        for (what, v) in [
            ("frames * points_per_frame", self.sample_count()),
            ("points_per_frame * loop_steps", self.step()),
        ] {
            if v > MAX_RESAMPLE_POINTS {
                return Err(InkError::invalid_range(format!(
                    "{what} = {v} exceeds {MAX_RESAMPLE_POINTS} in '{}'",
                    self.style.name
                )));
            }
        }
        Ok(())
    }

    fn sample_count(&self) -> usize {
        self.frames as usize * self.points_per_frame as usize
    }

    fn step(&self) -> usize {
        self.points_per_frame as usize * self.loop_steps as usize
    }
}

/// A rendered traced-contour animation.
#[derive(Clone, Debug)]
pub struct Animation {
    spec: AnimationSpec,
    points: Vec<Point>,
    step: usize,
    canvas: AnimatedCanvas,
}

impl Animation {
    /// Resample the contour and draw every frame.
    ///
    /// The frame stack covers the contour's bounding box expanded by the stroke thickness. An
    /// empty contour yields a blank 1x1 stack with [`Warning::EmptyContour`].
    #[tracing::instrument(skip_all, fields(name = %spec.style.name, frames = spec.frames))]
    pub fn build(spec: AnimationSpec) -> InkResult<Rendered<Self>> {
        spec.validate()?;
        let step = spec.step();

        let Some(bounds) = spec.contour.bounds() else {
            let canvas = AnimatedCanvas::empty(spec.frames)?;
            let name = spec.style.name.clone();
            return Ok(Rendered::warned(
                Self {
                    spec,
                    points: Vec::new(),
                    step,
                    canvas,
                },
                Warning::EmptyContour { name },
            ));
        };

        let area = bounds.expand(i64::from(spec.style.thickness))?;
        let mut canvas = AnimatedCanvas::with_extent(spec.frames, area.origin(), area.extent()?)?;

        let mut out = Rendered::clean(());
        let sampled = out.absorb(resample(&spec.contour, spec.sample_count())?);
        if bounds.is_negative() {
            out.warn(Warning::OutOfBounds {
                name: spec.style.name.clone(),
            });
        }

        let closed = spec.contour.closed;
        let points = sampled.points;
        let whole = Contour {
            points: points.clone(),
            closed,
        };

        if spec.shadow {
            let style = Style {
                opacity: spec.style.opacity.fraction(10),
                ..spec.style.clone()
            };
            canvas.place_all(&outline(&whole, &style)?, BlendRule::PreserveMax);
        }

        if step >= spec.frames as usize {
            tracing::debug!(step, frames = spec.frames, "window covers contour, drawing whole");
            canvas.place_all(&outline(&whole, &spec.style)?, BlendRule::PreserveMax);
        } else {
            let tail_style = Style {
                opacity: spec.style.opacity.fraction(2),
                ..spec.style.clone()
            };
            let n = points.len();
            for f in 0..spec.frames {
                if spec.tail {
                    let prev = if f == 0 { spec.frames - 1 } else { f - 1 };
                    if let Some(w) = Window::select(step, prev as usize, n, closed) {
                        draw_window(&mut canvas, f, w, &points, &tail_style)?;
                    }
                }
                if let Some(w) = Window::select(step, f as usize, n, closed) {
                    draw_window(&mut canvas, f, w, &points, &spec.style)?;
                }
            }
        }

        Ok(out.map(|()| Self {
            spec,
            points,
            step,
            canvas,
        }))
    }

    /// Parameters this animation was built from.
    pub fn spec(&self) -> &AnimationSpec {
        &self.spec
    }

    /// Resampled contour points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Points advanced per frame.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Window drawn in `frame`, or `None` for an empty contour.
    pub fn window(&self, frame: u32) -> Option<Window> {
        Window::select(
            self.step,
            frame as usize,
            self.points.len(),
            self.spec.contour.closed,
        )
    }

    /// Rendered frames.
    pub fn canvas(&self) -> &AnimatedCanvas {
        &self.canvas
    }

    /// Take the rendered frames.
    pub fn into_canvas(self) -> AnimatedCanvas {
        self.canvas
    }

    /// Morph two animations into one by pairing their resampled points and taking midpoints.
    ///
    /// With equal `loop_steps`, point `i` pairs with `other`'s point `i` (modulo its length).
    /// Otherwise `self`'s points are repeated `loop_steps` times and point `i` pairs with
    /// `other`'s point `round(i * other.step / self.step)`, so both traces stay in phase. The
    /// result takes the stronger stroke of the two and `self`'s pacing.
    pub fn combine(&self, other: &Animation) -> InkResult<Rendered<Animation>> {
        if self.spec.frames != other.spec.frames {
            return Err(InkError::IncompatibleFrameCounts {
                left: self.spec.frames,
                right: other.spec.frames,
            });
        }

        let nb = other.points.len();
        let points: Vec<Point> = if nb == 0 {
            self.points.clone()
        } else if self.spec.loop_steps == other.spec.loop_steps {
            self.points
                .iter()
                .enumerate()
                .map(|(i, &p)| midpoint(p, other.points[i % nb]))
                .collect()
        } else {
            let (sa, sb) = (self.step as i64, other.step as i64);
            let repeats = self.spec.loop_steps as usize;
            if self.points.len().saturating_mul(repeats) > MAX_RESAMPLE_POINTS {
                return Err(InkError::invalid_range(format!(
                    "combining {} points over {repeats} loops exceeds {MAX_RESAMPLE_POINTS}",
                    self.points.len()
                )));
            }
            self.points
                .iter()
                .cycle()
                .take(self.points.len() * repeats)
                .enumerate()
                .map(|(i, &p)| {
                    let j = div_round_half_even(i as i64 * sb, sa) as usize % nb;
                    midpoint(p, other.points[j])
                })
                .collect()
        };

        let (a, b) = (&self.spec, &other.spec);
        let spec = AnimationSpec {
            contour: Contour {
                points,
                closed: a.contour.closed || b.contour.closed,
            },
            frames: a.frames,
            points_per_frame: a.points_per_frame,
            loop_steps: a.loop_steps,
            tail: a.tail || b.tail,
            shadow: a.shadow || b.shadow,
            style: Style {
                thickness: a.style.thickness.max(b.style.thickness),
                opacity: a.style.opacity.max(b.style.opacity),
                name: format!("{}+{}", a.style.name, b.style.name),
            },
        };
        Self::build(spec)
    }
}

fn draw_window(
    canvas: &mut AnimatedCanvas,
    frame: u32,
    window: Window,
    points: &[Point],
    style: &Style,
) -> InkResult<()> {
    for poly in window.polylines(points) {
        let piece = outline(&Contour::open(poly), style)?;
        canvas.place(frame, &piece);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/compositor.rs"]
mod tests;

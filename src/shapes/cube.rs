use crate::canvas::animated::AnimatedCanvas;
use crate::foundation::core::{Contour, Extent, Point, Style};
use crate::foundation::diag::Rendered;
use crate::foundation::error::{InkError, InkResult};
use crate::raster::rasterize::outline;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Vec3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vec3 {
    const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn rotate_x(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x,
            y: self.y * cos - self.z * sin,
            z: self.y * sin + self.z * cos,
        }
    }

    fn rotate_y(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos + self.z * sin,
            y: self.y,
            z: -self.x * sin + self.z * cos,
        }
    }

    fn rotate_z(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
            z: self.z,
        }
    }

    /// Extrinsic X, then Y, then Z rotation.
    fn rotate_xyz(self, [rx, ry, rz]: [f64; 3]) -> Self {
        self.rotate_x(rx).rotate_y(ry).rotate_z(rz)
    }
}

// Vertex indices of each face, in drawing order around the face.
const FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [3, 2, 6, 7],
    [0, 3, 7, 4],
    [1, 2, 6, 5],
];

fn default_rotation() -> [f64; 3] {
    [0.02, 0.01, 0.01]
}

fn default_frames() -> u32 {
    300
}

/// Wireframe cube spinning in place, drawn with hidden-face culling and orthographic projection.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cube {
    /// Edge length in pixels.
    pub side: u32,
    /// Per-frame rotation about X, Y and Z, in radians.
    #[serde(default = "default_rotation")]
    pub rotation: [f64; 3],
    /// Number of frames.
    #[serde(default = "default_frames")]
    pub frames: u32,
    /// World position of the frame's bottom-left corner.
    #[serde(default)]
    pub origin: Point,
    /// Stroke style.
    #[serde(default)]
    pub style: Style,
}

impl Cube {
    /// Cube of edge `side` spinning for `frames` frames with the default rotation.
    pub fn new(side: u32, frames: u32) -> Self {
        Self {
            side,
            rotation: default_rotation(),
            frames,
            origin: Point::default(),
            style: Style::named("cube"),
        }
    }

    /// Set the per-frame rotation.
    pub fn with_rotation(mut self, rotation: [f64; 3]) -> Self {
        self.rotation = rotation;
        self
    }

    /// Move the frame.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Side of the square frame: the cube's space diagonal, `round(side * sqrt(3))`.
    pub fn frame_size(&self) -> i64 {
        (f64::from(self.side) * 3f64.sqrt()).round_ties_even() as i64
    }

    /// Reject a zero side, zero frames or non-finite rotation.
    pub fn validate(&self) -> InkResult<()> {
        if self.side == 0 {
            return Err(InkError::validation(format!(
                "cube '{}' needs a side of at least 1",
                self.style.name
            )));
        }
        if self.frames == 0 {
            return Err(InkError::invalid_range("cube needs at least one frame"));
        }
        if self.rotation.iter().any(|a| !a.is_finite()) {
            return Err(InkError::invalid_range(format!(
                "cube rotation must be finite, got {:?}",
                self.rotation
            )));
        }
        Ok(())
    }

    /// Draw every frame, rotating the vertices after each one.
    #[tracing::instrument(skip_all, fields(side = self.side, frames = self.frames))]
    pub fn render(&self) -> InkResult<Rendered<AnimatedCanvas>> {
        self.validate()?;
        let size = self.frame_size();
        let extent = Extent::checked(size, size)?;
        let mut canvas = AnimatedCanvas::with_extent(self.frames, self.origin, extent)?;

        let half = f64::from(self.side / 2);
        let mut vertices = [
            Vec3::new(-half, -half, -half),
            Vec3::new(half, -half, -half),
            Vec3::new(half, half, -half),
            Vec3::new(-half, half, -half),
            Vec3::new(-half, -half, half),
            Vec3::new(half, -half, half),
            Vec3::new(half, half, half),
            Vec3::new(-half, half, half),
        ];
        let centre = f64::from(self.side) * 3f64.sqrt() / 2.0;
        let project = |v: Vec3| {
            let clamp = |c: f64| ((c + centre).round_ties_even() as i64).clamp(0, size - 1);
            self.origin.offset(clamp(v.y), clamp(v.x))
        };

        for frame in 0..self.frames {
            let far = vertices.iter().map(|v| v.z).fold(f64::NEG_INFINITY, f64::max);
            for face in FACES {
                if face.iter().any(|&i| vertices[i].z == far) {
                    continue;
                }
                let quad = Contour::closed(face.iter().map(|&i| project(vertices[i])));
                canvas.place(frame, &outline(&quad, &self.style)?);
            }
            for v in &mut vertices {
                *v = v.rotate_xyz(self.rotation);
            }
        }
        Ok(Rendered::clean(canvas))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/cube.rs"]
mod tests;

use crate::animation::compositor::{Animation, AnimationSpec};
use crate::canvas::animated::AnimatedCanvas;
use crate::canvas::surface::Canvas;
use crate::foundation::core::{Contour, Style};
use crate::foundation::diag::Rendered;
use crate::foundation::error::InkResult;
use crate::raster::rasterize::rasterize;
use crate::shapes::circle::Circle;
use crate::shapes::cube::Cube;
use crate::shapes::grid::TriangulatedGrid;
use crate::shapes::plot::FunctionPlot;
use crate::shapes::regular::RegularPolygon;

/// Any drawable shape, tagged by `kind` in JSON.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeDescriptor {
    /// Explicit point list.
    Polygon {
        /// Vertices and closure.
        contour: Contour,
        /// Stroke style.
        #[serde(default)]
        style: Style,
    },
    /// Generated equal-sided polygon.
    RegularPolygon(RegularPolygon),
    /// Whole-pixel circle outline.
    Circle(Circle),
    /// Field tiled with equilateral triangles.
    TriangulatedGrid(TriangulatedGrid),
    /// Sampled function graph.
    FunctionPlot(FunctionPlot),
    /// Contour traced over animation frames.
    Animated(AnimationSpec),
    /// Spinning wireframe cube.
    Cube(Cube),
}

impl ShapeDescriptor {
    /// Name used in diagnostics.
    pub fn name(&self) -> &str {
        match self {
            Self::Polygon { style, .. } => &style.name,
            Self::RegularPolygon(p) => &p.style.name,
            Self::Circle(c) => &c.style.name,
            Self::TriangulatedGrid(g) => &g.style.name,
            Self::FunctionPlot(p) => &p.style.name,
            Self::Animated(a) => &a.style.name,
            Self::Cube(c) => &c.style.name,
        }
    }

    /// Frame count of animated shapes, `None` for stills.
    pub fn frames(&self) -> Option<u32> {
        match self {
            Self::Animated(a) => Some(a.frames),
            Self::Cube(c) => Some(c.frames),
            Self::Polygon { .. }
            | Self::RegularPolygon(_)
            | Self::Circle(_)
            | Self::TriangulatedGrid(_)
            | Self::FunctionPlot(_) => None,
        }
    }
}

/// Output of [`render_shape`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Artwork {
    /// Single image.
    Still(Canvas),
    /// Frame stack.
    Animated(AnimatedCanvas),
}

impl Artwork {
    /// Number of frames; a still counts as one.
    pub fn frames(&self) -> u32 {
        match self {
            Self::Still(_) => 1,
            Self::Animated(a) => a.frames(),
        }
    }
}

/// Rasterize any shape.
pub fn render_shape(shape: &ShapeDescriptor) -> InkResult<Rendered<Artwork>> {
    tracing::debug!(name = shape.name(), "rendering shape");
    Ok(match shape {
        ShapeDescriptor::Polygon { contour, style } => {
            rasterize(contour, style)?.map(Artwork::Still)
        }
        ShapeDescriptor::RegularPolygon(p) => p.render()?.map(Artwork::Still),
        ShapeDescriptor::Circle(c) => c.render()?.map(Artwork::Still),
        ShapeDescriptor::TriangulatedGrid(g) => g.render()?.map(Artwork::Still),
        ShapeDescriptor::FunctionPlot(p) => p.render()?.map(Artwork::Still),
        ShapeDescriptor::Animated(spec) => {
            Animation::build(spec.clone())?.map(|a| Artwork::Animated(a.into_canvas()))
        }
        ShapeDescriptor::Cube(c) => c.render()?.map(Artwork::Animated),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/descriptor.rs"]
mod tests;

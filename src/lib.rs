//! Inkfield draws integer contours onto single-channel density canvases and composes them
//! into still images or frame-by-frame animations.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: a [`Scene`] (or a bare [`ShapeDescriptor`]) lists polygons, regular
//!    polygons, circles, triangle grids, function plots and animated contours in world
//!    coordinates (Y grows up).
//! 2. **Rasterize**: each shape becomes a [`Canvas`] sized to its own bounds, or an
//!    [`AnimatedCanvas`] for contours traced over time.
//! 3. **Composite**: pieces are merged onto the scene canvas with a [`BlendRule`].
//! 4. **Encode**: stills go to PNG, animations stream frame by frame into a [`FrameSink`]
//!    ([`GifSink`] on disk, [`InMemorySink`] in tests).
//!
//! Soft failures (empty contours, clipped shapes, non-finite plot samples) never abort a
//! render. They travel next to the value in [`Rendered`] as [`Warning`]s.
//!
//! # Constraints
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: every coordinate is an integer and every rounding is half-to-even.
//! - **Bounded**: a single canvas or frame never exceeds [`Extent::MAX_CELLS`] cells, a frame
//!   stack never exceeds [`Extent::MAX_STACK_CELLS`], and resampling never exceeds
//!   [`MAX_RESAMPLE_POINTS`]. Coordinates that would leave the `i64` range are errors.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod canvas;
mod encode;
mod foundation;
mod glyph;
mod raster;
mod resample;
mod scene;
mod shapes;

pub use crate::foundation::core::{Bounds, Contour, Extent, Opacity, Point, Style};
pub use crate::foundation::diag::{Rendered, Warning};
pub use crate::foundation::error::{InkError, InkResult};

pub use crate::canvas::animated::AnimatedCanvas;
pub use crate::canvas::blend::BlendRule;
pub use crate::canvas::surface::Canvas;

pub use crate::raster::rasterize::{draw_segment, rasterize};
pub use crate::resample::contour::{MAX_RESAMPLE_POINTS, decimate, densify, midpoint, resample};

pub use crate::animation::compositor::{Animation, AnimationSpec};
pub use crate::animation::window::Window;

pub use crate::glyph::font::{GLYPH_ADVANCE, GLYPH_HEIGHT, stamp_digits, text_width};

pub use crate::shapes::circle::Circle;
pub use crate::shapes::cube::Cube;
pub use crate::shapes::descriptor::{Artwork, ShapeDescriptor, render_shape};
pub use crate::shapes::plot::{FunctionPlot, PlotFn};
pub use crate::shapes::grid::TriangulatedGrid;
pub use crate::shapes::regular::{Placement, RegularPolygon};

pub use crate::encode::gif::GifSink;
pub use crate::encode::save::{
    ensure_parent_dir, save_animation, save_artwork, save_png, visible_frames, write_frames,
};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};

pub use crate::scene::model::{CanvasDef, Scene};
pub use crate::scene::render::render_scene;

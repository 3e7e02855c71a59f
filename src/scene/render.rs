use crate::canvas::animated::AnimatedCanvas;
use crate::canvas::surface::Canvas;
use crate::foundation::diag::Rendered;
use crate::foundation::error::{InkError, InkResult};
use crate::scene::model::Scene;
use crate::shapes::descriptor::{Artwork, render_shape};

/// Render every shape of `scene` and composite them into the scene canvas in order.
///
/// A scene with a frame count yields an animation; still shapes then appear in every frame.
/// Warnings from all shapes are collected in drawing order.
#[tracing::instrument(skip_all, fields(scene = %scene.name, shapes = scene.shapes.len()))]
pub fn render_scene(scene: &Scene) -> InkResult<Rendered<Artwork>> {
    scene.validate()?;
    let c = scene.canvas;
    let mut out = Rendered::clean(());

    let art = match scene.frame_count() {
        None => {
            let mut canvas = Canvas::new(c.height, c.width, c.y0, c.x0)?;
            for shape in &scene.shapes {
                match out.absorb(render_shape(shape)?) {
                    Artwork::Still(piece) => {
                        canvas.composite_with(&piece, scene.blend);
                    }
                    Artwork::Animated(_) => {
                        return Err(InkError::validation(format!(
                            "animated shape '{}' in still scene '{}'",
                            shape.name(),
                            scene.name
                        )));
                    }
                }
            }
            Artwork::Still(canvas)
        }
        Some(frames) => {
            let mut stack = AnimatedCanvas::new(frames, c.height, c.width, c.y0, c.x0)?;
            for shape in &scene.shapes {
                match out.absorb(render_shape(shape)?) {
                    Artwork::Still(piece) => {
                        stack.place_all(&piece, scene.blend);
                    }
                    Artwork::Animated(piece) => {
                        stack.composite_with(&piece, scene.blend);
                    }
                }
            }
            Artwork::Animated(stack)
        }
    };

    tracing::debug!(
        frames = art.frames(),
        warnings = out.warnings.len(),
        "scene rendered"
    );
    Ok(out.map(|()| art))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/render.rs"]
mod tests;

use std::path::Path;

use image::ImageFormat;

use crate::canvas::animated::AnimatedCanvas;
use crate::canvas::surface::Canvas;
use crate::encode::gif::GifSink;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::error::{InkError, InkResult};
use crate::shapes::descriptor::Artwork;

/// Create the parent directory of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> InkResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Write a finalized canvas as a grayscale PNG.
pub fn save_png(canvas: &Canvas, path: impl AsRef<Path>) -> InkResult<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    canvas
        .finalize()
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| InkError::encode(format!("write PNG '{}': {e}", path.display())))
}

/// Frames kept when writing `animated`: everything up to the last inked frame, at least one.
pub fn visible_frames(animated: &AnimatedCanvas) -> u32 {
    animated.last_inked_frame().map_or(1, |f| f + 1)
}

/// Finalize and push the visible frames of `animated` into `sink`; returns the count pushed.
pub fn write_frames(animated: &AnimatedCanvas, sink: &mut dyn FrameSink) -> InkResult<u32> {
    let extent = animated.extent();
    sink.begin(SinkConfig {
        width: extent.width as u32,
        height: extent.height as u32,
        frames: animated.frames(),
    })?;
    let keep = visible_frames(animated);
    for idx in 0..keep {
        let Some(frame) = animated.frame(idx) else {
            break;
        };
        sink.push_frame(idx, &frame.finalize())?;
    }
    sink.end()?;
    Ok(keep)
}

/// Write `animated` as a looping GIF, dropping trailing blank frames.
pub fn save_animation(animated: &AnimatedCanvas, path: impl AsRef<Path>) -> InkResult<u32> {
    let mut sink = GifSink::new(path.as_ref());
    write_frames(animated, &mut sink)
}

/// Write any artwork, choosing the format from the file extension.
///
/// `.png` accepts stills only; `.gif` accepts both (a still becomes a single frame).
pub fn save_artwork(art: &Artwork, path: impl AsRef<Path>) -> InkResult<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match (ext.as_deref(), art) {
        (Some("png"), Artwork::Still(c)) => save_png(c, path),
        (Some("gif"), Artwork::Animated(a)) => save_animation(a, path).map(|_| ()),
        (Some("gif"), Artwork::Still(c)) => {
            let mut single = AnimatedCanvas::with_extent(1, c.origin(), c.extent())?;
            single.place(0, c);
            save_animation(&single, path).map(|_| ())
        }
        (Some("png"), Artwork::Animated(_)) => Err(InkError::validation(format!(
            "'{}': animated output needs a .gif path",
            path.display()
        ))),
        _ => Err(InkError::validation(format!(
            "'{}': unsupported output extension (expected .png or .gif)",
            path.display()
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/save.rs"]
mod tests;

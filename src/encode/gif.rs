use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame, GrayImage};

use crate::encode::save::ensure_parent_dir;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::error::{InkError, InkResult};

/// Sink that writes an endlessly looping GIF.
///
/// Every frame is shown for `1000 / frames` ms, so the whole animation loops about once per
/// second regardless of its length.
pub struct GifSink {
    out_path: PathBuf,
    encoder: Option<GifEncoder<BufWriter<File>>>,
    cfg: Option<SinkConfig>,
    last_idx: Option<u32>,
}

impl GifSink {
    /// Create a sink writing to `out_path`; the file is created in `begin`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            encoder: None,
            cfg: None,
            last_idx: None,
        }
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> InkResult<()> {
        if cfg.width == 0 || cfg.height == 0 || cfg.frames == 0 {
            return Err(InkError::validation(
                "gif sink width/height/frames must be non-zero",
            ));
        }
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(InkError::validation(format!(
                "gif frames are limited to 65535 px per side, got {}x{}",
                cfg.width, cfg.height
            )));
        }

        ensure_parent_dir(&self.out_path)?;
        let file = File::create(&self.out_path).map_err(|e| {
            InkError::encode(format!("create '{}': {e}", self.out_path.display()))
        })?;
        let mut encoder = GifEncoder::new(BufWriter::new(file));
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| InkError::encode(format!("gif repeat: {e}")))?;

        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: u32, frame: &GrayImage) -> InkResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| InkError::encode("gif sink not started"))?;
        if let Some(last) = self.last_idx
            && idx <= last
        {
            return Err(InkError::encode(
                "gif sink received out-of-order frame index",
            ));
        }
        self.last_idx = Some(idx);

        if frame.width() != cfg.width || frame.height() != cfg.height {
            return Err(InkError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width(),
                frame.height(),
                cfg.width,
                cfg.height
            )));
        }

        let encoder = self
            .encoder
            .as_mut()
            .ok_or_else(|| InkError::encode("gif sink not started"))?;
        let rgba = DynamicImage::ImageLuma8(frame.clone()).into_rgba8();
        let delay = Delay::from_numer_denom_ms(cfg.frame_delay_ms(), 1);
        encoder
            .encode_frame(Frame::from_parts(rgba, 0, 0, delay))
            .map_err(|e| InkError::encode(format!("gif frame {idx}: {e}")))
    }

    fn end(&mut self) -> InkResult<()> {
        // Dropping the encoder writes the GIF trailer.
        let encoder = self
            .encoder
            .take()
            .ok_or_else(|| InkError::encode("gif sink not started"))?;
        drop(encoder);
        tracing::debug!(path = %self.out_path.display(), frames = ?self.last_idx.map(|i| i + 1), "gif written");
        Ok(())
    }
}

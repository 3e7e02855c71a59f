use image::GrayImage;

use crate::foundation::error::{InkError, InkResult};

/// Geometry and length of the animation about to be streamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Frame count of the source animation, including trailing blank frames that are not pushed.
    pub frames: u32,
}

impl SinkConfig {
    /// Display time of one frame, `1000 / frames` ms and never below 1 ms.
    pub fn frame_delay_ms(&self) -> u32 {
        (1000 / self.frames.max(1)).max(1)
    }
}

/// Consumer of finalized grayscale frames.
///
/// `begin` is called once, then `push_frame` with strictly increasing indices, then `end`.
pub trait FrameSink: Send {
    /// Prepare for frames of the given geometry.
    fn begin(&mut self, cfg: SinkConfig) -> InkResult<()>;
    /// Accept frame `idx` (0-based, ink black on white).
    fn push_frame(&mut self, idx: u32, frame: &GrayImage) -> InkResult<()>;
    /// Flush; no frames follow.
    fn end(&mut self) -> InkResult<()>;
}

/// Sink that keeps every frame in memory.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    captured: Vec<(u32, GrayImage)>,
    finished: bool,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Geometry received in `begin`.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Frames received so far, tagged with their index.
    pub fn frames(&self) -> &[(u32, GrayImage)] {
        &self.captured
    }

    /// Whether `end` has been called since the last `begin`.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> InkResult<()> {
        self.cfg = Some(cfg);
        self.captured.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: u32, frame: &GrayImage) -> InkResult<()> {
        if self.cfg.is_none() || self.finished {
            return Err(InkError::encode("in-memory sink is not accepting frames"));
        }
        if self.captured.last().is_some_and(|(last, _)| idx <= *last) {
            return Err(InkError::encode(format!(
                "frame {idx} pushed out of order"
            )));
        }
        self.captured.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> InkResult<()> {
        self.finished = true;
        Ok(())
    }
}

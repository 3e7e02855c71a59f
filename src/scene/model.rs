use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::canvas::blend::BlendRule;
use crate::foundation::core::Extent;
use crate::foundation::error::{InkError, InkResult};
use crate::shapes::descriptor::ShapeDescriptor;

/// Output canvas placement and size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasDef {
    /// Rows.
    pub height: i64,
    /// Columns.
    pub width: i64,
    /// World row of the bottom edge.
    #[serde(default)]
    pub y0: i64,
    /// World column of the left edge.
    #[serde(default)]
    pub x0: i64,
}

fn default_name() -> String {
    "scene".to_string()
}

/// JSON-facing description of a picture or animation: one canvas and the shapes drawn into it.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Label used in logs and default output names.
    #[serde(default = "default_name")]
    pub name: String,
    /// Output canvas.
    pub canvas: CanvasDef,
    /// Frame count; implied by the animated shapes when absent.
    #[serde(default)]
    pub frames: Option<u32>,
    /// How shapes are combined with what is already drawn.
    #[serde(default)]
    pub blend: BlendRule,
    /// Shapes in drawing order.
    #[serde(default)]
    pub shapes: Vec<ShapeDescriptor>,
}

impl Scene {
    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> InkResult<Self> {
        serde_json::from_reader(r).map_err(|e| InkError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON string.
    pub fn from_json(s: &str) -> InkResult<Self> {
        serde_json::from_str(s).map_err(|e| InkError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> InkResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            InkError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize back to pretty JSON.
    pub fn to_json(&self) -> InkResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| InkError::serde(format!("serialize scene '{}': {e}", self.name)))
    }

    /// Frame count of the output, `None` for a still picture.
    pub fn frame_count(&self) -> Option<u32> {
        self.frames
            .or_else(|| self.shapes.iter().find_map(ShapeDescriptor::frames))
    }

    /// Check the canvas size and that every animated shape agrees on the frame count.
    pub fn validate(&self) -> InkResult<()> {
        Extent::checked(self.canvas.height, self.canvas.width)?;
        if self.frames == Some(0) {
            return Err(InkError::invalid_range(format!(
                "scene '{}' declares zero frames",
                self.name
            )));
        }
        if let Some(expected) = self.frame_count() {
            for shape in &self.shapes {
                if let Some(n) = shape.frames()
                    && n != expected
                {
                    return Err(InkError::validation(format!(
                        "shape '{}' has {n} frames but scene '{}' has {expected}",
                        shape.name(),
                        self.name
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;

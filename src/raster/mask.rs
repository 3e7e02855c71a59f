use crate::foundation::core::{Extent, Point};

/// Boolean coverage grid in local canvas coordinates. All writes are clipped to the grid.
#[derive(Clone, Debug)]
pub(crate) struct Mask {
    extent: Extent,
    cells: Vec<bool>,
}

impl Mask {
    pub(crate) fn new(extent: Extent) -> Self {
        Self {
            extent,
            cells: vec![false; extent.cells()],
        }
    }

    pub(crate) fn cells(&self) -> &[bool] {
        &self.cells
    }

    #[cfg(test)]
    pub(crate) fn is_set(&self, y: i64, x: i64) -> bool {
        self.index(y, x).is_some_and(|i| self.cells[i])
    }

    #[cfg(test)]
    pub(crate) fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    fn index(&self, y: i64, x: i64) -> Option<usize> {
        let y = usize::try_from(y).ok()?;
        let x = usize::try_from(x).ok()?;
        if y >= self.extent.height || x >= self.extent.width {
            return None;
        }
        Some(y * self.extent.width + x)
    }

    pub(crate) fn mark(&mut self, y: i64, x: i64) {
        if let Some(i) = self.index(y, x) {
            self.cells[i] = true;
        }
    }

    /// Inclusive vertical run `y0..=y1` in column `x`.
    fn vrun(&mut self, y0: i64, y1: i64, x: i64) {
        for y in y0..=y1 {
            self.mark(y, x);
        }
    }

    /// Inclusive horizontal run `x0..=x1` in row `y`.
    fn hrun(&mut self, y: i64, x0: i64, x1: i64) {
        for x in x0..=x1 {
            self.mark(y, x);
        }
    }

    /// Vertex stamp: the point, widened to a filled disc of radius `thickness`.
    pub(crate) fn dot(&mut self, p: Point, thickness: i64) {
        self.mark(p.y, p.x);
        if thickness <= 0 {
            return;
        }
        let r2 = thickness * thickness;
        for off in 0..=thickness {
            let half = ((r2 - off * off) as f64).sqrt().round() as i64;
            self.vrun(p.y - half, p.y + half, p.x + off);
            self.vrun(p.y - half, p.y + half, p.x - off);
        }
    }

    /// Path stamp: the point, widened to a `+` with arms of length `thickness`.
    pub(crate) fn crest(&mut self, p: Point, thickness: i64) {
        if thickness <= 0 {
            self.mark(p.y, p.x);
            return;
        }
        self.vrun(p.y - thickness, p.y + thickness, p.x);
        self.hrun(p.y, p.x - thickness, p.x + thickness);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/mask.rs"]
mod tests;

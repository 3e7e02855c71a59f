use crate::foundation::core::Point;

/// Integer walk from `start` toward `end`, yielding every position at which a crest is stamped.
///
/// The walk merges two normalized schedules: X advances at parameters `i / |dx|` and Y at
/// `j / |dy|`. Checkpoints are visited in ascending order, de-duplicated; a shared checkpoint
/// advances both axes. Comparisons use `i * |dy|` against `j * |dx|`, so no division happens.
///
/// The start is yielded, the end is not (vertices are stamped separately as dots).
#[derive(Clone, Debug)]
pub(crate) struct SegmentWalk {
    cur: Point,
    sx: i64,
    sy: i64,
    adx: i64,
    ady: i64,
    i: i64,
    j: i64,
}

impl SegmentWalk {
    pub(crate) fn new(start: Point, end: Point) -> Self {
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        Self {
            cur: start,
            sx: dx.signum(),
            sy: dy.signum(),
            adx: dx.abs(),
            ady: dy.abs(),
            i: 1,
            j: 1,
        }
    }
}

impl Iterator for SegmentWalk {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let x_left = self.i <= self.adx;
        let y_left = self.j <= self.ady;
        let at = self.cur;
        match (x_left, y_left) {
            (false, false) => return None,
            (true, false) => {
                self.cur.x += self.sx;
                self.i += 1;
            }
            (false, true) => {
                self.cur.y += self.sy;
                self.j += 1;
            }
            (true, true) => match (self.i * self.ady).cmp(&(self.j * self.adx)) {
                std::cmp::Ordering::Less => {
                    self.cur.x += self.sx;
                    self.i += 1;
                }
                std::cmp::Ordering::Greater => {
                    self.cur.y += self.sy;
                    self.j += 1;
                }
                std::cmp::Ordering::Equal => {
                    self.cur.x += self.sx;
                    self.cur.y += self.sy;
                    self.i += 1;
                    self.j += 1;
                }
            },
        }
        Some(at)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/line.rs"]
mod tests;

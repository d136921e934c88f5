//! Symmetric digital lines between grid cells.
//!
//! A Bresenham-style error accumulator (Tran-Thong variant) whose rounding
//! direction depends on the sign of the minor axis. With that tie-break the
//! line from `a` to `b` visits exactly the cells of the line from `b` to `a`,
//! in reverse order. Every sight ray in the crate is built from this line, so
//! this property is what makes line of sight mutual.

use glam::IVec2;

/// Iterator over the cells of the line from `from` to `to`, both inclusive.
///
/// Yields `max(|dx|, |dy|) + 1` cells; consecutive cells are 8-connected.
/// Any pair of `i32` endpoints is accepted; distances are held in `i64`.
#[derive(Clone, Debug)]
pub struct Line {
    cursor: IVec2,
    end: IVec2,
    /// Per-axis step sign (+1 or -1)
    step: IVec2,
    /// Per-axis absolute distance
    delta_x: i64,
    delta_y: i64,
    x_major: bool,
    test: i64,
    remaining: u64,
}

impl Line {
    pub fn new(from: IVec2, to: IVec2) -> Self {
        let (delta_x, step_x) = axis_delta(from.x, to.x);
        let (delta_y, step_y) = axis_delta(from.y, to.y);

        // Rounding bias flips with the y direction; this keeps a→b and b→a identical.
        let bias = if step_y == 1 { -1 } else { 0 };
        let x_major = delta_x >= delta_y;
        let major = if x_major { delta_x } else { delta_y };

        Self {
            cursor: from,
            end: to,
            step: IVec2::new(step_x, step_y),
            delta_x,
            delta_y,
            x_major,
            test: (major + bias) >> 1,
            remaining: major as u64 + 1,
        }
    }

    fn advance(&mut self) {
        if self.x_major {
            self.test -= self.delta_y;
            self.cursor.x += self.step.x;
            if self.test < 0 {
                self.cursor.y += self.step.y;
                self.test += self.delta_x;
            }
        } else {
            self.test -= self.delta_x;
            self.cursor.y += self.step.y;
            if self.test < 0 {
                self.cursor.x += self.step.x;
                self.test += self.delta_y;
            }
        }
    }
}

/// Absolute distance and direction along one axis. Equal coordinates step +1.
fn axis_delta(start: i32, end: i32) -> (i64, i32) {
    let delta = start.abs_diff(end) as i64;
    if end >= start {
        (delta, 1)
    } else {
        (delta, -1)
    }
}

impl Iterator for Line {
    type Item = IVec2;

    fn next(&mut self) -> Option<IVec2> {
        if self.remaining == 0 {
            return None;
        }
        let cell = self.cursor;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }

    fn last(self) -> Option<IVec2> {
        (self.remaining > 0).then_some(self.end)
    }
}

impl ExactSizeIterator for Line {}

impl std::iter::FusedIterator for Line {}

/// Call `visit` for every cell of the line from `from` to `to`, in order.
pub fn rasterize(from: IVec2, to: IVec2, mut visit: impl FnMut(IVec2)) {
    for cell in Line::new(from, to) {
        visit(cell);
    }
}

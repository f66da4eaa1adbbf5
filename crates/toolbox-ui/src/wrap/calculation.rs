//! Row filling for wrap boxes.

use toolbox_common::{Rect, Size};

use super::WrapLayout;

impl WrapLayout {
    /// Place items of the given sizes into rows no wider than `width`.
    ///
    /// An item that is wider than `width` on its own still gets a row.
    /// Row height is the tallest item in the row.
    pub fn compute(&self, sizes: &[Size], width: f64) -> Vec<Rect> {
        let mut out = Vec::with_capacity(sizes.len());
        let mut x = 0.0;
        let mut y = 0.0;
        let mut row_height: f64 = 0.0;

        for size in sizes {
            if x > 0.0 && x + size.width > width {
                y += row_height + self.spacing;
                x = 0.0;
                row_height = 0.0;
            }
            out.push(Rect {
                x,
                y,
                width: size.width,
                height: size.height,
            });
            x += size.width + self.spacing;
            row_height = row_height.max(size.height);
        }

        out
    }

    /// Number of rows `compute` would produce.
    pub fn row_count(&self, sizes: &[Size], width: f64) -> usize {
        let rects = self.compute(sizes, width);
        let mut rows = 0;
        let mut last_y = None;
        for rect in rects {
            if last_y != Some(rect.y) {
                rows += 1;
                last_y = Some(rect.y);
            }
        }
        rows
    }

    /// Total height of the laid-out items.
    pub fn height(&self, sizes: &[Size], width: f64) -> f64 {
        self.compute(sizes, width)
            .iter()
            .map(|r| r.y + r.height)
            .fold(0.0, f64::max)
    }
}

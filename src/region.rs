use crate::grid::{Grid, Position};

/// A rectangle shape anchored at one corner.
///
/// A negative `width` or `height` grows the rectangle leftwards or upwards
/// from the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub width: isize,
    pub height: isize,
}

impl Region {
    pub fn new(width: isize, height: isize) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> usize {
        self.width.unsigned_abs() * self.height.unsigned_abs()
    }

    /// Positions covered when anchored at `anchor`, row by row.
    pub fn walk<'a>(&self, anchor: Position, grid: &'a Grid) -> impl Iterator<Item = Position> + 'a {
        let row_step = self.height.signum();
        let col_step = self.width.signum();
        let width = self.width.abs();
        (0..self.height.abs()).flat_map(move |r| {
            (0..width).map(move |c| grid.offset(anchor, r * row_step, c * col_step))
        })
    }
}

/// Every power-of-two rectangle shape fitting a `row_count` x `col_count`
/// grid, together with the mirrored variants needed so that, for any anchor
/// cell, each rectangle containing it is reached from one of its corners.
pub fn generate_regions(row_count: usize, col_count: usize) -> Vec<Region> {
    let rows = row_count as isize;
    let cols = col_count as isize;
    let mut regions = vec![];

    let mut w = 1;
    while w <= cols {
        let mut h = 1;
        while h <= rows {
            regions.push(Region::new(w, h));
            let single = w == 1 && h == 1;
            let full = w == cols && h == rows;
            if !single && !full {
                if w == h {
                    regions.extend([
                        Region::new(-w, h),
                        Region::new(-w, -h),
                        Region::new(w, -h),
                    ]);
                } else if w > h {
                    regions.push(Region::new(-w, h));
                    if h != 1 {
                        regions.extend([Region::new(w, -h), Region::new(-w, -h)]);
                    }
                } else {
                    regions.push(Region::new(w, -h));
                    if w != 1 {
                        regions.extend([Region::new(-w, h), Region::new(-w, -h)]);
                    }
                }
            }
            h *= 2;
        }
        w *= 2;
    }

    regions
}

//! Karnaugh-map layout in Gray-code order.
//!
//! A cell's binary string is its row code followed by its column code, so
//! neighbouring cells (including across the edges) differ in exactly one bit.
use crate::error::{invalid_input, KMapError, KMapResult};
use serde::Serialize;

/// Row and column Gray-code sequences for one variable count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrayCodes {
    pub rows: &'static [&'static str],
    pub cols: &'static [&'static str],
}

const GRAY_1: &[&str] = &["0", "1"];
const GRAY_2: &[&str] = &["00", "01", "11", "10"];

/// Gray-code table indexed by variable count. `None` when unsupported.
pub fn gray_codes(variable_count: usize) -> Option<GrayCodes> {
    match variable_count {
        2 => Some(GrayCodes {
            rows: GRAY_1,
            cols: GRAY_1,
        }),
        3 => Some(GrayCodes {
            rows: GRAY_1,
            cols: GRAY_2,
        }),
        4 => Some(GrayCodes {
            rows: GRAY_2,
            cols: GRAY_2,
        }),
        _ => None,
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub decimal: usize,
    pub binary: String,
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn position(&self) -> Position {
        Position {
            row: self.row,
            col: self.col,
        }
    }
}

/// A toroidal grid of cells.
#[derive(Debug, Clone)]
pub struct Grid {
    variable_count: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(variable_count: usize) -> KMapResult<Self> {
        let codes = gray_codes(variable_count).ok_or_else(|| {
            invalid_input(format!(
                "{variable_count} variables are not supported, expected 2 to 4"
            ))
        })?;

        let cells = codes
            .rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                codes
                    .cols
                    .iter()
                    .enumerate()
                    .map(|(c, col)| {
                        let binary = format!("{row}{col}");
                        // Codes only hold '0' and '1'.
                        let decimal = binary
                            .bytes()
                            .fold(0, |acc, b| (acc << 1) | usize::from(b == b'1'));
                        Cell {
                            decimal,
                            binary,
                            row: r,
                            col: c,
                        }
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            variable_count,
            cells,
        })
    }

    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    pub fn col_count(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn cell_count(&self) -> usize {
        1 << self.variable_count
    }

    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.row][pos.col]
    }

    /// Cells row by row.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Decimal index of every position, row by row.
    pub fn layout(&self) -> Vec<Vec<usize>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.decimal).collect())
            .collect()
    }

    /// Find the position holding `decimal`.
    pub fn locate(&self, decimal: usize) -> KMapResult<Position> {
        self.iter()
            .find(|cell| cell.decimal == decimal)
            .map(Cell::position)
            .ok_or(KMapError::Unrepresentable {
                decimal,
                rows: self.row_count(),
                cols: self.col_count(),
            })
    }

    /// Position reached from `anchor` by a signed offset, wrapping around the edges.
    pub fn offset(&self, anchor: Position, row_offset: isize, col_offset: isize) -> Position {
        let rows = self.row_count() as isize;
        let cols = self.col_count() as isize;
        Position {
            row: (anchor.row as isize + row_offset).rem_euclid(rows) as usize,
            col: (anchor.col as isize + col_offset).rem_euclid(cols) as usize,
        }
    }
}

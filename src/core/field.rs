//! The playing field: a fixed 20x25 grid with a permanent wall border.
//!
//! Uses a flat array for cache locality and zero allocation. Coordinates are
//! (x, y) with x growing rightward and y growing downward; row-major storage
//! (`y * WIDTH + x`). Columns 0 and 19 and row 24 are walls from construction
//! onward. The field owns the line-clear compaction algorithm.

use crate::types::{Cell, FIELD_HEIGHT, FIELD_WIDTH};

/// Total number of cells in the field.
pub const FIELD_CELLS: usize = (FIELD_WIDTH as usize) * (FIELD_HEIGHT as usize);

/// The bounded grid where locked pieces accumulate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    cells: [Cell; FIELD_CELLS],
}

impl Field {
    /// Create a field with walls on the outer columns and the bottom row.
    pub fn new() -> Self {
        let mut cells = [Cell::Empty; FIELD_CELLS];
        for y in 0..FIELD_HEIGHT {
            for x in 0..FIELD_WIDTH {
                if x == 0 || x == FIELD_WIDTH - 1 || y == FIELD_HEIGHT - 1 {
                    cells[(y as usize) * (FIELD_WIDTH as usize) + (x as usize)] = Cell::Wall;
                }
            }
        }
        Self { cells }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= FIELD_WIDTH || y < 0 || y >= FIELD_HEIGHT {
            return None;
        }
        Some((y as usize) * (FIELD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> i8 {
        FIELD_WIDTH
    }

    pub fn height(&self) -> i8 {
        FIELD_HEIGHT
    }

    /// Cell at (x, y), or `None` when out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|i| self.cells[i])
    }

    /// Write a cell. Returns false when out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether the cell at (x, y) holds a wall or a locked block.
    /// Out-of-bounds coordinates count as unoccupied.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(cell) if !cell.is_empty())
    }

    /// Whether every interior column of row y is occupied.
    pub fn row_complete(&self, y: i8) -> bool {
        if y < 0 || y >= FIELD_HEIGHT - 1 {
            return false;
        }
        (1..FIELD_WIDTH - 1).all(|x| self.is_occupied(x, y))
    }

    /// Clear every complete row found in one top-to-bottom pass and compact
    /// the rows above each of them down by one. Returns the number of rows
    /// cleared.
    ///
    /// The scan never revisits a row within a pass, so a complete row shifted
    /// into an already-scanned position is only caught by the next call.
    /// Row 0 is never overwritten by the cascade and keeps its old content,
    /// the same way the bottom wall row is never scanned.
    pub fn clear_lines(&mut self) -> u32 {
        let mut cleared = 0;
        for y in 0..FIELD_HEIGHT - 1 {
            if !self.row_complete(y) {
                continue;
            }

            for x in 1..FIELD_WIDTH - 1 {
                self.set(x, y, Cell::Empty);
            }

            // Cascade: copy each row above into the row below it, walking up
            // from the cleared row.
            for row in (1..=y).rev() {
                for x in 1..FIELD_WIDTH - 1 {
                    let above = self.get(x, row - 1).unwrap_or(Cell::Empty);
                    self.set(x, row, above);
                }
            }

            cleared += 1;
        }
        cleared
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

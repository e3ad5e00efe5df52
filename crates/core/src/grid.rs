//! The 10x20 playfield grid.
//!
//! Flat row-major array storage for cache locality and zero allocation.
//! Coordinates: (x, y) with x in 0..10 left to right and y in 0..20 top to
//! bottom. Rows above the grid (y < 0) are not stored; the validity check in
//! [`crate::piece`] treats them as always open.

use termtris_types::{Cell, ShapeKind, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid.
const GRID_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// The playfield: 10 columns x 20 rows of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Row-major cells (index = y * WIDTH + x).
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Cell at (x, y), or `None` when out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|i| self.cells[i])
    }

    /// Set the cell at (x, y). Returns false when out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// True when (x, y) is inside the grid and empty.
    pub fn is_open(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// True when row `y` has no empty cell.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= GRID_HEIGHT as usize {
            return false;
        }
        let start = y * GRID_WIDTH as usize;
        let end = start + GRID_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every fully occupied row, shift the rows above down, and insert
    /// empty rows at the top. Returns the number of rows cleared.
    ///
    /// Adjacent full rows all clear in a single invocation: the compaction
    /// walks bottom-to-top with separate read and write cursors, so a row
    /// shifting into a just-cleared index is re-examined by construction.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = GRID_WIDTH as usize;
        let mut cleared = 0usize;
        let mut write_y = GRID_HEIGHT as usize;

        for read_y in (0..GRID_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    let dst = write_y * width;
                    self.cells.copy_within(src..src + width, dst);
                }
            }
        }

        // Rows left above the write cursor become the inserted empty rows.
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Write a locked piece's visible cells into the grid. Cells above the
    /// grid (y < 0) fall outside the stored area and are skipped.
    pub fn fill_cells(&mut self, cells: &[(i8, i8)], kind: ShapeKind) {
        for &(x, y) in cells {
            if y >= 0 {
                self.set(x, y, Some(kind));
            }
        }
    }

    /// Reference to the flat cell array (row-major).
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty the whole grid.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

//! Fixed-size square grid of placed tile shapes
//!
//! Cells are addressed by a flat index in row-major order, `x = index % width`
//! and `y = index / width`. Storage is an `ndarray` matrix indexed `[y, x]`.

use ndarray::Array2;

use crate::io::configuration::{MAX_GRID_DIMENSION, MIN_WIDTH};
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::connectivity::Edge;
use crate::spatial::tiles::TileId;

/// In-bounds neighbors of a cell, `None` where the grid ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    /// Cell in the previous row
    pub top: Option<usize>,
    /// Cell in the next column
    pub right: Option<usize>,
    /// Cell in the next row
    pub bottom: Option<usize>,
    /// Cell in the previous column
    pub left: Option<usize>,
}

impl Neighbors {
    /// Neighbor on the given side
    pub const fn on(&self, edge: Edge) -> Option<usize> {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }
}

/// Square grid of tile ids, every cell starting empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    cells: Array2<TileId>,
    width: usize,
}

impl TileGrid {
    /// Create an empty `width` x `width` grid
    ///
    /// # Errors
    ///
    /// Returns an error if the width is below `MIN_WIDTH` or above
    /// `MAX_GRID_DIMENSION`
    pub fn new(width: usize) -> Result<Self> {
        if !(MIN_WIDTH..=MAX_GRID_DIMENSION).contains(&width) {
            return Err(invalid_parameter(
                "width",
                &width,
                &format!("must be between {MIN_WIDTH} and {MAX_GRID_DIMENSION}"),
            ));
        }
        Ok(Self {
            cells: Array2::from_elem((width, width), TileId::EMPTY),
            width,
        })
    }

    /// Cells per row and per column
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of cells
    pub const fn total_size(&self) -> usize {
        self.width * self.width
    }

    /// Flat index of the middle cell
    pub const fn center(&self) -> usize {
        let half = self.width / 2;
        half + half * self.width
    }

    /// Flat index of `(x, y)`
    pub const fn index_of(&self, x: usize, y: usize) -> usize {
        x + y * self.width
    }

    /// `(x, y)` of a flat index
    pub const fn coordinates(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// Clear every cell back to empty
    pub fn reset(&mut self) {
        self.cells.fill(TileId::EMPTY);
    }

    /// Tile at `index`, `None` outside the grid
    pub fn try_get(&self, index: usize) -> Option<TileId> {
        if index >= self.total_size() {
            return None;
        }
        let (x, y) = self.coordinates(index);
        self.cells.get([y, x]).copied()
    }

    /// Tile at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the grid
    #[track_caller]
    pub fn get(&self, index: usize) -> TileId {
        match self.try_get(index) {
            Some(id) => id,
            None => out_of_range(index, self.total_size()),
        }
    }

    /// Place `id` at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the grid
    #[track_caller]
    pub fn set(&mut self, index: usize, id: TileId) {
        if let Err(GenerationError::IndexOutOfRange { index, total_size }) = self.try_set(index, id)
        {
            out_of_range(index, total_size);
        }
    }

    /// Place `id` at `index`
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is outside the grid
    pub fn try_set(&mut self, index: usize, id: TileId) -> Result<()> {
        let total_size = self.total_size();
        let (x, y) = self.coordinates(index);
        match self.cells.get_mut([y, x]) {
            Some(cell) if index < total_size => {
                *cell = id;
                Ok(())
            }
            _ => Err(GenerationError::IndexOutOfRange { index, total_size }),
        }
    }

    /// Neighbor of `index` on `edge`, `None` past the grid boundary
    pub const fn neighbor(&self, index: usize, edge: Edge) -> Option<usize> {
        let (x, y) = self.coordinates(index);
        let (dx, dy) = edge.offset();
        match (x.checked_add_signed(dx), y.checked_add_signed(dy)) {
            (Some(nx), Some(ny)) if nx < self.width && ny < self.width => {
                Some(self.index_of(nx, ny))
            }
            _ => None,
        }
    }

    /// All four neighbors of `index`
    pub const fn neighbors(&self, index: usize) -> Neighbors {
        Neighbors {
            top: self.neighbor(index, Edge::Top),
            right: self.neighbor(index, Edge::Right),
            bottom: self.neighbor(index, Edge::Bottom),
            left: self.neighbor(index, Edge::Left),
        }
    }

    /// Count of cells holding a non-empty shape
    pub fn placed_count(&self) -> usize {
        self.cells.iter().filter(|id| !id.is_empty()).count()
    }

    /// Display symbol of the tile at `index`, `None` outside the grid
    pub fn cell_glyph(&self, index: usize) -> Option<char> {
        self.try_get(index).map(TileId::glyph)
    }

    /// Cells as `(index, id)` in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, TileId)> + '_ {
        self.cells.iter().copied().enumerate()
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = Vec<TileId>> + '_ {
        self.cells.rows().into_iter().map(|row| row.to_vec())
    }
}

// Out-of-range access is a caller bug, not a recoverable condition
#[cold]
#[track_caller]
#[allow(clippy::panic)]
fn out_of_range(index: usize, total_size: usize) -> ! {
    panic!("cell index {index} is out of range (grid has {total_size} cells)")
}

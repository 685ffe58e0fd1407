use crate::io::error::{Result, invalid_parameter};
use crate::spatial::TileGrid;

/// Post-generation acceptance test on the number of placed tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeGuard {
    min_size: usize,
}

impl SizeGuard {
    /// Guard requiring at least `min_size` placed tiles
    pub const fn new(min_size: usize) -> Self {
        Self { min_size }
    }

    /// Guard for a specific grid, rejecting thresholds no map could reach
    ///
    /// # Errors
    ///
    /// Returns an error if `min_size` exceeds the grid's cell count
    pub fn for_grid(min_size: usize, grid: &TileGrid) -> Result<Self> {
        if min_size > grid.total_size() {
            return Err(invalid_parameter(
                "min_size",
                &min_size,
                &format!("exceeds the {} cells of the grid", grid.total_size()),
            ));
        }
        Ok(Self::new(min_size))
    }

    /// Required number of placed tiles
    pub const fn min_size(&self) -> usize {
        self.min_size
    }

    /// Whether the grid holds enough placed tiles to keep
    pub fn accept(&self, grid: &TileGrid) -> bool {
        grid.placed_count() >= self.min_size
    }
}

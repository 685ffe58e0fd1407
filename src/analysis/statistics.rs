//! Shape distribution and network summary of a finished map

use crate::spatial::TileGrid;
use crate::spatial::tiles::{SHAPE_COUNT, TileId};
use std::fmt;

/// Counts describing a generated map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapStatistics {
    /// Number of cells holding each shape id (index 0 counts empty cells)
    pub tally: [usize; SHAPE_COUNT],
    /// Non-empty cells
    pub placed: usize,
    /// All cells
    pub total: usize,
    /// Tiles with a single opening
    pub dead_ends: usize,
    /// Tiles with three or four openings
    pub junctions: usize,
}

impl MapStatistics {
    /// Tally the shapes of a grid
    pub fn from_grid(grid: &TileGrid) -> Self {
        let mut tally = [0; SHAPE_COUNT];
        let mut dead_ends = 0;
        let mut junctions = 0;

        for (_, id) in grid.iter() {
            if let Some(count) = tally.get_mut(id.index()) {
                *count += 1;
            }
            match id.degree() {
                1 => dead_ends += 1,
                3 | 4 => junctions += 1,
                _ => {}
            }
        }

        let total = grid.total_size();
        let placed = total - tally.first().copied().unwrap_or(0);

        Self {
            tally,
            placed,
            total,
            dead_ends,
            junctions,
        }
    }

    /// Fraction of cells holding a tile
    pub fn fill_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.placed as f64 / self.total as f64
    }

    /// Occurrences of one shape
    pub fn count_of(&self, id: TileId) -> usize {
        self.tally.get(id.index()).copied().unwrap_or(0)
    }

    /// Most frequent placed shape, ties resolved toward the lower id
    pub fn most_common(&self) -> Option<TileId> {
        TileId::all()
            .filter(|id| !id.is_empty() && self.count_of(*id) > 0)
            .max_by(|a, b| self.count_of(*a).cmp(&self.count_of(*b)).then(b.cmp(a)))
    }
}

impl fmt::Display for MapStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} tiles ({:.1}%), {} dead ends, {} junctions",
            self.placed,
            self.total,
            self.fill_ratio() * 100.0,
            self.dead_ends,
            self.junctions
        )
    }
}

//! Invariant checks for finished maps
//!
//! A generated map must satisfy three properties: adjacent placed tiles
//! agree on their shared edge, no tile opens toward the outside of the
//! grid, and all placed tiles form one network reachable from the seed
//! through open edges.

use bitvec::prelude::*;
use std::collections::VecDeque;
use std::fmt;

use crate::io::error::{GenerationError, Result};
use crate::spatial::TileGrid;
use crate::spatial::connectivity::{Edge, edges_agree, has_edge};

/// What is wrong at a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Two placed neighbors disagree on their shared edge
    Mismatch,
    /// Tile opens toward an in-grid cell that was never filled
    Dangling,
    /// Tile opens toward the outside of the grid
    Boundary,
    /// Placed tile cannot be reached from the seed
    Disconnected,
}

/// Single invariant failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    /// Cell where the failure was found
    pub index: usize,
    /// Side involved, if any
    pub edge: Option<Edge>,
    /// Kind of failure
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.edge {
            Some(edge) => write!(f, "{:?} at cell {} ({edge:?} edge)", self.kind, self.index),
            None => write!(f, "{:?} at cell {}", self.kind, self.index),
        }
    }
}

/// Placed tiles whose edges disagree with a neighbor or dangle into empty cells
///
/// Each mismatched pair is reported once, from the cell above or to the left.
pub fn connectivity_violations(grid: &TileGrid) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (index, id) in grid.iter() {
        if id.is_empty() {
            continue;
        }

        for edge in Edge::ALL {
            let Some(neighbor) = grid.neighbor(index, edge) else {
                continue;
            };
            let Some(other) = grid.try_get(neighbor) else {
                continue;
            };

            if other.is_empty() {
                if has_edge(id, edge) {
                    violations.push(Violation {
                        index,
                        edge: Some(edge),
                        kind: ViolationKind::Dangling,
                    });
                }
            } else if matches!(edge, Edge::Right | Edge::Bottom) && !edges_agree(id, other, edge) {
                violations.push(Violation {
                    index,
                    edge: Some(edge),
                    kind: ViolationKind::Mismatch,
                });
            }
        }
    }

    violations
}

/// Tiles that open toward the outside of the grid
pub fn boundary_violations(grid: &TileGrid) -> Vec<Violation> {
    grid.iter()
        .flat_map(|(index, id)| {
            id.edges()
                .filter(move |&edge| grid.neighbor(index, edge).is_none())
                .map(move |edge| Violation {
                    index,
                    edge: Some(edge),
                    kind: ViolationKind::Boundary,
                })
        })
        .collect()
}

/// Cells reachable from `start` by crossing edges both sides open
///
/// Returns an empty set when `start` is outside the grid or unplaced.
pub fn connected_region(grid: &TileGrid, start: usize) -> BitVec {
    let mut visited = bitvec![0; grid.total_size()];
    if !grid.try_get(start).is_some_and(|id| !id.is_empty()) {
        return visited;
    }

    let mut queue = VecDeque::from([start]);
    visited.set(start, true);

    while let Some(current) = queue.pop_front() {
        let Some(id) = grid.try_get(current) else {
            continue;
        };
        for edge in id.edges() {
            let Some(next) = grid.neighbor(current, edge) else {
                continue;
            };
            let reachable = grid
                .try_get(next)
                .is_some_and(|other| has_edge(other, edge.opposite()));
            let seen = visited.get(next).as_deref() == Some(&true);
            if reachable && !seen {
                visited.set(next, true);
                queue.push_back(next);
            }
        }
    }

    visited
}

/// Placed tiles outside the network grown from the center cell
pub fn disconnected_cells(grid: &TileGrid) -> Vec<Violation> {
    let region = connected_region(grid, grid.center());

    grid.iter()
        .filter(|&(index, id)| !id.is_empty() && region.get(index).as_deref() != Some(&true))
        .map(|(index, _)| Violation {
            index,
            edge: None,
            kind: ViolationKind::Disconnected,
        })
        .collect()
}

/// Whether every placed tile belongs to the center network
pub fn is_connected(grid: &TileGrid) -> bool {
    disconnected_cells(grid).is_empty()
}

/// All invariant failures of a map
pub fn all_violations(grid: &TileGrid) -> Vec<Violation> {
    let mut violations = connectivity_violations(grid);
    violations.extend(boundary_violations(grid));
    violations.extend(disconnected_cells(grid));
    violations
}

/// Check a map against every invariant
///
/// # Errors
///
/// Returns an `InvariantViolation` error describing the first failure
pub fn validate(grid: &TileGrid) -> Result<()> {
    let violations = all_violations(grid);
    match violations.first() {
        None => Ok(()),
        Some(first) => Err(GenerationError::InvariantViolation {
            count: violations.len(),
            first: first.to_string(),
        }),
    }
}

//! Edge encoding and connectivity predicates for pipe tiles
//!
//! A tile id is a 4-bit mask of open edges: bit 0 top, bit 1 right,
//! bit 2 bottom, bit 3 left. Everything that tests or filters shapes by
//! their openings goes through this module.

use crate::spatial::tiles::{TileId, TileShape};

/// One side of a square tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Side facing the previous row
    Top,
    /// Side facing the next column
    Right,
    /// Side facing the next row
    Bottom,
    /// Side facing the previous column
    Left,
}

impl Edge {
    /// All edges in expansion order
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Bit this edge occupies in a tile id
    pub const fn bit(self) -> u8 {
        match self {
            Self::Top => 0b0001,
            Self::Right => 0b0010,
            Self::Bottom => 0b0100,
            Self::Left => 0b1000,
        }
    }

    /// Edge of the neighbor that faces this one
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Grid step `(dx, dy)` toward the neighbor on this side
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Top => (0, -1),
            Self::Right => (1, 0),
            Self::Bottom => (0, 1),
            Self::Left => (-1, 0),
        }
    }
}

/// Test whether a tile opens the given edge
pub const fn has_edge(id: TileId, edge: Edge) -> bool {
    id.bits() & edge.bit() == edge.bit()
}

/// Tile opens toward the previous row
pub const fn has_top(id: TileId) -> bool {
    has_edge(id, Edge::Top)
}

/// Tile opens toward the next column
pub const fn has_right(id: TileId) -> bool {
    has_edge(id, Edge::Right)
}

/// Tile opens toward the next row
pub const fn has_bottom(id: TileId) -> bool {
    has_edge(id, Edge::Bottom)
}

/// Tile opens toward the previous column
pub const fn has_left(id: TileId) -> bool {
    has_edge(id, Edge::Left)
}

/// Keep the shapes that satisfy `predicate`
pub fn filter_by_connection(
    predicate: impl Fn(TileId) -> bool,
    candidates: &[TileShape],
) -> Vec<TileShape> {
    candidates
        .iter()
        .filter(|shape| predicate(shape.id))
        .copied()
        .collect()
}

/// Keep the shapes that fail `predicate`
pub fn filter_by_no_connection(
    predicate: impl Fn(TileId) -> bool,
    candidates: &[TileShape],
) -> Vec<TileShape> {
    candidates
        .iter()
        .filter(|shape| !predicate(shape.id))
        .copied()
        .collect()
}

/// Split candidates into shapes that open `edge` and shapes that do not
pub fn partition_by_edge(candidates: &[TileShape], edge: Edge) -> (Vec<TileShape>, Vec<TileShape>) {
    candidates
        .iter()
        .copied()
        .partition(|shape| has_edge(shape.id, edge))
}

/// Narrow candidates in place so their opening on `edge` equals `open`
pub fn retain_matching(candidates: &mut Vec<TileShape>, edge: Edge, open: bool) {
    candidates.retain(|shape| has_edge(shape.id, edge) == open);
}

/// Check that two adjacent tiles agree on their shared edge
///
/// `edge` is the side of `a` that faces `b`.
pub const fn edges_agree(a: TileId, b: TileId, edge: Edge) -> bool {
    has_edge(a, edge) == has_edge(b, edge.opposite())
}

//! Tile shapes and the weighted catalog they are drawn from
//!
//! There are exactly 16 shapes, one per subset of the four edges. The glyph
//! of a shape follows from its id; the generation weight is catalog data.

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::connectivity::{Edge, has_edge};
use std::fmt;

/// Number of distinct tile shapes
pub const SHAPE_COUNT: usize = 16;

/// Box-drawing glyph for each shape id
pub const GLYPHS: [char; SHAPE_COUNT] = [
    ' ', '╨', '╞', '╚', '╥', '║', '╔', '╠', '╡', '╝', '═', '╩', '╗', '╣', '╦', '╬',
];

/// Reference weights, biased toward short runs and away from 4-way junctions
pub const REFERENCE_WEIGHTS: [u32; SHAPE_COUNT] =
    [1, 16, 16, 12, 16, 12, 12, 6, 16, 12, 12, 6, 12, 6, 6, 2];

/// Shape identifier, a 4-bit mask of open edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TileId(u8);

impl TileId {
    /// Sentinel for cells with no tile placed yet (also the all-closed shape)
    pub const EMPTY: Self = Self(0);
    /// Shape placed on the seed cell, open on all four edges
    pub const START: Self = Self(0b1111);

    /// Build an id from its edge mask, `None` when above 15
    pub const fn new(bits: u8) -> Option<Self> {
        if (bits as usize) < SHAPE_COUNT {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Build an id from a set of open edges
    pub fn from_edges(edges: &[Edge]) -> Self {
        Self(edges.iter().fold(0, |mask, edge| mask | edge.bit()))
    }

    /// Look up the id rendered as `glyph`
    pub fn from_glyph(glyph: char) -> Option<Self> {
        GLYPHS
            .iter()
            .position(|&g| g == glyph)
            .and_then(|i| u8::try_from(i).ok())
            .and_then(Self::new)
    }

    /// Raw edge mask
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Position in catalog order
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this is the empty sentinel
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Display symbol
    pub fn glyph(self) -> char {
        GLYPHS.get(self.index()).copied().unwrap_or(' ')
    }

    /// Open edges in expansion order
    pub fn edges(self) -> impl Iterator<Item = Edge> {
        Edge::ALL.into_iter().filter(move |&edge| has_edge(self, edge))
    }

    /// Number of open edges
    pub const fn degree(self) -> u32 {
        self.0.count_ones()
    }

    /// Every id in catalog order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..SHAPE_COUNT as u8).map(Self)
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Catalog entry pairing a shape with its generation weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileShape {
    /// Edge mask of the shape
    pub id: TileId,
    /// Display symbol
    pub glyph: char,
    /// Relative likelihood of being drawn
    pub weight: u32,
}

/// Immutable table of all 16 shapes and their weights
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileCatalog {
    shapes: [TileShape; SHAPE_COUNT],
}

impl Default for TileCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

impl TileCatalog {
    /// Catalog with the reference weight table
    pub fn reference() -> Self {
        Self::build(REFERENCE_WEIGHTS)
    }

    /// Catalog with custom weights, indexed by shape id
    ///
    /// # Errors
    ///
    /// Returns an error if any weight is zero
    pub fn with_weights(weights: [u32; SHAPE_COUNT]) -> Result<Self> {
        if let Some(id) = weights.iter().position(|&w| w == 0) {
            return Err(invalid_parameter(
                "weights",
                &format!("{weights:?}"),
                &format!("weight of shape {id} must be positive"),
            ));
        }
        Ok(Self::build(weights))
    }

    fn build(weights: [u32; SHAPE_COUNT]) -> Self {
        let mut shapes = [TileShape {
            id: TileId::EMPTY,
            glyph: ' ',
            weight: 1,
        }; SHAPE_COUNT];
        for ((shape, id), weight) in shapes.iter_mut().zip(TileId::all()).zip(weights) {
            *shape = TileShape {
                id,
                glyph: id.glyph(),
                weight,
            };
        }
        Self { shapes }
    }

    /// All shapes in id order
    pub const fn all_shapes(&self) -> &[TileShape; SHAPE_COUNT] {
        &self.shapes
    }

    /// Catalog entry for an id
    pub fn shape(&self, id: TileId) -> TileShape {
        self.shapes.get(id.index()).copied().unwrap_or(TileShape {
            id,
            glyph: id.glyph(),
            weight: 0,
        })
    }

    /// Weight table indexed by shape id
    pub fn weights(&self) -> [u32; SHAPE_COUNT] {
        self.shapes.map(|shape| shape.weight)
    }

    /// Shapes that open `edge`
    pub fn shapes_with_edge(&self, edge: Edge) -> Vec<TileShape> {
        self.shapes
            .iter()
            .filter(|shape| has_edge(shape.id, edge))
            .copied()
            .collect()
    }

    /// Shapes that keep `edge` closed
    pub fn shapes_without_edge(&self, edge: Edge) -> Vec<TileShape> {
        self.shapes
            .iter()
            .filter(|shape| !has_edge(shape.id, edge))
            .copied()
            .collect()
    }

    /// Starting candidates for a cell entered through `direction`
    ///
    /// A cell placed above the expanding tile must open its bottom edge to
    /// connect back, so the inward subset is the shapes with the opposite
    /// edge open.
    pub fn inward_candidates(&self, direction: Edge) -> Vec<TileShape> {
        self.shapes_with_edge(direction.opposite())
    }
}

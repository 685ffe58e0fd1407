//! Spatial data structures for the tile map
//!
//! This module contains:
//! - The tile shape catalog and its weights
//! - Edge encoding and connectivity predicates
//! - Grid storage and neighbor lookup

/// Edge encoding, connectivity predicates and candidate filters
pub mod connectivity;
/// Fixed-size grid storage and spatial queries
pub mod grid;
/// Tile shapes and the weighted catalog
pub mod tiles;

pub use connectivity::Edge;
pub use grid::TileGrid;
pub use tiles::{TileCatalog, TileId, TileShape};

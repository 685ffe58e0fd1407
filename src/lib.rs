//! Constraint-propagating, weighted random generator for connected pipe tile maps
//!
//! A map grows breadth-first from a 4-way tile at the grid center. Each cell
//! reached through an open edge gets a shape whose openings agree with every
//! already-placed neighbor and stay closed toward the grid boundary, drawn
//! with probability proportional to the shape's catalog weight. Maps below
//! a minimum size are discarded and regrown from the same random stream.

#![forbid(unsafe_code)]

/// Generator, size guard and weighted selection
pub mod algorithm;
/// Invariant checks and statistics for finished maps
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Tile catalog, connectivity rules and grid storage
pub mod spatial;

pub use algorithm::executor::{GenerationReport, GeneratorConfig, PipeGenerator};
pub use algorithm::selection::RandomSelector;
pub use io::error::{GenerationError, Result};
pub use spatial::{Edge, TileCatalog, TileGrid, TileId};

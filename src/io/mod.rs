/// Command-line interface and batch runner
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error taxonomy and context helpers
pub mod error;
/// PNG export
pub mod image;
/// Batch progress display
pub mod progress;
/// Plain-text map dump and parser
pub mod text;
/// Progressive growth capture exported as GIF
pub mod visualization;

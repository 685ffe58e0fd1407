//! Analysis of finished maps

/// Shape tally and network summary
pub mod statistics;
/// Connectivity, boundary and connectedness checks
pub mod validation;

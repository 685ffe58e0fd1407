/// Frontier-driven generator orchestration
pub mod executor;
/// Post-generation size acceptance
pub mod guard;
/// Candidate narrowing and weighted random selection
pub mod selection;

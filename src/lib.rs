//! Toroidal cellular-automaton engine: grid update rules, neighbor
//! counting and pattern stamping, decoupled from any renderer or tick
//! source.

// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Engine coordination and configuration
pub mod application;

// Re-exports for convenience
pub use application::{AutomatonEngine, EngineConfig, EngineError, Fill};
pub use domain::{Algorithm, Cell, Grid, Pattern, Ruleset, presets};

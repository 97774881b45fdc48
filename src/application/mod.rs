mod config;
mod engine;

pub use config::{DEFAULT_FILL_DENSITY, EngineConfig, Fill};
pub use engine::{AutomatonEngine, EngineError};
